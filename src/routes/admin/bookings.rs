use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::booking::{Booking, BookingStatusUpdate};

pub async fn get_all_bookings(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Booking> = client.database(DB_NAME).collection("bookings");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Booking>>().await {
            Ok(bookings) => HttpResponse::Ok().json(bookings),
            Err(err) => {
                log::error!("Failed to collect bookings: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to retrieve bookings.")
            }
        },
        Err(err) => {
            log::error!("Failed to find bookings: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch bookings.")
        }
    }
}

/// Updates the three lifecycle flags and nothing else. The priced snapshot
/// written at submission time is immutable.
pub async fn update_booking_status(
    data: web::Data<Arc<Client>>,
    input: web::Json<BookingStatusUpdate>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Booking> = client.database(DB_NAME).collection("bookings");

    let booking_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid booking ID format"),
    };

    let input = input.into_inner();
    if input.is_booked.is_none() && input.is_payment.is_none() && input.is_completed.is_none() {
        return HttpResponse::BadRequest()
            .body("At least one of is_booked, is_payment or is_completed must be provided");
    }

    let mut update_doc = doc! {};
    if let Some(is_booked) = input.is_booked {
        update_doc.insert("is_booked", is_booked);
    }
    if let Some(is_payment) = input.is_payment {
        update_doc.insert("is_payment", is_payment);
    }
    if let Some(is_completed) = input.is_completed {
        update_doc.insert("is_completed", is_completed);
    }

    match collection
        .update_one(doc! { "_id": booking_id }, doc! { "$set": update_doc })
        .await
    {
        Ok(result) => {
            if result.matched_count == 0 {
                HttpResponse::NotFound().body("Booking not found")
            } else {
                HttpResponse::Ok().body("Booking status updated")
            }
        }
        Err(err) => {
            log::error!("Failed to update booking status: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update booking.")
        }
    }
}
