use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::activity::Activity;
use crate::models::booking::{Booking, BookingInput};
use crate::models::room::Room;
use crate::services::booking_store::MongoBookingStore;
use crate::services::booking_wizard::{BookingDraft, BookingError, BookingWizard};

fn error_response(err: BookingError) -> HttpResponse {
    match err {
        BookingError::Validation(msg) => {
            HttpResponse::BadRequest().json(serde_json::json!({ "error": msg }))
        }
        BookingError::Duplicate => HttpResponse::Conflict().json(serde_json::json!({
            "error": "You already have an incomplete booking. Please complete it before making another booking."
        })),
        BookingError::Persistence(msg) => {
            log::error!("Booking persistence failed: {}", msg);
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "There was an error saving your booking. Please try again."
            }))
        }
    }
}

/// Final submit of the booking flow. Runs the full guest-details gate:
/// validation, the duplicate guard, the price snapshot and a single insert.
pub async fn create_booking(
    data: web::Data<Arc<Client>>,
    input: web::Json<BookingInput>,
) -> impl Responder {
    let client = data.into_inner();

    let rooms_collection: Collection<Room> = client.database(DB_NAME).collection("rooms");
    let rooms = match rooms_collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Room>>().await {
            Ok(rooms) => rooms,
            Err(err) => {
                log::error!("Failed to collect rooms: {:?}", err);
                return HttpResponse::InternalServerError().body("Failed to load rooms.");
            }
        },
        Err(err) => {
            log::error!("Failed to find rooms: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to load rooms.");
        }
    };

    let activities_collection: Collection<Activity> =
        client.database(DB_NAME).collection("activities");
    let activities = match activities_collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Activity>>().await {
            Ok(activities) => activities,
            Err(err) => {
                log::error!("Failed to collect activities: {:?}", err);
                return HttpResponse::InternalServerError().body("Failed to load activities.");
            }
        },
        Err(err) => {
            log::error!("Failed to find activities: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to load activities.");
        }
    };

    let draft = BookingDraft::from(input.into_inner());
    let mut wizard = BookingWizard::new(draft);
    if let Err(err) = wizard.continue_to_details() {
        return error_response(err);
    }

    let store = MongoBookingStore::new(&client);
    match wizard.submit(&store, &rooms, &activities).await {
        Ok(booking) => HttpResponse::Created().json(booking),
        Err(err) => error_response(err),
    }
}

#[derive(Debug, Deserialize)]
pub struct BookingSearchQuery {
    pub email: String,
    pub phone: Option<String>,
}

/// Two-phase booking lookup: email alone answers whether a booking exists,
/// email plus phone returns the booking itself.
pub async fn search_booking(
    data: web::Data<Arc<Client>>,
    query: web::Query<BookingSearchQuery>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Booking> = client.database(DB_NAME).collection("bookings");

    let query = query.into_inner();
    if query.email.trim().is_empty() {
        return HttpResponse::BadRequest().body("An email address is required");
    }

    match query.phone {
        None => match collection.find_one(doc! { "email": &query.email }).await {
            Ok(found) => HttpResponse::Ok().json(serde_json::json!({ "found": found.is_some() })),
            Err(err) => {
                log::error!("Failed to search bookings: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to search bookings.")
            }
        },
        Some(phone) => {
            let filter = doc! { "email": &query.email, "phone": &phone };
            match collection.find_one(filter).await {
                Ok(Some(booking)) => HttpResponse::Ok().json(booking),
                Ok(None) => HttpResponse::NotFound()
                    .body("The provided email and phone number combination is incorrect."),
                Err(err) => {
                    log::error!("Failed to search bookings: {:?}", err);
                    HttpResponse::InternalServerError().body("Failed to search bookings.")
                }
            }
        }
    }
}
