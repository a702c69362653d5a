use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::{Client, Collection};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::contact::ContactMessage;

pub async fn get_messages(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<ContactMessage> =
        client.database(DB_NAME).collection("contactMessages");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<ContactMessage>>().await {
            Ok(messages) => HttpResponse::Ok().json(messages),
            Err(err) => {
                log::error!("Failed to collect messages: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to retrieve messages.")
            }
        },
        Err(err) => {
            log::error!("Failed to find messages: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch messages.")
        }
    }
}

pub async fn delete_message(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<ContactMessage> =
        client.database(DB_NAME).collection("contactMessages");

    let message_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid message ID format"),
    };

    match collection.delete_one(doc! { "_id": message_id }).await {
        Ok(result) => {
            if result.deleted_count == 0 {
                HttpResponse::NotFound().body("Message not found")
            } else {
                HttpResponse::Ok().body("Message removed")
            }
        }
        Err(err) => {
            log::error!("Failed to delete message: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete message.")
        }
    }
}
