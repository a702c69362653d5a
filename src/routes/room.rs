use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::room::Room;

pub async fn get_rooms(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Room> = client.database(DB_NAME).collection("rooms");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Room>>().await {
            Ok(rooms) => HttpResponse::Ok().json(rooms),
            Err(err) => {
                log::error!("Failed to collect rooms: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect rooms.")
            }
        },
        Err(err) => {
            log::error!("Failed to find rooms: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find rooms.")
        }
    }
}
