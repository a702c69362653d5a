use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::activity::Activity;

pub async fn get_activities(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<Activity> =
        client.database(DB_NAME).collection("activities");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Activity>>().await {
            Ok(activities) => HttpResponse::Ok().json(activities),
            Err(err) => {
                log::error!("Failed to collect activities: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect activities.")
            }
        },
        Err(err) => {
            log::error!("Failed to find activities: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find activities.")
        }
    }
}
