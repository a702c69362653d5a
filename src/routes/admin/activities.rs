use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::{Client, Collection};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::activity::{Activity, ActivityInput};

pub async fn create_activity(
    data: web::Data<Arc<Client>>,
    input: web::Json<ActivityInput>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Activity> = client.database(DB_NAME).collection("activities");

    let input = input.into_inner();
    let time = DateTime::now();
    let activity = Activity {
        id: None,
        name: input.name,
        description: input.description,
        price: input.price,
        discount: input.discount,
        image: input.image,
        highlights: input.highlights,
        created_at: Some(time),
        updated_at: Some(time),
    };

    match collection.insert_one(&activity).await {
        Ok(result) => HttpResponse::Created().json(serde_json::json!({
            "id": result.inserted_id.as_object_id().map(|id| id.to_hex())
        })),
        Err(err) => {
            log::error!("Failed to create activity: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create activity.")
        }
    }
}

pub async fn update_activity(
    data: web::Data<Arc<Client>>,
    input: web::Json<ActivityInput>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Activity> = client.database(DB_NAME).collection("activities");

    let activity_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid activity ID format"),
    };

    let mut update_doc = match mongodb::bson::to_document(&input.into_inner()) {
        Ok(doc) => doc,
        Err(err) => {
            log::error!("Failed to serialize activity update: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to update activity.");
        }
    };
    update_doc.insert("updated_at", DateTime::now());

    match collection
        .update_one(doc! { "_id": activity_id }, doc! { "$set": update_doc })
        .await
    {
        Ok(result) => {
            if result.matched_count == 0 {
                HttpResponse::NotFound().body("Activity not found")
            } else {
                HttpResponse::Ok().body("Activity updated")
            }
        }
        Err(err) => {
            log::error!("Failed to update activity: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update activity.")
        }
    }
}

pub async fn delete_activity(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Activity> = client.database(DB_NAME).collection("activities");

    let activity_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid activity ID format"),
    };

    match collection.delete_one(doc! { "_id": activity_id }).await {
        Ok(result) => {
            if result.deleted_count == 0 {
                HttpResponse::NotFound().body("Activity not found")
            } else {
                HttpResponse::Ok().body("Activity removed")
            }
        }
        Err(err) => {
            log::error!("Failed to delete activity: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete activity.")
        }
    }
}
