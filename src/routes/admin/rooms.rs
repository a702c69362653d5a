use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::{Client, Collection};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::room::{Room, RoomInput};

pub async fn create_room(
    data: web::Data<Arc<Client>>,
    input: web::Json<RoomInput>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Room> = client.database(DB_NAME).collection("rooms");

    let input = input.into_inner();
    let time = DateTime::now();
    let room = Room {
        id: None,
        name: input.name,
        description: input.description,
        price: input.price,
        discount: input.discount,
        image: input.image,
        created_at: Some(time),
        updated_at: Some(time),
    };

    match collection.insert_one(&room).await {
        Ok(result) => HttpResponse::Created().json(serde_json::json!({
            "id": result.inserted_id.as_object_id().map(|id| id.to_hex())
        })),
        Err(err) => {
            log::error!("Failed to create room: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create room.")
        }
    }
}

pub async fn update_room(
    data: web::Data<Arc<Client>>,
    input: web::Json<RoomInput>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Room> = client.database(DB_NAME).collection("rooms");

    let room_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid room ID format"),
    };

    let mut update_doc = match mongodb::bson::to_document(&input.into_inner()) {
        Ok(doc) => doc,
        Err(err) => {
            log::error!("Failed to serialize room update: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to update room.");
        }
    };
    update_doc.insert("updated_at", DateTime::now());

    match collection
        .update_one(doc! { "_id": room_id }, doc! { "$set": update_doc })
        .await
    {
        Ok(result) => {
            if result.matched_count == 0 {
                HttpResponse::NotFound().body("Room not found")
            } else {
                HttpResponse::Ok().body("Room updated")
            }
        }
        Err(err) => {
            log::error!("Failed to update room: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to update room.")
        }
    }
}

pub async fn delete_room(data: web::Data<Arc<Client>>, path: web::Path<String>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Room> = client.database(DB_NAME).collection("rooms");

    let room_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid room ID format"),
    };

    match collection.delete_one(doc! { "_id": room_id }).await {
        Ok(result) => {
            if result.deleted_count == 0 {
                HttpResponse::NotFound().body("Room not found")
            } else {
                HttpResponse::Ok().body("Room removed")
            }
        }
        Err(err) => {
            log::error!("Failed to delete room: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete room.")
        }
    }
}
