use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::{Client, Collection};
use serde::Deserialize;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::content::GalleryImage;
use crate::services::image_service::{ImageData, ImageService};

#[derive(Debug, Deserialize)]
pub struct GalleryUpload {
    pub image: ImageData,
    #[serde(default)]
    pub caption: String,
}

pub async fn add_image(
    data: web::Data<Arc<Client>>,
    input: web::Json<GalleryUpload>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<GalleryImage> = client.database(DB_NAME).collection("gallery");

    let service = match ImageService::new().await {
        Ok(service) => service,
        Err(err) => {
            log::error!("Failed to initialize image service: {}", err);
            return HttpResponse::InternalServerError().body("Image storage unavailable.");
        }
    };

    let input = input.into_inner();
    let url = match service.upload(input.image, "gallery").await {
        Ok(url) => url,
        Err(err) => {
            log::error!("Failed to upload gallery image: {}", err);
            return HttpResponse::InternalServerError().body("Failed to upload image.");
        }
    };

    let record = GalleryImage {
        id: None,
        url,
        caption: input.caption,
        created_at: Some(DateTime::now()),
    };

    match collection.insert_one(&record).await {
        Ok(result) => HttpResponse::Created().json(serde_json::json!({
            "id": result.inserted_id.as_object_id().map(|id| id.to_hex()),
            "url": record.url,
        })),
        Err(err) => {
            log::error!("Failed to save gallery record: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save image.")
        }
    }
}

pub async fn delete_image(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<GalleryImage> = client.database(DB_NAME).collection("gallery");

    let image_id = match ObjectId::parse_str(path.into_inner()) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid image ID format"),
    };

    let record = match collection.find_one(doc! { "_id": image_id }).await {
        Ok(Some(record)) => record,
        Ok(None) => return HttpResponse::NotFound().body("Image not found"),
        Err(err) => {
            log::error!("Failed to fetch gallery record: {:?}", err);
            return HttpResponse::InternalServerError().body("Failed to fetch image.");
        }
    };

    // Remove the stored object first; an orphaned blob is worse than an
    // orphaned record but neither blocks the other.
    match ImageService::new().await {
        Ok(service) => {
            if let Err(err) = service.delete_by_url(&record.url).await {
                log::warn!("Failed to delete stored object {}: {}", record.url, err);
            }
        }
        Err(err) => log::warn!("Failed to initialize image service: {}", err),
    }

    match collection.delete_one(doc! { "_id": image_id }).await {
        Ok(_) => HttpResponse::Ok().body("Image removed"),
        Err(err) => {
            log::error!("Failed to delete gallery record: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to delete image.")
        }
    }
}
