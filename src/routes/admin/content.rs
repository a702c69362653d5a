use actix_web::{web, HttpResponse, Responder};
use mongodb::bson::{doc, oid::ObjectId, Document};
use mongodb::{Client, Collection};
use serde::Serialize;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::content::{
    AboutContent, Banner, CompanyDetails, Faq, FaqInput, Feature, FeatureInput,
};

fn set_document<T: Serialize>(input: &T) -> Option<Document> {
    mongodb::bson::to_document(input).ok()
}

/// Upsert of the singleton banners document.
pub async fn update_banners(
    data: web::Data<Arc<Client>>,
    input: web::Json<Banner>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Banner> = client.database(DB_NAME).collection("banners");
    upsert_singleton(&collection, &input.into_inner(), "banners").await
}

pub async fn update_about(
    data: web::Data<Arc<Client>>,
    input: web::Json<AboutContent>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<AboutContent> = client.database(DB_NAME).collection("about");
    upsert_singleton(&collection, &input.into_inner(), "about content").await
}

pub async fn update_company(
    data: web::Data<Arc<Client>>,
    input: web::Json<CompanyDetails>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<CompanyDetails> = client.database(DB_NAME).collection("company");
    upsert_singleton(&collection, &input.into_inner(), "company details").await
}

async fn upsert_singleton<T: Serialize + Send + Sync>(
    collection: &Collection<T>,
    input: &T,
    what: &str,
) -> HttpResponse {
    let mut update_doc = match set_document(input) {
        Some(doc) => doc,
        None => {
            log::error!("Failed to serialize {} update", what);
            return HttpResponse::InternalServerError().body("Failed to save changes.");
        }
    };
    // Never overwrite the singleton's id
    update_doc.remove("_id");

    match collection
        .update_one(doc! {}, doc! { "$set": update_doc })
        .upsert(true)
        .await
    {
        Ok(_) => HttpResponse::Ok().body("Saved"),
        Err(err) => {
            log::error!("Failed to update {}: {:?}", what, err);
            HttpResponse::InternalServerError().body("Failed to save changes.")
        }
    }
}

pub async fn create_faq(data: web::Data<Arc<Client>>, input: web::Json<FaqInput>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Faq> = client.database(DB_NAME).collection("faqs");

    let input = input.into_inner();
    let faq = Faq {
        id: None,
        question: input.question,
        answer: input.answer,
    };

    match collection.insert_one(&faq).await {
        Ok(result) => HttpResponse::Created().json(serde_json::json!({
            "id": result.inserted_id.as_object_id().map(|id| id.to_hex())
        })),
        Err(err) => {
            log::error!("Failed to create faq: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create FAQ.")
        }
    }
}

pub async fn update_faq(
    data: web::Data<Arc<Client>>,
    input: web::Json<FaqInput>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Faq> = client.database(DB_NAME).collection("faqs");
    update_by_id(&collection, &input.into_inner(), path.into_inner(), "FAQ").await
}

pub async fn delete_faq(data: web::Data<Arc<Client>>, path: web::Path<String>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Faq> = client.database(DB_NAME).collection("faqs");
    delete_by_id(&collection, path.into_inner(), "FAQ").await
}

pub async fn create_feature(
    data: web::Data<Arc<Client>>,
    input: web::Json<FeatureInput>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Feature> = client.database(DB_NAME).collection("features");

    let input = input.into_inner();
    let feature = Feature {
        id: None,
        title: input.title,
        description: input.description,
        icon: input.icon,
    };

    match collection.insert_one(&feature).await {
        Ok(result) => HttpResponse::Created().json(serde_json::json!({
            "id": result.inserted_id.as_object_id().map(|id| id.to_hex())
        })),
        Err(err) => {
            log::error!("Failed to create feature: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to create feature.")
        }
    }
}

pub async fn update_feature(
    data: web::Data<Arc<Client>>,
    input: web::Json<FeatureInput>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Feature> = client.database(DB_NAME).collection("features");
    update_by_id(&collection, &input.into_inner(), path.into_inner(), "feature").await
}

pub async fn delete_feature(
    data: web::Data<Arc<Client>>,
    path: web::Path<String>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Feature> = client.database(DB_NAME).collection("features");
    delete_by_id(&collection, path.into_inner(), "feature").await
}

async fn update_by_id<T, U>(
    collection: &Collection<T>,
    input: &U,
    id: String,
    what: &str,
) -> HttpResponse
where
    T: Send + Sync,
    U: Serialize,
{
    let object_id = match ObjectId::parse_str(id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID format"),
    };

    let update_doc = match set_document(input) {
        Some(doc) => doc,
        None => {
            log::error!("Failed to serialize {} update", what);
            return HttpResponse::InternalServerError().body("Failed to save changes.");
        }
    };

    match collection
        .update_one(doc! { "_id": object_id }, doc! { "$set": update_doc })
        .await
    {
        Ok(result) => {
            if result.matched_count == 0 {
                HttpResponse::NotFound().body("Not found")
            } else {
                HttpResponse::Ok().body("Saved")
            }
        }
        Err(err) => {
            log::error!("Failed to update {}: {:?}", what, err);
            HttpResponse::InternalServerError().body("Failed to save changes.")
        }
    }
}

async fn delete_by_id<T: Send + Sync>(
    collection: &Collection<T>,
    id: String,
    what: &str,
) -> HttpResponse {
    let object_id = match ObjectId::parse_str(id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid ID format"),
    };

    match collection.delete_one(doc! { "_id": object_id }).await {
        Ok(result) => {
            if result.deleted_count == 0 {
                HttpResponse::NotFound().body("Not found")
            } else {
                HttpResponse::Ok().body("Removed")
            }
        }
        Err(err) => {
            log::error!("Failed to delete {}: {:?}", what, err);
            HttpResponse::InternalServerError().body("Failed to delete.")
        }
    }
}
