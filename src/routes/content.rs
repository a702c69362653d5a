use actix_web::{web, HttpResponse, Responder};
use futures::TryStreamExt;
use mongodb::{bson::doc, Client, Collection};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::content::{AboutContent, Banner, CompanyDetails, Faq, Feature, GalleryImage};

pub async fn get_banners(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Banner> = client.database(DB_NAME).collection("banners");

    match collection.find_one(doc! {}).await {
        Ok(Some(banner)) => HttpResponse::Ok().json(banner),
        // An unconfigured site still renders; return the empty shape.
        Ok(None) => HttpResponse::Ok().json(Banner::default()),
        Err(err) => {
            log::error!("Failed to fetch banners: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch banners.")
        }
    }
}

pub async fn get_about(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<AboutContent> = client.database(DB_NAME).collection("about");

    match collection.find_one(doc! {}).await {
        Ok(Some(about)) => HttpResponse::Ok().json(about),
        Ok(None) => HttpResponse::Ok().json(AboutContent::default()),
        Err(err) => {
            log::error!("Failed to fetch about content: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch about content.")
        }
    }
}

pub async fn get_company(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<CompanyDetails> = client.database(DB_NAME).collection("company");

    match collection.find_one(doc! {}).await {
        Ok(Some(company)) => HttpResponse::Ok().json(company),
        Ok(None) => HttpResponse::Ok().json(CompanyDetails::default()),
        Err(err) => {
            log::error!("Failed to fetch company details: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch company details.")
        }
    }
}

pub async fn get_faqs(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Faq> = client.database(DB_NAME).collection("faqs");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Faq>>().await {
            Ok(faqs) => HttpResponse::Ok().json(faqs),
            Err(err) => {
                log::error!("Failed to collect faqs: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect faqs.")
            }
        },
        Err(err) => {
            log::error!("Failed to find faqs: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find faqs.")
        }
    }
}

pub async fn get_features(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<Feature> = client.database(DB_NAME).collection("features");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<Feature>>().await {
            Ok(features) => HttpResponse::Ok().json(features),
            Err(err) => {
                log::error!("Failed to collect features: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect features.")
            }
        },
        Err(err) => {
            log::error!("Failed to find features: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find features.")
        }
    }
}

pub async fn get_gallery(data: web::Data<Arc<Client>>) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<GalleryImage> = client.database(DB_NAME).collection("gallery");

    match collection.find(doc! {}).await {
        Ok(cursor) => match cursor.try_collect::<Vec<GalleryImage>>().await {
            Ok(images) => HttpResponse::Ok().json(images),
            Err(err) => {
                log::error!("Failed to collect gallery: {:?}", err);
                HttpResponse::InternalServerError().body("Failed to collect gallery.")
            }
        },
        Err(err) => {
            log::error!("Failed to find gallery: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to find gallery.")
        }
    }
}
