use actix_web::{web, HttpResponse, Responder};
use google_cloud_storage::client::{Client as GcsClient, ClientConfig};
use google_cloud_storage::http::objects::list::ListObjectsRequest;
use mongodb::{bson::doc, Client};
use serde::Serialize;
use std::collections::HashMap;
use std::env;
use std::sync::Arc;

use crate::db::mongo::DB_NAME;

#[derive(Serialize)]
struct HealthStatus {
    status: String,
    services: HashMap<String, ServiceStatus>,
    environment: String,
    version: String,
}

#[derive(Serialize, Clone)]
struct ServiceStatus {
    status: String,
    details: Option<String>,
}

pub async fn health_check(client: web::Data<Arc<Client>>) -> impl Responder {
    let mut health = HealthStatus {
        status: "ok".to_string(),
        services: HashMap::new(),
        environment: env::var("RUST_ENV").unwrap_or("development".to_string()),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    let mongo_result = check_mongodb(&client).await;
    health
        .services
        .insert("mongodb".to_string(), mongo_result.clone());

    let storage_result = check_cloud_storage().await;
    health
        .services
        .insert("cloud_storage".to_string(), storage_result.clone());

    if mongo_result.status != "ok" || storage_result.status != "ok" {
        health.status = "degraded".to_string();
    }

    HttpResponse::Ok().json(health)
}

async fn check_mongodb(client: &web::Data<Arc<Client>>) -> ServiceStatus {
    match client.database(DB_NAME).run_command(doc! {"ping": 1}).await {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: None,
        },
        Err(e) => ServiceStatus {
            status: "error".to_string(),
            details: Some(e.to_string()),
        },
    }
}

async fn check_cloud_storage() -> ServiceStatus {
    let bucket = match env::var("MEDIA_BUCKET") {
        Ok(bucket) => bucket,
        Err(_) => {
            return ServiceStatus {
                status: "error".to_string(),
                details: Some("MEDIA_BUCKET not set".to_string()),
            }
        }
    };

    let config = match ClientConfig::default().with_auth().await {
        Ok(config) => config,
        Err(e) => {
            return ServiceStatus {
                status: "error".to_string(),
                details: Some(format!("Failed to authenticate storage client: {}", e)),
            }
        }
    };

    let client = GcsClient::new(config);
    match client
        .list_objects(&ListObjectsRequest {
            bucket,
            max_results: Some(1),
            ..Default::default()
        })
        .await
    {
        Ok(_) => ServiceStatus {
            status: "ok".to_string(),
            details: None,
        },
        Err(e) => ServiceStatus {
            status: "error".to_string(),
            details: Some(e.to_string()),
        },
    }
}
