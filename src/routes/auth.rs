use actix_web::{web, HttpResponse, Responder};
use chrono::{Duration, Utc};
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::middleware::auth::Claims;
use crate::middleware::auth_context::AuthenticatedAdmin;
use crate::models::admin::{AdminRole, AdminSession, AdminUser};

#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    auth_token: String,
}

#[derive(Debug, Deserialize)]
pub struct SigninInput {
    pub email: String,
    pub password: String,
}

pub async fn signin(data: web::Data<Arc<Client>>, input: web::Json<SigninInput>) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<AdminUser> =
        client.database(DB_NAME).collection("admins");

    let input = input.into_inner();
    let filter = doc! { "email": &input.email };

    match collection.find_one(filter).await {
        Ok(Some(admin)) => {
            if bcrypt::verify(&input.password, &admin.password).unwrap_or(false) {
                let update = doc! {
                    "$set": {
                        "last_signin": Utc::now().to_string(),
                        "failed_signins": 0
                    }
                };

                if let Err(err) = collection
                    .update_one(doc! { "email": &input.email }, update)
                    .await
                {
                    log::error!("Failed to record signin: {:?}", err);
                    return HttpResponse::InternalServerError().body("Failed to sign in.");
                }

                let role = match admin.role {
                    Some(AdminRole::Admin) | None => "admin",
                    Some(AdminRole::Staff) => "staff",
                };
                let admin_id = match admin.id {
                    Some(id) => id,
                    None => {
                        log::error!("Admin record for {} has no id", input.email);
                        return HttpResponse::InternalServerError().body("Failed to sign in.");
                    }
                };

                match generate_token(&input.email, admin_id, role) {
                    Ok(token) => HttpResponse::Ok().json(TokenResponse { auth_token: token }),
                    Err(_) => HttpResponse::InternalServerError().body("Token generation failed"),
                }
            } else {
                let failed_signins = admin.failed_signins.unwrap_or(0) + 1;
                let update = doc! {
                    "$set": { "failed_signins": failed_signins }
                };

                match collection
                    .update_one(doc! { "email": &input.email }, update)
                    .await
                {
                    Ok(_) => HttpResponse::Unauthorized().body("Invalid credentials"),
                    Err(err) => {
                        log::error!("Failed to update failed signins: {:?}", err);
                        HttpResponse::InternalServerError().body("Failed to process signin")
                    }
                }
            }
        }
        Ok(None) => HttpResponse::Unauthorized().body("Invalid credentials"),
        Err(err) => {
            log::error!("Database error: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to process signin")
        }
    }
}

pub async fn session(
    admin: AuthenticatedAdmin,
    data: web::Data<Arc<Client>>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: mongodb::Collection<AdminUser> =
        client.database(DB_NAME).collection("admins");

    let admin_id = match ObjectId::parse_str(&admin.admin_id) {
        Ok(id) => id,
        Err(_) => return HttpResponse::BadRequest().body("Invalid admin ID"),
    };

    match collection.find_one(doc! { "_id": admin_id }).await {
        Ok(Some(user)) => {
            let session = AdminSession {
                id: user.id.unwrap_or_default(),
                email: user.email,
                role: user.role,
            };
            HttpResponse::Ok().json(session)
        }
        Ok(None) => HttpResponse::NotFound().body("Admin not found"),
        Err(err) => {
            log::error!("Failed to fetch admin: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to fetch admin")
        }
    }
}

fn generate_token(
    email: &str,
    admin_id: ObjectId,
    role: &str,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();
    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(24)).timestamp() as usize,
        admin_id: admin_id.to_hex(),
        role: Some(role.to_string()),
    };

    let key = std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".to_string());
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(key.as_bytes()),
    )
}
