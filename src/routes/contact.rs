use actix_web::{web, HttpResponse, Responder};
use mongodb::{bson::DateTime, Client, Collection};
use std::sync::Arc;

use crate::db::mongo::DB_NAME;
use crate::models::contact::{ContactInput, ContactMessage};

pub async fn submit_message(
    data: web::Data<Arc<Client>>,
    input: web::Json<ContactInput>,
) -> impl Responder {
    let client = data.into_inner();
    let collection: Collection<ContactMessage> =
        client.database(DB_NAME).collection("contactMessages");

    let input = input.into_inner();
    if input.name.trim().is_empty() || input.message.trim().is_empty() {
        return HttpResponse::BadRequest().body("Name and message are required");
    }
    if !is_valid_email(&input.email) {
        return HttpResponse::BadRequest().body("Invalid email address");
    }

    let message = ContactMessage {
        id: None,
        name: input.name,
        email: input.email,
        message: input.message,
        created_at: Some(DateTime::now()),
    };

    match collection.insert_one(&message).await {
        Ok(_) => HttpResponse::Created().body("Message received"),
        Err(err) => {
            log::error!("Failed to save contact message: {:?}", err);
            HttpResponse::InternalServerError().body("Failed to save message.")
        }
    }
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    let re = regex::Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?)*$",
    );
    match re {
        Ok(re) => re.is_match(email),
        Err(_) => false,
    }
}
