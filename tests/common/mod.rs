use std::sync::Mutex;

use actix_web::{web, App, HttpResponse, Responder};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

use bookverse_api::models::activity::Activity;
use bookverse_api::models::booking::{Booking, BookingInput};
use bookverse_api::models::room::Room;
use bookverse_api::services::booking_wizard::{
    BookingDraft, BookingError, BookingStore, BookingWizard,
};

pub const TEST_ROOM_ID: &str = "65f0a1a1a1a1a1a1a1a1a1a1";
pub const TEST_SPA_ID: &str = "65f0b2b2b2b2b2b2b2b2b2b2";
pub const TEST_DIVE_ID: &str = "65f0c3c3c3c3c3c3c3c3c3c3";

/// In-memory stand-in for the bookings collection. The duplicate check
/// scans recorded bookings the same way the real store filters on
/// email + phone + is_completed.
#[derive(Default)]
pub struct BookingLog {
    pub bookings: Mutex<Vec<Booking>>,
}

impl BookingStore for BookingLog {
    async fn find_incomplete(&self, email: &str, phone: &str) -> Result<bool, BookingError> {
        Ok(self
            .bookings
            .lock()
            .unwrap()
            .iter()
            .any(|b| b.guest.email == email && b.guest.phone == phone && !b.is_completed))
    }

    async fn insert(&self, booking: &Booking) -> Result<(), BookingError> {
        self.bookings.lock().unwrap().push(booking.clone());
        Ok(())
    }
}

pub fn fixture_rooms() -> Vec<Room> {
    vec![Room {
        id: Some(ObjectId::parse_str(TEST_ROOM_ID).unwrap()),
        name: "Ocean View Suite".to_string(),
        description: "Corner suite with a sea-facing balcony".to_string(),
        price: 200.0,
        discount: 10.0,
        image: String::new(),
        created_at: None,
        updated_at: None,
    }]
}

pub fn fixture_activities() -> Vec<Activity> {
    vec![
        Activity {
            id: Some(ObjectId::parse_str(TEST_SPA_ID).unwrap()),
            name: "Spa Day".to_string(),
            description: String::new(),
            price: 50.0,
            discount: 0.0,
            image: String::new(),
            highlights: vec![],
            created_at: None,
            updated_at: None,
        },
        Activity {
            id: Some(ObjectId::parse_str(TEST_DIVE_ID).unwrap()),
            name: "Reef Dive".to_string(),
            description: String::new(),
            price: 80.0,
            discount: 25.0,
            image: String::new(),
            highlights: vec![],
            created_at: None,
            updated_at: None,
        },
    ]
}

pub struct TestApp;

impl TestApp {
    pub fn new() -> Self {
        Self
    }

    pub fn create_app(
        &self,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(web::Data::new(BookingLog::default()))
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/rooms", web::get().to(get_rooms))
                    .route("/activities", web::get().to(get_activities))
                    .route("/banners", web::get().to(get_object))
                    .route("/about", web::get().to(get_object))
                    .route("/company", web::get().to(get_object))
                    .route("/faqs", web::get().to(get_list))
                    .route("/features", web::get().to(get_list))
                    .route("/gallery", web::get().to(get_list))
                    .route("/contact", web::post().to(submit_contact))
                    .service(
                        web::scope("/bookings")
                            .route("", web::post().to(submit_booking))
                            .route("/search", web::get().to(search_bookings)),
                    )
                    .service(
                        web::scope("/auth")
                            .route("/signin", web::post().to(signin))
                            .route("/session", web::get().to(unauthorized_handler)),
                    )
                    .service(
                        web::scope("/admin")
                            .route("/rooms", web::post().to(unauthorized_handler))
                            .route("/rooms/{id}", web::put().to(unauthorized_handler))
                            .route("/rooms/{id}", web::delete().to(unauthorized_handler))
                            .route("/activities", web::post().to(unauthorized_handler))
                            .route("/activities/{id}", web::put().to(unauthorized_handler))
                            .route("/activities/{id}", web::delete().to(unauthorized_handler))
                            .route("/bookings", web::get().to(unauthorized_handler))
                            .route("/bookings/{id}/status", web::put().to(unauthorized_handler))
                            .route("/banners", web::put().to(unauthorized_handler))
                            .route("/about", web::put().to(unauthorized_handler))
                            .route("/company", web::put().to(unauthorized_handler))
                            .route("/faqs", web::post().to(unauthorized_handler))
                            .route("/faqs/{id}", web::put().to(unauthorized_handler))
                            .route("/faqs/{id}", web::delete().to(unauthorized_handler))
                            .route("/features", web::post().to(unauthorized_handler))
                            .route("/features/{id}", web::put().to(unauthorized_handler))
                            .route("/features/{id}", web::delete().to(unauthorized_handler))
                            .route("/gallery", web::post().to(unauthorized_handler))
                            .route("/gallery/{id}", web::delete().to(unauthorized_handler))
                            .route("/messages", web::get().to(unauthorized_handler))
                            .route("/messages/{id}", web::delete().to(unauthorized_handler)),
                    ),
            )
    }
}

async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

async fn get_rooms() -> impl Responder {
    HttpResponse::Ok().json(fixture_rooms())
}

async fn get_activities() -> impl Responder {
    HttpResponse::Ok().json(fixture_activities())
}

async fn get_object() -> impl Responder {
    HttpResponse::Ok().json(json!({}))
}

async fn get_list() -> impl Responder {
    HttpResponse::Ok().json(json!([]))
}

async fn submit_contact(input: web::Json<serde_json::Value>) -> impl Responder {
    let valid = input
        .get("email")
        .and_then(|v| v.as_str())
        .map(|e| e.contains('@'))
        .unwrap_or(false);
    if valid {
        HttpResponse::Created().body("Message received")
    } else {
        HttpResponse::BadRequest().body("Invalid email address")
    }
}

async fn signin() -> impl Responder {
    HttpResponse::Unauthorized().body("Invalid credentials")
}

async fn unauthorized_handler() -> impl Responder {
    HttpResponse::Unauthorized().json(json!({"error": "Unauthorized"}))
}

/// Runs the real wizard (validation, duplicate guard, price snapshot)
/// against the in-memory log and fixture offerings.
async fn submit_booking(
    log: web::Data<BookingLog>,
    input: web::Json<BookingInput>,
) -> impl Responder {
    let draft = BookingDraft::from(input.into_inner());
    let mut wizard = BookingWizard::new(draft);
    if let Err(err) = wizard.continue_to_details() {
        return booking_error_response(err);
    }

    match wizard
        .submit(log.get_ref(), &fixture_rooms(), &fixture_activities())
        .await
    {
        Ok(booking) => HttpResponse::Created().json(booking),
        Err(err) => booking_error_response(err),
    }
}

fn booking_error_response(err: BookingError) -> HttpResponse {
    match err {
        BookingError::Validation(msg) => HttpResponse::BadRequest().json(json!({ "error": msg })),
        BookingError::Duplicate => {
            HttpResponse::Conflict().json(json!({ "error": "incomplete booking exists" }))
        }
        BookingError::Persistence(msg) => {
            HttpResponse::InternalServerError().json(json!({ "error": msg }))
        }
    }
}

#[derive(serde::Deserialize)]
struct SearchQuery {
    email: String,
    phone: Option<String>,
}

async fn search_bookings(
    log: web::Data<BookingLog>,
    query: web::Query<SearchQuery>,
) -> impl Responder {
    let bookings = log.bookings.lock().unwrap();
    match &query.phone {
        None => {
            let found = bookings.iter().any(|b| b.guest.email == query.email);
            HttpResponse::Ok().json(json!({ "found": found }))
        }
        Some(phone) => {
            match bookings
                .iter()
                .find(|b| b.guest.email == query.email && &b.guest.phone == phone)
            {
                Some(booking) => HttpResponse::Ok().json(booking),
                None => HttpResponse::NotFound().body("Booking not found"),
            }
        }
    }
}
