use actix_web::web;

use crate::middleware::auth::AuthMiddleware;
use crate::middleware::role_auth::RequireRole;
use crate::models::admin::AdminRole;

pub mod activities;
pub mod bookings;
pub mod content;
pub mod gallery;
pub mod messages;
pub mod rooms;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        // AuthMiddleware is registered last so it runs first and the role
        // gate sees the decoded claims.
        web::scope("/admin")
            .wrap(RequireRole::new(AdminRole::Admin))
            .wrap(AuthMiddleware)
            .route("/rooms", web::post().to(rooms::create_room))
            .route("/rooms/{id}", web::put().to(rooms::update_room))
            .route("/rooms/{id}", web::delete().to(rooms::delete_room))
            .route("/activities", web::post().to(activities::create_activity))
            .route("/activities/{id}", web::put().to(activities::update_activity))
            .route(
                "/activities/{id}",
                web::delete().to(activities::delete_activity),
            )
            .route("/bookings", web::get().to(bookings::get_all_bookings))
            .route(
                "/bookings/{id}/status",
                web::put().to(bookings::update_booking_status),
            )
            .route("/banners", web::put().to(content::update_banners))
            .route("/about", web::put().to(content::update_about))
            .route("/company", web::put().to(content::update_company))
            .route("/faqs", web::post().to(content::create_faq))
            .route("/faqs/{id}", web::put().to(content::update_faq))
            .route("/faqs/{id}", web::delete().to(content::delete_faq))
            .route("/features", web::post().to(content::create_feature))
            .route("/features/{id}", web::put().to(content::update_feature))
            .route("/features/{id}", web::delete().to(content::delete_feature))
            .route("/gallery", web::post().to(gallery::add_image))
            .route("/gallery/{id}", web::delete().to(gallery::delete_image))
            .route("/messages", web::get().to(messages::get_messages))
            .route("/messages/{id}", web::delete().to(messages::delete_message)),
    );
}
