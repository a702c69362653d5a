use std::env;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use env_logger::Env;

use bookverse_api::middleware::auth::AuthMiddleware;
use bookverse_api::{db, routes};

const HOST: &str = "0.0.0.0";
const PORT: u16 = 8080;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    if cfg!(debug_assertions) {
        dotenv::dotenv().ok();
    }

    let host = env::var("HOST").unwrap_or_else(|_| HOST.to_string());
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| PORT.to_string())
        .parse()
        .unwrap_or(PORT);

    let mongo_uri = env::var("MONGODB_URI").expect("MONGODB_URI must be set");
    let client = db::mongo::create_mongo_client(&mongo_uri).await;

    log::info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_method()
                    .allow_any_header()
                    .max_age(3600),
            )
            .app_data(web::Data::new(client.clone()))
            .route("/health", web::get().to(routes::health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/auth")
                            .route("/signin", web::post().to(routes::auth::signin))
                            .service(
                                web::scope("")
                                    .wrap(AuthMiddleware)
                                    .route("/session", web::get().to(routes::auth::session)),
                            ),
                    )
                    .route("/rooms", web::get().to(routes::room::get_rooms))
                    .route(
                        "/activities",
                        web::get().to(routes::activity::get_activities),
                    )
                    .route("/banners", web::get().to(routes::content::get_banners))
                    .route("/about", web::get().to(routes::content::get_about))
                    .route("/company", web::get().to(routes::content::get_company))
                    .route("/faqs", web::get().to(routes::content::get_faqs))
                    .route("/features", web::get().to(routes::content::get_features))
                    .route("/gallery", web::get().to(routes::content::get_gallery))
                    .route("/contact", web::post().to(routes::contact::submit_message))
                    .service(
                        web::scope("/bookings")
                            .route("", web::post().to(routes::booking::create_booking))
                            .route("/search", web::get().to(routes::booking::search_booking)),
                    )
                    .configure(routes::admin::config),
            )
    })
    .bind((host, port))?
    .run()
    .await
}
