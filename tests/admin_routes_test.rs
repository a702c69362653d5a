mod common;

use actix_web::{http::StatusCode, test};
use serde_json::json;
use serial_test::serial;

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_signin_rejects_unknown_credentials() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/auth/signin")
        .set_json(json!({
            "email": "nobody@example.com",
            "password": "wrong"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
#[serial]
async fn test_session_requires_token() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/api/auth/session").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_rt::test]
#[serial]
async fn test_admin_writes_require_auth() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let id = "65f0a1a1a1a1a1a1a1a1a1a1";

    let posts = [
        ("/api/admin/rooms", json!({"name": "Suite", "description": "", "price": 100.0})),
        ("/api/admin/activities", json!({"name": "Hike", "description": "", "price": 30.0})),
        ("/api/admin/faqs", json!({"question": "Q", "answer": "A"})),
        ("/api/admin/features", json!({"title": "Pool", "description": "", "icon": ""})),
        ("/api/admin/gallery", json!({"image": {"data": "", "fileName": "x.png", "fileType": "image/png", "fileSize": 0}})),
    ];
    for (uri, body) in posts {
        let req = test::TestRequest::post().uri(uri).set_json(body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "POST {} should require auth",
            uri
        );
    }

    let puts = [
        format!("/api/admin/rooms/{}", id),
        format!("/api/admin/activities/{}", id),
        format!("/api/admin/bookings/{}/status", id),
        "/api/admin/banners".to_string(),
        "/api/admin/about".to_string(),
        "/api/admin/company".to_string(),
        format!("/api/admin/faqs/{}", id),
        format!("/api/admin/features/{}", id),
    ];
    for uri in &puts {
        let req = test::TestRequest::put()
            .uri(uri)
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "PUT {} should require auth",
            uri
        );
    }

    let deletes = [
        format!("/api/admin/rooms/{}", id),
        format!("/api/admin/activities/{}", id),
        format!("/api/admin/faqs/{}", id),
        format!("/api/admin/features/{}", id),
        format!("/api/admin/gallery/{}", id),
        format!("/api/admin/messages/{}", id),
    ];
    for uri in &deletes {
        let req = test::TestRequest::delete().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "DELETE {} should require auth",
            uri
        );
    }
}

#[actix_rt::test]
#[serial]
async fn test_admin_reads_require_auth() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for uri in ["/api/admin/bookings", "/api/admin/messages"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(
            resp.status(),
            StatusCode::UNAUTHORIZED,
            "GET {} should require auth",
            uri
        );
    }
}
