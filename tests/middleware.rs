use actix_web::http::StatusCode;
use actix_web::{App, HttpResponse, test, web};

use customer_management::middleware::{API_KEY_HEADER, RequireApiKey};

const API_KEY: &str = "secret-key";

async fn protected() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

#[actix_web::test]
async fn missing_key_is_rejected() {
    let app = test::init_service(
        App::new().service(
            web::scope("/api")
                .wrap(RequireApiKey::new(API_KEY))
                .route("/ping", web::get().to(protected)),
        ),
    )
    .await;

    let req = test::TestRequest::get().uri("/api/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let body = test::read_body(resp).await;
    assert_eq!(body, "Unauthorized - Invalid API Key");
}

#[actix_web::test]
async fn wrong_key_is_rejected() {
    let app = test::init_service(
        App::new().service(
            web::scope("/api")
                .wrap(RequireApiKey::new(API_KEY))
                .route("/ping", web::get().to(protected)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/ping")
        .insert_header((API_KEY_HEADER, "not-the-key"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn matching_key_passes_through() {
    let app = test::init_service(
        App::new().service(
            web::scope("/api")
                .wrap(RequireApiKey::new(API_KEY))
                .route("/ping", web::get().to(protected)),
        ),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/ping")
        .insert_header((API_KEY_HEADER, API_KEY))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    assert_eq!(body, "ok");
}

#[actix_web::test]
async fn routes_outside_the_scope_are_open() {
    let app = test::init_service(
        App::new()
            .route("/", web::get().to(protected))
            .service(
                web::scope("/api")
                    .wrap(RequireApiKey::new(API_KEY))
                    .route("/ping", web::get().to(protected)),
            ),
    )
    .await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
