//! Bookmark API 集成测试
//!
//! 覆盖书签 CRUD、编辑状态、会话隔离、媒体上传、PDF 导出、健康检查和首页。

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};
use actix_web::{App, web};
use serde_json::{Value, json};

use bookmarker::api::middleware::{RequestIdMiddleware, SessionMiddleware};
use bookmarker::api::services::{AppStartTime, api_v1_routes, frontend_routes, health_routes};
use bookmarker::config::AppConfig;
use bookmarker::services::BookmarkService;
use bookmarker::session::SessionRegistry;

const COOKIE_NAME: &str = "bookmarker_session";
const BOUNDARY: &str = "bookmarker-test-boundary";

// =============================================================================
// 测试工具
// =============================================================================

/// Create a test app with the `/api/v1` routes behind the session middleware
macro_rules! bookmark_app {
    () => {
        bookmark_app!(AppConfig::default())
    };
    ($config:expr) => {{
        let config: AppConfig = $config;
        let registry = Arc::new(SessionRegistry::new(&config.session));
        let service = Arc::new(BookmarkService::from_config(&config));
        test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(registry.clone()))
                .app_data(web::Data::new(service))
                .service(
                    web::scope("/api")
                        .wrap(SessionMiddleware::new(registry.clone(), &config.session))
                        .service(api_v1_routes()),
                ),
        )
        .await
    }};
}

/// Send a request and decode the JSON envelope
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

/// Open a session and return its cookie
macro_rules! open_session {
    ($app:expr) => {{
        let req = TestRequest::get().uri("/api/v1/bookmarks").to_request();
        let resp = test::call_service(&$app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let cookie = resp
            .response()
            .cookies()
            .find(|c| c.name() == COOKIE_NAME)
            .expect("session cookie should be set")
            .into_owned();
        cookie
    }};
}

fn add_request(cookie: &Cookie<'static>, start: &str, end: &str, title: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/v1/bookmarks")
        .cookie(cookie.clone())
        .set_json(json!({ "start": start, "end": end, "title": title }))
}

fn multipart_body(filename: &str, content: &str) -> String {
    format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{f}\"\r\n\
         Content-Type: application/octet-stream\r\n\r\n{c}\r\n--{b}--\r\n",
        b = BOUNDARY,
        f = filename,
        c = content
    )
}

fn upload_request(cookie: &Cookie<'static>, filename: &str, content: &str) -> TestRequest {
    TestRequest::post()
        .uri("/api/v1/media")
        .cookie(cookie.clone())
        .insert_header((
            "Content-Type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(multipart_body(filename, content))
}

fn titles(view: &Value) -> Vec<String> {
    view["bookmarks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["title"].as_str().unwrap().to_string())
        .collect()
}

// =============================================================================
// Session
// =============================================================================

#[actix_rt::test]
async fn test_first_request_sets_session_cookie() {
    let app = bookmark_app!();
    let cookie = open_session!(app);
    assert!(!cookie.value().is_empty());
    assert_eq!(cookie.http_only(), Some(true));
    assert_eq!(cookie.path(), Some("/"));
}

#[actix_rt::test]
async fn test_known_session_gets_no_new_cookie() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    let req = TestRequest::get()
        .uri("/api/v1/bookmarks")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.response().cookies().next().is_none());
}

#[actix_rt::test]
async fn test_sessions_are_isolated() {
    let app = bookmark_app!();
    let alice = open_session!(app);
    let bob = open_session!(app);
    assert_ne!(alice.value(), bob.value());

    let (status, _) = call_json!(app, add_request(&alice, "0", "1", "only alice").to_request());
    assert_eq!(status, StatusCode::CREATED);

    let req = TestRequest::get()
        .uri("/api/v1/bookmarks")
        .cookie(bob.clone())
        .to_request();
    let (_, body) = call_json!(app, req);
    assert!(body["data"]["bookmarks"].as_array().unwrap().is_empty());
}

#[actix_rt::test]
async fn test_request_id_header() {
    let app = bookmark_app!();
    let req = TestRequest::get().uri("/api/v1/bookmarks").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-request-id"));
}

// =============================================================================
// Bookmark CRUD
// =============================================================================

#[actix_rt::test]
async fn test_add_returns_created_view() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    let (status, body) = call_json!(app, add_request(&cookie, "00:00:00", "00:00:10", "Intro").to_request());
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], 0);

    let bookmark = &body["data"]["bookmarks"][0];
    assert_eq!(bookmark["position"], 1);
    assert_eq!(bookmark["start"], "00:00:00");
    assert_eq!(bookmark["end"], "00:00:10");
    assert_eq!(bookmark["title"], "Intro");
    assert!(body["data"]["editing"].is_null());
}

#[actix_rt::test]
async fn test_get_update_delete_by_id() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    call_json!(app, add_request(&cookie, "0", "1", "a").to_request());
    let (_, body) = call_json!(app, add_request(&cookie, "1", "2", "b").to_request());
    let id = body["data"]["bookmarks"][1]["id"].as_u64().unwrap();

    let req = TestRequest::get()
        .uri(&format!("/api/v1/bookmarks/{}", id))
        .cookie(cookie.clone())
        .to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["title"], "b");
    assert_eq!(body["data"]["position"], 2);

    let req = TestRequest::put()
        .uri(&format!("/api/v1/bookmarks/{}", id))
        .cookie(cookie.clone())
        .set_json(json!({ "start": "1", "end": "3", "title": "B" }))
        .to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body["data"]), vec!["a", "B"]);

    let req = TestRequest::delete()
        .uri(&format!("/api/v1/bookmarks/{}", id))
        .cookie(cookie.clone())
        .to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(titles(&body["data"]), vec!["a"]);
}

#[actix_rt::test]
async fn test_unknown_bookmark_is_not_found() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    for uri in ["/api/v1/bookmarks/42", "/api/v1/bookmarks/not-a-number"] {
        let req = TestRequest::delete()
            .uri(uri)
            .cookie(cookie.clone())
            .to_request();
        let (status, body) = call_json!(app, req);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], 3000);
    }
}

#[actix_rt::test]
async fn test_invalid_json_uses_envelope() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    let req = TestRequest::post()
        .uri("/api/v1/bookmarks")
        .cookie(cookie.clone())
        .insert_header(("Content-Type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 1000);
}

#[actix_rt::test]
async fn test_missing_fields_are_empty_strings() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    let req = TestRequest::post()
        .uri("/api/v1/bookmarks")
        .cookie(cookie.clone())
        .set_json(json!({ "title": "only a title" }))
        .to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["bookmarks"][0]["start"], "");
}

// =============================================================================
// Edit state
// =============================================================================

#[actix_rt::test]
async fn test_edit_flow() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    let (_, body) = call_json!(app, add_request(&cookie, "00:01:00", "00:02:00", "Chorus").to_request());
    let id = body["data"]["bookmarks"][0]["id"].as_u64().unwrap();

    let req = TestRequest::post()
        .uri(&format!("/api/v1/bookmarks/{}/edit", id))
        .cookie(cookie.clone())
        .to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["editing"]["title"], "Chorus");
    assert_eq!(body["data"]["editing"]["start"], "00:01:00");

    let req = TestRequest::put()
        .uri(&format!("/api/v1/bookmarks/{}", id))
        .cookie(cookie.clone())
        .set_json(json!({ "start": "00:01:00", "end": "00:02:30", "title": "Chorus 1" }))
        .to_request();
    let (_, body) = call_json!(app, req);
    assert!(body["data"]["editing"].is_null());
    assert_eq!(body["data"]["bookmarks"][0]["end"], "00:02:30");
}

#[actix_rt::test]
async fn test_cancel_edit() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    let (_, body) = call_json!(app, add_request(&cookie, "0", "1", "a").to_request());
    let id = body["data"]["bookmarks"][0]["id"].as_u64().unwrap();

    let req = TestRequest::post()
        .uri(&format!("/api/v1/bookmarks/{}/edit", id))
        .cookie(cookie.clone())
        .to_request();
    call_json!(app, req);

    let req = TestRequest::delete()
        .uri("/api/v1/edit")
        .cookie(cookie.clone())
        .to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert!(body["data"]["editing"].is_null());
    assert_eq!(titles(&body["data"]), vec!["a"]);
}

// =============================================================================
// Validation policy
// =============================================================================

#[actix_rt::test]
async fn test_validation_policy_from_config() {
    let mut config = AppConfig::default();
    config.validation.time_format = true;
    config.validation.ordered_range = true;
    let app = bookmark_app!(config);
    let cookie = open_session!(app);

    let (status, body) = call_json!(app, add_request(&cookie, "00:00:90", "00:01:00", "x").to_request());
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3002);

    let (status, _) = call_json!(app, add_request(&cookie, "00:02:00", "00:01:00", "x").to_request());
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = call_json!(app, add_request(&cookie, "00:01:00", "00:02:00", "x").to_request());
    assert_eq!(status, StatusCode::CREATED);
}

// =============================================================================
// Media upload
// =============================================================================

#[actix_rt::test]
async fn test_upload_records_file_name() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    let (status, body) = call_json!(app, upload_request(&cookie, "Episode.M4A", "not really audio").to_request());
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["media"]["name"], "Episode.M4A");
    assert_eq!(body["data"]["media"]["size"], 16);

    let req = TestRequest::delete()
        .uri("/api/v1/media")
        .cookie(cookie.clone())
        .to_request();
    let (_, body) = call_json!(app, req);
    assert!(body["data"]["media"].is_null());
}

#[actix_rt::test]
async fn test_upload_rejects_other_extensions() {
    let app = bookmark_app!();
    let cookie = open_session!(app);

    let (status, body) = call_json!(app, upload_request(&cookie, "song.mp3", "data").to_request());
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(body["code"], 4004);
}

#[actix_rt::test]
async fn test_upload_size_limit() {
    let mut config = AppConfig::default();
    config.upload.max_size_mb = 0;
    let app = bookmark_app!(config);
    let cookie = open_session!(app);

    let (status, body) = call_json!(app, upload_request(&cookie, "clip.mp4", "x").to_request());
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["code"], 1011);
}

// =============================================================================
// Export
// =============================================================================

#[actix_rt::test]
async fn test_export_returns_pdf_attachment() {
    let app = bookmark_app!();
    let cookie = open_session!(app);
    call_json!(app, add_request(&cookie, "00:00:00", "00:00:10", "Intro").to_request());

    let req = TestRequest::get()
        .uri("/api/v1/export")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    assert_eq!(
        resp.headers().get("content-disposition").unwrap(),
        "attachment; filename=\"bookmarks.pdf\""
    );

    let body = test::read_body(resp).await;
    assert!(body.starts_with(b"%PDF"));
    assert!(body.windows(8).any(|w| w == b"1. Intro"));
}

#[actix_rt::test]
async fn test_export_encoding_error() {
    let app = bookmark_app!();
    let cookie = open_session!(app);
    call_json!(app, add_request(&cookie, "0", "1", "日本語").to_request());

    let req = TestRequest::get()
        .uri("/api/v1/export")
        .cookie(cookie.clone())
        .to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], 4005);
    assert!(body["message"].as_str().unwrap().contains("Latin-1"));

    // 会话不受影响
    let req = TestRequest::get()
        .uri("/api/v1/bookmarks")
        .cookie(cookie.clone())
        .to_request();
    let (_, body) = call_json!(app, req);
    assert_eq!(titles(&body["data"]), vec!["日本語"]);
}

// =============================================================================
// 健康检查与首页
// =============================================================================

#[actix_rt::test]
async fn test_health_reports_session_count() {
    let config = AppConfig::default();
    let registry = Arc::new(SessionRegistry::new(&config.session));
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(registry.clone()))
            .app_data(web::Data::new(Arc::new(BookmarkService::from_config(&config))))
            .app_data(web::Data::new(AppStartTime::now()))
            .service(
                web::scope("/api")
                    .wrap(SessionMiddleware::new(registry.clone(), &config.session))
                    .service(api_v1_routes()),
            )
            .service(web::scope("/health").service(health_routes())),
    )
    .await;

    let req = TestRequest::get().uri("/health").to_request();
    let (status, body) = call_json!(app, req);
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["sessions"], 0);

    open_session!(app);
    open_session!(app);

    let req = TestRequest::get().uri("/health").to_request();
    let (_, body) = call_json!(app, req);
    assert_eq!(body["data"]["sessions"], 2);
    assert!(body["data"]["uptime"].is_u64());

    let req = TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
}

#[actix_rt::test]
async fn test_index_page_points_at_api() {
    let app = test::init_service(App::new().service(frontend_routes())).await;

    let req = TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "text/html; charset=utf-8"
    );

    let body = test::read_body(resp).await;
    let html = String::from_utf8(body.to_vec()).unwrap();
    assert!(html.contains("data-api-base=\"/api/v1\""));
    assert!(!html.contains("%API_BASE%"));
    assert!(!html.contains("%BOOKMARKER_VERSION%"));
    assert!(html.contains("00:00:10"));

    let req = TestRequest::get().uri("/assets/app.js").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}
