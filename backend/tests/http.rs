use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{test, App};
use backend::identity::HeaderIdentity;
use backend::lifecycle::FormService;
use backend::store::FormStore;
use backend::AppState;
use common::model::form::{CreatedForm, Form, FormSubmission, FormWithSubmissions, SharedFormContent};
use common::model::stats::FormStats;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;

const USER_HEADER: &str = "X-User-Id";

fn app_state() -> (TempDir, AppState) {
    app_state_with_limit(1024 * 1024)
}

fn app_state_with_limit(json_limit: usize) -> (TempDir, AppState) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let store = FormStore::open(dir.path().join("forms.sqlite")).expect("open store");
    let state = AppState::new(
        FormService::new(store),
        Arc::new(HeaderIdentity::new(USER_HEADER)),
        json_limit,
    );
    (dir, state)
}

#[actix_web::test]
async fn form_lifecycle_over_http() {
    let (_dir, state) = app_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/forms")
        .insert_header((USER_HEADER, "user_1"))
        .set_json(json!({ "name": "Survey" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: CreatedForm = test::read_body_json(resp).await;

    let req = test::TestRequest::put()
        .uri(&format!("/api/forms/{}/content", created.id))
        .insert_header((USER_HEADER, "user_1"))
        .set_json(json!({ "content": "[{\"type\":\"TitleField\"}]" }))
        .to_request();
    let form: Form = test::call_and_read_body_json(&app, req).await;
    assert_eq!(form.content, "[{\"type\":\"TitleField\"}]");

    let req = test::TestRequest::get()
        .uri(&format!("/api/share/{}", form.share_url))
        .to_request();
    let shared: SharedFormContent = test::call_and_read_body_json(&app, req).await;
    assert_eq!(shared.content, form.content);

    let req = test::TestRequest::post()
        .uri(&format!("/api/share/{}", form.share_url))
        .set_json(json!({ "content": "{}" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_published");

    let req = test::TestRequest::post()
        .uri(&format!("/api/forms/{}/publish", created.id))
        .insert_header((USER_HEADER, "user_1"))
        .to_request();
    let published: Form = test::call_and_read_body_json(&app, req).await;
    assert!(published.published);

    let req = test::TestRequest::post()
        .uri(&format!("/api/share/{}", form.share_url))
        .set_json(json!({ "content": "{\"answer\":42}" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let submission: FormSubmission = test::read_body_json(resp).await;
    assert_eq!(submission.form_id, created.id);

    let req = test::TestRequest::get()
        .uri(&format!("/api/forms/{}/submissions", created.id))
        .insert_header((USER_HEADER, "user_1"))
        .to_request();
    let view: FormWithSubmissions = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view.form.visits, 1);
    assert_eq!(view.form.submissions, 1);
    assert_eq!(view.form_submissions, vec![submission]);

    let req = test::TestRequest::get()
        .uri("/api/forms/stats")
        .insert_header((USER_HEADER, "user_1"))
        .to_request();
    let stats: FormStats = test::call_and_read_body_json(&app, req).await;
    assert_eq!(stats.visits, 1);
    assert_eq!(stats.submissions, 1);
    assert_eq!(stats.submission_rate, 100.0);
    assert_eq!(stats.bounce_rate, 0.0);

    let req = test::TestRequest::get()
        .uri("/api/forms")
        .insert_header((USER_HEADER, "user_1"))
        .to_request();
    let forms: Vec<Form> = test::call_and_read_body_json(&app, req).await;
    assert_eq!(forms.len(), 1);
    assert_eq!(forms[0].id, created.id);
}

#[actix_web::test]
async fn anonymous_owner_routes_are_unauthorized() {
    let (_dir, state) = app_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    for uri in ["/api/forms", "/api/forms/stats", "/api/forms/1", "/api/forms/1/submissions"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED, "{uri}");
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "authentication_required");
    }

    let req = test::TestRequest::post()
        .uri("/api/forms")
        .set_json(json!({ "name": "Survey" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn invalid_form_is_a_bad_request() {
    let (_dir, state) = app_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/forms")
        .insert_header((USER_HEADER, "user_1"))
        .set_json(json!({ "name": "" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");
}

#[actix_web::test]
async fn other_users_forms_are_not_found() {
    let (_dir, state) = app_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/forms")
        .insert_header((USER_HEADER, "user_1"))
        .set_json(json!({ "name": "Private" }))
        .to_request();
    let created: CreatedForm = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/forms/{}", created.id))
        .insert_header((USER_HEADER, "user_2"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri(&format!("/api/forms/{}/content", created.id))
        .insert_header((USER_HEADER, "user_2"))
        .set_json(json!({ "content": "hijacked" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/api/forms/{}", created.id))
        .insert_header((USER_HEADER, "user_1"))
        .to_request();
    let form: Form = test::call_and_read_body_json(&app, req).await;
    assert_eq!(form.content, "");
}

#[actix_web::test]
async fn unknown_share_url_is_not_found() {
    let (_dir, state) = app_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get().uri("/api/share/missing").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn submit_to_unknown_share_url_is_not_found() {
    let (_dir, state) = app_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/share/missing")
        .set_json(json!({ "content": "{}" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}

#[actix_web::test]
async fn rejected_submission_leaves_counters_alone() {
    let (_dir, state) = app_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/forms")
        .insert_header((USER_HEADER, "user_1"))
        .set_json(json!({ "name": "Draft" }))
        .to_request();
    let created: CreatedForm = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/forms/{}", created.id))
        .insert_header((USER_HEADER, "user_1"))
        .to_request();
    let form: Form = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::get()
        .uri(&format!("/api/share/{}", form.share_url))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    for _ in 0..2 {
        let req = test::TestRequest::post()
            .uri(&format!("/api/share/{}", form.share_url))
            .set_json(json!({ "content": "{}" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    let req = test::TestRequest::get()
        .uri(&format!("/api/forms/{}/submissions", created.id))
        .insert_header((USER_HEADER, "user_1"))
        .to_request();
    let view: FormWithSubmissions = test::call_and_read_body_json(&app, req).await;
    assert_eq!(view.form.visits, 1);
    assert_eq!(view.form.submissions, 0);
    assert!(view.form_submissions.is_empty());
}

#[actix_web::test]
async fn malformed_bodies_are_validation_errors() {
    let (_dir, state) = app_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/forms")
        .insert_header((USER_HEADER, "user_1"))
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");

    let req = test::TestRequest::post()
        .uri("/api/forms")
        .insert_header((USER_HEADER, "user_1"))
        .insert_header(ContentType::json())
        .set_payload("not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "validation_error");

    let req = test::TestRequest::get()
        .uri("/api/forms")
        .insert_header((USER_HEADER, "user_1"))
        .to_request();
    let forms: Vec<Form> = test::call_and_read_body_json(&app, req).await;
    assert!(forms.is_empty());
}

#[actix_web::test]
async fn oversized_body_is_rejected_with_its_own_kind() {
    let (_dir, state) = app_state_with_limit(64);
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::post()
        .uri("/api/forms")
        .insert_header((USER_HEADER, "user_1"))
        .set_json(json!({ "name": "x".repeat(200) }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "payload_too_large");
}

#[actix_web::test]
async fn non_numeric_id_is_not_found() {
    let (_dir, state) = app_state();
    let app = test::init_service(App::new().configure(|cfg| state.configure(cfg))).await;

    let req = test::TestRequest::get()
        .uri("/api/forms/abc")
        .insert_header((USER_HEADER, "user_1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "not_found");
}
