//! End-to-end behaviour of the assembled application over the user resource.

use std::sync::Arc;

use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::{self, ContentType};
use actix_web::test::{self, TestRequest};
use actix_web::web;
use rstest::{fixture, rstest};
use serde_json::{Value, json};

use users_backend::domain::TRACE_ID_HEADER;
use users_backend::inbound::http::health::HealthState;
use users_backend::inbound::http::state::HttpState;
use users_backend::outbound::storage::build_user_storage;
use users_backend::server::{AppDependencies, build_app};

#[fixture]
fn deps() -> AppDependencies {
    let users = build_user_storage("mock").expect("mock storage");
    AppDependencies {
        health_state: web::Data::new(HealthState::new()),
        http_state: web::Data::new(HttpState::new(Arc::clone(&users))),
        prefix: "/users".to_owned(),
    }
}

async fn parts(res: ServiceResponse) -> (StatusCode, Option<String>, Value) {
    let status = res.status();
    let trace_id = res
        .headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let body = test::read_body(res).await;
    let value = serde_json::from_slice(&body).expect("JSON body");
    (status, trace_id, value)
}

fn with_json(req: TestRequest, body: &Value) -> TestRequest {
    req.insert_header(ContentType::json())
        .set_payload(body.to_string())
}

fn message(text: &str) -> Value {
    json!({ "message": text })
}

#[rstest]
#[actix_web::test]
async fn single_user_scenario(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;
    let alice = json!({"id": "alice", "name": "Alice", "age": 30});
    let renamed = json!({"id": "alice", "name": "Alice Smith", "age": 30});

    let cases = [
        (
            with_json(TestRequest::post().uri("/users/"), &alice),
            StatusCode::CREATED,
            message("user created"),
        ),
        (
            TestRequest::get().uri("/users/alice"),
            StatusCode::OK,
            alice.clone(),
        ),
        (
            with_json(TestRequest::put().uri("/users/alice"), &renamed),
            StatusCode::OK,
            message("user updated"),
        ),
        (
            TestRequest::get().uri("/users/alice"),
            StatusCode::OK,
            renamed.clone(),
        ),
        (
            TestRequest::get().uri("/users/"),
            StatusCode::OK,
            json!([renamed]),
        ),
        (
            TestRequest::delete().uri("/users/alice"),
            StatusCode::OK,
            message("user deleted"),
        ),
        (
            TestRequest::get().uri("/users/alice"),
            StatusCode::NOT_FOUND,
            message("user not found"),
        ),
        (
            TestRequest::post()
                .uri("/users/")
                .set_payload(alice.to_string()),
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            message("Content-Type must be application/json"),
        ),
        (
            with_json(
                TestRequest::post().uri("/users/"),
                &json!({"id": "ab", "name": "Ab", "age": 1}),
            ),
            StatusCode::BAD_REQUEST,
            message("invalid request"),
        ),
    ];

    for (index, (req, status, body)) in cases.into_iter().enumerate() {
        let (actual_status, trace_id, actual_body) =
            parts(test::call_service(&app, req.to_request()).await).await;
        assert_eq!(actual_status, status, "step {index}: status");
        assert_eq!(actual_body, body, "step {index}: body");
        assert!(trace_id.is_some(), "step {index}: trace-id header");
    }
}

#[rstest]
#[actix_web::test]
async fn many_users_scenario(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;
    let users = [
        json!({"id": "alice", "name": "Alice", "age": 30}),
        json!({"id": "bob", "name": "Bob", "age": 25}),
        json!({"id": "carol99", "name": "Carol", "age": 41}),
    ];

    for user in &users {
        let res = test::call_service(
            &app,
            with_json(TestRequest::post().uri("/users/"), user).to_request(),
        )
        .await;
        assert_eq!(res.status(), StatusCode::CREATED);
    }

    let (status, _, listed) =
        parts(test::call_service(&app, TestRequest::get().uri("/users/").to_request()).await)
            .await;
    assert_eq!(status, StatusCode::OK);
    let mut listed = listed.as_array().expect("user array").clone();
    listed.sort_by_key(|user| user["id"].as_str().map(str::to_owned));
    assert_eq!(listed, users);

    for user in &users {
        let id = user["id"].as_str().expect("id");
        let uri = format!("/users/{id}");

        let (status, _, fetched) =
            parts(test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&fetched, user);

        let (status, _, body) =
            parts(test::call_service(&app, TestRequest::delete().uri(&uri).to_request()).await)
                .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, message("user deleted"));
    }

    let (_, _, remaining) =
        parts(test::call_service(&app, TestRequest::get().uri("/users/").to_request()).await)
            .await;
    assert_eq!(remaining, json!([]));
}

#[rstest]
#[actix_web::test]
async fn inbound_trace_id_is_echoed(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;
    let trace_id = "3fa85f64-5717-4562-b3fc-2c963f66afa6";
    let req = TestRequest::get()
        .uri("/users/ghost")
        .insert_header((TRACE_ID_HEADER, trace_id))
        .to_request();
    let (status, echoed, body) = parts(test::call_service(&app, req).await).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(echoed.as_deref(), Some(trace_id));
    assert_eq!(body, message("user not found"));
}

#[rstest]
#[actix_web::test]
async fn root_greets_in_plain_text(deps: AppDependencies) {
    let app = test::init_service(build_app(deps)).await;
    let res = test::call_service(&app, TestRequest::get().uri("/").to_request()).await;

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/plain; charset=utf-8")
    );
    assert_eq!(test::read_body(res).await, "Hello World!\n".as_bytes());
}
