//! Plain-text greeting at the server root.

use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, get};

pub const GREETING: &str = "Hello World!\n";

/// Respond with a fixed greeting, handy as a smoke check.
#[utoipa::path(
    get,
    path = "/",
    tags = ["index"],
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain"))
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header(ContentType::plaintext())
        .body(GREETING)
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::http::{StatusCode, header};
    use actix_web::App;
    use actix_web::test as actix_test;

    #[actix_web::test]
    async fn root_returns_greeting() {
        let app = actix_test::init_service(App::new().service(index)).await;
        let req = actix_test::TestRequest::get().uri("/").to_request();
        let res = actix_test::call_service(&app, req).await;

        assert_eq!(res.status(), StatusCode::OK);
        let content_type = res
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        assert_eq!(content_type.as_deref(), Some("text/plain; charset=utf-8"));
        assert_eq!(actix_test::read_body(res).await, GREETING.as_bytes());
    }
}
