//! Canonical `{"message": ...}` envelope for non-payload responses.

use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::web::Bytes;
use actix_web::{HttpResponse, HttpResponseBuilder};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Status or error message returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "user created")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Serialise `message` into the envelope.
///
/// The envelope is a single string field, so serialisation cannot fail; a
/// failure here is a programming error and panics.
///
/// # Examples
/// ```
/// use users_backend::inbound::http::response::message_body;
///
/// assert_eq!(&message_body("user created")[..], br#"{"message":"user created"}"#);
/// ```
pub fn message_body(message: &str) -> Bytes {
    match serde_json::to_vec(&MessageResponse::new(message)) {
        Ok(bytes) => Bytes::from(bytes),
        Err(err) => panic!("message envelope must serialise: {err}"),
    }
}

/// Finish `builder` with a JSON envelope body.
pub(crate) fn with_message(mut builder: HttpResponseBuilder, message: &str) -> HttpResponse {
    builder
        .content_type(ContentType::json())
        .body(message_body(message))
}

/// Build a response with the given status and envelope body.
pub fn message_response(status: StatusCode, message: &str) -> HttpResponse {
    with_message(HttpResponse::build(status), message)
}
