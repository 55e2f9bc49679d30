//! Request checks shared by the user handlers.
//!
//! Each helper turns one class of malformed input into the client-facing
//! error for it. Detail about what went wrong is logged, never returned.

use actix_web::mime;
use actix_web::web::{self, Bytes};
use actix_web::{HttpMessage, HttpRequest};
use tracing::debug;

use crate::domain::ports::USER_NOT_FOUND;
use crate::domain::{Error, User, UserId, UserPayload};

pub(crate) const CONTENT_TYPE_MESSAGE: &str = "Content-Type must be application/json";
pub(crate) const UNREADABLE_BODY_MESSAGE: &str = "Unable to parse the request body";
pub(crate) const MALFORMED_JSON_MESSAGE: &str = "Unable to unmarshal JSON";
pub(crate) const INVALID_REQUEST_MESSAGE: &str = "invalid request";

/// Require an `application/json` media type. Parameters such as `charset`
/// are allowed.
pub(crate) fn require_json_content_type(req: &HttpRequest) -> Result<(), Error> {
    match req.mime_type() {
        Ok(Some(found)) if found.essence_str() == mime::APPLICATION_JSON.essence_str() => Ok(()),
        other => {
            debug!(content_type = ?other, "rejecting non-JSON request body");
            Err(Error::unsupported_media_type(CONTENT_TYPE_MESSAGE))
        }
    }
}

/// Read the whole request body, bounded by `limit` bytes.
pub(crate) async fn read_body(payload: web::Payload, limit: usize) -> Result<Bytes, Error> {
    match payload.to_bytes_limited(limit).await {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(error)) => {
            debug!(%error, "could not read request body");
            Err(Error::invalid_request(UNREADABLE_BODY_MESSAGE))
        }
        Err(_) => {
            debug!(limit, "request body exceeds limit");
            Err(Error::invalid_request(UNREADABLE_BODY_MESSAGE))
        }
    }
}

/// Decode a user payload and validate it.
pub(crate) fn parse_user(body: &[u8]) -> Result<User, Error> {
    let payload: UserPayload = serde_json::from_slice(body).map_err(|error| {
        debug!(%error, "could not decode user JSON");
        Error::invalid_request(MALFORMED_JSON_MESSAGE)
    })?;
    User::try_from(payload).map_err(|error| {
        debug!(%error, "user payload failed validation");
        Error::invalid_request(INVALID_REQUEST_MESSAGE)
    })
}

/// Interpret the `{id}` path segment.
///
/// An identifier that fails validation can never have been stored, so it is
/// answered as not found.
pub(crate) fn parse_path_id(raw: String) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|error| {
        debug!(%error, "path identifier cannot name a stored user");
        Error::not_found(USER_NOT_FOUND)
    })
}
