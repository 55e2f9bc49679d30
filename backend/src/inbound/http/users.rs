//! User resource handlers.
//!
//! ```text
//! GET    {prefix}/        list users
//! POST   {prefix}/        create a user
//! GET    {prefix}/{id}    fetch a user
//! PUT    {prefix}/{id}    replace a user
//! DELETE {prefix}/{id}    delete a user
//! ```
//!
//! Storage is permissive, so existence rules live here: every write is
//! preceded by a `get` probe. A missing user is 404 for reads, updates and
//! deletes alike.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Scope, web};
use tracing::info;

use crate::domain::{Error, User};
use crate::inbound::http::ApiResult;
use crate::inbound::http::response::{MessageResponse, message_response};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    parse_path_id, parse_user, read_body, require_json_content_type,
};

pub(crate) const USER_EXISTS_MESSAGE: &str = "user already exists";
pub(crate) const ID_MISMATCH_MESSAGE: &str = "ID in the body does not match the path";

/// Mount the user routes under `prefix` (for example `/users`).
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::{App, web};
/// use users_backend::inbound::http::state::HttpState;
/// use users_backend::inbound::http::users::users_scope;
/// use users_backend::outbound::storage::InMemoryUserStorage;
///
/// let state = HttpState::new(Arc::new(InMemoryUserStorage::new()));
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .service(users_scope("/users"));
/// ```
pub fn users_scope(prefix: &str) -> Scope {
    web::scope(prefix)
        .service(
            web::resource("/")
                .route(web::get().to(list_users))
                .route(web::post().to(create_user)),
        )
        .service(
            web::resource("/{id}")
                .route(web::get().to(get_user))
                .route(web::put().to(update_user))
                .route(web::delete().to(delete_user)),
        )
}

/// List all users.
#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "All stored users", body = [User]),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let users = state.users.list().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// Create a user. The identifier must not be in use.
#[utoipa::path(
    post,
    path = "/users/",
    request_body(content = crate::domain::UserPayload, content_type = "application/json"),
    responses(
        (status = 201, description = "User created", body = MessageResponse),
        (status = 400, description = "Malformed, invalid or duplicate user", body = MessageResponse),
        (status = 415, description = "Body is not JSON", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
pub async fn create_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    require_json_content_type(&req)?;
    let body = read_body(payload, state.body_limit).await?;
    let user = parse_user(&body)?;

    match state.users.get(user.id()).await {
        Ok(_) => return Err(Error::invalid_request(USER_EXISTS_MESSAGE)),
        Err(err) if err.is_not_found() => {}
        Err(err) => return Err(err.into()),
    }

    state.users.create(&user).await?;
    info!(user_id = %user.id(), "user created");
    Ok(message_response(StatusCode::CREATED, "user created"))
}

/// Fetch a single user.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "The user", body = User),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(path.into_inner())?;
    let user = state.users.get(&id).await?;
    Ok(HttpResponse::Ok().json(user))
}

/// Replace an existing user. The body identifier must match the path.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    request_body(content = crate::domain::UserPayload, content_type = "application/json"),
    responses(
        (status = 200, description = "User updated", body = MessageResponse),
        (status = 400, description = "Malformed or invalid user, or identifier mismatch", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 415, description = "Body is not JSON", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
pub async fn update_user(
    state: web::Data<HttpState>,
    req: HttpRequest,
    path: web::Path<String>,
    payload: web::Payload,
) -> ApiResult<HttpResponse> {
    require_json_content_type(&req)?;
    let id = parse_path_id(path.into_inner())?;
    state.users.get(&id).await?;

    let body = read_body(payload, state.body_limit).await?;
    let update = parse_user(&body)?;
    if update.id() != &id {
        return Err(Error::invalid_request(ID_MISMATCH_MESSAGE));
    }

    state.users.update(&id, &update).await?;
    info!(user_id = %id, "user updated");
    Ok(message_response(StatusCode::OK, "user updated"))
}

/// Delete an existing user.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 404, description = "User not found", body = MessageResponse),
        (status = 500, description = "Internal server error", body = MessageResponse)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_path_id(path.into_inner())?;
    state.users.get(&id).await?;
    // Not atomic with the probe: a concurrent delete landing in between still
    // reports success here.
    state.users.delete(&id).await?;
    info!(user_id = %id, "user deleted");
    Ok(message_response(StatusCode::OK, "user deleted"))
}
