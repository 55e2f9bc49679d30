//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user resource, the health probes and the root
//! greeting. Swagger UI serves it in debug builds and
//! `cargo run --bin openapi-dump` prints it for external tooling.
//!
//! Paths are declared under the default `/users` prefix;
//! [`ApiDoc::for_prefix`] rewrites them for a server mounted elsewhere.

use crate::domain::{User, UserPayload};
use crate::inbound::http::response::MessageResponse;
use crate::settings::DEFAULT_PREFIX;
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users service API",
        description = "CRUD interface over user records plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
        crate::inbound::http::index::index,
    ),
    components(schemas(User, UserPayload, MessageResponse)),
    tags(
        (name = "users", description = "Operations on user records"),
        (name = "health", description = "Endpoints for health checks"),
        (name = "index", description = "Server root")
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Document with user paths moved from `/users` to `prefix`.
    ///
    /// # Examples
    /// ```
    /// use users_backend::ApiDoc;
    ///
    /// let doc = ApiDoc::for_prefix("/accounts");
    /// assert!(doc.paths.paths.contains_key("/accounts/{id}"));
    /// ```
    pub fn for_prefix(prefix: &str) -> utoipa::openapi::OpenApi {
        let mut doc = Self::openapi();
        let paths = std::mem::take(&mut doc.paths.paths);
        doc.paths.paths = paths
            .into_iter()
            .map(|(path, item)| match path.strip_prefix(DEFAULT_PREFIX) {
                Some(rest) if rest.is_empty() || rest.starts_with('/') => {
                    (format!("{prefix}{rest}"), item)
                }
                _ => (path, item),
            })
            .collect();
        doc
    }
}
