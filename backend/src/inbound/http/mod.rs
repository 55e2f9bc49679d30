//! HTTP inbound adapter exposing the user resource, probes and greeting.

pub mod error;
pub mod health;
pub mod index;
pub mod response;
pub mod state;
pub mod users;
pub mod validation;

pub use error::ApiResult;
