//! HTTP surface: routing, request validation, controllers, and the uniform
//! response envelope.
//!
//! Control flow per request: router → request validation → controller →
//! service, with errors translated once by [`error::ApiError`]'s response
//! mapping.

pub mod envelope;
pub mod error;
pub mod handlers;
pub mod requests;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
