//! HTTP inbound adapter exposing the notes REST endpoints.

pub mod error;
pub mod notes;
pub mod response_shape;
pub mod schemas;
pub mod state;
mod validation;

pub use error::ApiResult;
