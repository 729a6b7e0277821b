//! In-memory notes service.
//!
//! The crate follows a ports-and-adapters layout:
//!
//! - [`domain`] holds notes, identifiers, errors and the [`NoteStore`] port.
//! - [`outbound::persistence`] provides the process-memory store.
//! - [`inbound::http`] exposes the REST endpoints and response shaping.
//!
//! [`NoteStore`]: domain::ports::NoteStore

pub mod config;
pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
