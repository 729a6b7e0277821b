//! Shared HTTP adapter state.
//!
//! Handlers receive this through `actix_web::web::Data`, so they depend only
//! on the store port and the shaping rules and stay testable without a
//! server.

use std::sync::Arc;

use crate::domain::ports::NoteStore;
use crate::inbound::http::response_shape::ResponseShaping;

/// Dependency bundle for the notes handlers.
///
/// Cloning shares the same store; every worker must receive a clone of one
/// state built at startup rather than constructing its own.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use actix_web::http::header::HeaderName;
/// use notes_backend::inbound::http::response_shape::ResponseShaping;
/// use notes_backend::inbound::http::state::HttpState;
/// use notes_backend::outbound::persistence::InMemoryNoteStore;
///
/// let state = HttpState::new(
///     Arc::new(InMemoryNoteStore::new()),
///     ResponseShaping::new(HeaderName::from_static("x-full-note"), 20),
/// );
/// let _shared = state.clone();
/// ```
#[derive(Clone)]
pub struct HttpState {
    /// The process-wide note store.
    pub notes: Arc<dyn NoteStore>,
    /// Marker header and preview length.
    pub shaping: ResponseShaping,
}

impl HttpState {
    /// Bundle a store handle with response shaping rules.
    pub fn new(notes: Arc<dyn NoteStore>, shaping: ResponseShaping) -> Self {
        Self { notes, shaping }
    }
}
