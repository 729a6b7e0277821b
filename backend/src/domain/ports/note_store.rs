//! Port for the note store: the authoritative keeper of notes and of the
//! identifier counter.
//!
//! Absence of a note is a normal outcome and is reported through
//! [`NoteLookup::NotFound`]. [`NoteStoreError`] is reserved for faults in the
//! backing adapter itself.

use async_trait::async_trait;

use crate::domain::{Note, NoteId, NoteInput};

/// Faults raised by note store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteStoreError {
    /// The backing storage cannot be used any more.
    #[error("note store unavailable: {message}")]
    Unavailable {
        /// Adapter-specific description.
        message: String,
    },
    /// Every identifier has been handed out.
    #[error("note identifiers exhausted")]
    IdentifiersExhausted,
}

impl NoteStoreError {
    /// Construct [`NoteStoreError::Unavailable`].
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }
}

/// Outcome of a lookup by identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteLookup {
    /// A note with the requested identifier exists.
    Found(Note),
    /// No note carries the requested identifier.
    NotFound,
}

impl NoteLookup {
    /// Convert into an `Option`, dropping the distinction's name.
    #[must_use]
    pub fn into_option(self) -> Option<Note> {
        match self {
            Self::Found(note) => Some(note),
            Self::NotFound => None,
        }
    }
}

impl From<Option<Note>> for NoteLookup {
    fn from(value: Option<Note>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// Store operations consumed by the HTTP adapter.
///
/// Every method returns clones; no caller ever holds a reference into the
/// store across calls.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// All notes, in creation order.
    async fn list(&self) -> Result<Vec<Note>, NoteStoreError>;

    /// The note with identifier `id`.
    async fn get_by_id(&self, id: NoteId) -> Result<NoteLookup, NoteStoreError>;

    /// Store a new note under the next identifier and return it.
    async fn create(&self, input: NoteInput) -> Result<Note, NoteStoreError>;

    /// Replace title and content of note `id`, keeping its identifier.
    async fn update(&self, id: NoteId, input: NoteInput) -> Result<NoteLookup, NoteStoreError>;

    /// Remove note `id`; `true` when something was removed.
    async fn delete(&self, id: NoteId) -> Result<bool, NoteStoreError>;

    /// Notes whose title or content contains `text`, ignoring case.
    async fn search(&self, text: &str) -> Result<Vec<Note>, NoteStoreError>;
}
