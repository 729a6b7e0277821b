//! Process-memory implementation of the [`NoteStore`] port.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, error};

use crate::domain::ports::{NoteLookup, NoteStore, NoteStoreError};
use crate::domain::{Note, NoteId, NoteInput};

/// Note table plus the identifier counter, guarded together.
#[derive(Debug)]
struct StoreState {
    notes: BTreeMap<NoteId, Note>,
    next_id: Option<NoteId>,
}

impl Default for StoreState {
    fn default() -> Self {
        Self {
            notes: BTreeMap::new(),
            next_id: Some(NoteId::FIRST),
        }
    }
}

/// In-memory note store.
///
/// A single mutex guards both the note table and the counter, so concurrent
/// creates can never observe the same identifier. Notes are keyed by their
/// identifier, which makes iteration order equal to creation order.
/// Contents vanish with the process.
///
/// # Examples
/// ```
/// use notes_backend::domain::NoteInput;
/// use notes_backend::domain::ports::NoteStore;
/// use notes_backend::outbound::persistence::InMemoryNoteStore;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let store = InMemoryNoteStore::new();
/// let note = store.create(NoteInput::new("A", "hello world")).await.expect("create");
/// assert_eq!(note.id().get(), 0);
/// assert_eq!(store.search("HELLO").await.expect("search").len(), 1);
/// # });
/// ```
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    state: Mutex<StoreState>,
}

impl InMemoryNoteStore {
    /// Create an empty store whose first note will receive identifier 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, NoteStoreError> {
        self.state.lock().map_err(|err| {
            error!(error = %err, "note store lock poisoned");
            NoteStoreError::unavailable("lock poisoned")
        })
    }
}

#[async_trait]
impl NoteStore for InMemoryNoteStore {
    async fn list(&self) -> Result<Vec<Note>, NoteStoreError> {
        let state = self.lock()?;
        Ok(state.notes.values().cloned().collect())
    }

    async fn get_by_id(&self, id: NoteId) -> Result<NoteLookup, NoteStoreError> {
        let state = self.lock()?;
        Ok(state.notes.get(&id).cloned().into())
    }

    async fn create(&self, input: NoteInput) -> Result<Note, NoteStoreError> {
        let mut state = self.lock()?;
        let id = state.next_id.ok_or(NoteStoreError::IdentifiersExhausted)?;
        state.next_id = id.next();
        let note = Note::new(id, input);
        state.notes.insert(id, note.clone());
        debug!(note_id = %id, "note created");
        Ok(note)
    }

    async fn update(&self, id: NoteId, input: NoteInput) -> Result<NoteLookup, NoteStoreError> {
        let mut state = self.lock()?;
        let Some(note) = state.notes.get_mut(&id) else {
            return Ok(NoteLookup::NotFound);
        };
        note.apply(input);
        debug!(note_id = %id, "note updated");
        Ok(NoteLookup::Found(note.clone()))
    }

    async fn delete(&self, id: NoteId) -> Result<bool, NoteStoreError> {
        let mut state = self.lock()?;
        let removed = state.notes.remove(&id).is_some();
        debug!(note_id = %id, removed, "note delete requested");
        Ok(removed)
    }

    async fn search(&self, text: &str) -> Result<Vec<Note>, NoteStoreError> {
        let needle = text.to_lowercase();
        let state = self.lock()?;
        Ok(state
            .notes
            .values()
            .filter(|note| note.mentions_lowercase(&needle))
            .cloned()
            .collect())
    }
}
