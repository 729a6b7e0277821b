//! Domain ports for the hexagonal boundary.

mod note_store;

pub use note_store::{NoteLookup, NoteStore, NoteStoreError};
