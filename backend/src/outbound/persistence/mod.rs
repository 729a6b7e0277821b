//! Persistence adapters implementing the domain store port.
//!
//! Only a process-memory adapter exists; notes do not survive a restart.

mod in_memory_note_store;

pub use in_memory_note_store::InMemoryNoteStore;
