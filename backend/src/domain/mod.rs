//! Domain primitives, errors and ports.
//!
//! Purpose: define the note aggregate and the store port independently of
//! any transport. Adapters under `inbound` and `outbound` depend on this
//! module, never the other way round.
//!
//! Public surface:
//! - `Note`, `NoteId`, `NoteInput`: the stored entity and its payload.
//! - `Error`, `ErrorCode`: transport-agnostic failure description.
//! - `TraceId`: request correlation identifier.
//! - `ports`: the [`ports::NoteStore`] boundary.

pub mod error;
pub mod note;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::note::{Note, NoteId, NoteInput};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
