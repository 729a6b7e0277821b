//! Note aggregate, its identifier and the create/update payload.
//!
//! Notes are owned by a [`NoteStore`](crate::domain::ports::NoteStore)
//! adapter; callers only ever see clones.

use std::fmt;
use std::str::FromStr;

/// Store-assigned note identifier.
///
/// Identifiers start at zero, grow by one per created note and are never
/// handed out twice, even after the note they named has been deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NoteId(u64);

impl NoteId {
    /// The identifier given to the first note a store creates.
    pub const FIRST: Self = Self(0);

    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The identifier following this one, or `None` once the space is spent.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for NoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl From<NoteId> for u64 {
    fn from(value: NoteId) -> Self {
        value.0
    }
}

/// Title and content supplied by a client for create and update.
///
/// Both fields accept any text, including the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteInput {
    /// Note title.
    pub title: String,
    /// Note body text.
    pub content: String,
}

impl NoteInput {
    /// Build an input from its parts.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

/// A stored note.
///
/// # Examples
/// ```
/// use notes_backend::domain::{Note, NoteId, NoteInput};
///
/// let note = Note::new(NoteId::FIRST, NoteInput::new("Groceries", "Milk and eggs"));
/// assert_eq!(note.preview(4), "Milk");
/// assert!(note.mentions_lowercase("eggs"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    id: NoteId,
    title: String,
    content: String,
}

impl Note {
    /// Materialise a note from an identifier and client input.
    #[must_use]
    pub fn new(id: NoteId, input: NoteInput) -> Self {
        let NoteInput { title, content } = input;
        Self { id, title, content }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> NoteId {
        self.id
    }

    /// Title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace title and content, keeping the identifier.
    pub fn apply(&mut self, input: NoteInput) {
        self.title = input.title;
        self.content = input.content;
    }

    /// Whether the title or content contains `needle`, ignoring case.
    ///
    /// `needle` must already be lowercase so a search over many notes
    /// lowercases the query once.
    #[must_use]
    pub fn mentions_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.content.to_lowercase().contains(needle)
    }

    /// The first `max_chars` characters of the content, or all of it when
    /// shorter.
    #[must_use]
    pub fn preview(&self, max_chars: usize) -> &str {
        match self.content.char_indices().nth(max_chars) {
            Some((end, _)) => &self.content[..end],
            None => &self.content,
        }
    }

    /// Split into identifier and owned fields.
    #[must_use]
    pub fn into_parts(self) -> (NoteId, String, String) {
        (self.id, self.title, self.content)
    }
}
