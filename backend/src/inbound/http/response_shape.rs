//! Response shaping for note reads.
//!
//! A request carrying the configured marker header gets full JSON note
//! objects. Any other request gets a plain-text preview of one note's
//! content, cut to the configured number of characters. Only the header's
//! presence matters; its value is ignored.

use actix_web::http::header::{ContentType, HeaderName};
use actix_web::{HttpRequest, HttpResponse};

use crate::domain::Note;
use crate::inbound::http::notes::NoteResponse;

/// Marker header name and preview length, injected from configuration.
///
/// # Examples
/// ```
/// use actix_web::http::header::HeaderName;
/// use actix_web::test::TestRequest;
/// use notes_backend::inbound::http::response_shape::ResponseShaping;
///
/// let shaping = ResponseShaping::new(HeaderName::from_static("x-full-note"), 10);
/// let req = TestRequest::default()
///     .insert_header(("X-Full-Note", ""))
///     .to_http_request();
/// assert!(shaping.wants_full_notes(&req));
/// ```
#[derive(Debug, Clone)]
pub struct ResponseShaping {
    marker_header: HeaderName,
    preview_length: usize,
}

impl ResponseShaping {
    /// Build shaping rules from a header name and maximum preview length.
    #[must_use]
    pub fn new(marker_header: HeaderName, preview_length: usize) -> Self {
        Self {
            marker_header,
            preview_length,
        }
    }

    /// Name of the header that selects full note objects.
    #[must_use]
    pub fn marker_header(&self) -> &HeaderName {
        &self.marker_header
    }

    /// Maximum number of content characters in a preview.
    #[must_use]
    pub fn preview_length(&self) -> usize {
        self.preview_length
    }

    /// Whether `req` asks for full note objects.
    #[must_use]
    pub fn wants_full_notes(&self, req: &HttpRequest) -> bool {
        req.headers().contains_key(&self.marker_header)
    }

    /// Shape a list or search result.
    ///
    /// An empty result yields `204 No Content`. Otherwise the marker header
    /// selects every note as JSON; without it only the first note's preview
    /// is returned and the remaining notes are dropped.
    #[must_use]
    pub fn notes_response(&self, req: &HttpRequest, notes: Vec<Note>) -> HttpResponse {
        let Some(first) = notes.first() else {
            return HttpResponse::NoContent().finish();
        };
        if !self.wants_full_notes(req) {
            return self.preview_response(first);
        }
        let body: Vec<NoteResponse> = notes.into_iter().map(NoteResponse::from).collect();
        HttpResponse::Ok().json(body)
    }

    /// Shape a single note read.
    #[must_use]
    pub fn note_response(&self, req: &HttpRequest, note: Note) -> HttpResponse {
        if self.wants_full_notes(req) {
            HttpResponse::Ok().json(NoteResponse::from(note))
        } else {
            self.preview_response(&note)
        }
    }

    fn preview_response(&self, note: &Note) -> HttpResponse {
        HttpResponse::Ok()
            .content_type(ContentType::plaintext())
            .body(note.preview(self.preview_length).to_owned())
    }
}
