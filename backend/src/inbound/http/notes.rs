//! Notes HTTP handlers.
//!
//! ```text
//! GET    /notes?searchString=
//! GET    /notes/{id}
//! POST   /notes        {"title":"A","content":"hello world"}
//! PUT    /notes/{id}   {"title":"A","content":"hello again"}
//! DELETE /notes/{id}
//! ```
//!
//! Store absence is answered differently per operation: reads respond
//! `204 No Content` while updates respond `400 Bad Request`.

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{NoteLookup, NoteStoreError};
use crate::domain::{Error, Note, NoteInput};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{json_config, parse_note_id, query_config};

/// Query parameters for `GET /notes`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NotesQuery {
    /// Case-insensitive substring matched against titles and contents.
    /// Missing or empty lists every note.
    #[serde(rename = "searchString")]
    pub search_string: Option<String>,
}

/// Request body for creating or updating a note.
///
/// Missing fields are treated as empty text.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteRequest {
    /// Note title.
    #[serde(default)]
    #[schema(example = "Groceries")]
    pub title: String,
    /// Note body text.
    #[serde(default)]
    #[schema(example = "Milk, eggs, flour")]
    pub content: String,
}

impl From<NoteRequest> for NoteInput {
    fn from(value: NoteRequest) -> Self {
        Self::new(value.title, value.content)
    }
}

/// Full note representation returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    /// Store-assigned identifier.
    #[schema(example = 0)]
    pub id: u64,
    /// Note title.
    #[schema(example = "Groceries")]
    pub title: String,
    /// Note body text.
    #[schema(example = "Milk, eggs, flour")]
    pub content: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        let (id, title, content) = note.into_parts();
        Self {
            id: id.get(),
            title,
            content,
        }
    }
}

fn map_store_error(err: NoteStoreError) -> Error {
    error!(error = %err, "note store operation failed");
    Error::internal(err.to_string())
}

/// Register the notes endpoints and their extractor configuration.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use notes_backend::inbound::http::notes::configure_notes;
///
/// let app = App::new().configure(configure_notes);
/// ```
pub fn configure_notes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .app_data(json_config())
        .service(list_notes)
        .service(get_note)
        .service(create_note)
        .service(update_note)
        .service(delete_note);
}

/// List notes, optionally filtered by a search string.
#[utoipa::path(
    get,
    path = "/notes",
    params(NotesQuery),
    description = "Without the marker header only a plain-text preview of the first matching note is returned.",
    responses(
        (status = 200, description = "Matching notes, or a text preview of the first", body = [NoteResponse]),
        (status = 204, description = "No notes match"),
        (status = 400, description = "Malformed query string", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "listNotes"
)]
#[get("/notes")]
pub async fn list_notes(
    req: HttpRequest,
    state: web::Data<HttpState>,
    query: web::Query<NotesQuery>,
) -> ApiResult<HttpResponse> {
    let search = query.into_inner().search_string.unwrap_or_default();
    let notes = if search.is_empty() {
        state.notes.list().await
    } else {
        state.notes.search(&search).await
    }
    .map_err(map_store_error)?;
    debug!(matches = notes.len(), searched = !search.is_empty(), "notes listed");
    Ok(state.shaping.notes_response(&req, notes))
}

/// Fetch a single note.
#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(("id" = u64, Path, description = "Note identifier")),
    description = "Without the marker header only a plain-text preview of the note content is returned.",
    responses(
        (status = 200, description = "The note, or a text preview of it", body = NoteResponse),
        (status = 204, description = "No note has this identifier"),
        (status = 400, description = "Identifier is not a non-negative integer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "getNote"
)]
#[get("/notes/{id}")]
pub async fn get_note(
    req: HttpRequest,
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_note_id(&path)?;
    match state.notes.get_by_id(id).await.map_err(map_store_error)? {
        NoteLookup::Found(note) => Ok(state.shaping.note_response(&req, note)),
        NoteLookup::NotFound => {
            debug!(note_id = %id, "note not found");
            Ok(HttpResponse::NoContent().finish())
        }
    }
}

/// Create a note.
#[utoipa::path(
    post,
    path = "/notes",
    request_body = NoteRequest,
    responses(
        (status = 201, description = "Created note with its assigned identifier", body = NoteResponse),
        (status = 400, description = "Malformed request body", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "createNote"
)]
#[post("/notes")]
pub async fn create_note(
    state: web::Data<HttpState>,
    payload: web::Json<NoteRequest>,
) -> ApiResult<HttpResponse> {
    let note = state
        .notes
        .create(payload.into_inner().into())
        .await
        .map_err(map_store_error)?;
    Ok(HttpResponse::Created().json(NoteResponse::from(note)))
}

/// Replace a note's title and content.
#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(("id" = u64, Path, description = "Note identifier")),
    request_body = NoteRequest,
    responses(
        (status = 200, description = "Updated note", body = NoteResponse),
        (status = 400, description = "No such note, or malformed request", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "updateNote"
)]
#[put("/notes/{id}")]
pub async fn update_note(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<NoteRequest>,
) -> ApiResult<HttpResponse> {
    let id = parse_note_id(&path)?;
    match state
        .notes
        .update(id, payload.into_inner().into())
        .await
        .map_err(map_store_error)?
    {
        NoteLookup::Found(note) => Ok(HttpResponse::Ok().json(NoteResponse::from(note))),
        NoteLookup::NotFound => Err(Error::invalid_request("no such note")
            .with_details(json!({ "id": id.get(), "code": "note_not_found" }))),
    }
}

/// Delete a note.
#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(("id" = u64, Path, description = "Note identifier")),
    responses(
        (status = 200, description = "Whether a note was removed", body = bool),
        (status = 400, description = "Identifier is not a non-negative integer", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["notes"],
    operation_id = "deleteNote"
)]
#[delete("/notes/{id}")]
pub async fn delete_note(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_note_id(&path)?;
    let removed = state.notes.delete(id).await.map_err(map_store_error)?;
    Ok(HttpResponse::Ok().json(removed))
}

#[cfg(test)]
#[path = "notes_tests.rs"]
mod tests;
