//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the notes endpoints together with the request,
//! response and error schemas. The document backs Swagger UI in debug builds
//! and is exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::notes::{NoteRequest, NoteResponse};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the notes REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Notes API",
        description = "In-memory note store with marker-header response shaping."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::notes::list_notes,
        crate::inbound::http::notes::get_note,
        crate::inbound::http::notes::create_note,
        crate::inbound::http::notes::update_note,
        crate::inbound::http::notes::delete_note,
    ),
    components(schemas(NoteRequest, NoteResponse, ErrorSchema, ErrorCodeSchema)),
    tags(
        (name = "notes", description = "Create, read, update, delete and search notes")
    )
)]
pub struct ApiDoc;
