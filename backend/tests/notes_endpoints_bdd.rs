//! Behavioural tests for the notes REST endpoints.
//!
//! Each step drives the Actix service in-process against one shared
//! [`InMemoryNoteStore`], so state carries across the steps of a scenario.

use std::sync::Arc;

use actix_web::http::header::{self, HeaderName};
use actix_web::test::{self as actix_test, TestRequest};
use actix_web::{App, web};
use notes_backend::Trace;
use notes_backend::domain::NoteInput;
use notes_backend::domain::ports::NoteStore;
use notes_backend::inbound::http::notes::configure_notes;
use notes_backend::inbound::http::response_shape::ResponseShaping;
use notes_backend::inbound::http::state::HttpState;
use notes_backend::outbound::persistence::InMemoryNoteStore;
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};
use serde_json::Value;

const MARKER: &str = "x-full-note";
const PREVIEW_LENGTH: usize = 20;

/// Snapshot of the last HTTP exchange.
#[derive(Clone, Debug)]
struct LastResponse {
    status: u16,
    body: String,
}

#[derive(Default, ScenarioState)]
struct NotesWorld {
    store: Slot<Arc<InMemoryNoteStore>>,
    last: Slot<LastResponse>,
}

impl NotesWorld {
    fn store(&self) -> Arc<InMemoryNoteStore> {
        self.store.get().expect("notes service should be started")
    }

    fn last(&self) -> LastResponse {
        self.last.get().expect("a request should have been sent")
    }

    fn perform(&self, request: TestRequest) {
        let store = self.store();
        let last = actix_rt::System::new().block_on(async move {
            let state = web::Data::new(HttpState::new(
                store,
                ResponseShaping::new(HeaderName::from_static(MARKER), PREVIEW_LENGTH),
            ));
            let app = actix_test::init_service(
                App::new()
                    .wrap(Trace)
                    .app_data(state)
                    .configure(configure_notes),
            )
            .await;
            let res = actix_test::call_service(&app, request.to_request()).await;
            let status = res.status().as_u16();
            let body = actix_test::read_body(res).await;
            LastResponse {
                status,
                body: String::from_utf8(body.to_vec()).expect("utf-8 body"),
            }
        });
        self.last.set(last);
    }

    fn body_json(&self) -> Value {
        serde_json::from_str(&self.last().body).expect("JSON body")
    }
}

fn unquote(value: &str) -> &str {
    value.trim_matches('"')
}

fn full(request: TestRequest) -> TestRequest {
    request.insert_header((MARKER, "1"))
}

#[fixture]
fn world() -> NotesWorld {
    NotesWorld::default()
}

#[given("an empty notes service")]
fn an_empty_notes_service(world: &NotesWorld) {
    world.store.set(Arc::new(InMemoryNoteStore::new()));
}

#[given("a note titled {title} with content {content}")]
fn a_note_titled(world: &NotesWorld, title: String, content: String) {
    let store = world.store();
    let input = NoteInput::new(unquote(&title), unquote(&content));
    actix_rt::System::new()
        .block_on(async move { store.create(input).await })
        .expect("seed note");
}

#[when("the client lists notes with the full note header")]
fn the_client_lists_notes_with_header(world: &NotesWorld) {
    world.perform(full(TestRequest::get().uri("/notes")));
}

#[when("the client lists notes without the full note header")]
fn the_client_lists_notes_without_header(world: &NotesWorld) {
    world.perform(TestRequest::get().uri("/notes"));
}

#[when("the client searches for {text} with the full note header")]
fn the_client_searches_for(world: &NotesWorld, text: String) {
    let uri = format!("/notes?searchString={}", unquote(&text));
    world.perform(full(TestRequest::get().uri(&uri)));
}

#[when("the client requests {uri} with the full note header")]
fn the_client_requests(world: &NotesWorld, uri: String) {
    world.perform(full(TestRequest::get().uri(unquote(&uri))));
}

#[when("the client fetches note {id} with the full note header")]
fn the_client_fetches_note(world: &NotesWorld, id: u64) {
    world.perform(full(TestRequest::get().uri(&format!("/notes/{id}"))));
}

#[when("the client creates a note titled {title} with content {content}")]
fn the_client_creates_a_note(world: &NotesWorld, title: String, content: String) {
    world.perform(
        TestRequest::post()
            .uri("/notes")
            .set_json(serde_json::json!({
                "title": unquote(&title),
                "content": unquote(&content),
            })),
    );
}

#[when("the client updates note {id} with title {title} and content {content}")]
fn the_client_updates_note(world: &NotesWorld, id: u64, title: String, content: String) {
    world.perform(
        TestRequest::put()
            .uri(&format!("/notes/{id}"))
            .set_json(serde_json::json!({
                "title": unquote(&title),
                "content": unquote(&content),
            })),
    );
}

#[when("the client deletes note {id}")]
fn the_client_deletes_note(world: &NotesWorld, id: u64) {
    world.perform(TestRequest::delete().uri(&format!("/notes/{id}")));
}

#[then("the response status is {status}")]
fn the_response_status_is(world: &NotesWorld, status: u16) {
    assert_eq!(world.last().status, status);
}

#[then("the response body is {body}")]
fn the_response_body_is(world: &NotesWorld, body: String) {
    assert_eq!(world.last().body, unquote(&body));
}

#[then("the created note id is {id}")]
fn the_created_note_id_is(world: &NotesWorld, id: u64) {
    let last = world.last();
    assert_eq!(last.status, 201, "unexpected body: {}", last.body);
    assert_eq!(world.body_json().get("id").and_then(Value::as_u64), Some(id));
}

#[then("the listed note ids are {ids}")]
fn the_listed_note_ids_are(world: &NotesWorld, ids: String) {
    let expected: Vec<u64> = unquote(&ids)
        .split(',')
        .map(|id| id.trim().parse().expect("numeric id"))
        .collect();
    let actual: Vec<u64> = world
        .body_json()
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|note| note.get("id").and_then(Value::as_u64))
        .collect();
    assert_eq!(actual, expected);
}

#[then("the error message is {message}")]
fn the_error_message_is(world: &NotesWorld, message: String) {
    let body = world.body_json();
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    assert_eq!(
        body.get("message").and_then(Value::as_str),
        Some(unquote(&message))
    );
}

#[then("the validation error code is {code}")]
fn the_validation_error_code_is(world: &NotesWorld, code: String) {
    let body = world.body_json();
    assert_eq!(
        body.get("code").and_then(Value::as_str),
        Some("invalid_request")
    );
    assert_eq!(
        body.pointer("/details/code").and_then(Value::as_str),
        Some(unquote(&code))
    );
}

#[scenario(
    path = "tests/features/notes_endpoints.feature",
    name = "Listing an empty service returns no content"
)]
fn listing_an_empty_service(world: NotesWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/notes_endpoints.feature",
    name = "Created notes receive sequential identifiers"
)]
fn created_notes_receive_sequential_identifiers(world: NotesWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/notes_endpoints.feature",
    name = "Full listing returns notes in creation order"
)]
fn full_listing_returns_notes_in_creation_order(world: NotesWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/notes_endpoints.feature",
    name = "Listing without the header previews the first note"
)]
fn listing_without_the_header_previews_the_first_note(world: NotesWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/notes_endpoints.feature",
    name = "Search ignores case"
)]
fn search_ignores_case(world: NotesWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/notes_endpoints.feature",
    name = "Repeating the search parameter is rejected"
)]
fn repeating_the_search_parameter_is_rejected(world: NotesWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/notes_endpoints.feature",
    name = "Updating a missing note is rejected"
)]
fn updating_a_missing_note_is_rejected(world: NotesWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/notes_endpoints.feature",
    name = "Deleted notes disappear"
)]
fn deleted_notes_disappear(world: NotesWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/notes_endpoints.feature",
    name = "Identifiers are never reused"
)]
fn identifiers_are_never_reused(world: NotesWorld) {
    let _ = world;
}
