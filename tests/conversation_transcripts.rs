//! Scripted end-to-end transcripts over the HTTP API.
//!
//! Each test starts a conversation, replays a fixed list of user lines
//! through `POST /api/conversation/:id/message`, and checks the replies,
//! the dialogue state and the materialized form.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use tid_forms::adapters::http::{api_router, ConversationAppState, FormsAppState, HttpSettings};
use tid_forms::adapters::{FileSessionStore, InMemoryFormRepository, InMemorySessionStore};
use tid_forms::domain::conversation::{prompts, DialogueEngine, FormLinks};
use tid_forms::ports::{MaterializeError, SessionStore};

// =============================================================================
// Test Infrastructure
// =============================================================================

const BASE_URL: &str = "https://forms.example.com";

struct Harness {
    app: Router,
    forms: Arc<InMemoryFormRepository>,
    session_id: String,
}

impl Harness {
    async fn new() -> Self {
        Self::with(
            Arc::new(InMemorySessionStore::new()),
            InMemoryFormRepository::new(),
        )
        .await
    }

    async fn with(store: Arc<dyn SessionStore>, forms: InMemoryFormRepository) -> Self {
        let forms = Arc::new(forms);
        let engine = Arc::new(DialogueEngine::new(FormLinks::new(BASE_URL)));
        let app = api_router(
            ConversationAppState::new(store, forms.clone(), engine),
            FormsAppState::new(forms.clone()),
            &HttpSettings::default(),
        );

        let response = app
            .clone()
            .oneshot(post_json("/api/conversation/start", json!({})))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let started = body_json(response).await;
        assert_eq!(started["state"], "form_name");
        assert_eq!(started["message"], prompts::WELCOME);

        Self {
            app,
            forms,
            session_id: started["session_id"].as_str().unwrap().to_string(),
        }
    }

    async fn say(&self, text: &str) -> Value {
        let uri = format!("/api/conversation/{}/message", self.session_id);
        let response = self
            .app
            .clone()
            .oneshot(post_json(&uri, json!({ "message": text })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK, "message {:?}", text);
        body_json(response).await
    }

    /// Replays `lines` and returns the states visited, one per line.
    async fn replay(&self, lines: &[&str]) -> Vec<String> {
        let mut states = Vec::new();
        for line in lines {
            let reply = self.say(line).await;
            states.push(reply["state"].as_str().unwrap().to_string());
        }
        states
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn field_types(form: &Value) -> Vec<&str> {
    form["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["type"].as_str().unwrap())
        .collect()
}

// =============================================================================
// Transcripts
// =============================================================================

#[tokio::test]
async fn recognised_fields_go_straight_to_gdpr() {
    let h = Harness::new().await;

    let states = h.replay(&["Contact Us", "Name, Email, Message"]).await;

    assert_eq!(states, vec!["fields", "gdpr"]);
}

#[tokio::test]
async fn full_transcript_materializes_exactly_once() {
    let h = Harness::new().await;
    let states = h
        .replay(&["Contact Us", "Name, Email, Message", "yes", "2"])
        .await;
    assert_eq!(states, vec!["fields", "gdpr", "theme", "confirmation"]);

    let done = h.say("yes").await;

    assert_eq!(done["state"], "completed");
    let form_id = done["form_id"].as_u64().unwrap();
    let message = done["message"].as_str().unwrap();
    let embed = done["embed_code"].as_str().unwrap();
    assert!(message.contains(&format!("**📋 Form ID:** {}", form_id)));
    assert!(embed.contains(&format!("{}/embed/{}", BASE_URL, form_id)));
    assert!(message.contains(embed));
    assert_eq!(h.forms.call_count(), 1);

    let (status, form) = h.get(&format!("/api/forms/{}", form_id)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(form["name"], "Contact Us");
    assert_eq!(form["theme"], "professional");
    assert_eq!(form["gdpr_enabled"], true);
    assert_eq!(
        field_types(&form),
        vec!["text", "email", "textarea", "checkbox"]
    );
    assert_eq!(form["fields"][3]["label"], "Privacy Consent");

    // A completed conversation answers but never creates a second form.
    let again = h.say("yes").await;
    assert_eq!(again["state"], "completed");
    assert_eq!(again["form_id"].as_u64(), Some(form_id));
    assert_eq!(h.forms.call_count(), 1);
    let (_, list) = h.get("/api/forms").await;
    assert_eq!(list["total"], 1);
}

#[tokio::test]
async fn unknown_field_is_clarified_as_dropdown() {
    let h = Harness::new().await;
    h.say("Shoe Shop").await;

    let asked = h.say("Name, Shoe Size").await;
    assert_eq!(asked["state"], "field_type");
    assert!(asked["message"].as_str().unwrap().contains("\"Shoe Size\""));

    let options = h.say("5").await;
    assert_eq!(options["state"], "dropdown_options");

    let gdpr = h.say("S, M, L").await;
    assert_eq!(gdpr["state"], "gdpr");

    let states = h.replay(&["no", "5", "yes"]).await;
    assert_eq!(states, vec!["theme", "confirmation", "completed"]);

    let (_, list) = h.get("/api/forms").await;
    let form = &list["forms"][0];
    assert_eq!(form["gdpr_enabled"], false);
    assert_eq!(field_types(form), vec!["text", "select"]);
    assert_eq!(form["fields"][1]["options"], json!(["S", "M", "L"]));
}

#[tokio::test]
async fn out_of_range_menu_choice_reasks_in_place() {
    let h = Harness::new().await;
    h.replay(&["Survey", "Name, Favourite Colour"]).await;

    for bad in ["0", "7", "seven", "-1"] {
        let reply = h.say(bad).await;
        assert_eq!(reply["state"], "field_type");
        assert_eq!(reply["message"], prompts::FIELD_TYPE_REASK);
    }

    let states = h.replay(&["1", "no"]).await;
    assert_eq!(states, vec!["gdpr", "theme"]);

    let reply = h.say("9").await;
    assert_eq!(reply["state"], "theme");
    assert_eq!(reply["message"], prompts::THEME_REASK);
}

#[tokio::test]
async fn start_over_from_modify_discards_the_draft() {
    let h = Harness::new().await;
    h.replay(&["First Try", "Name, Email", "yes", "1"]).await;

    let modify = h.say("no").await;
    assert_eq!(modify["state"], "modify");

    let restarted = h.say("Please START OVER").await;
    assert_eq!(restarted["state"], "form_name");
    assert_eq!(restarted["message"], prompts::RESTART);

    let states = h.replay(&["Second Try", "Message", "no", "3"]).await;
    assert_eq!(states, vec!["fields", "gdpr", "theme", "confirmation"]);
    h.say("yes").await;

    let (_, list) = h.get("/api/forms").await;
    let form = &list["forms"][0];
    assert_eq!(form["name"], "Second Try");
    assert_eq!(form["theme"], "elegant");
    assert_eq!(field_types(form), vec!["textarea"]);
}

#[tokio::test]
async fn anything_else_in_modify_creates_the_form_as_is() {
    let h = Harness::new().await;
    h.replay(&["Feedback", "Comment", "no", "4", "no"]).await;

    let done = h.say("looks fine actually").await;

    assert_eq!(done["state"], "completed");
    assert!(done["message"]
        .as_str()
        .unwrap()
        .starts_with("I understand you want to make changes."));
    assert_eq!(h.forms.call_count(), 1);
}

#[tokio::test]
async fn materializer_outage_leaves_confirmation_retryable() {
    let forms = InMemoryFormRepository::new()
        .with_failure(MaterializeError::Unavailable("storage offline".to_string()));
    let h = Harness::with(Arc::new(InMemorySessionStore::new()), forms).await;
    h.replay(&["Signup", "Name, Email", "yes", "1"]).await;

    let failed = h.say("yes").await;
    assert_eq!(failed["state"], "confirmation");
    assert_eq!(failed["message"], prompts::MATERIALIZE_FAILED);
    assert!(failed.get("form_id").is_none());

    let done = h.say("yes").await;
    assert_eq!(done["state"], "completed");
    assert_eq!(h.forms.call_count(), 2);
    assert_eq!(h.forms.count().await, 1);
}

#[tokio::test]
async fn file_backed_sessions_survive_a_new_router() {
    let dir = tempfile::tempdir().unwrap();
    let h = Harness::with(
        Arc::new(FileSessionStore::new(dir.path())),
        InMemoryFormRepository::new(),
    )
    .await;
    h.replay(&["Contact Us", "Name, Email"]).await;

    // Fresh router over the same directory picks up where the old one stopped.
    let forms = Arc::new(InMemoryFormRepository::new());
    let app = api_router(
        ConversationAppState::new(
            Arc::new(FileSessionStore::new(dir.path())),
            forms.clone(),
            Arc::new(DialogueEngine::new(FormLinks::new(BASE_URL))),
        ),
        FormsAppState::new(forms),
        &HttpSettings::default(),
    );
    let resumed = Harness {
        app,
        forms: Arc::new(InMemoryFormRepository::new()),
        session_id: h.session_id.clone(),
    };

    let reply = resumed.say("yes").await;
    assert_eq!(reply["state"], "theme");

    let (_, history) = resumed
        .get(&format!("/api/conversation/{}/history", h.session_id))
        .await;
    assert_eq!(history["messages"].as_array().unwrap().len(), 7);
}
