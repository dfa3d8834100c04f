#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use inclusa_core::models::submission::Submission;
use inclusa_server::config::ServerConfig;
use inclusa_server::sink::{SinkError, SubmissionSink};
use inclusa_server::state::AppState;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

pub const PARTICIPANTS: u32 = 20;

#[derive(Default)]
pub struct RecordingSink {
    pub records: Mutex<Vec<(Uuid, Submission)>>,
}

impl RecordingSink {
    pub fn count(&self) -> usize {
        self.records.lock().unwrap().len()
    }
}

impl SubmissionSink for RecordingSink {
    fn record(&self, session_id: Uuid, submission: &Submission) -> Result<(), SinkError> {
        self.records
            .lock()
            .unwrap()
            .push((session_id, submission.clone()));
        Ok(())
    }
}

pub struct FailingSink;

impl SubmissionSink for FailingSink {
    fn record(&self, _: Uuid, _: &Submission) -> Result<(), SinkError> {
        Err(SinkError::Unavailable("writer offline".to_string()))
    }
}

pub fn config() -> ServerConfig {
    ServerConfig {
        participants: PARTICIPANTS,
        dataset_seed: Some(7),
        ..ServerConfig::default()
    }
}

pub fn app_with(sink: Arc<dyn SubmissionSink>) -> (Router, AppState) {
    let state = AppState::new(config(), sink).unwrap();
    (inclusa_server::router(state.clone()), state)
}

pub fn app() -> (Router, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::default());
    let (router, _) = app_with(sink.clone());
    (router, sink)
}

pub struct Reply {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl Reply {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).unwrap()
    }

    pub fn text(&self) -> String {
        String::from_utf8(self.body.clone()).unwrap()
    }

    pub fn location(&self) -> &str {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    pub fn header(&self, name: header::HeaderName) -> &str {
        self.headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Reply {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec();
    Reply {
        status,
        headers,
        body,
    }
}

pub async fn get(app: &Router, uri: &str) -> Reply {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn json(app: &Router, method: Method, uri: &str, body: Option<Value>) -> Reply {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    send(app, request).await
}

/// POST a urlencoded form. Keys and values must not need escaping.
pub async fn form(app: &Router, uri: &str, fields: &[(&str, &str)]) -> Reply {
    let body = fields
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Create a session over the JSON API and return its id.
pub async fn create_session(app: &Router) -> String {
    let reply = json(app, Method::POST, "/api/sessions", None).await;
    assert_eq!(reply.status, StatusCode::CREATED);
    reply.json()["session_id"].as_str().unwrap().to_string()
}

/// Valid answers for each of the five answerable steps, in order.
pub fn answers() -> Vec<Value> {
    vec![
        serde_json::json!({
            "step": "consent",
            "purpose_understood": true,
            "agree_to_participate": true,
            "understand_data_use": true,
            "age_confirmed": true
        }),
        serde_json::json!({
            "step": "demographics",
            "questionnaire_id": "Q-042",
            "survey_date": "2025-06-15",
            "region": 2,
            "accessibility_needs": [0, 1]
        }),
        serde_json::json!({
            "step": "medical_history",
            "diagnosis_date": "2025-01-10",
            "treatment_experience": [0]
        }),
        serde_json::json!({ "step": "symptoms", "fatigue": 7 }),
        serde_json::json!({ "step": "research", "sample_collection": "Need more information" }),
    ]
}

/// Drive a JSON session through `steps` accepted steps.
pub async fn advance_api(app: &Router, id: &str, steps: usize) {
    for answer in answers().into_iter().take(steps) {
        let reply = json(app, Method::POST, &format!("/api/sessions/{id}/next"), Some(answer)).await;
        assert_eq!(reply.status, StatusCode::OK, "{}", reply.text());
    }
}
