//! Shared test fixtures for the PokeWealth SDK integration tests.
//!
//! Provides `FakeBackend::start()`, which serves the PokeWealth routes from
//! an in-process axum server on an ephemeral port and records every request
//! it receives, plus JSON/model fixtures used across test files.

#![allow(dead_code)]

use axum::extract::{Multipart, Path, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use pokewealth_sdk::models::{AnalysisResult, CardImage, SavedCard};
use pokewealth_sdk::PokewealthClient;
use serde_json::{json, Value};
use std::sync::{mpsc, Arc, Mutex};

pub const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nfake-card-pixels";

// ---------------------------------------------------------------------------
// Fake backend
// ---------------------------------------------------------------------------

/// How the fake backend should misbehave, if at all.
#[derive(Debug, Clone, Default)]
pub struct Behavior {
    /// Reply to `/analyze-card` with 500 and this detail.
    pub analyze_error: Option<&'static str>,
    /// Reply to `/save-card` with this status and optional JSON detail.
    pub save_error: Option<(u16, Option<&'static str>)>,
    /// Reply to `/cards` with a bare 500.
    pub cards_error: bool,
    /// Reply to `/cards` with 200 and a body that is not JSON.
    pub cards_garbled: bool,
}

/// One request as the fake backend saw it.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: &'static str,
    pub path: String,
    pub fields: Vec<(String, String)>,
    pub files: Vec<RecordedFile>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Clone)]
pub struct RecordedFile {
    pub field: String,
    pub file_name: Option<String>,
    pub bytes: Vec<u8>,
}

impl Recorded {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }
}

struct BackendState {
    behavior: Behavior,
    log: Mutex<Vec<Recorded>>,
}

pub struct FakeBackend {
    pub base_url: String,
    state: Arc<BackendState>,
}

impl FakeBackend {
    /// Serve the happy-path backend.
    pub fn start() -> Self {
        Self::with_behavior(Behavior::default())
    }

    /// Serve a backend that fails where `behavior` says.
    ///
    /// The server runs on its own thread and runtime, so the blocking client
    /// under test can be used from the plain test thread.
    pub fn with_behavior(behavior: Behavior) -> Self {
        let state = Arc::new(BackendState {
            behavior,
            log: Mutex::new(Vec::new()),
        });
        let (tx, rx) = mpsc::channel();
        let served = state.clone();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
                tx.send(listener.local_addr().unwrap()).unwrap();
                axum::serve(listener, router(served)).await.unwrap();
            });
        });
        let addr = rx.recv().unwrap();
        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }

    pub fn client(&self) -> PokewealthClient {
        PokewealthClient::builder()
            .base_url(&self.base_url)
            .build()
            .unwrap()
    }

    /// Every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<Recorded> {
        self.state.log.lock().unwrap().clone()
    }

    /// Requests whose path equals `path`.
    pub fn requests_to(&self, path: &str) -> Vec<Recorded> {
        self.requests()
            .into_iter()
            .filter(|r| r.path == path)
            .collect()
    }
}

fn router(state: Arc<BackendState>) -> Router {
    Router::new()
        .route("/analyze-card", post(analyze_card))
        .route("/save-card", post(save_card))
        .route("/cards", get(list_cards))
        .route("/cards/{id}/image", get(card_image_handler))
        .route("/cards/{id}/price-history", get(price_history))
        .route("/portfolio/analytics", get(portfolio_analytics))
        .with_state(state)
}

fn record(state: &BackendState, entry: Recorded) {
    state.log.lock().unwrap().push(entry);
}

async fn read_multipart(mut multipart: Multipart) -> (Vec<(String, String)>, Vec<RecordedFile>) {
    let mut fields = Vec::new();
    let mut files = Vec::new();
    while let Some(field) = multipart.next_field().await.unwrap() {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(|s| s.to_string());
        let bytes = field.bytes().await.unwrap().to_vec();
        if file_name.is_some() {
            files.push(RecordedFile {
                field: name,
                file_name,
                bytes,
            });
        } else {
            fields.push((name, String::from_utf8(bytes).unwrap()));
        }
    }
    (fields, files)
}

async fn analyze_card(State(state): State<Arc<BackendState>>, multipart: Multipart) -> Response {
    let (fields, files) = read_multipart(multipart).await;
    record(
        &state,
        Recorded {
            method: "POST",
            path: "/analyze-card".into(),
            fields,
            files,
            user_agent: None,
        },
    );
    if let Some(detail) = state.behavior.analyze_error {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "detail": detail })),
        )
            .into_response();
    }
    Json(analysis_json()).into_response()
}

async fn save_card(State(state): State<Arc<BackendState>>, multipart: Multipart) -> Response {
    let (fields, files) = read_multipart(multipart).await;
    let name = fields
        .iter()
        .find(|(k, _)| k == "card_name")
        .map(|(_, v)| v.clone())
        .unwrap_or_default();
    record(
        &state,
        Recorded {
            method: "POST",
            path: "/save-card".into(),
            fields,
            files,
            user_agent: None,
        },
    );
    if let Some((status, detail)) = state.behavior.save_error {
        let status = StatusCode::from_u16(status).unwrap();
        return match detail {
            Some(detail) => (status, Json(json!({ "detail": detail }))).into_response(),
            None => (status, "Internal Server Error").into_response(),
        };
    }
    let mut card = saved_card_json(42, &name, true);
    card["created_at"] = json!("2025-01-15T10:00:00");
    Json(card).into_response()
}

async fn list_cards(State(state): State<Arc<BackendState>>, headers: HeaderMap) -> Response {
    let mut entry = get_request("/cards".into());
    entry.user_agent = headers
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string());
    record(&state, entry);
    if state.behavior.cards_error {
        return (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
    }
    if state.behavior.cards_garbled {
        return ([(header::CONTENT_TYPE, "application/json")], "[{\"id\": 1,").into_response();
    }
    Json(json!([
        saved_card_json(1, "Charizard", true),
        saved_card_json(2, "Pikachu", false),
    ]))
    .into_response()
}

async fn card_image_handler(State(state): State<Arc<BackendState>>, Path(id): Path<i64>) -> Response {
    record(&state, get_request(format!("/cards/{}/image", id)));
    if id != 1 {
        return (StatusCode::NOT_FOUND, Json(json!({ "detail": "Image not found" }))).into_response();
    }
    ([("content-type", "image/png")], PNG_BYTES.to_vec()).into_response()
}

async fn price_history(State(state): State<Arc<BackendState>>, Path(id): Path<i64>) -> Response {
    record(&state, get_request(format!("/cards/{}/price-history", id)));
    Json(json!([
        { "recorded_at": "2025-01-01T09:30:00", "price": 180.0, "price_display": "$180" },
        { "recorded_at": "2025-01-08T09:30:00", "price": 195.5, "price_display": "$195.50" },
        { "recorded_at": "2025-01-15T09:30:00+00:00", "price": 210.0, "price_display": "$210" }
    ]))
    .into_response()
}

async fn portfolio_analytics(State(state): State<Arc<BackendState>>) -> Response {
    record(&state, get_request("/portfolio/analytics".into()));
    Json(portfolio_json()).into_response()
}

fn get_request(path: String) -> Recorded {
    Recorded {
        method: "GET",
        path,
        fields: Vec::new(),
        files: Vec::new(),
        user_agent: None,
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

pub fn card_image() -> CardImage {
    CardImage::new("charizard.png", "image/png", PNG_BYTES.to_vec())
}

pub fn analysis_json() -> Value {
    json!({
        "card_name": "Charizard",
        "estimated_price": "$250 - $300 USD",
        "details": "Base Set, Holo Rare, light play",
        "centering": { "score": 8.5, "description": "Slightly off-center left" },
        "corners": { "score": 9, "description": "Sharp" },
        "edges": { "score": 7.5, "description": "Minor whitening" },
        "surface": { "score": 6, "description": "Light scratches on holo" },
        "overall_grade": 7.75,
        "market_price": 275.5,
        "price_source": "api",
        "tcg_player_id": "",
        "set_name": "Base Set",
        "card_number": "4/102",
        "rarity": "Rare Holo",
        "psa_10_price": 5000.0,
        "psa_9_price": 0,
        "psa_8_price": null
    })
}

pub fn analysis() -> AnalysisResult {
    serde_json::from_value(analysis_json()).unwrap()
}

/// An analysis with only the three guaranteed fields.
pub fn bare_analysis() -> AnalysisResult {
    serde_json::from_value(json!({
        "card_name": "Pikachu",
        "estimated_price": "$5 USD",
        "details": "Common"
    }))
    .unwrap()
}

pub fn saved_card_json(id: i64, name: &str, with_image: bool) -> Value {
    let image_filename = if with_image {
        json!(format!("{}.png", name.to_lowercase()))
    } else {
        Value::Null
    };
    json!({
        "id": id,
        "card_name": name,
        "estimated_price": "$250 - $300 USD",
        "details": "Base Set",
        "image_filename": image_filename,
        "created_at": "2025-01-15T10:00:00",
        "centering_score": 9.0,
        "centering_comment": "Well centered",
        "corners_score": 7.0,
        "corners_description": "Light wear",
        "edges_score": null,
        "edges_description": "Not graded",
        "surface_score": 4.9,
        "surface_description": "Scratched",
        "overall_grade": 6.97,
        "market_price": 275.5,
        "price_source": "api",
        "set_name": "Base Set",
        "card_number": "4/102",
        "rarity": "Rare Holo",
        "psa_10_price": 5000.0,
        "psa_9_price": 1200.0,
        "psa_8_price": null,
        "is_authentic": true,
        "authenticity_confidence": 0.93,
        "authenticity_notes": "Print pattern consistent"
    })
}

pub fn saved_card(id: i64, name: &str, with_image: bool) -> SavedCard {
    serde_json::from_value(saved_card_json(id, name, with_image)).unwrap()
}

pub fn portfolio_json() -> Value {
    json!({
        "total_value": 12345.5,
        "total_cards": 12,
        "price_changes": {
            "1_day": { "value": 12.5, "percentage": 0.1 },
            "1_month": { "value": -40.0, "percentage": -0.32 },
            "3_months": { "value": 310.0, "percentage": 2.6 },
            "1_year": { "value": 1800.25, "percentage": 17.1 }
        }
    })
}
