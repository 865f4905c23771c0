use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::domain::Slide;
use super::session::{Deck, DeckAction, DeckSession, DeckSnapshot};
use crate::calculator::{CalculatorInputs, CalculatorView, InputField, InputSpec, ValueBreakdown};

#[derive(Debug, Default, Deserialize)]
pub struct SessionRequest {
    #[serde(default)]
    pub session: DeckSession,
    #[serde(default)]
    pub action: Option<DeckAction>,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session: DeckSession,
    pub snapshot: DeckSnapshot,
}

#[derive(Debug, Serialize)]
pub struct DeckCatalog {
    pub total: usize,
    pub slides: Vec<Slide>,
}

#[derive(Debug, Serialize)]
pub struct FieldEntry {
    pub field: InputField,
    #[serde(flatten)]
    pub spec: InputSpec,
}

#[derive(Debug, Serialize)]
pub struct BreakdownResponse {
    pub inputs: CalculatorInputs,
    pub breakdown: ValueBreakdown,
    pub view: CalculatorView,
}

/// Router builder exposing the deck reducer and the calculator over HTTP.
pub fn deck_router(deck: Arc<Deck>) -> Router {
    Router::new()
        .route("/api/v1/deck", get(catalog_handler))
        .route("/api/v1/deck/session", post(session_handler))
        .route("/api/v1/calculator/fields", get(fields_handler))
        .route("/api/v1/calculator/breakdown", post(breakdown_handler))
        .with_state(deck)
}

pub(crate) async fn catalog_handler(State(deck): State<Arc<Deck>>) -> Json<DeckCatalog> {
    Json(DeckCatalog {
        total: deck.len(),
        slides: deck.slides().to_vec(),
    })
}

pub(crate) async fn session_handler(
    State(deck): State<Arc<Deck>>,
    Json(request): Json<SessionRequest>,
) -> Response {
    let SessionRequest { session, action } = request;

    let next = match action {
        Some(action) => deck.apply(session, &action),
        None => Ok(session),
    };

    match next.and_then(|session| deck.snapshot(&session).map(|snapshot| (session, snapshot))) {
        Ok((session, snapshot)) => {
            info!(slide = snapshot.slide.id, index = snapshot.index, "deck session advanced");
            (StatusCode::OK, Json(SessionResponse { session, snapshot })).into_response()
        }
        Err(err) => {
            warn!(error = %err, "rejected deck session request");
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn fields_handler() -> Json<Vec<FieldEntry>> {
    Json(
        InputField::ordered()
            .into_iter()
            .map(|field| FieldEntry {
                field,
                spec: field.spec(),
            })
            .collect(),
    )
}

pub(crate) async fn breakdown_handler(
    State(deck): State<Arc<Deck>>,
    Json(inputs): Json<CalculatorInputs>,
) -> Json<BreakdownResponse> {
    let breakdown = deck.breakdown(&inputs);
    let view = CalculatorView::build(&inputs, deck.policy(), &breakdown);
    info!(
        total_value = breakdown.total_value,
        out_of_range = inputs.out_of_range().len(),
        "calculator breakdown computed"
    );
    Json(BreakdownResponse {
        inputs,
        breakdown,
        view,
    })
}
