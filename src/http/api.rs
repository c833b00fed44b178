//! JSON API consumed by the views.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::http::server::AppState;
use crate::observability::metrics;
use crate::stocks::{Quote, Record};

/// Body of `GET /api/stocks/{ticker}`.
///
/// Unknown tickers still answer 200 with an `error` field.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StockLookup {
    Found(Quote),
    Missing { error: &'static str },
}

pub async fn records(State(state): State<AppState>) -> Json<Vec<Record>> {
    metrics::record_api_request("records", 200);
    Json(state.book.records().to_vec())
}

pub async fn stock(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
) -> (StatusCode, Json<StockLookup>) {
    metrics::record_api_request("stocks", 200);
    match state.book.quote(&ticker) {
        Some(quote) => (StatusCode::OK, Json(StockLookup::Found(quote.clone()))),
        None => {
            tracing::debug!(ticker = %ticker, "Unknown ticker");
            (
                StatusCode::OK,
                Json(StockLookup::Missing {
                    error: "Ticker not found",
                }),
            )
        }
    }
}

pub async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}
