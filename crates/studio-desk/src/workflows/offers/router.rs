use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;
use tracing::debug;

use super::domain::QuoteInput;
use super::engine::quote_breakdown;
use super::validation::parse_quote_input;

/// Router builder exposing the offer pricing endpoint.
pub fn offer_router() -> Router {
    Router::new().route("/api/v1/offers/quote", post(quote_handler))
}

pub(crate) async fn quote_handler(Json(input): Json<QuoteInput>) -> Response {
    match parse_quote_input(input) {
        Ok(input) => {
            let breakdown = quote_breakdown(&input);
            debug!(role = ?breakdown.role, gross = breakdown.result.gross, "offer priced");
            (StatusCode::OK, Json(breakdown)).into_response()
        }
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}
