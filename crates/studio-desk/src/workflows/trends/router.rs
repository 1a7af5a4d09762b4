use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::domain::PeriodKey;
use super::job::TrendAggregationJob;
use super::period::{month_window, previous_month};
use super::repository::{TrendSampleSource, TrendSummaryReader, TrendSummarySink};
use super::TrendError;

/// Body of a manual aggregation trigger. An explicit `year`/`month` pair wins over
/// `today`; with neither, the month before the server's current date is used.
/// Sending only one of `year` and `month` is refused.
#[derive(Debug, Default, Deserialize)]
pub struct AggregateRequest {
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub month: Option<u32>,
    #[serde(default)]
    pub today: Option<NaiveDate>,
}

impl AggregateRequest {
    pub fn period(&self) -> Result<PeriodKey, TrendError> {
        match (self.year, self.month) {
            (Some(year), Some(month)) => Ok(PeriodKey::Month { year, month }),
            (None, None) => Ok(previous_month(
                self.today.unwrap_or_else(|| Local::now().date_naive()),
            )),
            _ => Err(TrendError::IncompletePeriod),
        }
    }
}

/// Router builder exposing the trend rollup trigger and stored summaries.
pub fn trend_router<S, W>(job: Arc<TrendAggregationJob<S, W>>) -> Router
where
    S: TrendSampleSource + 'static,
    W: TrendSummarySink + TrendSummaryReader + 'static,
{
    Router::new()
        .route("/api/v1/trends/aggregate", post(aggregate_handler::<S, W>))
        .route("/api/v1/trends/summaries", get(summaries_handler::<S, W>))
        .route(
            "/api/v1/trends/summaries/:year/:month",
            get(monthly_summaries_handler::<S, W>),
        )
        .with_state(job)
}

pub(crate) async fn aggregate_handler<S, W>(
    State(job): State<Arc<TrendAggregationJob<S, W>>>,
    Json(request): Json<AggregateRequest>,
) -> Response
where
    S: TrendSampleSource + 'static,
    W: TrendSummarySink + TrendSummaryReader + 'static,
{
    match request.period().and_then(|period| job.run_for(period)) {
        Ok(report) => (StatusCode::OK, Json(report)).into_response(),
        Err(error) => bad_period(error),
    }
}

pub(crate) async fn summaries_handler<S, W>(
    State(job): State<Arc<TrendAggregationJob<S, W>>>,
) -> Response
where
    S: TrendSampleSource + 'static,
    W: TrendSummarySink + TrendSummaryReader + 'static,
{
    list_summaries(job.sink().as_ref(), None)
}

pub(crate) async fn monthly_summaries_handler<S, W>(
    State(job): State<Arc<TrendAggregationJob<S, W>>>,
    Path((year, month)): Path<(i32, u32)>,
) -> Response
where
    S: TrendSampleSource + 'static,
    W: TrendSummarySink + TrendSummaryReader + 'static,
{
    if let Err(error) = month_window(year, month) {
        return bad_period(error);
    }
    list_summaries(job.sink().as_ref(), Some(PeriodKey::Month { year, month }))
}

fn bad_period(error: TrendError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::BAD_REQUEST, Json(payload)).into_response()
}

fn list_summaries<W: TrendSummaryReader>(reader: &W, period: Option<PeriodKey>) -> Response {
    match reader.summaries(period) {
        Ok(summaries) => (StatusCode::OK, Json(summaries)).into_response(),
        Err(error) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::SERVICE_UNAVAILABLE, Json(payload)).into_response()
        }
    }
}
