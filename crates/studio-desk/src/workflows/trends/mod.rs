//! Social trend rollups: raw per-platform tag samples become ranked top-tag
//! summaries per period.

mod aggregator;
pub mod domain;
pub mod import;
pub mod job;
mod period;
mod ranking;
pub mod repository;
pub mod router;

#[cfg(test)]
mod tests;

pub use aggregator::{aggregate_monthly_trends, aggregate_trends, top_tags_in_window};
pub use domain::{PeriodKey, Platform, TrendSample, TrendSummary, UnknownPlatform};
pub use import::{TrendImportError, TrendSampleImporter};
pub use job::{FailureStage, PlatformFailure, TrendAggregationJob, TrendJobReport};
pub use period::{
    day_window, iso_week_window, month_window, previous_iso_week, previous_month, Window,
};
pub use ranking::{rank_top_tags, TagCounter, TOP_TAG_LIMIT};
pub use repository::{RepositoryError, TrendSampleSource, TrendSummaryReader, TrendSummarySink};
pub use router::{trend_router, AggregateRequest};

/// Errors raised while resolving or aggregating a trend period.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrendError {
    #[error("period {0} does not describe a valid calendar window")]
    InvalidPeriod(PeriodKey),
    #[error("an explicit period needs both year and month")]
    IncompletePeriod,
}
