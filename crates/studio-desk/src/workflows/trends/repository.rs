use chrono::{DateTime, Utc};

use super::domain::{PeriodKey, Platform, TrendSample, TrendSummary};

/// Read side of the sample store, filterable by platform and time range.
pub trait TrendSampleSource: Send + Sync {
    /// Samples observed within `[start, end)`, in the order they were stored.
    fn samples_for(
        &self,
        platform: Platform,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TrendSample>, RepositoryError>;
}

/// Append-only sink for summary rows. Re-running a period appends again; no
/// upsert by `(platform, period)` is attempted.
pub trait TrendSummarySink: Send + Sync {
    fn append(&self, summary: TrendSummary) -> Result<(), RepositoryError>;
}

/// Optional read-back of stored summaries for dashboards.
pub trait TrendSummaryReader: Send + Sync {
    fn summaries(&self, period: Option<PeriodKey>) -> Result<Vec<TrendSummary>, RepositoryError>;
}

/// Error enumeration for storage failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository unavailable: {0}")]
    Unavailable(String),
    #[error("write rejected: {0}")]
    Rejected(String),
}
