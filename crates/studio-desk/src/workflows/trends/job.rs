use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{info, warn};

use super::aggregator::top_tags_in_window;
use super::domain::{PeriodKey, Platform, TrendSummary};
use super::period::previous_month;
use super::repository::{RepositoryError, TrendSampleSource, TrendSummarySink};
use super::TrendError;

/// Scheduled rollup composing a sample source and a summary sink.
pub struct TrendAggregationJob<S, W> {
    source: Arc<S>,
    sink: Arc<W>,
    platforms: Vec<Platform>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    Fetch,
    Append,
}

/// A platform whose run did not complete cleanly. Other platforms are unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformFailure {
    pub platform: Platform,
    pub stage: FailureStage,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendJobReport {
    pub period: PeriodKey,
    pub summaries: Vec<TrendSummary>,
    pub failures: Vec<PlatformFailure>,
}

impl TrendJobReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

impl<S, W> TrendAggregationJob<S, W>
where
    S: TrendSampleSource + 'static,
    W: TrendSummarySink + 'static,
{
    pub fn new(source: Arc<S>, sink: Arc<W>, platforms: Vec<Platform>) -> Self {
        Self {
            source,
            sink,
            platforms,
        }
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn sink(&self) -> &Arc<W> {
        &self.sink
    }

    /// Aggregates the calendar month before `today`.
    pub fn run_previous_month(&self, today: NaiveDate) -> Result<TrendJobReport, TrendError> {
        self.run_for(previous_month(today))
    }

    /// Aggregates `period` for every configured platform, one at a time.
    pub fn run_for(&self, period: PeriodKey) -> Result<TrendJobReport, TrendError> {
        let (start, end) = period.window()?;
        info!(%period, platforms = self.platforms.len(), "trend aggregation started");

        let mut summaries = Vec::with_capacity(self.platforms.len());
        let mut failures = Vec::new();

        for &platform in &self.platforms {
            let top_tags = match self.source.samples_for(platform, start, end) {
                Ok(samples) => top_tags_in_window(&samples, platform, (start, end)),
                Err(err) => {
                    warn!(%platform, %period, error = %err, "failed to load trend samples");
                    failures.push(failure(platform, FailureStage::Fetch, &err));
                    Vec::new()
                }
            };

            let summary = TrendSummary {
                platform,
                period,
                top_tags,
            };

            if let Err(err) = self.sink.append(summary.clone()) {
                warn!(%platform, %period, error = %err, "failed to store trend summary");
                failures.push(failure(platform, FailureStage::Append, &err));
            }

            summaries.push(summary);
        }

        info!(
            %period,
            summaries = summaries.len(),
            failures = failures.len(),
            "trend aggregation finished"
        );

        Ok(TrendJobReport {
            period,
            summaries,
            failures,
        })
    }
}

fn failure(platform: Platform, stage: FailureStage, err: &RepositoryError) -> PlatformFailure {
    PlatformFailure {
        platform,
        stage,
        error: err.to_string(),
    }
}
