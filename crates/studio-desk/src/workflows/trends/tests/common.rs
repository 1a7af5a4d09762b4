use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::trends::domain::{PeriodKey, Platform, TrendSample, TrendSummary};
use crate::workflows::trends::repository::{
    RepositoryError, TrendSampleSource, TrendSummaryReader, TrendSummarySink,
};
use crate::workflows::trends::TrendAggregationJob;

pub(super) fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

pub(super) fn sample(platform: Platform, observed_at: DateTime<Utc>, tags: &[&str]) -> TrendSample {
    TrendSample {
        platform,
        observed_at,
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
    }
}

/// Two months of samples; February 2025 is the month under test.
pub(super) fn february_samples() -> Vec<TrendSample> {
    vec![
        sample(Platform::Tiktok, at(2025, 1, 31), &["january", "january"]),
        sample(Platform::Tiktok, at(2025, 2, 1), &["dance", "ai", "recipes"]),
        sample(Platform::Twitter, at(2025, 2, 2), &["election", "ai"]),
        sample(Platform::Tiktok, at(2025, 2, 14), &["ai", "valentines", "dance"]),
        sample(Platform::Tiktok, at(2025, 2, 28), &["ai"]),
        sample(Platform::Twitter, at(2025, 2, 20), &["ai", "football"]),
        sample(
            Platform::Tiktok,
            Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
            &["march", "march", "march"],
        ),
    ]
}

pub(super) fn february() -> PeriodKey {
    PeriodKey::Month {
        year: 2025,
        month: 2,
    }
}

#[derive(Default)]
pub(super) struct MemoryStore {
    samples: Vec<TrendSample>,
    summaries: Mutex<Vec<TrendSummary>>,
}

impl MemoryStore {
    pub(super) fn with_samples(samples: Vec<TrendSample>) -> Self {
        Self {
            samples,
            summaries: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn stored(&self) -> Vec<TrendSummary> {
        self.summaries.lock().expect("summary mutex poisoned").clone()
    }
}

impl TrendSampleSource for MemoryStore {
    fn samples_for(
        &self,
        platform: Platform,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TrendSample>, RepositoryError> {
        Ok(self
            .samples
            .iter()
            .filter(|sample| {
                sample.platform == platform
                    && sample.observed_at >= start
                    && sample.observed_at < end
            })
            .cloned()
            .collect())
    }
}

impl TrendSummarySink for MemoryStore {
    fn append(&self, summary: TrendSummary) -> Result<(), RepositoryError> {
        self.summaries
            .lock()
            .expect("summary mutex poisoned")
            .push(summary);
        Ok(())
    }
}

impl TrendSummaryReader for MemoryStore {
    fn summaries(&self, period: Option<PeriodKey>) -> Result<Vec<TrendSummary>, RepositoryError> {
        Ok(self
            .stored()
            .into_iter()
            .filter(|summary| period.map_or(true, |period| summary.period == period))
            .collect())
    }
}

/// Source that fails for selected platforms and delegates otherwise.
pub(super) struct FlakySource {
    pub(super) inner: MemoryStore,
    pub(super) failing: HashSet<Platform>,
}

impl TrendSampleSource for FlakySource {
    fn samples_for(
        &self,
        platform: Platform,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TrendSample>, RepositoryError> {
        if self.failing.contains(&platform) {
            return Err(RepositoryError::Unavailable(format!(
                "{platform} samples offline"
            )));
        }
        self.inner.samples_for(platform, start, end)
    }
}

/// Sink that refuses rows for one platform and records the rest.
#[derive(Default)]
pub(super) struct PickySink {
    pub(super) refused: Option<Platform>,
    pub(super) accepted: Mutex<Vec<TrendSummary>>,
}

impl TrendSummarySink for PickySink {
    fn append(&self, summary: TrendSummary) -> Result<(), RepositoryError> {
        if Some(summary.platform) == self.refused {
            return Err(RepositoryError::Rejected("quota exceeded".to_string()));
        }
        self.accepted
            .lock()
            .expect("sink mutex poisoned")
            .push(summary);
        Ok(())
    }
}

pub(super) fn memory_job(
    samples: Vec<TrendSample>,
) -> (
    TrendAggregationJob<MemoryStore, MemoryStore>,
    Arc<MemoryStore>,
) {
    let store = Arc::new(MemoryStore::with_samples(samples));
    let job = TrendAggregationJob::new(store.clone(), store.clone(), Platform::ordered().to_vec());
    (job, store)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
