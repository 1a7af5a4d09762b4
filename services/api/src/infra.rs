use chrono::{DateTime, NaiveDate, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use studio_desk::workflows::trends::{
    PeriodKey, Platform, RepositoryError, TrendSample, TrendSampleSource, TrendSummary,
    TrendSummaryReader, TrendSummarySink,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local stand-in for the hosted sample and summary tables.
#[derive(Default, Clone)]
pub(crate) struct InMemoryTrendStore {
    samples: Arc<Mutex<Vec<TrendSample>>>,
    summaries: Arc<Mutex<Vec<TrendSummary>>>,
}

impl InMemoryTrendStore {
    pub(crate) fn load_samples(&self, samples: impl IntoIterator<Item = TrendSample>) {
        let mut guard = self.samples.lock().expect("sample mutex poisoned");
        guard.extend(samples);
    }

    pub(crate) fn sample_count(&self) -> usize {
        self.samples.lock().expect("sample mutex poisoned").len()
    }
}

impl TrendSampleSource for InMemoryTrendStore {
    fn samples_for(
        &self,
        platform: Platform,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<TrendSample>, RepositoryError> {
        let guard = self.samples.lock().expect("sample mutex poisoned");
        Ok(guard
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

impl TrendSummarySink for InMemoryTrendStore {
    fn append(&self, summary: TrendSummary) -> Result<(), RepositoryError> {
        let mut guard = self.summaries.lock().expect("summary mutex poisoned");
        guard.push(summary);
        Ok(())
    }
}

impl TrendSummaryReader for InMemoryTrendStore {
    fn summaries(&self, period: Option<PeriodKey>) -> Result<Vec<TrendSummary>, RepositoryError> {
        let guard = self.summaries.lock().expect("summary mutex poisoned");
        Ok(guard
            .iter()
            .filter(|summary| period.map_or(true, |period| summary.period == period))
            .cloned()
            .collect())
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn parse_platform(raw: &str) -> Result<Platform, String> {
    raw.parse::<Platform>().map_err(|err| err.to_string())
}
