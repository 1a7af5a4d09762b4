use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

use super::domain::{Platform, TrendSample, UnknownPlatform};

/// Separator between tags inside the `tags` column.
pub const TAG_SEPARATOR: char = ';';

#[derive(Debug, thiserror::Error)]
pub enum TrendImportError {
    #[error("failed to read trend samples: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid trend sample CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("row {row}: {source}")]
    Platform {
        row: usize,
        #[source]
        source: UnknownPlatform,
    },
    #[error("row {row}: cannot parse observed_at '{value}' as RFC 3339 or YYYY-MM-DD")]
    Timestamp { row: usize, value: String },
}

/// Loads daily tag samples exported from the ingestion job.
///
/// Expected header: `platform,observed_at,tags`, tags separated by `;`.
pub struct TrendSampleImporter;

impl TrendSampleImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TrendSample>, TrendImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TrendSample>, TrendImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut samples = Vec::new();

        for (index, record) in csv_reader.deserialize::<SampleRow>().enumerate() {
            let row = record?;
            // header is line 1
            let line = index + 2;

            let platform = row
                .platform
                .parse::<Platform>()
                .map_err(|source| TrendImportError::Platform { row: line, source })?;
            let observed_at =
                parse_timestamp(&row.observed_at).ok_or_else(|| TrendImportError::Timestamp {
                    row: line,
                    value: row.observed_at.clone(),
                })?;

            samples.push(TrendSample {
                platform,
                observed_at,
                tags: split_tags(&row.tags),
            });
        }

        Ok(samples)
    }
}

#[derive(Debug, Deserialize)]
struct SampleRow {
    platform: String,
    observed_at: String,
    #[serde(default)]
    tags: String,
}

pub(crate) fn split_tags(raw: &str) -> Vec<String> {
    raw.split(TAG_SEPARATOR)
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.with_timezone(&Utc));
    }

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
