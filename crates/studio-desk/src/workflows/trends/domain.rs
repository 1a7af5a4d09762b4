use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Social platforms sampled by the trend ingestion job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Twitter,
    Youtube,
    Tiktok,
    Instagram,
}

impl Platform {
    pub const fn ordered() -> [Self; 4] {
        [Self::Twitter, Self::Youtube, Self::Tiktok, Self::Instagram]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Youtube => "YouTube",
            Self::Tiktok => "TikTok",
            Self::Instagram => "Instagram",
        }
    }

    pub const fn key(self) -> &'static str {
        match self {
            Self::Twitter => "twitter",
            Self::Youtube => "youtube",
            Self::Tiktok => "tiktok",
            Self::Instagram => "instagram",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown platform '{0}'")]
pub struct UnknownPlatform(pub String);

impl FromStr for Platform {
    type Err = UnknownPlatform;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "twitter" | "x" => Ok(Self::Twitter),
            "youtube" => Ok(Self::Youtube),
            "tiktok" => Ok(Self::Tiktok),
            "instagram" => Ok(Self::Instagram),
            _ => Err(UnknownPlatform(value.to_string())),
        }
    }
}

/// One observation of trending tags on a platform. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSample {
    pub platform: Platform,
    pub observed_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

/// Bucket a summary is reported under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PeriodKey {
    Month { year: i32, month: u32 },
    Week { year: i32, week: u32 },
    Day { date: NaiveDate },
}

impl fmt::Display for PeriodKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodKey::Month { year, month } => write!(f, "{year:04}-{month:02}"),
            PeriodKey::Week { year, week } => write!(f, "{year:04}-W{week:02}"),
            PeriodKey::Day { date } => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

/// Ranked tags for one platform and period. Each aggregation run appends a new row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub platform: Platform,
    pub period: PeriodKey,
    pub top_tags: Vec<String>,
}
