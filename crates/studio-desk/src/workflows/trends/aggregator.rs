use super::domain::{PeriodKey, Platform, TrendSample, TrendSummary};
use super::period::Window;
use super::ranking::{TagCounter, TOP_TAG_LIMIT};
use super::TrendError;

/// Rolls a calendar month of samples into one summary per requested platform.
pub fn aggregate_monthly_trends(
    samples: &[TrendSample],
    platforms: &[Platform],
    year: i32,
    month: u32,
) -> Result<Vec<TrendSummary>, TrendError> {
    aggregate_trends(samples, platforms, PeriodKey::Month { year, month })
}

/// Same rollup for any period key. Platforms without samples still get a row.
pub fn aggregate_trends(
    samples: &[TrendSample],
    platforms: &[Platform],
    period: PeriodKey,
) -> Result<Vec<TrendSummary>, TrendError> {
    let window = period.window()?;

    Ok(platforms
        .iter()
        .map(|&platform| TrendSummary {
            platform,
            period,
            top_tags: top_tags_in_window(samples, platform, window),
        })
        .collect())
}

/// Top tags for a single platform; samples outside the window or for other
/// platforms are skipped. Sample order, then tag order, decides ties.
pub fn top_tags_in_window(
    samples: &[TrendSample],
    platform: Platform,
    (start, end): Window,
) -> Vec<String> {
    let mut counter = TagCounter::new();
    for sample in samples.iter().filter(|sample| {
        sample.platform == platform && sample.observed_at >= start && sample.observed_at < end
    }) {
        counter.extend(sample.tags.iter().map(String::as_str));
    }
    counter.ranked(TOP_TAG_LIMIT)
}
