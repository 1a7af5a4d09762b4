use crate::infra::InMemoryTrendStore;
use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;
use studio_desk::error::AppError;
use studio_desk::workflows::offers::{
    parse_quote_input, quote_breakdown, Complexity, ContentFormats, DeveloperInput,
    InfluencerInput, QuoteBreakdown, QuoteInput, QuoteOptions, SocialMediaManagerInput,
};
use studio_desk::workflows::trends::{
    previous_month, PeriodKey, Platform, TrendAggregationJob, TrendJobReport, TrendSample,
    TrendSampleImporter,
};

#[derive(Args, Debug)]
pub(crate) struct QuoteArgs {
    /// Path to a JSON pricing form (`{"role": "developer", ...}`)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the breakdown as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct TrendAggregateArgs {
    /// CSV export of trend samples (platform,observed_at,tags)
    #[arg(long)]
    pub(crate) samples: PathBuf,
    /// Reference date; the month before it is aggregated (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date, conflicts_with = "year")]
    pub(crate) today: Option<NaiveDate>,
    /// Explicit year to aggregate (requires --month)
    #[arg(long, requires = "month")]
    pub(crate) year: Option<i32>,
    /// Explicit month to aggregate, 1-12 (requires --year)
    #[arg(long, requires = "year", value_parser = clap::value_parser!(u32).range(1..=12))]
    pub(crate) month: Option<u32>,
    /// Restrict the rollup to these platforms (repeatable; defaults to all)
    #[arg(long, value_parser = crate::infra::parse_platform)]
    pub(crate) platform: Vec<Platform>,
    /// Print the report as JSON instead of a text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the reporting date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_quote(args: QuoteArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.input)?;
    let input: QuoteInput = serde_json::from_str(&raw)?;
    let breakdown = quote_breakdown(&parse_quote_input(input)?);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
    } else {
        render_breakdown(&breakdown);
    }

    Ok(())
}

pub(crate) fn run_trend_aggregate(args: TrendAggregateArgs) -> Result<(), AppError> {
    let TrendAggregateArgs {
        samples,
        today,
        year,
        month,
        platform,
        json,
    } = args;

    let period = match (year, month) {
        (Some(year), Some(month)) => PeriodKey::Month { year, month },
        _ => previous_month(today.unwrap_or_else(|| Local::now().date_naive())),
    };
    let platforms = if platform.is_empty() {
        Platform::ordered().to_vec()
    } else {
        platform
    };

    let store = Arc::new(InMemoryTrendStore::default());
    store.load_samples(TrendSampleImporter::from_path(&samples)?);
    let job = TrendAggregationJob::new(store.clone(), store, platforms);
    let report = job.run_for(period)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        render_trend_report(&report);
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args.today.unwrap_or_else(|| Local::now().date_naive());

    println!("Studio desk demo");
    println!("\nSample offers");
    for input in demo_quote_inputs() {
        let breakdown = quote_breakdown(&parse_quote_input(input)?);
        println!();
        render_breakdown(&breakdown);
    }

    let period = previous_month(today);
    let store = Arc::new(InMemoryTrendStore::default());
    store.load_samples(demo_trend_samples(period)?);
    println!(
        "\nTrend rollup for {} ({} samples loaded)",
        period,
        store.sample_count()
    );
    let job = TrendAggregationJob::new(store.clone(), store, Platform::ordered().to_vec());
    let report = job.run_previous_month(today)?;
    render_trend_report(&report);

    Ok(())
}

fn demo_quote_inputs() -> Vec<QuoteInput> {
    vec![
        QuoteInput::Influencer {
            details: InfluencerInput {
                followers: 48_000.0,
                engagement_pct: 4.0,
                formats: ContentFormats {
                    reels: true,
                    story: true,
                    ..ContentFormats::default()
                },
                exclusivity: true,
                license: false,
                cta: true,
            },
            options: QuoteOptions {
                apply_vat: true,
                is_expedited: false,
            },
        },
        QuoteInput::Developer {
            details: DeveloperInput {
                hourly_rate: 140.0,
                estimated_hours: 60.0,
                complexity: Complexity::High,
                tech_stack: "Next.js + Node".to_string(),
                travel_cost: 300.0,
                license_cost: 0.0,
            },
            options: QuoteOptions {
                apply_vat: true,
                is_expedited: true,
            },
        },
        QuoteInput::SocialMediaManager {
            details: SocialMediaManagerInput {
                channels: 2.0,
                posts_per_week: 5.0,
                community_hours: 8.0,
                strategy_fee: 600.0,
            },
            options: QuoteOptions::default(),
        },
    ]
}

/// Deterministic daily samples spread across the given month.
fn demo_trend_samples(period: PeriodKey) -> Result<Vec<TrendSample>, AppError> {
    let (start, end) = period.window()?;
    let rotation: [(Platform, &[&str]); 4] = [
        (Platform::Twitter, &["ai", "elections", "football", "ai"]),
        (Platform::Youtube, &["tutorials", "gaming", "ai"]),
        (Platform::Tiktok, &["dance", "recipes", "dance", "fitness"]),
        (Platform::Instagram, &[]),
    ];

    let mut samples = Vec::new();
    let mut observed_at = start + Duration::hours(9);
    let mut day = 0usize;
    while observed_at < end {
        for (platform, tags) in &rotation {
            let shift = day % tags.len().max(1);
            let mut rotated: Vec<String> = tags.iter().map(|tag| tag.to_string()).collect();
            let rotated_len = rotated.len();
            rotated.rotate_left(shift.min(rotated_len));
            samples.push(TrendSample {
                platform: *platform,
                observed_at,
                tags: rotated,
            });
        }
        observed_at += Duration::days(1);
        day += 1;
    }

    Ok(samples)
}

pub(crate) fn render_breakdown(breakdown: &QuoteBreakdown) {
    println!("{}", breakdown.summary());
    for item in &breakdown.line_items {
        println!("- {:?}: {} -> {:.2}", item.kind, item.label, item.amount);
    }
}

pub(crate) fn render_trend_report(report: &TrendJobReport) {
    println!("Period {}", report.period);
    for summary in &report.summaries {
        if summary.top_tags.is_empty() {
            println!("- {}: no tags observed", summary.platform.label());
        } else {
            println!(
                "- {}: {}",
                summary.platform.label(),
                summary.top_tags.join(", ")
            );
        }
    }

    if report.is_clean() {
        println!("Failures: none");
    } else {
        println!("Failures");
        for failure in &report.failures {
            println!(
                "- {} ({:?}): {}",
                failure.platform.label(),
                failure.stage,
                failure.error
            );
        }
    }
}

