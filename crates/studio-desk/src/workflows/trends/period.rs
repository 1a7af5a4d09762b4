use super::domain::PeriodKey;
use super::TrendError;
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc, Weekday};

/// Half-open `[start, end)` UTC window.
pub type Window = (DateTime<Utc>, DateTime<Utc>);

fn midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Window covering a calendar month, ending at the first instant of the next month.
pub fn month_window(year: i32, month: u32) -> Result<Window, TrendError> {
    let start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(TrendError::InvalidPeriod(PeriodKey::Month { year, month }))?;
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let end = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .ok_or(TrendError::InvalidPeriod(PeriodKey::Month { year, month }))?;

    Ok((midnight(start), midnight(end)))
}

/// Window covering an ISO-8601 week (Monday to Monday).
pub fn iso_week_window(year: i32, week: u32) -> Result<Window, TrendError> {
    let start = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)
        .ok_or(TrendError::InvalidPeriod(PeriodKey::Week { year, week }))?;
    Ok((midnight(start), midnight(start + Duration::days(7))))
}

pub fn day_window(date: NaiveDate) -> Window {
    (midnight(date), midnight(date + Duration::days(1)))
}

/// The calendar month before `today`; January rolls back to December of the prior year.
pub fn previous_month(today: NaiveDate) -> PeriodKey {
    let (year, month) = if today.month() == 1 {
        (today.year() - 1, 12)
    } else {
        (today.year(), today.month() - 1)
    };
    PeriodKey::Month { year, month }
}

/// The ISO week before the one containing `today`.
pub fn previous_iso_week(today: NaiveDate) -> PeriodKey {
    let week = (today - Duration::days(7)).iso_week();
    PeriodKey::Week {
        year: week.year(),
        week: week.week(),
    }
}

impl PeriodKey {
    pub fn window(&self) -> Result<Window, TrendError> {
        match *self {
            PeriodKey::Month { year, month } => month_window(year, month),
            PeriodKey::Week { year, week } => iso_week_window(year, week),
            PeriodKey::Day { date } => Ok(day_window(date)),
        }
    }
}
