//! Football season and matchweek utility functions

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};

use crate::constants::season::{
    LEAGUE_PHASE_MATCHWEEKS, LEAGUE_PHASE_START_MONTH, MATCHWEEK_INTERVAL_DAYS, SEASON_END_DAY,
    SEASON_END_MONTH, SEASON_START_MONTH,
};

/// Returns the football season label for the current wall-clock date.
/// The season runs from August 1st to June 10th of the following year.
pub fn current_football_season() -> String {
    let now = Utc::now().with_timezone(&Local);
    football_season(now.date_naive())
}

/// Returns the football season label for a specific date in "YYYY/YY" format
/// (e.g. "2025/26"). Accepting the date explicitly keeps the computation
/// deterministic for testing with fixed dates.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use fantasy_expert::season::football_season;
///
/// let date = NaiveDate::from_ymd_opt(2025, 8, 1).unwrap();
/// assert_eq!(football_season(date), "2025/26");
/// ```
pub fn football_season(date: NaiveDate) -> String {
    let (start_year, end_year) = if date.month() >= SEASON_START_MONTH {
        // August to December: the season that just started
        (date.year(), date.year() + 1)
    } else if date.month() <= SEASON_END_MONTH && date.day() <= SEASON_END_DAY {
        // January to June 10th: season still in progress
        (date.year() - 1, date.year())
    } else {
        // June 11th to July 31st: off-season, still labeled as the previous
        // season until August 1st. Mid-season dates past the 10th of their
        // month (e.g. March 25th) also land here because of the day check
        // above; the label they get is identical, so behavior is preserved.
        (date.year() - 1, date.year())
    };

    format!("{start_year}/{:02}", end_year % 100)
}

/// Estimates the Champions League matchweek for the current wall-clock date.
pub fn current_estimated_matchweek() -> u32 {
    let now = Utc::now().with_timezone(&Local);
    estimate_matchweek(now.date_naive())
}

/// Estimates the league-phase matchweek for a specific date.
///
/// The league phase kicks off in September and runs 8 matchweeks at roughly
/// two-week intervals (36-team format). This is a date heuristic, not fixture
/// data: before September the estimate is always matchweek 1, and the result
/// is clamped to the 1..=8 range.
pub fn estimate_matchweek(date: NaiveDate) -> u32 {
    if date.month() < LEAGUE_PHASE_START_MONTH {
        return 1;
    }

    // Safe: September 1st exists in every year
    let phase_start = NaiveDate::from_ymd_opt(date.year(), LEAGUE_PHASE_START_MONTH, 1)
        .expect("valid league phase start date");
    let weeks_since_start = (date - phase_start).num_days() / MATCHWEEK_INTERVAL_DAYS;

    (weeks_since_start + 1).clamp(1, LEAGUE_PHASE_MATCHWEEKS as i64) as u32
}

/// Formats a date the way search queries expect it, e.g. "March 2026".
pub fn month_year(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}

/// Formats a date as an ISO day string, e.g. "2026-03-25".
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Returns today's date in the local timezone. UTC is used internally and
/// converted, matching how the rest of the crate reads the clock.
pub fn today() -> NaiveDate {
    local_now().date_naive()
}

/// Returns the current local timestamp.
pub fn local_now() -> DateTime<Local> {
    Utc::now().with_timezone(&Local)
}
