//! Per-invocation date and season context

use chrono::{Duration, NaiveDate};

use crate::season::{football_season, iso_date, month_year, today};

/// Date/season context computed independently for each tool invocation.
/// Nothing here is shared or cached; the wall clock is read once in
/// [`ToolContext::now`] and every derived value comes from that date, which
/// keeps tool output deterministic under an injected date.
#[derive(Debug, Clone)]
pub struct ToolContext {
    pub date: NaiveDate,
    pub season: String,
}

impl ToolContext {
    /// Context for the current wall-clock date.
    pub fn now() -> Self {
        Self::for_date(today())
    }

    /// Context for a fixed date. Used by tests and by entry points that
    /// accept an explicit as-of date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            season: football_season(date),
            date,
        }
    }

    /// Month-and-year fragment for queries, e.g. "October 2025".
    pub fn month_year(&self) -> String {
        month_year(self.date)
    }

    /// Month name roughly one month back, e.g. "September". Used by the
    /// form-analysis query to widen the recency window.
    pub fn previous_month_name(&self) -> String {
        (self.date - Duration::days(30)).format("%B").to_string()
    }

    /// Current month name, e.g. "October".
    pub fn month_name(&self) -> String {
        self.date.format("%B").to_string()
    }

    /// ISO day string, e.g. "2025-10-15". Used for as-of markers.
    pub fn iso_date(&self) -> String {
        iso_date(self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_context() -> ToolContext {
        ToolContext::for_date(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap())
    }

    #[test]
    fn test_context_derives_season() {
        let ctx = fixed_context();
        assert_eq!(ctx.season, "2025/26");
    }

    #[test]
    fn test_context_date_fragments() {
        let ctx = fixed_context();
        assert_eq!(ctx.month_year(), "October 2025");
        assert_eq!(ctx.month_name(), "October");
        assert_eq!(ctx.previous_month_name(), "September");
        assert_eq!(ctx.iso_date(), "2025-10-15");
    }

    #[test]
    fn test_previous_month_crosses_year_boundary() {
        let ctx = ToolContext::for_date(NaiveDate::from_ymd_opt(2026, 1, 10).unwrap());
        assert_eq!(ctx.previous_month_name(), "December");
    }
}
