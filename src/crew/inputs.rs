//! Interpolation inputs passed to the orchestrator at kickoff
//!
//! Values are strings because the orchestrator substitutes them verbatim
//! into `{placeholder}` slots in agent and task text.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::constants::fantasy::{COMPETITION, DEFAULT_BUDGET};
use crate::season;

/// Placeholder values for one run. Fields that some run modes omit
/// (training and replay only interpolate the minimal set) are `Option`
/// and left out of the JSON when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CrewInputs {
    pub current_year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_season: Option<String>,
    pub budget: String,
    pub matchweek: String,
    pub competition: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month_year: Option<String>,
}

impl CrewInputs {
    /// Full input set for a dated run: season and matchweek derived from the
    /// given date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            current_year: date.year().to_string(),
            current_date: Some(season::iso_date(date)),
            current_season: Some(season::football_season(date)),
            budget: DEFAULT_BUDGET.to_string(),
            matchweek: season::estimate_matchweek(date).to_string(),
            competition: COMPETITION.to_string(),
            month_year: Some(season::month_year(date)),
        }
    }

    /// Inputs for an explicitly chosen matchweek and budget.
    pub fn for_matchweek(date: NaiveDate, matchweek: u32, budget: &str) -> Self {
        Self {
            current_year: date.year().to_string(),
            current_date: None,
            current_season: None,
            budget: budget.to_string(),
            matchweek: matchweek.to_string(),
            competition: COMPETITION.to_string(),
            month_year: None,
        }
    }

    /// Minimal set used by the training and test passthrough modes.
    pub fn minimal(date: NaiveDate) -> Self {
        Self {
            current_year: date.year().to_string(),
            current_date: None,
            current_season: None,
            budget: DEFAULT_BUDGET.to_string(),
            matchweek: "1".to_string(),
            competition: COMPETITION.to_string(),
            month_year: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_for_date_derives_season_and_matchweek() {
        let inputs = CrewInputs::for_date(date(2025, 10, 15));
        assert_eq!(inputs.current_year, "2025");
        assert_eq!(inputs.current_date.as_deref(), Some("2025-10-15"));
        assert_eq!(inputs.current_season.as_deref(), Some("2025/26"));
        assert_eq!(inputs.matchweek, "4");
        assert_eq!(inputs.budget, "100");
        assert_eq!(inputs.competition, "UEFA Champions League");
        assert_eq!(inputs.month_year.as_deref(), Some("October 2025"));
    }

    #[test]
    fn test_for_matchweek_overrides_budget() {
        let inputs = CrewInputs::for_matchweek(date(2025, 10, 15), 6, "95");
        assert_eq!(inputs.matchweek, "6");
        assert_eq!(inputs.budget, "95");
        assert!(inputs.current_season.is_none());
    }

    #[test]
    fn test_minimal_inputs_skip_optional_fields_in_json() {
        let inputs = CrewInputs::minimal(date(2025, 3, 1));
        let json = serde_json::to_string(&inputs).unwrap();
        assert!(!json.contains("current_date"));
        assert!(!json.contains("month_year"));
        assert!(json.contains("\"matchweek\":\"1\""));
    }
}
