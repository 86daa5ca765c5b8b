//! Input schemas for the search tools
//!
//! Plain serde structs, one per tool. Required fields fail deserialization
//! when absent; numeric fields with sensible defaults use `serde(default)`.

use serde::Deserialize;

use super::ToolInput;

/// Default number of upcoming fixtures to analyze
fn default_num_fixtures() -> u32 {
    3
}

/// Default number of recent games for form analysis
fn default_games_back() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebSearchInput {
    /// Free-text query passed to the search collaborator as-is
    pub query: String,
}

impl ToolInput for WebSearchInput {
    fn subject(&self) -> String {
        format!("query '{}'", self.query)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerStatsInput {
    /// Name of the player to get statistics for
    pub player_name: String,
    /// Team name the player plays for
    pub team_name: String,
}

impl ToolInput for PlayerStatsInput {
    fn subject(&self) -> String {
        format!("{} stats", self.player_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureAnalysisInput {
    /// Team name to analyze fixtures for
    pub team_name: String,
    /// Number of upcoming fixtures to analyze
    #[serde(default = "default_num_fixtures")]
    pub num_fixtures: u32,
}

impl ToolInput for FixtureAnalysisInput {
    fn subject(&self) -> String {
        format!("{} fixtures", self.team_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnershipAnalysisInput {
    /// Player name to check ownership percentage
    pub player_name: String,
}

impl ToolInput for OwnershipAnalysisInput {
    fn subject(&self) -> String {
        format!("{} ownership data", self.player_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FormAnalysisInput {
    /// Player name to analyze recent form
    pub player_name: String,
    /// Number of recent games to analyze
    #[serde(default = "default_games_back")]
    pub games_back: u32,
}

impl ToolInput for FormAnalysisInput {
    fn subject(&self) -> String {
        format!("{} form data", self.player_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FantasyNewsInput {
    /// Specific fantasy football topic to search for
    pub topic: String,
}

impl ToolInput for FantasyNewsInput {
    fn subject(&self) -> String {
        format!("fantasy news about {}", self.topic)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct InjuryReportInput {
    /// Team name to check for injury reports
    pub team_name: String,
}

impl ToolInput for InjuryReportInput {
    fn subject(&self) -> String {
        format!("{} injury report", self.team_name)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerTeamVerificationInput {
    /// Name of the player to verify current team and status
    pub player_name: String,
}

impl ToolInput for PlayerTeamVerificationInput {
    fn subject(&self) -> String {
        format!("{}'s current team", self.player_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_field_missing_fails() {
        let result: Result<PlayerStatsInput, _> =
            serde_json::from_value(serde_json::json!({ "player_name": "Mbappe" }));
        assert!(result.is_err());
    }

    #[test]
    fn test_optional_fields_take_defaults() {
        let fixture: FixtureAnalysisInput =
            serde_json::from_value(serde_json::json!({ "team_name": "Arsenal" })).unwrap();
        assert_eq!(fixture.num_fixtures, 3);

        let form: FormAnalysisInput =
            serde_json::from_value(serde_json::json!({ "player_name": "Saka" })).unwrap();
        assert_eq!(form.games_back, 5);
    }

    #[test]
    fn test_subjects_name_the_entity() {
        let input = PlayerTeamVerificationInput {
            player_name: "Jude Bellingham".to_string(),
        };
        assert_eq!(input.subject(), "Jude Bellingham's current team");

        let input = InjuryReportInput {
            team_name: "Bayern Munich".to_string(),
        };
        assert_eq!(input.subject(), "Bayern Munich injury report");
    }
}
