//! The search-tool instances
//!
//! Each entry is a [`ToolDef`] table row: name, description, query template
//! and output prefix. The control flow lives once in [`SearchTool`].

use super::inputs::{
    FantasyNewsInput, FixtureAnalysisInput, FormAnalysisInput, InjuryReportInput,
    OwnershipAnalysisInput, PlayerStatsInput, PlayerTeamVerificationInput, WebSearchInput,
};
use super::{SearchTool, ToolDef};

/// Passes a free-text query straight to the search collaborator. Bound to
/// agents that need open-ended lookups beyond the structured tools.
pub fn web_search() -> SearchTool<WebSearchInput> {
    SearchTool::new(ToolDef {
        name: "web_search",
        description: "Search the web with a free-text query and return the raw results.",
        error_verb: "searching",
        query: |input, _ctx| input.query.clone(),
        prefix: |input, _ctx| format!("Web search results for '{}':", input.query),
    })
}

/// Searches for detailed player statistics: goals, assists, minutes played,
/// recent form and fantasy points, with current-season context.
pub fn player_stats() -> SearchTool<PlayerStatsInput> {
    SearchTool::new(ToolDef {
        name: "player_stats",
        description: "Search the web for detailed player statistics including goals, assists, \
                      minutes played, recent form data, and Champions League fantasy points \
                      using current date context.",
        error_verb: "searching",
        query: |input, ctx| {
            format!(
                "{} current team {} season Champions League Fantasy stats goals assists form \
                 gameweek points recent matches {} transfer news",
                input.player_name,
                ctx.season,
                ctx.month_year()
            )
        },
        prefix: |input, ctx| {
            format!(
                "Player statistics search results for {} ({}) - {} season:",
                input.player_name, input.team_name, ctx.season
            )
        },
    })
}

/// Searches for upcoming fixtures, difficulty ratings and team form.
pub fn fixture_analysis() -> SearchTool<FixtureAnalysisInput> {
    SearchTool::new(ToolDef {
        name: "fixture_analysis",
        description: "Search the web for upcoming Champions League fixtures, difficulty \
                      ratings, and team form analysis using current date context.",
        error_verb: "searching",
        query: |input, ctx| {
            format!(
                "{} current squad {} season Champions League Fantasy upcoming fixtures gameweek \
                 next {} matches {} difficulty schedule transfer news",
                input.team_name,
                ctx.season,
                input.num_fixtures,
                ctx.month_year()
            )
        },
        prefix: |input, ctx| {
            format!(
                "Fixture analysis for {} ({} season):",
                input.team_name, ctx.season
            )
        },
    })
}

/// Searches for current ownership percentages, popular picks and
/// differential opportunities.
pub fn ownership_analysis() -> SearchTool<OwnershipAnalysisInput> {
    SearchTool::new(ToolDef {
        name: "ownership_analysis",
        description: "Search the web for current Champions League fantasy ownership \
                      percentages, popular picks, and differential opportunities using \
                      current date context.",
        error_verb: "searching",
        query: |input, ctx| {
            format!(
                "{} Champions League Fantasy ownership percentage popular picks differential \
                 gameweek {} {}",
                input.player_name,
                ctx.season,
                ctx.month_year()
            )
        },
        prefix: |input, ctx| {
            format!(
                "Ownership analysis for {} ({} season):",
                input.player_name, ctx.season
            )
        },
    })
}

/// Searches for a player's recent form over the last N games.
pub fn form_analysis() -> SearchTool<FormAnalysisInput> {
    SearchTool::new(ToolDef {
        name: "form_analysis",
        description: "Search the web for a player's recent form including goals, assists, \
                      minutes played, and fantasy points using current date context for \
                      relevancy.",
        error_verb: "searching",
        query: |input, ctx| {
            format!(
                "{} recent form last {} games Champions League Fantasy {} goals assists \
                 gameweek points {} {}",
                input.player_name,
                input.games_back,
                ctx.season,
                ctx.previous_month_name(),
                ctx.month_name()
            )
        },
        prefix: |input, ctx| {
            format!(
                "Form analysis for {} (last {} games, {} season):",
                input.player_name, input.games_back, ctx.season
            )
        },
    })
}

/// Searches for the latest fantasy football news, expert tips and
/// community insights on a topic.
pub fn fantasy_news() -> SearchTool<FantasyNewsInput> {
    SearchTool::new(ToolDef {
        name: "fantasy_news",
        description: "Search for the latest Champions League fantasy football news, expert \
                      tips, injury updates, and community insights using current date context.",
        error_verb: "searching",
        query: |input, ctx| {
            format!(
                "Champions League Fantasy {} {} latest news tips experts reddit twitter \
                 gameweek this week {}",
                input.topic,
                ctx.season,
                ctx.month_year()
            )
        },
        prefix: |input, ctx| {
            format!(
                "Latest fantasy football news about {} ({} season):",
                input.topic, ctx.season
            )
        },
    })
}

/// Searches for the latest injury reports, team news and player availability.
pub fn injury_report() -> SearchTool<InjuryReportInput> {
    SearchTool::new(ToolDef {
        name: "injury_report",
        description: "Search for the latest injury reports, team news, and player \
                      availability for Champions League matches using current date context.",
        error_verb: "searching",
        query: |input, ctx| {
            format!(
                "{} injury report team news Champions League Fantasy {} latest today {} \
                 doubtful suspended available gameweek",
                input.team_name,
                ctx.season,
                ctx.month_year()
            )
        },
        prefix: |input, ctx| {
            format!(
                "Latest injury report for {} ({} season, as of {}):",
                input.team_name,
                ctx.season,
                ctx.iso_date()
            )
        },
    })
}

/// Verifies a player's current team, playing status and Champions League
/// eligibility, so recommendations are not based on outdated transfers.
pub fn team_verification() -> SearchTool<PlayerTeamVerificationInput> {
    SearchTool::new(ToolDef {
        name: "team_verification",
        description: "Verify a player's current team, playing status, and Champions League \
                      eligibility for the current season. Ensures all player recommendations \
                      are based on current team information and not outdated data.",
        error_verb: "verifying",
        query: |input, ctx| {
            format!(
                "{} current team {} season Champions League transfer news today {} playing \
                 status starting XI",
                input.player_name,
                ctx.season,
                ctx.month_year()
            )
        },
        prefix: |input, ctx| {
            format!(
                "Current team verification for {} ({} season, as of {}):",
                input.player_name,
                ctx.season,
                ctx.iso_date()
            )
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolContext;
    use chrono::NaiveDate;

    fn ctx() -> ToolContext {
        ToolContext::for_date(NaiveDate::from_ymd_opt(2025, 10, 15).unwrap())
    }

    #[test]
    fn test_player_stats_query_carries_context() {
        let tool = player_stats();
        let input = tool
            .parse_input(serde_json::json!({
                "player_name": "Kylian Mbappe",
                "team_name": "Real Madrid"
            }))
            .unwrap();

        let query = tool.build_query(&input, &ctx());
        assert!(query.contains("Kylian Mbappe"));
        assert!(query.contains("2025/26"));
        assert!(query.contains("October 2025"));
    }

    #[test]
    fn test_fixture_query_includes_fixture_count() {
        let tool = fixture_analysis();
        let input = tool
            .parse_input(serde_json::json!({ "team_name": "Arsenal", "num_fixtures": 4 }))
            .unwrap();

        let query = tool.build_query(&input, &ctx());
        assert!(query.contains("Arsenal"));
        assert!(query.contains("next 4 matches"));
    }

    #[test]
    fn test_form_query_spans_two_months() {
        let tool = form_analysis();
        let input = tool
            .parse_input(serde_json::json!({ "player_name": "Bukayo Saka" }))
            .unwrap();

        let query = tool.build_query(&input, &ctx());
        assert!(query.contains("last 5 games"));
        assert!(query.contains("September"));
        assert!(query.contains("October"));
    }

    #[test]
    fn test_injury_prefix_carries_as_of_date() {
        let tool = injury_report();
        let input = tool
            .parse_input(serde_json::json!({ "team_name": "Bayern Munich" }))
            .unwrap();

        let prefix = tool.build_prefix(&input, &ctx());
        assert_eq!(
            prefix,
            "Latest injury report for Bayern Munich (2025/26 season, as of 2025-10-15):"
        );
    }

    #[test]
    fn test_tool_names_are_unique() {
        let names = [
            player_stats().name(),
            fixture_analysis().name(),
            ownership_analysis().name(),
            form_analysis().name(),
            fantasy_news().name(),
            injury_report().name(),
            team_verification().name(),
        ];
        let mut deduped = names.to_vec();
        deduped.sort_unstable();
        deduped.dedup();
        assert_eq!(deduped.len(), names.len());
    }
}
