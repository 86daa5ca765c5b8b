//! Task chain definitions

use serde::{Deserialize, Serialize};

use crate::constants::fantasy::TEAM_REPORT_FILE;

/// One task in the sequential chain. `context` names earlier tasks whose
/// output this task consumes; `output_file` is set only for the final report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskSpec {
    pub name: String,
    pub description: String,
    pub expected_output: String,
    pub agent: String,
    #[serde(default)]
    pub context: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

impl TaskSpec {
    fn new(
        name: &str,
        agent: &str,
        description: &str,
        expected_output: &str,
        context: &[&str],
    ) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            expected_output: expected_output.to_string(),
            agent: agent.to_string(),
            context: context.iter().map(|c| c.to_string()).collect(),
            output_file: None,
        }
    }

    fn with_output_file(mut self, path: &str) -> Self {
        self.output_file = Some(path.to_string());
        self
    }
}

/// The seven sequential tasks, ending in the team report.
pub fn champions_league_tasks() -> Vec<TaskSpec> {
    vec![
        TaskSpec::new(
            "scout_players",
            "player_scout",
            "Scout the {current_season} Champions League for fantasy-relevant \
             players as of {current_date}. Cover every position, verify each \
             player's current club before including them, and pull their recent \
             statistics. Focus on players likely to start in matchweek {matchweek}.",
            "A scouting report listing 20-30 verified players grouped by \
             position, each with current club, recent statistics and a one-line \
             fantasy assessment.",
            &[],
        ),
        TaskSpec::new(
            "analyze_tactics",
            "tactical_analyst",
            "For the scouted players, analyze how their tactical role converts \
             into fantasy points: set-piece duties, attacking involvement, \
             defensive workload and rotation risk. Check injury reports for \
             their clubs as of {current_date}.",
            "A tactical assessment of the scouted players highlighting which \
             roles are most fantasy-productive, with injury and rotation flags \
             per player.",
            &["scout_players"],
        ),
        TaskSpec::new(
            "analyze_fixtures",
            "fixture_expert",
            "Rank the upcoming Champions League fixtures by difficulty as of \
             {current_date} and identify which clubs have the most favourable \
             run for matchweek {matchweek} and beyond.",
            "A fixture-difficulty ranking for every club in the league phase, \
             with the three most favourable and three least favourable \
             schedules called out.",
            &["scout_players"],
        ),
        TaskSpec::new(
            "select_captain",
            "captain_selector",
            "Using the scouting, tactical and fixture analysis, choose the \
             captain for matchweek {matchweek}. Verify the candidate's club and \
             fitness, and name a vice-captain fallback.",
            "A captaincy recommendation with one captain and one vice-captain, \
             each justified by form, fixture and role, plus the key risk to \
             each pick.",
            &["scout_players", "analyze_tactics", "analyze_fixtures"],
        ),
        TaskSpec::new(
            "optimize_budget",
            "budget_optimizer",
            "Within the {budget}M budget, find the cheap enablers and mid-price \
             value picks that make the premium selections affordable. Check the \
             statistics behind every budget option you propose.",
            "A budget plan: suggested price distribution across positions and a \
             list of value picks under 6.0M with the statistics that justify \
             them.",
            &["scout_players", "analyze_tactics"],
        ),
        TaskSpec::new(
            "gather_community_insights",
            "community_analyst",
            "Survey the fantasy community for {month_year}: ownership trends, \
             template picks, rising differentials and the news stories managers \
             are reacting to.",
            "A community report covering the current template, notable \
             ownership swings and 3-5 differential picks with their ownership \
             percentages.",
            &[],
        ),
        TaskSpec::new(
            "build_optimal_team",
            "team_builder",
            "Combine all previous analysis into the final {competition} fantasy \
             squad for matchweek {matchweek}: a full squad inside the {budget}M \
             budget, a starting lineup, captain and vice-captain, and the \
             reasoning behind every selection.",
            "A complete markdown team report: squad table with prices, starting \
             lineup and formation, captain and vice-captain, remaining budget \
             and a short rationale per player.",
            &[
                "scout_players",
                "analyze_tactics",
                "analyze_fixtures",
                "select_captain",
                "optimize_budget",
                "gather_community_insights",
            ],
        )
        .with_output_file(TEAM_REPORT_FILE),
    ]
}
