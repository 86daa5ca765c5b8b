//! Agent definitions and their tool bindings

use serde::{Deserialize, Serialize};

/// One agent role handed to the orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentSpec {
    pub name: String,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    /// Registry names of the tools this agent may call.
    pub tools: Vec<String>,
}

impl AgentSpec {
    fn new(name: &str, role: &str, goal: &str, backstory: &str, tools: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            role: role.to_string(),
            goal: goal.to_string(),
            backstory: backstory.to_string(),
            tools,
        }
    }
}

fn research_tools() -> Vec<String> {
    [
        "web_search",
        "player_stats",
        "form_analysis",
        "team_verification",
        "file_writer",
    ]
    .map(String::from)
    .to_vec()
}

fn analysis_tools() -> Vec<String> {
    [
        "web_search",
        "fixture_analysis",
        "injury_report",
        "team_verification",
        "file_writer",
    ]
    .map(String::from)
    .to_vec()
}

fn community_tools() -> Vec<String> {
    [
        "web_search",
        "ownership_analysis",
        "fantasy_news",
        "team_verification",
        "file_writer",
    ]
    .map(String::from)
    .to_vec()
}

/// The captain selector gets the union of research and analysis tools.
fn captain_tools() -> Vec<String> {
    let mut tools = research_tools();
    for tool in analysis_tools() {
        if !tools.contains(&tool) {
            tools.push(tool);
        }
    }
    tools
}

/// The seven agents of the Champions League crew, in declaration order.
pub fn champions_league_agents() -> Vec<AgentSpec> {
    vec![
        AgentSpec::new(
            "player_scout",
            "Champions League Player Scout",
            "Identify in-form, fantasy-relevant players across the {current_season} \
             Champions League, verify which club each plays for, and report their \
             recent statistics.",
            "You are a veteran European football scout who has watched every \
             Champions League matchday for a decade. You never recommend a player \
             without first verifying their current club and checking their latest \
             statistics, because fantasy managers get burned by stale transfer \
             information.",
            research_tools(),
        ),
        AgentSpec::new(
            "tactical_analyst",
            "Tactical Analyst",
            "Evaluate how each shortlisted player's tactical role and their team's \
             system translate into fantasy points for matchweek {matchweek}.",
            "You are a tactics writer who breaks down pressing schemes, set-piece \
             duties and expected-goals data. You judge players by their role in \
             the system, not their reputation, and you always check the injury \
             report before trusting a lineup.",
            analysis_tools(),
        ),
        AgentSpec::new(
            "fixture_expert",
            "Fixture Difficulty Expert",
            "Rank upcoming Champions League fixtures by difficulty and flag which \
             teams have the most favourable schedule as of {current_date}.",
            "You live in the fixture list. You know which league-phase opponents \
             travel badly, who rotates in congested weeks, and how home advantage \
             shifts in European nights. Managers rely on your difficulty ratings \
             to time their transfers.",
            analysis_tools(),
        ),
        AgentSpec::new(
            "captain_selector",
            "Captaincy Specialist",
            "Pick the single best captain for matchweek {matchweek}, weighing \
             form, fixture and penalty duties, with a clear vice-captain backup.",
            "You have one job and you take it seriously: the armband. You combine \
             scouting data with fixture analysis, you double-check every candidate \
             still plays where you think they do, and you never captain a player \
             with a doubtful fitness flag.",
            captain_tools(),
        ),
        AgentSpec::new(
            "budget_optimizer",
            "Budget Optimizer",
            "Fit the strongest possible squad inside the {budget}M budget by \
             finding cheap enablers whose statistics justify their price.",
            "You are a value hunter. While others chase premium names you comb \
             the statistics for underpriced starters, because a squad is won in \
             the last 15M of the budget.",
            ["web_search", "player_stats"].map(String::from).to_vec(),
        ),
        AgentSpec::new(
            "community_analyst",
            "Fantasy Community Analyst",
            "Report ownership trends, template picks and differential \
             opportunities being discussed in the fantasy community during \
             {month_year}.",
            "You track what the crowd is doing: ownership percentages, transfer \
             trends, and the debates running through fantasy forums and podcasts. \
             You know when to follow the template and when a differential is \
             worth the risk.",
            community_tools(),
        ),
        AgentSpec::new(
            "team_builder",
            "Fantasy Team Builder",
            "Assemble the final {competition} fantasy squad for matchweek \
             {matchweek} from the crew's research, inside budget and within the \
             game's squad rules.",
            "You are the manager who makes the final call. You take the scout \
             reports, tactical notes, fixture rankings, captaincy pick, budget \
             plan and community read, and you turn them into one coherent, \
             rule-legal squad with clear reasoning for every slot.",
            ["web_search"].map(String::from).to_vec(),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_agents_in_order() {
        let agents = champions_league_agents();
        let names: Vec<&str> = agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "player_scout",
                "tactical_analyst",
                "fixture_expert",
                "captain_selector",
                "budget_optimizer",
                "community_analyst",
                "team_builder",
            ]
        );
    }

    #[test]
    fn test_captain_tools_are_deduplicated_union() {
        let tools = captain_tools();
        let mut deduped = tools.clone();
        deduped.dedup();
        assert_eq!(tools, deduped);
        assert!(tools.contains(&"player_stats".to_string()));
        assert!(tools.contains(&"fixture_analysis".to_string()));
        // shared members appear once
        assert_eq!(tools.iter().filter(|t| *t == "web_search").count(), 1);
        assert_eq!(tools.iter().filter(|t| *t == "file_writer").count(), 1);
    }

    #[test]
    fn test_team_builder_only_searches() {
        let agents = champions_league_agents();
        let builder = agents.iter().find(|a| a.name == "team_builder").unwrap();
        assert_eq!(builder.tools, vec!["web_search".to_string()]);
    }
}
