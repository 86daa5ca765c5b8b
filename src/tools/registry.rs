//! Named tool registry the orchestrator binds against

use serde_json::Value;

use super::catalog;
use super::context::ToolContext;
use super::file_writer::FileWriterTool;
use super::inputs::{
    FantasyNewsInput, FixtureAnalysisInput, FormAnalysisInput, InjuryReportInput,
    OwnershipAnalysisInput, PlayerStatsInput, PlayerTeamVerificationInput, WebSearchInput,
};
use super::SearchTool;
use crate::error::AppError;
use crate::search::SearchClient;

/// One invokable tool. The search variants share the [`SearchTool`] skeleton;
/// the file writer has its own filesystem path.
pub enum Tool {
    WebSearch(SearchTool<WebSearchInput>),
    PlayerStats(SearchTool<PlayerStatsInput>),
    FixtureAnalysis(SearchTool<FixtureAnalysisInput>),
    OwnershipAnalysis(SearchTool<OwnershipAnalysisInput>),
    FormAnalysis(SearchTool<FormAnalysisInput>),
    FantasyNews(SearchTool<FantasyNewsInput>),
    InjuryReport(SearchTool<InjuryReportInput>),
    TeamVerification(SearchTool<PlayerTeamVerificationInput>),
    FileWriter(FileWriterTool),
}

impl Tool {
    pub fn name(&self) -> &'static str {
        match self {
            Tool::WebSearch(t) => t.name(),
            Tool::PlayerStats(t) => t.name(),
            Tool::FixtureAnalysis(t) => t.name(),
            Tool::OwnershipAnalysis(t) => t.name(),
            Tool::FormAnalysis(t) => t.name(),
            Tool::FantasyNews(t) => t.name(),
            Tool::InjuryReport(t) => t.name(),
            Tool::TeamVerification(t) => t.name(),
            Tool::FileWriter(t) => t.name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Tool::WebSearch(t) => t.description(),
            Tool::PlayerStats(t) => t.description(),
            Tool::FixtureAnalysis(t) => t.description(),
            Tool::OwnershipAnalysis(t) => t.description(),
            Tool::FormAnalysis(t) => t.description(),
            Tool::FantasyNews(t) => t.description(),
            Tool::InjuryReport(t) => t.description(),
            Tool::TeamVerification(t) => t.description(),
            Tool::FileWriter(t) => t.description(),
        }
    }

    /// Invokes the tool with raw JSON arguments. Input validation failures
    /// return `Err`; collaborator failures come back as `Ok` error strings.
    pub async fn invoke(
        &self,
        client: &SearchClient,
        ctx: &ToolContext,
        args: Value,
    ) -> Result<String, AppError> {
        match self {
            Tool::WebSearch(t) => t.run(client, ctx, args).await,
            Tool::PlayerStats(t) => t.run(client, ctx, args).await,
            Tool::FixtureAnalysis(t) => t.run(client, ctx, args).await,
            Tool::OwnershipAnalysis(t) => t.run(client, ctx, args).await,
            Tool::FormAnalysis(t) => t.run(client, ctx, args).await,
            Tool::FantasyNews(t) => t.run(client, ctx, args).await,
            Tool::InjuryReport(t) => t.run(client, ctx, args).await,
            Tool::TeamVerification(t) => t.run(client, ctx, args).await,
            Tool::FileWriter(t) => t.run(args).await,
        }
    }
}

/// The full tool set declared to the orchestrator.
pub struct ToolRegistry {
    tools: Vec<Tool>,
}

impl ToolRegistry {
    /// Builds the standard registry: eight search tools plus the file writer.
    pub fn standard() -> Self {
        Self {
            tools: vec![
                Tool::WebSearch(catalog::web_search()),
                Tool::PlayerStats(catalog::player_stats()),
                Tool::FixtureAnalysis(catalog::fixture_analysis()),
                Tool::OwnershipAnalysis(catalog::ownership_analysis()),
                Tool::FormAnalysis(catalog::form_analysis()),
                Tool::FantasyNews(catalog::fantasy_news()),
                Tool::InjuryReport(catalog::injury_report()),
                Tool::TeamVerification(catalog::team_verification()),
                Tool::FileWriter(FileWriterTool),
            ],
        }
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.name() == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.tools.iter().map(Tool::name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tool> {
        self.tools.iter()
    }

    /// Invokes a tool by name. Unknown names are a hard error so the caller
    /// can distinguish a misconfigured binding from a failed lookup.
    pub async fn invoke(
        &self,
        name: &str,
        client: &SearchClient,
        ctx: &ToolContext,
        args: Value,
    ) -> Result<String, AppError> {
        let tool = self
            .get(name)
            .ok_or_else(|| AppError::UnknownTool(name.to_string()))?;
        tool.invoke(client, ctx, args).await
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_has_all_tools() {
        let registry = ToolRegistry::standard();
        let names = registry.names();
        assert_eq!(names.len(), 9);
        for expected in [
            "web_search",
            "player_stats",
            "fixture_analysis",
            "ownership_analysis",
            "form_analysis",
            "fantasy_news",
            "injury_report",
            "team_verification",
            "file_writer",
        ] {
            assert!(names.contains(&expected), "missing tool: {expected}");
        }
    }

    #[test]
    fn test_get_unknown_tool_is_none() {
        let registry = ToolRegistry::standard();
        assert!(registry.get("nonexistent").is_none());
    }

    #[tokio::test]
    async fn test_invoke_unknown_tool_fails() {
        let registry = ToolRegistry::standard();
        let config = crate::config::Config {
            search_api_key: "key".to_string(),
            search_endpoint: "https://localhost".to_string(),
            log_file_path: None,
            http_timeout_seconds: 1,
        };
        let client = SearchClient::new(&config).unwrap();
        let ctx = ToolContext::for_date(chrono::NaiveDate::from_ymd_opt(2025, 10, 15).unwrap());

        let result = registry
            .invoke("nonexistent", &client, &ctx, serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(AppError::UnknownTool(_))));
    }
}
