use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use fantasy_expert::config::Config;
use fantasy_expert::crew::{CrewInputs, CrewSpec, KickoffPlan};
use fantasy_expert::search::SearchClient;
use fantasy_expert::tools::{ToolContext, ToolRegistry};

fn test_config(endpoint: &str) -> Config {
    Config {
        search_api_key: "test-api-key".to_string(),
        search_endpoint: endpoint.to_string(),
        log_file_path: None,
        http_timeout_seconds: 5,
    }
}

fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 15).unwrap()
}

/// Full tool invocation through the registry against a mocked search API.
#[tokio::test]
async fn test_registry_invocation_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/search"))
        .and(header("X-API-KEY", "test-api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organic": [
                {
                    "title": "Haaland stats 2025/26",
                    "link": "https://example.com/haaland",
                    "snippet": "12 goals in 8 games for Manchester City."
                }
            ]
        })))
        .mount(&server)
        .await;

    let config = test_config(&format!("{}/search", server.uri()));
    let client = SearchClient::new(&config).unwrap();
    let registry = ToolRegistry::standard();
    let ctx = ToolContext::for_date(test_date());

    let output = registry
        .invoke(
            "player_stats",
            &client,
            &ctx,
            json!({"player_name": "Haaland", "team_name": "Manchester City"}),
        )
        .await
        .unwrap();

    assert!(output.starts_with("Player statistics search results for Haaland"));
    assert!(output.contains("2025/26"));
    assert!(output.contains("12 goals in 8 games"));
}

/// A collaborator failure is stringified into the tool output, never an Err.
#[tokio::test]
async fn test_search_failure_becomes_error_string() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&server)
        .await;

    let config = test_config(&server.uri());
    let client = SearchClient::new(&config).unwrap();
    let registry = ToolRegistry::standard();
    let ctx = ToolContext::for_date(test_date());

    let output = registry
        .invoke(
            "injury_report",
            &client,
            &ctx,
            json!({"team_name": "Real Madrid"}),
        )
        .await
        .unwrap();

    assert!(output.starts_with("Error"));
    assert!(output.contains("Real Madrid"));
}

/// Missing required input fields fail before any HTTP request is made.
#[tokio::test]
async fn test_invalid_input_fails_without_network() {
    // No mock server: a network attempt would surface as a different error
    let config = test_config("https://localhost:1/search");
    let client = SearchClient::new(&config).unwrap();
    let registry = ToolRegistry::standard();
    let ctx = ToolContext::for_date(test_date());

    let result = registry
        .invoke("player_stats", &client, &ctx, json!({"team_name": "Inter"}))
        .await;

    match result {
        Err(fantasy_expert::AppError::ToolInput { tool, message }) => {
            assert_eq!(tool, "player_stats");
            assert!(message.contains("player_name"));
        }
        other => panic!("expected tool input error, got {other:?}"),
    }
}

/// Unknown tool names are a hard error from the registry.
#[tokio::test]
async fn test_unknown_tool_is_hard_error() {
    let config = test_config("https://localhost:1/search");
    let client = SearchClient::new(&config).unwrap();
    let registry = ToolRegistry::standard();
    let ctx = ToolContext::for_date(test_date());

    let result = registry
        .invoke("transfer_rumors", &client, &ctx, json!({}))
        .await;
    assert!(matches!(
        result,
        Err(fantasy_expert::AppError::UnknownTool(name)) if name == "transfer_rumors"
    ));
}

/// The file writer runs through the registry without touching the search API.
#[tokio::test]
async fn test_file_writer_through_registry() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("reports");

    let config = test_config("https://localhost:1/search");
    let client = SearchClient::new(&config).unwrap();
    let registry = ToolRegistry::standard();
    let ctx = ToolContext::for_date(test_date());

    let output = registry
        .invoke(
            "file_writer",
            &client,
            &ctx,
            json!({
                "filename": "team.md",
                "content": "# Team Report",
                "directory": target.to_str().unwrap()
            }),
        )
        .await
        .unwrap();

    assert!(output.starts_with("Successfully wrote content to"));
    let written = std::fs::read_to_string(target.join("team.md")).unwrap();
    assert_eq!(written, "# Team Report");
}

/// The kickoff plan JSON carries everything the orchestrator needs.
#[test]
fn test_kickoff_plan_json_shape() {
    let plan = KickoffPlan::new(
        CrewSpec::champions_league(),
        CrewInputs::for_date(test_date()),
    );
    let value: serde_json::Value = serde_json::from_str(&plan.to_json().unwrap()).unwrap();

    assert_eq!(value["crew"]["process"], "sequential");
    assert_eq!(value["crew"]["agents"].as_array().unwrap().len(), 7);
    assert_eq!(value["crew"]["tasks"].as_array().unwrap().len(), 7);
    assert_eq!(
        value["crew"]["knowledge_sources"].as_array().unwrap().len(),
        4
    );
    assert_eq!(value["inputs"]["current_season"], "2025/26");
    assert_eq!(value["inputs"]["current_date"], "2025-10-15");
    assert_eq!(value["inputs"]["matchweek"], "4");
    assert_eq!(value["inputs"]["competition"], "UEFA Champions League");

    let tasks = value["crew"]["tasks"].as_array().unwrap();
    let last_task = tasks.last().unwrap();
    assert_eq!(last_task["name"], "build_optimal_team");
    assert_eq!(last_task["output_file"], "champions_league_team.md");

    // round trip back into the typed plan
    let decoded: KickoffPlan = serde_json::from_value(
        serde_json::from_str(&plan.to_json().unwrap()).unwrap(),
    )
    .unwrap();
    assert_eq!(decoded.crew.agents.len(), 7);
}

/// Every tool name an agent binds must resolve in the standard registry.
#[test]
fn test_agent_bindings_match_registry() {
    let crew = CrewSpec::champions_league();
    let registry = ToolRegistry::standard();
    for agent in &crew.agents {
        for tool in &agent.tools {
            assert!(
                registry.get(tool).is_some(),
                "agent '{}' binds unknown tool '{}'",
                agent.name,
                tool
            );
        }
    }
}
