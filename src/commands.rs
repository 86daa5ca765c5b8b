use chrono::NaiveDate;
use tracing::info;

use crate::cli::{Args, Command};
use crate::config::Config;
use crate::constants::season::LEAGUE_PHASE_MATCHWEEKS;
use crate::crew::{CrewInputs, CrewSpec, KickoffPlan};
use crate::error::AppError;
use crate::search::SearchClient;
use crate::season;
use crate::tools::{ToolContext, ToolRegistry};

/// Resolves the analysis date: an explicit `--date` argument or today.
pub fn resolve_date(args: &Args) -> Result<NaiveDate, AppError> {
    match &args.date {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| {
            AppError::datetime_parse_error(format!("Invalid date '{raw}': {e}"))
        }),
        None => Ok(season::today()),
    }
}

/// Handles the --version command.
pub fn handle_version_command() {
    println!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    );
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--config, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_key) = &args.new_api_key {
        if new_key.is_empty() {
            config.search_api_key = crate::config::user_prompts::prompt_for_api_key().await?;
        } else {
            config.search_api_key = new_key.clone();
        }
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

fn emit_plan(plan: &KickoffPlan, plan_file: Option<&str>) -> Result<(), AppError> {
    let json = plan.to_json()?;
    match plan_file {
        Some(path) => {
            std::fs::write(path, &json)?;
            println!("Kickoff plan written to {path}");
        }
        None => println!("{json}"),
    }
    Ok(())
}

/// Handles the default `run` command: derives the date context, builds the
/// kickoff plan and prints the completion banner.
pub fn handle_run_command(date: NaiveDate, plan_file: Option<&str>) -> Result<(), AppError> {
    let season_label = season::football_season(date);
    let matchweek = season::estimate_matchweek(date);
    info!(
        season = %season_label,
        matchweek,
        date = %season::iso_date(date),
        "Building kickoff plan"
    );

    let plan = KickoffPlan::new(CrewSpec::champions_league(), CrewInputs::for_date(date));
    emit_plan(&plan, plan_file)?;

    println!();
    println!("{}", "=".repeat(50));
    println!("CHAMPIONS LEAGUE FANTASY TEAM SELECTION PLAN READY!");
    println!("Season: {season_label}");
    println!("Estimated Gameweek: {matchweek}");
    println!("Analysis Date: {}", date.format("%B %d, %Y"));
    println!("{}", "=".repeat(50));
    println!(
        "Hand the plan to the orchestrator and check '{}' for the team selection.",
        crate::constants::fantasy::TEAM_REPORT_FILE
    );

    Ok(())
}

/// Handles `matchweek <N> [--budget B]`.
pub fn handle_matchweek_command(
    date: NaiveDate,
    matchweek: u32,
    budget: &str,
    plan_file: Option<&str>,
) -> Result<(), AppError> {
    if matchweek == 0 || matchweek > LEAGUE_PHASE_MATCHWEEKS {
        return Err(AppError::config_error(format!(
            "Matchweek must be between 1 and {LEAGUE_PHASE_MATCHWEEKS}, got {matchweek}"
        )));
    }

    let plan = KickoffPlan::new(
        CrewSpec::champions_league(),
        CrewInputs::for_matchweek(date, matchweek, budget),
    );
    emit_plan(&plan, plan_file)?;
    println!("\nPlan for Gameweek {matchweek} ready!");

    Ok(())
}

/// Training passthrough payload for the orchestrator.
#[derive(serde::Serialize)]
struct TrainRequest {
    crew: CrewSpec,
    inputs: CrewInputs,
    n_iterations: u32,
    filename: String,
}

/// Handles `train <iterations> <filename>`.
pub fn handle_train_command(
    date: NaiveDate,
    iterations: u32,
    filename: &str,
) -> Result<(), AppError> {
    let request = TrainRequest {
        crew: CrewSpec::champions_league(),
        inputs: CrewInputs::minimal(date),
        n_iterations: iterations,
        filename: filename.to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

/// Replay passthrough payload for the orchestrator.
#[derive(serde::Serialize)]
struct ReplayRequest {
    crew: CrewSpec,
    task_id: String,
}

/// Handles `replay <task_id>`.
pub fn handle_replay_command(task_id: &str) -> Result<(), AppError> {
    let request = ReplayRequest {
        crew: CrewSpec::champions_league(),
        task_id: task_id.to_string(),
    };
    println!("{}", serde_json::to_string_pretty(&request)?);
    Ok(())
}

/// Handles `tool <name> --args <json>`: invokes one registry tool directly.
pub async fn handle_tool_command(
    date: NaiveDate,
    name: &str,
    raw_args: &str,
) -> Result<(), AppError> {
    let args: serde_json::Value = serde_json::from_str(raw_args)
        .map_err(|e| AppError::tool_input(name, format!("arguments are not valid JSON: {e}")))?;

    let config = Config::load().await?;
    let client = SearchClient::new(&config)?;
    let ctx = ToolContext::for_date(date);
    let registry = ToolRegistry::standard();

    let output = registry.invoke(name, &client, &ctx, args).await?;
    println!("{output}");

    Ok(())
}

/// Dispatches a parsed invocation to its handler.
pub async fn dispatch(args: &Args) -> Result<(), AppError> {
    let date = resolve_date(args)?;

    match &args.command {
        None => handle_run_command(date, None),
        Some(Command::Run { plan_file }) => handle_run_command(date, plan_file.as_deref()),
        Some(Command::Matchweek {
            matchweek,
            budget,
            plan_file,
        }) => handle_matchweek_command(date, *matchweek, budget, plan_file.as_deref()),
        Some(Command::Train {
            iterations,
            filename,
        }) => handle_train_command(date, *iterations, filename),
        Some(Command::Replay { task_id }) => handle_replay_command(task_id),
        Some(Command::Tool { name, args: raw }) => handle_tool_command(date, name, raw).await,
    }
}
