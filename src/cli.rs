use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Champions League Fantasy Expert
///
/// Builds the kickoff plan for a multi-agent fantasy team-selection pipeline:
/// agent roles, sequential tasks, tool bindings and knowledge sources, plus
/// the date-derived inputs (season label, estimated matchweek) the external
/// orchestrator interpolates into them.
///
/// Tools can also be invoked individually with the `tool` subcommand, which
/// formats a search query, calls the configured web-search API and prints the
/// formatted result.
#[derive(Parser, Debug)]
#[command(author = "Niko Salonen", about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Run as of a specific date in YYYY-MM-DD format.
    /// If not provided, the season and matchweek are derived from today.
    #[arg(long = "date", short = 'd', global = true)]
    pub date: Option<String>,

    /// Update search API key in config. Will prompt for the key if not provided.
    #[arg(
        long = "config",
        help_heading = "Configuration",
        value_name = "API_KEY",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub new_api_key: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build the kickoff plan with date-derived season and matchweek (default)
    Run {
        /// Write the plan JSON to a file instead of stdout
        #[arg(long = "plan-file")]
        plan_file: Option<String>,
    },

    /// Build the kickoff plan for a specific matchweek
    Matchweek {
        /// League-phase matchweek number (1-8)
        matchweek: u32,

        /// Fantasy budget in millions
        #[arg(long, default_value = crate::constants::fantasy::DEFAULT_BUDGET)]
        budget: String,

        /// Write the plan JSON to a file instead of stdout
        #[arg(long = "plan-file")]
        plan_file: Option<String>,
    },

    /// Emit a training plan for the orchestrator
    Train {
        /// Number of training iterations
        iterations: u32,

        /// File the orchestrator stores training data in
        filename: String,
    },

    /// Emit a replay request for a previously executed task
    Replay {
        /// Identifier of the task to replay from
        task_id: String,
    },

    /// Invoke a single tool directly and print its output
    Tool {
        /// Registry name of the tool, e.g. player_stats
        name: String,

        /// Tool arguments as a JSON object, e.g. '{"player_name": "Haaland"}'
        #[arg(long)]
        args: String,
    },
}

/// True when the invocation is a config/version operation that should not
/// build a plan or touch the network.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_api_key.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
        || args.version
}
