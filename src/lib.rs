//! Champions League Fantasy Expert Library
//!
//! This library builds the kickoff plan for a multi-agent fantasy football
//! pipeline (agents, tasks, tool bindings, knowledge sources) and provides
//! the tools themselves: season/matchweek date computation, query-building
//! search tools backed by a web-search API, and a report file writer. The
//! external orchestrator owns sequencing, LLM calls and retries.
//!
//! # Examples
//!
//! ```rust,no_run
//! use fantasy_expert::config::Config;
//! use fantasy_expert::error::AppError;
//! use fantasy_expert::search::SearchClient;
//! use fantasy_expert::tools::{ToolContext, ToolRegistry};
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = SearchClient::new(&config)?;
//!     let registry = ToolRegistry::standard();
//!
//!     let report = registry
//!         .invoke(
//!             "player_stats",
//!             &client,
//!             &ToolContext::now(),
//!             json!({"player_name": "Haaland", "team_name": "Manchester City"}),
//!         )
//!         .await?;
//!     println!("{report}");
//!
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod crew;
pub mod error;
pub mod logging;
pub mod search;
pub mod season;
pub mod tools;

// Re-export commonly used types for convenience
pub use config::Config;
pub use crew::{CrewInputs, CrewSpec, KickoffPlan};
pub use error::AppError;
pub use search::SearchClient;
pub use tools::{ToolContext, ToolRegistry};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
