//! Application-wide constants and configuration values
//!
//! This module centralizes all magic numbers and configuration constants
//! to improve maintainability and make the codebase more configurable.

#![allow(dead_code)]

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Default endpoint for the web-search collaborator (Serper-style API)
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://google.serper.dev/search";

/// Maximum number of organic results to keep from a search response
pub const MAX_SEARCH_RESULTS: usize = 10;

/// Directory-name marker used to locate the project root when resolving
/// output paths. If the current working directory contains this segment,
/// the path is truncated to it before appending the output directory.
pub const PROJECT_ROOT_MARKER: &str = "fantasy_expert";

/// Default directory for reports written by the file writer tool
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Football season boundary constants for month-based logic
pub mod season {
    /// Month the football season starts (August)
    pub const SEASON_START_MONTH: u32 = 8;

    /// Last month that can still belong to the running season (June)
    pub const SEASON_END_MONTH: u32 = 6;

    /// Last day of `SEASON_END_MONTH` that belongs to the running season
    pub const SEASON_END_DAY: u32 = 10;

    /// Month the Champions League league phase kicks off (September)
    pub const LEAGUE_PHASE_START_MONTH: u32 = 9;

    /// Number of matchweeks in the league phase (36-team format)
    pub const LEAGUE_PHASE_MATCHWEEKS: u32 = 8;

    /// Rough spacing between league-phase matchweeks in days
    pub const MATCHWEEK_INTERVAL_DAYS: i64 = 14;
}

/// Fantasy game defaults used when assembling crew inputs
pub mod fantasy {
    /// Standard Champions League Fantasy squad budget in millions
    pub const DEFAULT_BUDGET: &str = "100";

    /// Competition name interpolated into agent and task prompts
    pub const COMPETITION: &str = "UEFA Champions League";

    /// Filename of the final team-selection report
    pub const TEAM_REPORT_FILE: &str = "champions_league_team.md";
}
