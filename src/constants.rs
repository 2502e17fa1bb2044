//! Application-wide constants and configuration values
//!
//! This module centralizes the defaults and tuning values used across the
//! fetcher, the configuration layer and the teletext renderer.

/// Default base URL of the football-data.org competitions endpoint
pub const DEFAULT_API_BASE_URL: &str = "http://api.football-data.org/v1/competitions";

/// Default competition identifier (Premier League)
pub const DEFAULT_COMPETITION_ID: u32 = 445;

/// Header carrying the API token on every request
pub const AUTH_HEADER: &str = "X-Auth-Token";

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECONDS: u64 = 30;

/// Maximum number of connections per host in the HTTP client pool
pub const HTTP_POOL_MAX_IDLE_PER_HOST: usize = 10;

/// Retry configuration for transient fetch failures
pub mod retry {
    /// Maximum number of retries after the first attempt
    pub const MAX_RETRIES: u32 = 3;

    /// Initial backoff delay, doubled after every retry (milliseconds)
    pub const BASE_DELAY_MS: u64 = 250;

    /// Upper bound for a single wait, including server supplied Retry-After (seconds)
    pub const MAX_DELAY_SECONDS: u64 = 30;
}

/// UI layout constants
pub mod ui {
    /// Teletext page number shown in the header
    pub const PAGE_NUMBER: u16 = 235;

    /// Content margin from terminal border
    pub const CONTENT_MARGIN: usize = 2;

    /// Width used when rendering without a terminal
    pub const DEFAULT_WIDTH: u16 = 80;

    /// Height used when rendering without a terminal
    pub const DEFAULT_HEIGHT: u16 = 24;

    /// Rows reserved for header, subheader, spacing and footer
    pub const RESERVED_ROWS: u16 = 5;

    /// Maximum characters of a team name in standings and cards
    pub const TEAM_NAME_WIDTH: usize = 24;

    /// Poll interval for keyboard input in the interactive loop (milliseconds)
    pub const INPUT_POLL_MS: u64 = 100;
}

/// Environment variable names
pub mod env_vars {
    /// Override for the API base URL
    pub const API_URL: &str = "FOOTBALL_API_URL";

    /// Override for the API token
    pub const API_TOKEN: &str = "FOOTBALL_API_TOKEN";

    /// Override for the competition identifier
    pub const COMPETITION_ID: &str = "FOOTBALL_COMPETITION_ID";

    /// Override for the log file path
    pub const LOG_FILE: &str = "FOOTBALL_LOG_FILE";

    /// Override for the HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "FOOTBALL_HTTP_TIMEOUT";
}

/// Default log file name
pub const LOG_FILE_NAME: &str = "football_scores.log";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "football_scores";
