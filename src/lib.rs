//! Football league table and matchday fixtures, teletext style
//!
//! This library fetches a competition's league table and the fixtures of its
//! current matchday from the football-data.org v1 API and lays them out as a
//! teletext page.
//!
//! # Examples
//!
//! ```rust,no_run
//! use football_scores::{Config, FootballDataClient, MatchdayController, create_page};
//! use football_scores::error::AppError;
//! use tokio_util::sync::CancellationToken;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let client = FootballDataClient::new(&config)?;
//!
//!     // Table first, then the fixtures of its current matchday
//!     let mut controller = MatchdayController::new(client);
//!     controller.load(&CancellationToken::new()).await;
//!
//!     for card in controller.fixture_cards() {
//!         for line in card.lines() {
//!             println!("{}", line.plain());
//!         }
//!     }
//!
//!     // Or render the whole page
//!     let page = create_page(&controller, false, true);
//!     page.render_buffered(&mut std::io::stdout())?;
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod error;
pub mod teletext_ui;
pub mod testing_utils;
pub mod ui;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{
    Fixture, FixtureStatus, FootballDataClient, FootballDataSource, GameWeek, LeagueTable, Team,
};
pub use error::AppError;
pub use teletext_ui::TeletextPage;
pub use ui::teletext::FixtureCard;
pub use ui::{LoadState, MatchdayController, create_page};

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
