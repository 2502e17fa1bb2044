use crate::commands::terminal_title;
use crossterm::{
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode, enable_raw_mode,
    },
};
use football_scores::config::Config;
use football_scores::data_fetcher::FootballDataClient;
use football_scores::error::AppError;
use football_scores::ui::{self, controller::MatchdayController};
use std::io::stdout;

/// Run the interactive application flow.
///
/// - Loads config and builds the client before touching the terminal, so
///   config errors and the first-run token prompt use the normal screen
/// - Sets up raw mode and the alternate screen
/// - Runs the interactive UI
/// - Restores the terminal even when the UI fails
pub async fn run_interactive() -> Result<(), AppError> {
    let config = Config::load().await?;
    let client = FootballDataClient::new(&config)?;
    let controller = MatchdayController::new(client);

    enable_raw_mode()?;
    let mut out = stdout();
    execute!(out, SetTitle(terminal_title()))?;
    execute!(out, EnterAlternateScreen)?;

    let result = ui::run_interactive_ui(controller).await;

    execute!(out, LeaveAlternateScreen)?;
    disable_raw_mode()?;

    result
}
