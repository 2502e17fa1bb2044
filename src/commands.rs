use crate::cli::Args;
use crate::version;
use crossterm::{execute, terminal::SetTitle};
use football_scores::config::{Config, normalize_base_url};
use football_scores::constants::ui::PAGE_NUMBER;
use football_scores::data_fetcher::FootballDataClient;
use football_scores::error::AppError;
use football_scores::ui::controller::MatchdayController;
use football_scores::ui::page::create_page;
use std::io::stdout;
use std::path::Path;
use tokio_util::sync::CancellationToken;
use tracing::info;

pub fn terminal_title() -> String {
    format!("JALKAPALLO {PAGE_NUMBER}")
}

/// Handles the --version command.
pub fn handle_version_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(terminal_title()))?;
    version::print_version();
    Ok(())
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    execute!(stdout(), SetTitle(terminal_title()))?;
    Config::display().await
}

/// Applies the requested config changes to `config`.
///
/// Returns the messages to show the user, one per change.
pub fn apply_config_updates(config: &mut Config, args: &Args) -> Vec<String> {
    let mut messages = Vec::new();

    if let Some(token) = &args.new_api_token {
        config.api_token = token.trim().to_string();
        messages.push("API token updated.".to_string());
    }

    if let Some(url) = &args.new_api_url {
        config.api_base_url = normalize_base_url(url);
        messages.push(format!("API base URL set to {}", config.api_base_url));
    }

    if let Some(competition_id) = args.new_competition_id {
        config.competition_id = competition_id;
        messages.push(format!("Competition set to {competition_id}"));
    }

    if let Some(log_path) = &args.new_log_file_path {
        config.log_file_path = Some(log_path.clone());
        messages.push(format!("Log file set to {log_path}"));
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        messages.push("Custom log file path cleared. Using default location.".to_string());
    }

    messages
}

/// Handles the --set-* and --clear-log-file commands.
///
/// Starts from the existing config file when there is one, so a first run can
/// create the file with `--set-token` alone.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let config_path = Config::get_config_path();
    let mut config = if Path::new(&config_path).exists() {
        Config::load_from_path(&config_path).await?
    } else {
        Config::default()
    };

    for message in apply_config_updates(&mut config, args) {
        println!("{message}");
    }

    config.validate()?;
    config.save().await?;
    info!("Config saved to {config_path}");
    println!("Config updated successfully!");
    Ok(())
}

/// Handles --once and --plain: loads once, prints the whole page and exits.
///
/// Fetch failures end up on the page, not in the exit status.
pub async fn handle_once_command(args: &Args) -> Result<(), AppError> {
    let config = Config::load().await?;
    let client = FootballDataClient::new(&config)?;
    let mut controller = MatchdayController::new(client);
    controller.load(&CancellationToken::new()).await;

    let page = create_page(&controller, false, true);
    if args.plain {
        print!("{}", page.render_plain());
    } else {
        execute!(stdout(), SetTitle(terminal_title()))?;
        page.render_buffered(&mut stdout())?;
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_apply_config_updates() {
        let args = Args::parse_from([
            "football_scores",
            "--set-token",
            "  abcd1234  ",
            "--set-api-url",
            "http://localhost:8080/v1/competitions/",
            "--set-competition",
            "2021",
            "--set-log-file",
            "/tmp/football.log",
        ]);
        let mut config = Config::default();

        let messages = apply_config_updates(&mut config, &args);

        assert_eq!(messages.len(), 4);
        assert_eq!(config.api_token, "abcd1234");
        assert_eq!(config.api_base_url, "http://localhost:8080/v1/competitions");
        assert_eq!(config.competition_id, 2021);
        assert_eq!(config.log_file_path.as_deref(), Some("/tmp/football.log"));
    }

    #[test]
    fn test_clear_log_file() {
        let args = Args::parse_from(["football_scores", "--clear-log-file"]);
        let mut config = Config {
            log_file_path: Some("/tmp/old.log".to_string()),
            ..Config::default()
        };

        apply_config_updates(&mut config, &args);

        assert!(config.log_file_path.is_none());
    }

    #[test]
    fn test_terminal_title() {
        assert_eq!(terminal_title(), "JALKAPALLO 235");
    }
}
