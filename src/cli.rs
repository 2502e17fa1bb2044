use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

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

/// Whether any persistent config update was requested
pub fn is_config_update(args: &Args) -> bool {
    args.new_api_token.is_some()
        || args.new_api_url.is_some()
        || args.new_competition_id.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
}

/// Determines if the application should run without the interactive screen:
/// single-shot output, plain output, config commands and version info.
pub fn is_noninteractive_mode(args: &Args) -> bool {
    args.once || args.plain || args.list_config || args.version || is_config_update(args)
}

/// Whether log output must stay out of stdout
pub fn logs_to_file_only(args: &Args) -> bool {
    !is_noninteractive_mode(args) || ((args.once || args.plain) && !args.debug)
}

/// Football league table and matchday fixtures, teletext style
///
/// Shows the current standings of a football-data.org competition together
/// with every fixture of the current matchday.
///
/// In interactive mode (default):
/// - Use arrow keys (←/→) to navigate between pages
/// - Press 'q' to quit
#[derive(Parser, Debug, Default)]
#[command(about, long_about = None)]
#[command(disable_version_flag = true)]
#[command(styles = get_styles())]
pub struct Args {
    /// Show the page once and exit. The output stays visible in terminal history.
    #[arg(short, long)]
    pub once: bool,

    /// Print plain text without colours or cursor movement, for pipes and scripts.
    /// Implies --once.
    #[arg(short = 'p', long = "plain", help_heading = "Display Options")]
    pub plain: bool,

    /// Store a new football-data.org API token in the config file.
    #[arg(long = "set-token", help_heading = "Configuration", value_name = "TOKEN")]
    pub new_api_token: Option<String>,

    /// Store a new API base URL in the config file.
    #[arg(long = "set-api-url", help_heading = "Configuration", value_name = "URL")]
    pub new_api_url: Option<String>,

    /// Store a new competition id in the config file (445 = Premier League 2017/18).
    #[arg(long = "set-competition", help_heading = "Configuration", value_name = "ID")]
    pub new_competition_id: Option<u32>,

    /// Store a custom log file path in the config file.
    #[arg(long = "set-log-file", help_heading = "Configuration", value_name = "PATH")]
    pub new_log_file_path: Option<String>,

    /// Remove the custom log file path from the config file, reverting to the default location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Show version information
    #[arg(short = 'V', long = "version", help_heading = "Info")]
    pub version: bool,

    /// Enable debug mode: logs from --once and --plain runs are also written to stdout.
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,

    /// Log file path for this run. Defaults to the configured or platform location.
    #[arg(long = "log-file", help_heading = "Debug", value_name = "PATH")]
    pub log_file: Option<String>,
}
