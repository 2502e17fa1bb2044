//! User prompts for configuration setup
//!
//! Used on first run when neither the config file nor the environment
//! provides an API token.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for the football-data.org API token and returns the trimmed input.
///
/// # Example
/// ```no_run
/// use football_scores::config::user_prompts::prompt_for_api_token;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let token = prompt_for_api_token().await?;
/// println!("Token has {} characters", token.len());
/// # Ok(())
/// # }
/// ```
pub async fn prompt_for_api_token() -> Result<String, AppError> {
    println!("Please enter your football-data.org API token: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
