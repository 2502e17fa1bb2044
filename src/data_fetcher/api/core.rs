use crate::config::Config;
use crate::data_fetcher::models::{GameWeek, LeagueTable};
use crate::error::AppError;
use reqwest::Client;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::fetch_utils::fetch;
use super::http_client::create_http_client_with_timeout;
use super::urls::{build_fixtures_url, build_table_url};

/// Source of league tables and game weeks.
///
/// Each call issues at most one logical request and resolves to exactly one
/// value or one error. [`FootballDataClient`] is the HTTP implementation;
/// tests substitute scripted sources.
pub trait FootballDataSource {
    fn get_table(
        &self,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<LeagueTable, AppError>> + Send;

    fn get_fixtures(
        &self,
        matchday: u32,
        cancel: &CancellationToken,
    ) -> impl Future<Output = Result<GameWeek, AppError>> + Send;
}

/// football-data.org client for one competition
#[derive(Debug, Clone)]
pub struct FootballDataClient {
    client: Client,
    base_url: String,
    competition_id: u32,
    api_token: String,
}

impl FootballDataClient {
    /// Builds a client from configuration, with the configured timeout
    pub fn new(config: &Config) -> Result<Self, AppError> {
        let client = create_http_client_with_timeout(config.http_timeout_seconds)?;
        Ok(Self::with_client(client, config))
    }

    /// Builds a client around an existing reqwest client
    pub fn with_client(client: Client, config: &Config) -> Self {
        Self {
            client,
            base_url: config.api_base_url.clone(),
            competition_id: config.competition_id,
            api_token: config.api_token.clone(),
        }
    }

    pub fn table_url(&self) -> String {
        build_table_url(&self.base_url, self.competition_id)
    }

    pub fn fixtures_url(&self, matchday: u32) -> String {
        build_fixtures_url(&self.base_url, self.competition_id, matchday)
    }
}

impl FootballDataSource for FootballDataClient {
    async fn get_table(&self, cancel: &CancellationToken) -> Result<LeagueTable, AppError> {
        let url = self.table_url();
        let table: LeagueTable = fetch(&self.client, &url, &self.api_token, cancel).await?;
        info!(
            "Fetched league table: {} teams, matchday {:?}",
            table.standing.len(),
            table.matchday
        );
        Ok(table)
    }

    async fn get_fixtures(
        &self,
        matchday: u32,
        cancel: &CancellationToken,
    ) -> Result<GameWeek, AppError> {
        let url = self.fixtures_url(matchday);
        let week: GameWeek = fetch(&self.client, &url, &self.api_token, cancel).await?;
        info!(
            "Fetched {} fixtures for matchday {matchday}",
            week.fixtures.len()
        );
        if week.fixtures.iter().any(|f| f.matchday != matchday) {
            debug!("Game week for matchday {matchday} contains fixtures from other matchdays");
        }
        Ok(week)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_fetcher::api::http_client::create_test_http_client;
    use crate::data_fetcher::models::FixtureStatus;
    use serde_json::json;
    use wiremock::{
        Mock, MockServer, ResponseTemplate,
        matchers::{header, method, path, query_param},
    };

    fn create_mock_config(api_base_url: String) -> Config {
        Config {
            api_base_url,
            competition_id: 445,
            api_token: "test-token".to_string(),
            log_file_path: None,
            http_timeout_seconds: crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS,
        }
    }

    fn mock_table_body() -> serde_json::Value {
        json!({
            "leagueCaption": "Premier League 2017/18",
            "matchday": 12,
            "standing": [{
                "teamName": "Manchester City FC",
                "crestURI": null,
                "position": 1,
                "points": 34,
                "playedGames": 12,
                "home": { "goals": 22, "goalsAgainst": 3, "wins": 6, "draws": 0, "losses": 0 },
                "away": { "goals": 18, "goalsAgainst": 4, "wins": 5, "draws": 1, "losses": 0 },
                "draws": 1,
                "goalDifference": 33,
                "goals": 40,
                "goalsAgainst": 7,
                "losses": 0,
                "wins": 11
            }]
        })
    }

    fn mock_fixtures_body() -> serde_json::Value {
        json!({
            "count": 1,
            "fixtures": [{
                "date": "2017-11-19T16:00:00Z",
                "status": "TIMED",
                "matchday": 12,
                "homeTeamName": "Arsenal FC",
                "awayTeamName": "Tottenham Hotspur FC",
                "result": { "goalsHomeTeam": null, "goalsAwayTeam": null }
            }]
        })
    }

    #[tokio::test]
    async fn test_get_table_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/445/leagueTable"))
            .and(header("X-Auth-Token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_table_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = create_mock_config(mock_server.uri());
        let client = FootballDataClient::with_client(create_test_http_client(), &config);

        let table = client.get_table(&CancellationToken::new()).await.unwrap();
        assert_eq!(table.current_matchday(), Some(12));
        assert_eq!(table.standing[0].team_name, "Manchester City FC");
    }

    #[tokio::test]
    async fn test_get_fixtures_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/445/fixtures"))
            .and(query_param("matchday", "12"))
            .and(header("X-Auth-Token", "test-token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(mock_fixtures_body()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = create_mock_config(mock_server.uri());
        let client = FootballDataClient::with_client(create_test_http_client(), &config);

        let week = client
            .get_fixtures(12, &CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(week.fixtures.len(), 1);
        assert_eq!(week.fixtures[0].status, FixtureStatus::Timed);
    }

    #[tokio::test]
    async fn test_get_table_not_found() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/445/leagueTable"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let config = create_mock_config(mock_server.uri());
        let client = FootballDataClient::with_client(create_test_http_client(), &config);

        let result = client.get_table(&CancellationToken::new()).await;
        assert!(matches!(result.unwrap_err(), AppError::ApiNotFound { .. }));
    }

    #[tokio::test]
    async fn test_get_fixtures_unexpected_shape() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/445/fixtures"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "fixtures": [{ "status": "LIVE" }] })),
            )
            .mount(&mock_server)
            .await;

        let config = create_mock_config(mock_server.uri());
        let client = FootballDataClient::with_client(create_test_http_client(), &config);

        let result = client.get_fixtures(3, &CancellationToken::new()).await;
        assert!(matches!(
            result.unwrap_err(),
            AppError::ApiUnexpectedStructure { .. }
        ));
    }

    #[test]
    fn test_client_urls_follow_config() {
        let config = create_mock_config("http://localhost:9999/v1/competitions/".to_string());
        let client = FootballDataClient::new(&config).unwrap();
        assert_eq!(
            client.table_url(),
            "http://localhost:9999/v1/competitions/445/leagueTable"
        );
        assert_eq!(
            client.fixtures_url(7),
            "http://localhost:9999/v1/competitions/445/fixtures?matchday=7"
        );
    }
}
