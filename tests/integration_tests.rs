use football_scores::{
    config::Config,
    data_fetcher::{FootballDataClient, FootballDataSource, models::*},
    error::AppError,
    teletext_ui::TeletextRow,
    ui::{ErrorStage, LoadState, MatchdayController, create_page},
};
use serde_json::{Value, json};
use tempfile::tempdir;
use tokio_util::sync::CancellationToken;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{header, method, path, query_param},
};

const TOKEN: &str = "integration-token";

fn config_for(server: &MockServer) -> Config {
    Config {
        api_base_url: server.uri(),
        competition_id: 445,
        api_token: TOKEN.to_string(),
        log_file_path: None,
        http_timeout_seconds: 5,
    }
}

fn team_json(name: &str, position: u32, points: i32) -> Value {
    json!({
        "teamName": name,
        "crestURI": null,
        "position": position,
        "points": points,
        "playedGames": 12,
        "home": { "goals": 10, "goalsAgainst": 5, "wins": 4, "draws": 1, "losses": 1 },
        "away": { "goals": 8, "goalsAgainst": 6, "wins": 3, "draws": 2, "losses": 1 },
        "draws": 3,
        "goalDifference": 7,
        "goals": 18,
        "goalsAgainst": 11,
        "losses": 2,
        "wins": 7
    })
}

fn table_json(matchday: Value) -> Value {
    json!({
        "_links": {
            "self": { "href": "http://api.football-data.org/v1/competitions/445/leagueTable/?matchDay=12" },
            "competition": { "href": "http://api.football-data.org/v1/competitions/445" }
        },
        "leagueCaption": "Premier League 2017/18",
        "matchday": matchday,
        "standing": [
            team_json("Manchester City FC", 1, 34),
            team_json("Manchester United FC", 2, 26),
            team_json("Chelsea FC", 3, 25)
        ]
    })
}

fn fixture_json(i: u32, finished: bool) -> Value {
    let result = if finished {
        json!({
            "goalsHomeTeam": 2,
            "goalsAwayTeam": 1,
            "halfTime": { "goalsHomeTeam": 1, "goalsAwayTeam": 0 }
        })
    } else {
        json!({ "goalsHomeTeam": null, "goalsAwayTeam": null })
    };
    let status = if finished { "FINISHED" } else { "TIMED" };
    json!({
        "_links": {
            "self": { "href": format!("http://api.football-data.org/v1/fixtures/{}", 159000 + i) },
            "competition": { "href": "http://api.football-data.org/v1/competitions/445" },
            "homeTeam": { "href": "http://api.football-data.org/v1/teams/57" },
            "awayTeam": { "href": "http://api.football-data.org/v1/teams/73" }
        },
        "date": "2017-11-18T15:00:00Z",
        "status": status,
        "matchday": 12,
        "homeTeamName": format!("Home Side {i}"),
        "awayTeamName": format!("Away Side {i}"),
        "result": result
    })
}

fn fixtures_json(count: u32) -> Value {
    let fixtures: Vec<Value> = (0..count).map(|i| fixture_json(i, i % 2 == 0)).collect();
    json!({ "count": count, "fixtures": fixtures })
}

async fn mount_table(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path("/445/leagueTable"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// Matchday 12 table with ten fixtures gives ten cards in fixture order
#[tokio::test]
async fn test_matchday_twelve_with_ten_fixtures() {
    let server = MockServer::start().await;
    mount_table(&server, table_json(json!(12))).await;
    Mock::given(method("GET"))
        .and(path("/445/fixtures"))
        .and(query_param("matchday", "12"))
        .and(header("X-Auth-Token", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures_json(10)))
        .expect(1)
        .mount(&server)
        .await;

    let client = FootballDataClient::new(&config_for(&server)).unwrap();
    let mut controller = MatchdayController::new(client);
    controller.load(&CancellationToken::new()).await;

    assert_eq!(controller.state(), &LoadState::Ready);
    let table = controller.table().unwrap();
    assert_eq!(table.matchday, Some(12));
    assert_eq!(table.standing.len(), 3);
    assert_eq!(table.standing[0].team_name, "Manchester City FC");

    let cards = controller.fixture_cards();
    assert_eq!(cards.len(), 10);
    for (i, card) in cards.iter().enumerate() {
        assert_eq!(card.fixture().home_team_name, format!("Home Side {i}"));
    }
    assert_eq!(cards[0].score_text().as_deref(), Some("2-1"));
    assert!(cards[1].score_text().is_none());
}

/// The stored table equals what a direct fetch of the same response yields
#[tokio::test]
async fn test_stored_table_equals_response() {
    let server = MockServer::start().await;
    mount_table(&server, table_json(json!(12))).await;
    Mock::given(method("GET"))
        .and(path("/445/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures_json(2)))
        .mount(&server)
        .await;

    let client = FootballDataClient::new(&config_for(&server)).unwrap();
    let direct = client.get_table(&CancellationToken::new()).await.unwrap();

    let mut controller = MatchdayController::new(client);
    controller.load(&CancellationToken::new()).await;

    assert_eq!(controller.table(), Some(&direct));
}

#[tokio::test]
async fn test_table_failure_makes_no_fixtures_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/445/leagueTable"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/445/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures_json(10)))
        .expect(0)
        .mount(&server)
        .await;

    let client = FootballDataClient::new(&config_for(&server)).unwrap();
    let mut controller = MatchdayController::new(client);
    controller.load(&CancellationToken::new()).await;

    assert!(matches!(
        controller.state(),
        LoadState::Errored {
            stage: ErrorStage::Table,
            ..
        }
    ));
    assert!(controller.table().is_none());
    assert!(controller.game_week().is_none());
}

#[tokio::test]
async fn test_fixtures_failure_keeps_table_on_page() {
    let server = MockServer::start().await;
    mount_table(&server, table_json(json!(12))).await;
    Mock::given(method("GET"))
        .and(path("/445/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = FootballDataClient::new(&config_for(&server)).unwrap();
    let mut controller = MatchdayController::new(client);
    controller.load(&CancellationToken::new()).await;

    assert!(matches!(
        controller.state(),
        LoadState::Errored {
            stage: ErrorStage::Fixtures,
            ..
        }
    ));
    assert!(controller.game_week().is_none());

    let page = create_page(&controller, false, true);
    let standings = page
        .rows()
        .iter()
        .filter(|row| matches!(row, TeletextRow::Standing(_)))
        .count();
    assert_eq!(standings, 3);
    assert!(
        page.rows()
            .iter()
            .any(|row| matches!(row, TeletextRow::ErrorMessage(_)))
    );
}

#[tokio::test]
async fn test_missing_matchday_skips_fixtures() {
    let server = MockServer::start().await;
    mount_table(&server, table_json(Value::Null)).await;
    Mock::given(method("GET"))
        .and(path("/445/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(fixtures_json(1)))
        .expect(0)
        .mount(&server)
        .await;

    let client = FootballDataClient::new(&config_for(&server)).unwrap();
    let mut controller = MatchdayController::new(client);
    controller.load(&CancellationToken::new()).await;

    assert_eq!(
        controller.state(),
        &LoadState::Errored {
            stage: ErrorStage::Fixtures,
            message: AppError::MissingMatchday.user_message(),
        }
    );
    assert!(controller.table().is_some());
}

/// An in-play fixture without half-time goals does not cost the other cards
#[tokio::test]
async fn test_null_half_time_keeps_every_card() {
    let server = MockServer::start().await;
    mount_table(&server, table_json(json!(12))).await;
    let mut week = fixtures_json(2);
    week["fixtures"][1]["status"] = json!("IN_PLAY");
    week["fixtures"][1]["result"] = json!({
        "goalsHomeTeam": 0,
        "goalsAwayTeam": 0,
        "halfTime": { "goalsHomeTeam": null, "goalsAwayTeam": null }
    });
    Mock::given(method("GET"))
        .and(path("/445/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(week))
        .mount(&server)
        .await;

    let client = FootballDataClient::new(&config_for(&server)).unwrap();
    let mut controller = MatchdayController::new(client);
    controller.load(&CancellationToken::new()).await;

    assert_eq!(controller.state(), &LoadState::Ready);
    let cards = controller.fixture_cards();
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].half_time_text().as_deref(), Some("(puoliaika 1-0)"));
    assert_eq!(cards[1].score_text().as_deref(), Some("0-0"));
    assert!(cards[1].half_time_text().is_none());
}

#[tokio::test]
async fn test_rate_limited_then_served() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/445/leagueTable"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "0"))
        .up_to_n_times(1)
        .with_priority(1)
        .mount(&server)
        .await;
    mount_table(&server, table_json(json!(12))).await;

    let client = FootballDataClient::new(&config_for(&server)).unwrap();
    let table = client.get_table(&CancellationToken::new()).await.unwrap();
    assert_eq!(table.current_matchday(), Some(12));
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let server = MockServer::start().await;
    let mut week = fixtures_json(1);
    week["fixtures"][0]["status"] = json!("ABANDONED");
    Mock::given(method("GET"))
        .and(path("/445/fixtures"))
        .respond_with(ResponseTemplate::new(200).set_body_json(week))
        .mount(&server)
        .await;

    let client = FootballDataClient::new(&config_for(&server)).unwrap();
    let result = client.get_fixtures(12, &CancellationToken::new()).await;
    assert!(matches!(
        result.unwrap_err(),
        AppError::ApiUnexpectedStructure { .. }
    ));
}

#[test]
fn test_models_round_trip_through_json() {
    let table: LeagueTable = serde_json::from_value(table_json(json!(12))).unwrap();
    let week: GameWeek = serde_json::from_value(fixtures_json(4)).unwrap();

    let table_again: LeagueTable =
        serde_json::from_str(&serde_json::to_string(&table).unwrap()).unwrap();
    let week_again: GameWeek = serde_json::from_str(&serde_json::to_string(&week).unwrap()).unwrap();

    assert_eq!(table, table_again);
    assert_eq!(week, week_again);
}

/// Config saved to disk feeds a working client
#[tokio::test]
async fn test_config_file_drives_client() {
    let server = MockServer::start().await;
    mount_table(&server, table_json(json!(7))).await;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    let config_path = config_path.to_string_lossy().to_string();
    config_for(&server).save_to_path(&config_path).await.unwrap();

    let loaded = Config::load_from_path(&config_path).await.unwrap();
    assert_eq!(loaded.api_token, TOKEN);

    let client = FootballDataClient::new(&loaded).unwrap();
    let table = client.get_table(&CancellationToken::new()).await.unwrap();
    assert_eq!(table.current_matchday(), Some(7));
}
