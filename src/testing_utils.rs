use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_util::sync::CancellationToken;

use crate::data_fetcher::api::FootballDataSource;
use crate::data_fetcher::models::{
    Fixture, FixtureResult, FixtureStatus, GameWeek, HalfTimeScore, LeagueTable, Team,
    VenueRecord,
};
use crate::error::AppError;

/// Test utilities for creating mock data and testing scenarios
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a table row with consistent totals
    pub fn create_team(name: &str, position: u32, wins: u32, draws: u32, losses: u32) -> Team {
        let goals = wins * 2 + draws;
        let goals_against = losses * 2 + draws;
        Team {
            team_name: name.to_string(),
            crest_uri: None,
            position,
            points: (wins * 3 + draws) as i32,
            played_games: wins + draws + losses,
            home: VenueRecord {
                goals,
                goals_against,
                wins,
                draws,
                losses,
            },
            away: VenueRecord::default(),
            draws,
            goal_difference: goals as i32 - goals_against as i32,
            goals,
            goals_against,
            losses,
            wins,
        }
    }

    /// Creates a table of `team_count` teams at the given matchday
    pub fn create_table(matchday: Option<u32>, team_count: u32) -> LeagueTable {
        let standing = (1..=team_count)
            .map(|position| {
                let wins = team_count - position;
                Self::create_team(&format!("Team {position} FC"), position, wins, 1, position - 1)
            })
            .collect();
        LeagueTable {
            league_caption: Some("Premier League 2017/18".to_string()),
            matchday,
            standing,
        }
    }

    /// Creates a fixture that has not kicked off
    pub fn create_upcoming_fixture(home_team: &str, away_team: &str, matchday: u32) -> Fixture {
        Fixture {
            home_team_name: home_team.to_string(),
            away_team_name: away_team.to_string(),
            date: "2017-11-18T15:00:00Z".to_string(),
            matchday,
            status: FixtureStatus::Timed,
            result: Some(FixtureResult::default()),
            links: None,
        }
    }

    /// Creates a finished fixture with a half-time score
    pub fn create_finished_fixture(
        home_team: &str,
        away_team: &str,
        matchday: u32,
        score: (u32, u32),
        half_time: (u32, u32),
    ) -> Fixture {
        Fixture {
            status: FixtureStatus::Finished,
            result: Some(FixtureResult {
                goals_home_team: Some(score.0),
                goals_away_team: Some(score.1),
                half_time: Some(HalfTimeScore {
                    goals_home_team: Some(half_time.0),
                    goals_away_team: Some(half_time.1),
                }),
            }),
            ..Self::create_upcoming_fixture(home_team, away_team, matchday)
        }
    }

    /// Creates a game week of `count` upcoming fixtures
    pub fn create_game_week(matchday: u32, count: u32) -> GameWeek {
        let fixtures = (0..count)
            .map(|i| {
                Self::create_upcoming_fixture(
                    &format!("Home {i} FC"),
                    &format!("Away {i} FC"),
                    matchday,
                )
            })
            .collect();
        GameWeek {
            count: Some(count),
            fixtures,
        }
    }
}

/// Data source answering from canned results and recording every request.
///
/// Each canned result is handed out once; a second request of the same kind
/// resolves to [`AppError::ApiNoData`].
pub struct ScriptedSource {
    table: Mutex<Option<Result<LeagueTable, AppError>>>,
    fixtures: Mutex<Option<Result<GameWeek, AppError>>>,
    table_requests: AtomicUsize,
    fixture_requests: Mutex<Vec<u32>>,
}

impl ScriptedSource {
    pub fn new(
        table: Result<LeagueTable, AppError>,
        fixtures: Result<GameWeek, AppError>,
    ) -> Self {
        Self {
            table: Mutex::new(Some(table)),
            fixtures: Mutex::new(Some(fixtures)),
            table_requests: AtomicUsize::new(0),
            fixture_requests: Mutex::new(Vec::new()),
        }
    }

    pub fn table_requests(&self) -> usize {
        self.table_requests.load(Ordering::SeqCst)
    }

    /// Matchdays passed to `get_fixtures`, in call order
    pub fn fixture_requests(&self) -> Vec<u32> {
        self.fixture_requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl FootballDataSource for ScriptedSource {
    async fn get_table(&self, cancel: &CancellationToken) -> Result<LeagueTable, AppError> {
        self.table_requests.fetch_add(1, Ordering::SeqCst);
        if cancel.is_cancelled() {
            return Err(AppError::cancelled("scripted://leagueTable"));
        }
        self.table
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_else(|| Err(AppError::api_no_data("exhausted", "scripted://leagueTable")))
    }

    async fn get_fixtures(
        &self,
        matchday: u32,
        cancel: &CancellationToken,
    ) -> Result<GameWeek, AppError> {
        if let Ok(mut requests) = self.fixture_requests.lock() {
            requests.push(matchday);
        }
        if cancel.is_cancelled() {
            return Err(AppError::cancelled("scripted://fixtures"));
        }
        self.fixtures
            .lock()
            .ok()
            .and_then(|mut slot| slot.take())
            .unwrap_or_else(|| Err(AppError::api_no_data("exhausted", "scripted://fixtures")))
    }
}
