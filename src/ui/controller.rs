//! Load sequencing for one page view: league table first, then the fixtures
//! of the table's current matchday.

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use crate::data_fetcher::api::FootballDataSource;
use crate::data_fetcher::models::{GameWeek, LeagueTable};
use crate::error::{AppError, FetchErrorKind};
use crate::ui::teletext::FixtureCard;

/// Which request a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    Table,
    Fixtures,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Idle,
    TableLoading,
    FixturesLoading,
    Ready,
    Errored { stage: ErrorStage, message: String },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::TableLoading | LoadState::FixturesLoading)
    }

    /// Whether `load` has run to an end state
    pub fn is_finished(&self) -> bool {
        matches!(self, LoadState::Ready | LoadState::Errored { .. })
    }
}

/// Drives the two dependent fetches and owns their results.
///
/// `table` and `game_week` are each written at most once. A failure never
/// clears what was already loaded.
pub struct MatchdayController<S> {
    source: S,
    state: LoadState,
    table: Option<LeagueTable>,
    game_week: Option<GameWeek>,
    updates: watch::Sender<LoadState>,
}

impl<S: FootballDataSource> MatchdayController<S> {
    pub fn new(source: S) -> Self {
        let (updates, _) = watch::channel(LoadState::Idle);
        Self {
            source,
            state: LoadState::Idle,
            table: None,
            game_week: None,
            updates,
        }
    }

    /// Receiver that observes every state transition
    pub fn subscribe(&self) -> watch::Receiver<LoadState> {
        self.updates.subscribe()
    }

    /// Fetches the table, then the fixtures of its current matchday.
    ///
    /// Runs once per controller; calls after the first are ignored.
    pub async fn load(&mut self, cancel: &CancellationToken) {
        if self.state != LoadState::Idle {
            warn!("Load requested in state {:?}, ignoring", self.state);
            return;
        }

        self.set_state(LoadState::TableLoading);
        let table = match self.source.get_table(cancel).await {
            Ok(table) => table,
            Err(e) => {
                self.fail(ErrorStage::Table, &e);
                return;
            }
        };

        let matchday = table.current_matchday();
        info!(
            "League table loaded with {} teams, matchday {:?}",
            table.standing.len(),
            matchday
        );
        self.table = Some(table);

        let Some(matchday) = matchday else {
            self.fail(ErrorStage::Fixtures, &AppError::MissingMatchday);
            return;
        };

        self.set_state(LoadState::FixturesLoading);
        match self.source.get_fixtures(matchday, cancel).await {
            Ok(week) => {
                info!(
                    "Game week {matchday} loaded with {} fixtures",
                    week.fixtures.len()
                );
                self.game_week = Some(week);
                self.set_state(LoadState::Ready);
            }
            Err(e) => self.fail(ErrorStage::Fixtures, &e),
        }
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn table(&self) -> Option<&LeagueTable> {
        self.table.as_ref()
    }

    pub fn game_week(&self) -> Option<&GameWeek> {
        self.game_week.as_ref()
    }

    /// Matchday the fixtures were requested for
    pub fn matchday(&self) -> Option<u32> {
        self.table.as_ref().and_then(LeagueTable::current_matchday)
    }

    /// One card per fixture, in game-week order
    pub fn fixture_cards(&self) -> Vec<FixtureCard> {
        self.game_week
            .iter()
            .flat_map(|week| week.fixtures.iter().cloned())
            .map(FixtureCard::new)
            .collect()
    }

    fn fail(&mut self, stage: ErrorStage, e: &AppError) {
        if e.kind() == FetchErrorKind::Cancelled {
            warn!("{stage:?} request cancelled: {e}");
        } else {
            error!("Failed to load {stage:?}: {e}");
        }
        self.set_state(LoadState::Errored {
            stage,
            message: e.user_message(),
        });
    }

    fn set_state(&mut self, state: LoadState) {
        self.state = state.clone();
        self.updates.send_replace(state);
    }
}
