//! Presentational card for a single fixture.
//!
//! A card is a pure function of its [`Fixture`]: it never fetches, never
//! mutates and renders the same lines for the same input and time zone.
//!
//! ```text
//! Leicester City FC        - Manchester City FC        0-2
//!   18.11. 12:30  päättynyt  (puoliaika 0-1)
//! ```

use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;

use super::styled_line::{StyledLine, Tone, fit};
use crate::constants::ui::TEAM_NAME_WIDTH;
use crate::data_fetcher::models::{Fixture, FixtureStatus};

/// Lines a card occupies on the page, including the blank spacer after it
pub const CARD_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct FixtureCard {
    fixture: Fixture,
}

impl FixtureCard {
    pub fn new(fixture: Fixture) -> Self {
        Self { fixture }
    }

    pub fn fixture(&self) -> &Fixture {
        &self.fixture
    }

    /// Finnish label for the fixture's status
    pub fn status_label(&self) -> &'static str {
        match self.fixture.status {
            FixtureStatus::Scheduled => "ohjelmassa",
            FixtureStatus::Timed => "alkaa",
            FixtureStatus::Postponed => "siirretty",
            FixtureStatus::InPlay => "käynnissä",
            FixtureStatus::Canceled => "peruttu",
            FixtureStatus::Finished => "päättynyt",
        }
    }

    /// Full-time score as `home-away`, `None` until both sides are known
    pub fn score_text(&self) -> Option<String> {
        self.fixture
            .full_time_score()
            .map(|(home, away)| format!("{home}-{away}"))
    }

    pub fn half_time_text(&self) -> Option<String> {
        self.fixture
            .half_time_score()
            .map(|(home, away)| format!("(puoliaika {home}-{away})"))
    }

    /// Card lines using the local time zone
    pub fn lines(&self) -> Vec<StyledLine> {
        self.lines_in(&Local)
    }

    /// Card lines with the kickoff shown in `tz`
    pub fn lines_in<Tz>(&self, tz: &Tz) -> Vec<StyledLine>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut teams = StyledLine::new()
            .push(fit(&self.fixture.home_team_name, TEAM_NAME_WIDTH), Tone::Heading)
            .push(" - ", Tone::Text)
            .push(fit(&self.fixture.away_team_name, TEAM_NAME_WIDTH), Tone::Heading);
        if let Some(score) = self.score_text() {
            teams = teams.push(format!(" {score:>5}"), Tone::Score);
        }

        let mut details = StyledLine::new()
            .push("  ", Tone::Text)
            .push(format_kickoff_in(&self.fixture.date, tz), Tone::Text)
            .push("  ", Tone::Text)
            .push(self.status_label(), self.status_tone());
        if let Some(half_time) = self.half_time_text() {
            details = details.push(format!("  {half_time}"), Tone::Muted);
        }

        vec![teams, details]
    }

    fn status_tone(&self) -> Tone {
        match self.fixture.status {
            FixtureStatus::InPlay => Tone::Score,
            FixtureStatus::Postponed | FixtureStatus::Canceled => Tone::Error,
            FixtureStatus::Scheduled | FixtureStatus::Timed | FixtureStatus::Finished => {
                Tone::Muted
            }
        }
    }
}

impl From<Fixture> for FixtureCard {
    fn from(fixture: Fixture) -> Self {
        Self::new(fixture)
    }
}

/// Formats an RFC 3339 kickoff as `dd.mm. HH:MM` in `tz`.
///
/// Unparseable input is returned unchanged.
pub fn format_kickoff_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match DateTime::parse_from_rfc3339(raw) {
        Ok(kickoff) => kickoff
            .with_timezone(tz)
            .format("%d.%m. %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
