use serde::{Deserialize, Serialize};

/// Lifecycle of a fixture. The API only ever sends these six values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FixtureStatus {
    Scheduled,
    Timed,
    Postponed,
    InPlay,
    Canceled,
    Finished,
}

/// Half-time goals; in-play fixtures may send nulls before the break
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HalfTimeScore {
    #[serde(rename = "goalsHomeTeam", default)]
    pub goals_home_team: Option<u32>,
    #[serde(rename = "goalsAwayTeam", default)]
    pub goals_away_team: Option<u32>,
}

impl HalfTimeScore {
    /// Half-time score, only when both sides are known
    pub fn score(&self) -> Option<(u32, u32)> {
        match (self.goals_home_team, self.goals_away_team) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }
}

/// Score block of a fixture; every part is absent until played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FixtureResult {
    #[serde(rename = "goalsHomeTeam", default)]
    pub goals_home_team: Option<u32>,
    #[serde(rename = "goalsAwayTeam", default)]
    pub goals_away_team: Option<u32>,
    #[serde(rename = "halfTime", default, skip_serializing_if = "Option::is_none")]
    pub half_time: Option<HalfTimeScore>,
}

impl FixtureResult {
    /// Full-time score, only when both sides are known
    pub fn full_time(&self) -> Option<(u32, u32)> {
        match (self.goals_home_team, self.goals_away_team) {
            (Some(home), Some(away)) => Some((home, away)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub href: String,
}

/// Related resources of a fixture. Carried through, never followed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixtureLinks {
    #[serde(rename = "self")]
    pub self_link: Link,
    pub competition: Link,
    #[serde(rename = "homeTeam")]
    pub home_team: Link,
    #[serde(rename = "awayTeam")]
    pub away_team: Link,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(rename = "homeTeamName")]
    pub home_team_name: String,
    #[serde(rename = "awayTeamName")]
    pub away_team_name: String,
    pub date: String,
    pub matchday: u32,
    pub status: FixtureStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<FixtureResult>,
    #[serde(rename = "_links", default, skip_serializing_if = "Option::is_none")]
    pub links: Option<FixtureLinks>,
}

impl Fixture {
    /// Full-time score if the fixture has one
    pub fn full_time_score(&self) -> Option<(u32, u32)> {
        self.result.as_ref().and_then(FixtureResult::full_time)
    }

    /// Half-time score if the fixture has one
    pub fn half_time_score(&self) -> Option<(u32, u32)> {
        self.result
            .as_ref()
            .and_then(|result| result.half_time)
            .and_then(|half_time| half_time.score())
    }
}

/// All fixtures of one matchday, in API order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameWeek {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    pub fixtures: Vec<Fixture>,
}
