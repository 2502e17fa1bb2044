use serde::{Deserialize, Serialize};

/// Home or away split of a team's season record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct VenueRecord {
    pub goals: u32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

/// One row of the league table as returned by the API.
///
/// Nothing here is checked client-side; `wins + draws + losses == played_games`
/// is the API's guarantee, not ours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "teamName")]
    pub team_name: String,
    #[serde(rename = "crestURI", default)]
    pub crest_uri: Option<String>,
    pub position: u32,
    pub points: i32,
    #[serde(rename = "playedGames")]
    pub played_games: u32,
    #[serde(default)]
    pub home: VenueRecord,
    #[serde(default)]
    pub away: VenueRecord,
    pub draws: u32,
    #[serde(rename = "goalDifference")]
    pub goal_difference: i32,
    pub goals: u32,
    #[serde(rename = "goalsAgainst")]
    pub goals_against: u32,
    pub losses: u32,
    pub wins: u32,
}

/// League standings as of the current matchday
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueTable {
    #[serde(
        rename = "leagueCaption",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub league_caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matchday: Option<u32>,
    #[serde(alias = "table")]
    pub standing: Vec<Team>,
}

impl LeagueTable {
    /// The matchday to request fixtures for.
    ///
    /// A missing or zero matchday yields `None`; the caller must not
    /// substitute a default.
    pub fn current_matchday(&self) -> Option<u32> {
        self.matchday.filter(|&matchday| matchday > 0)
    }
}
