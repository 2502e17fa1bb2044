pub mod fixtures;
pub mod table;

pub use fixtures::{
    Fixture, FixtureLinks, FixtureResult, FixtureStatus, GameWeek, HalfTimeScore, Link,
};
pub use table::{LeagueTable, Team, VenueRecord};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clone_is_independent() {
        let fixture = Fixture {
            home_team_name: "Chelsea FC".to_string(),
            away_team_name: "West Bromwich Albion FC".to_string(),
            date: "2017-11-18T15:00:00Z".to_string(),
            matchday: 12,
            status: FixtureStatus::Timed,
            result: None,
            links: None,
        };
        let mut cloned = fixture.clone();
        cloned.home_team_name.push_str(" (edited)");
        assert_eq!(fixture.home_team_name, "Chelsea FC");
        assert_ne!(fixture, cloned);
    }

    #[test]
    fn test_debug_implementations() {
        let week = GameWeek {
            count: Some(0),
            fixtures: vec![],
        };
        let debug_string = format!("{week:?}");
        assert!(debug_string.contains("GameWeek"));

        let table = LeagueTable {
            league_caption: Some("Premier League 2017/18".to_string()),
            matchday: Some(12),
            standing: vec![],
        };
        let debug_string = format!("{table:?}");
        assert!(debug_string.contains("LeagueTable"));
        assert!(debug_string.contains("12"));
    }
}
