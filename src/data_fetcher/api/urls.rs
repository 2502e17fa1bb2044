//! URL building utilities for API endpoints

/// Builds the league table URL for a competition.
///
/// # Example
/// ```
/// use football_scores::data_fetcher::api::build_table_url;
///
/// let url = build_table_url("http://api.football-data.org/v1/competitions", 445);
/// assert_eq!(url, "http://api.football-data.org/v1/competitions/445/leagueTable");
/// ```
pub fn build_table_url(base_url: &str, competition_id: u32) -> String {
    let base_url = base_url.trim_end_matches('/');
    format!("{base_url}/{competition_id}/leagueTable")
}

/// Builds the fixtures URL for one matchday of a competition.
///
/// # Example
/// ```
/// use football_scores::data_fetcher::api::build_fixtures_url;
///
/// let url = build_fixtures_url("http://api.football-data.org/v1/competitions/", 445, 12);
/// assert_eq!(url, "http://api.football-data.org/v1/competitions/445/fixtures?matchday=12");
/// ```
pub fn build_fixtures_url(base_url: &str, competition_id: u32, matchday: u32) -> String {
    let base_url = base_url.trim_end_matches('/');
    format!("{base_url}/{competition_id}/fixtures?matchday={matchday}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_table_url() {
        assert_eq!(
            build_table_url("http://localhost:8080", 445),
            "http://localhost:8080/445/leagueTable"
        );
    }

    #[test]
    fn test_build_fixtures_url() {
        assert_eq!(
            build_fixtures_url("http://localhost:8080", 445, 1),
            "http://localhost:8080/445/fixtures?matchday=1"
        );
    }

    #[test]
    fn test_trailing_slashes_are_normalized() {
        assert_eq!(
            build_table_url("http://localhost:8080//", 2021),
            "http://localhost:8080/2021/leagueTable"
        );
        assert_eq!(
            build_fixtures_url("http://localhost:8080/", 2021, 38),
            "http://localhost:8080/2021/fixtures?matchday=38"
        );
    }
}
