// src/teletext_ui/rows.rs - Content rows and their line layout

use crate::constants::ui::TEAM_NAME_WIDTH;
use crate::data_fetcher::models::Team;
use crate::ui::teletext::styled_line::fit;
use crate::ui::teletext::{FixtureCard, StyledLine, Tone};

#[derive(Debug, Clone, PartialEq)]
pub enum TeletextRow {
    /// Column captions above the standings
    StandingsHeader,
    Standing(Team),
    /// Section title preceded by a blank line, e.g. "KIERROS 12"
    SectionHeader(String),
    FixtureCard(FixtureCard),
    ErrorMessage(String),
    Notice(String),
}

impl TeletextRow {
    /// Lines the row occupies, blank spacer lines included
    pub fn lines(&self) -> Vec<StyledLine> {
        match self {
            TeletextRow::StandingsHeader => vec![standings_header_line()],
            TeletextRow::Standing(team) => vec![standing_line(team)],
            TeletextRow::SectionHeader(title) => vec![
                StyledLine::new(),
                StyledLine::new().push(title.clone(), Tone::Muted),
            ],
            TeletextRow::FixtureCard(card) => {
                let mut lines = card.lines();
                lines.push(StyledLine::new());
                lines
            }
            TeletextRow::ErrorMessage(message) => vec![
                StyledLine::new().push(message.clone(), Tone::Error),
                StyledLine::new(),
            ],
            TeletextRow::Notice(message) => vec![
                StyledLine::new().push(message.clone(), Tone::Text),
                StyledLine::new(),
            ],
        }
    }

    pub fn height(&self) -> u16 {
        self.lines().len() as u16
    }
}

/// Captions: played, won, drawn, lost, goals, points
pub fn standings_header_line() -> StyledLine {
    StyledLine::new().push(
        format!(
            "    {:<name_width$} {:>3} {:>3} {:>3} {:>3} {:>7} {:>3}",
            "",
            "O",
            "V",
            "T",
            "H",
            "Maalit",
            "P",
            name_width = TEAM_NAME_WIDTH
        ),
        Tone::Muted,
    )
}

pub fn standing_line(team: &Team) -> StyledLine {
    StyledLine::new()
        .push(format!("{:>2}. ", team.position), Tone::Text)
        .push(fit(&team.team_name, TEAM_NAME_WIDTH), Tone::Heading)
        .push(
            format!(
                " {:>3} {:>3} {:>3} {:>3} {:>3}-{:<3}",
                team.played_games,
                team.wins,
                team.draws,
                team.losses,
                team.goals,
                team.goals_against
            ),
            Tone::Text,
        )
        .push(format!(" {:>3}", team.points), Tone::Score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing_utils::TestDataBuilder;

    #[test]
    fn test_standing_line_layout() {
        let team = TestDataBuilder::create_team("Manchester City FC", 1, 11, 1, 0);
        let line = standing_line(&team).plain();
        assert_eq!(
            line,
            " 1. Manchester City FC        12  11   1   0  23-1    34"
        );
    }

    #[test]
    fn test_header_aligns_with_rows() {
        let team = TestDataBuilder::create_team("Arsenal FC", 5, 7, 1, 4);
        let header = standings_header_line().plain();
        let row = standing_line(&team).plain();
        assert_eq!(header.chars().count(), row.chars().count());
        assert!(header.ends_with("Maalit   P"));
    }

    #[test]
    fn test_row_heights() {
        assert_eq!(TeletextRow::StandingsHeader.height(), 1);
        assert_eq!(TeletextRow::SectionHeader("KIERROS 12".into()).height(), 2);
        assert_eq!(TeletextRow::ErrorMessage("virhe".into()).height(), 2);
        let card = FixtureCard::new(TestDataBuilder::create_upcoming_fixture(
            "Arsenal FC",
            "Chelsea FC",
            12,
        ));
        assert_eq!(
            TeletextRow::FixtureCard(card).height(),
            crate::ui::teletext::CARD_HEIGHT
        );
    }
}
