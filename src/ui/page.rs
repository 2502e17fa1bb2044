//! Lays out controller snapshots as teletext pages

use crate::constants::ui::PAGE_NUMBER;
use crate::data_fetcher::api::FootballDataSource;
use crate::teletext_ui::TeletextPage;
use crate::ui::controller::{ErrorStage, LoadState, MatchdayController};
use crate::ui::teletext::LoadingIndicator;

const TITLE: &str = "JALKAPALLO";
const DEFAULT_SUBHEADER: &str = "SARJATAULUKKO";

fn empty_page(subheader: &str, show_footer: bool, ignore_height_limit: bool) -> TeletextPage {
    TeletextPage::new(
        PAGE_NUMBER,
        TITLE.to_string(),
        subheader.to_string(),
        show_footer,
        ignore_height_limit,
    )
}

fn loading_message(state: &LoadState) -> Option<&'static str> {
    match state {
        LoadState::Idle | LoadState::TableLoading => Some("Haetaan sarjataulukkoa..."),
        LoadState::FixturesLoading => Some("Haetaan otteluita..."),
        LoadState::Ready | LoadState::Errored { .. } => None,
    }
}

/// Page shown while the controller task still owns its data
pub fn create_loading_page(
    state: &LoadState,
    show_footer: bool,
    ignore_height_limit: bool,
) -> TeletextPage {
    let mut page = empty_page(DEFAULT_SUBHEADER, show_footer, ignore_height_limit);
    page.set_loading_indicator(loading_message(state).map(LoadingIndicator::new));
    page
}

/// Builds the page for the controller's current state.
///
/// Whatever was loaded is always shown; a failed stage adds an error row
/// below it.
pub fn create_page<S: FootballDataSource>(
    controller: &MatchdayController<S>,
    show_footer: bool,
    ignore_height_limit: bool,
) -> TeletextPage {
    let table = controller.table();
    let subheader = table
        .and_then(|t| t.league_caption.as_deref())
        .map(str::to_uppercase)
        .unwrap_or_else(|| DEFAULT_SUBHEADER.to_string());
    let mut page = empty_page(&subheader, show_footer, ignore_height_limit);
    let state = controller.state();
    page.set_loading_indicator(loading_message(state).map(LoadingIndicator::new));

    if let Some(table) = table {
        if table.standing.is_empty() {
            page.add_notice("Sarjataulukko on tyhjä");
        } else {
            page.add_standings(&table.standing);
        }
    }

    if let Some(matchday) = controller.matchday() {
        page.set_header_note(format!("KIERROS {matchday}"));
        page.add_section_header(format!("OTTELUT, KIERROS {matchday}"));
    }

    match state {
        LoadState::Ready => {
            let cards = controller.fixture_cards();
            if cards.is_empty() {
                page.add_notice("Ei otteluita tällä kierroksella");
            }
            for card in cards {
                page.add_fixture_card(card);
            }
        }
        LoadState::Errored { stage, message } => {
            let prefix = match stage {
                ErrorStage::Table => "Sarjataulukon haku epäonnistui",
                ErrorStage::Fixtures => "Otteluiden haku epäonnistui",
            };
            page.add_error_message(&format!("{prefix}: {message}"));
            page.set_error_warning(true);
        }
        LoadState::Idle | LoadState::TableLoading | LoadState::FixturesLoading => {}
    }

    page
}
