pub mod controller;
pub mod interactive;
pub mod page;
pub mod teletext;

pub use controller::{ErrorStage, LoadState, MatchdayController};
pub use interactive::run_interactive_ui;
pub use page::{create_loading_page, create_page};
