pub mod colors;
pub mod fixture_card;
pub mod loading_indicator;
pub mod styled_line;

pub use fixture_card::{CARD_HEIGHT, FixtureCard, format_kickoff_in};
pub use loading_indicator::LoadingIndicator;
pub use styled_line::{Segment, StyledLine, Tone};
