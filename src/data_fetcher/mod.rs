pub mod api;
pub mod models;

pub use api::{FootballDataClient, FootballDataSource};
pub use models::{Fixture, FixtureStatus, GameWeek, LeagueTable, Team};
