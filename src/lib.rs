//! Fantasy Premier League mini-league statistics.
//!
//! Fetches a classic league's standings, the global player catalogue, live
//! gameweek scores and every manager's history and squads, then derives
//! per-manager season statistics and per-player league ownership.

mod cache;
mod client;
mod error;
mod fpl_api;
mod index;
pub mod league;
pub mod model;
mod provider;

pub use client::FplClient;
pub use error::{FplError, Result};
pub use index::LeagueIndex;
pub use league::{compute_league_stats, fetch_league_data, league_stats, LeagueData, ManagerData};
pub use model::*;
pub use provider::SportsDataProvider;
