//! Core utilities for the ESPN Fantasy Football exporter
//!
//! - `config`: league credentials resolved from the environment
//! - `filters`: ESPN `x-fantasy-filter` payloads
//! - `http`: request headers

pub mod config;
pub mod filters;
pub mod http;

pub use config::LeagueConfig;
pub use filters::{FantasyFilter, IntoHeaderValue};
pub use http::{league_header_map, FANTASY_FILTER};
