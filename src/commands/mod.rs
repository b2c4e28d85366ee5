//! Report builders and the export command.
//!
//! Each report module pairs a pure `*_report` function (typed ESPN data in,
//! [`Report`](crate::report::Report) out) with an async `build` that fetches
//! what it needs through a [`LeagueClient`](crate::espn::http::LeagueClient).

pub mod common;
pub mod export;
pub mod game_logs;
pub mod matchups;
pub mod rosters;
pub mod standings;
pub mod transactions;
pub mod waiver;
