//! ESPN Fantasy Football API: typed payloads, the league client and derived values.

pub mod compute;
pub mod http;
pub mod types;
