//! ESPN Fantasy Football League Exporter
//!
//! A Rust library for pulling league data from the ESPN Fantasy Football v3
//! API and writing it out as flat CSV or JSON files, one per report.
//!
//! ## Features
//!
//! - **Seven Reports**: standings, rosters, current matchups, waiver wire,
//!   transactions, the matchup schedule and player game logs
//! - **Declared Schemas**: every report carries its field list and rejects
//!   records that do not match it
//! - **Two Formats**: CSV with a header row, or a pretty-printed JSON array
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ffl_export::{
//!     commands::export::{handle_export, ExportParams},
//!     ExportFormat, ReportKind, Season,
//! };
//!
//! # async fn example() -> ffl_export::Result<()> {
//! handle_export(ExportParams {
//!     kinds: vec![ReportKind::Standings, ReportKind::Rosters],
//!     format: ExportFormat::Json,
//!     out_dir: "dist".into(),
//!     league_id: None,
//!     season: Season::default(),
//! })
//! .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Private leagues need the league ID and both ESPN session cookies:
//! ```bash
//! export ESPN_FFL_LEAGUE_ID=123456
//! export ESPN_SWID='{XXXXXXXX-XXXX-XXXX-XXXX-XXXXXXXXXXXX}'
//! export ESPN_S2=AEB...
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod espn;
pub mod export;
pub mod report;

// Re-export commonly used types
pub use cli::types::{ExportFormat, LeagueId, PlayerId, Position, Season, TeamId, Week};
pub use error::{FflError, Result};
pub use export::{export, Exported};
pub use report::{FlatRecord, Report, ReportKind, Scalar};

pub const LEAGUE_ID_ENV_VAR: &str = "ESPN_FFL_LEAGUE_ID";
pub const ESPN_SWID_ENV_VAR: &str = "ESPN_SWID";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
