//! CLI argument definitions and parsing.

pub mod types;

use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use types::{ExportFormat, LeagueId, Season};

use crate::report::ReportKind;

/// Export ESPN fantasy football league data to CSV or JSON files.
///
/// At least one `--export-*` flag is required.
#[derive(Debug, Parser)]
#[clap(name = "ffl-export", version, about = "Export ESPN Fantasy Football league data")]
#[clap(group(ArgGroup::new("reports").required(true).multiple(true)))]
pub struct FflExport {
    /// Output format (`tabular-text` and `structured-text` are accepted as aliases).
    #[clap(long, value_enum, default_value_t = ExportFormat::Csv)]
    pub format: ExportFormat,

    /// Directory the files are written to; created if missing.
    #[clap(long, default_value = "dist")]
    pub out: PathBuf,

    /// League ID (or set `ESPN_FFL_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Export every report.
    #[clap(long, group = "reports")]
    pub export_all: bool,

    /// Export league standings.
    #[clap(long, group = "reports")]
    pub export_standings: bool,

    /// Export team rosters.
    #[clap(long, group = "reports")]
    pub export_rosters: bool,

    /// Export weekly player game logs.
    #[clap(long, group = "reports")]
    pub export_game_logs: bool,

    /// Export recent transactions.
    #[clap(long, group = "reports")]
    pub export_transactions: bool,

    /// Export the regular-season matchup schedule.
    #[clap(long, group = "reports")]
    pub export_matchup_schedule: bool,

    /// Export the current week's matchups.
    #[clap(long, group = "reports")]
    pub export_matchups: bool,

    /// Export the waiver wire.
    #[clap(long, group = "reports")]
    pub export_waiver: bool,
}

impl FflExport {
    /// Selected report kinds, each once, in `ReportKind::ALL` order.
    pub fn selected_reports(&self) -> Vec<ReportKind> {
        if self.export_all {
            return ReportKind::ALL.to_vec();
        }

        ReportKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                ReportKind::Standings => self.export_standings,
                ReportKind::Rosters => self.export_rosters,
                ReportKind::Matchups => self.export_matchups,
                ReportKind::WaiverWire => self.export_waiver,
                ReportKind::Transactions => self.export_transactions,
                ReportKind::MatchupSchedule => self.export_matchup_schedule,
                ReportKind::GameLogs => self.export_game_logs,
            })
            .collect()
    }
}
