//! Export command: build each selected report and write it to disk.

use std::path::{Path, PathBuf};

use crate::{
    cli::types::{ExportFormat, LeagueId, Season},
    core::LeagueConfig,
    espn::http::LeagueClient,
    export::{export, Exported},
    report::{Report, ReportKind},
    Result,
};

use super::{game_logs, matchups, rosters, standings, transactions, waiver};

/// Parameters for the export command
#[derive(Debug, Clone)]
pub struct ExportParams {
    pub kinds: Vec<ReportKind>,
    pub format: ExportFormat,
    pub out_dir: PathBuf,
    pub league_id: Option<LeagueId>,
    pub season: Season,
}

/// Handle the export command.
///
/// Credentials are resolved before any request is made; a missing variable
/// aborts the whole run.
pub async fn handle_export(params: ExportParams) -> Result<()> {
    let config = LeagueConfig::from_env(params.league_id, params.season)?;
    log::info!("exporting league {} season {}", config.league_id, config.season);

    let client = LeagueClient::new(&config)?;
    run_export(&client, &params.kinds, params.format, &params.out_dir).await?;

    println!(
        "Data saved! Check {} for the output files.",
        params.out_dir.display()
    );
    Ok(())
}

/// Fetch, build and write `kinds` one after another, in the order given.
///
/// Stops at the first failure; files already written stay on disk.
pub async fn run_export(
    client: &LeagueClient,
    kinds: &[ReportKind],
    format: ExportFormat,
    out_dir: &Path,
) -> Result<Vec<Exported>> {
    let mut exported = Vec::with_capacity(kinds.len());

    for &kind in kinds {
        println!("Fetching {}...", kind.description());
        let report = build_report_for(client, kind).await?;

        let result = export(&report, format, out_dir)?;
        if let Exported::Written(path) = &result {
            println!("✓ Saved {} ({} records)", path.display(), report.len());
        }
        exported.push(result);
    }

    Ok(exported)
}

/// Build the report for one kind.
pub async fn build_report_for(client: &LeagueClient, kind: ReportKind) -> Result<Report> {
    match kind {
        ReportKind::Standings => standings::build(client).await,
        ReportKind::Rosters => rosters::build(client).await,
        ReportKind::Matchups => matchups::build_current(client).await,
        ReportKind::WaiverWire => waiver::build(client).await,
        ReportKind::Transactions => transactions::build(client).await,
        ReportKind::MatchupSchedule => matchups::build_schedule(client).await,
        ReportKind::GameLogs => game_logs::build(client).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{commands::tests::league_json, FflError};
    use tempfile::TempDir;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn config() -> LeagueConfig {
        LeagueConfig {
            league_id: LeagueId::new(777),
            season: Season::new(2024),
            swid: "{SWID}".to_string(),
            espn_s2: "s2".to_string(),
        }
    }

    async fn league_server() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/seasons/2024/segments/0/leagues/777"))
            .respond_with(ResponseTemplate::new(200).set_body_json(league_json()))
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn test_run_export_writes_in_given_order() {
        let server = league_server().await;
        let client = LeagueClient::with_base_url(&config(), server.uri()).unwrap();
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("dist");

        let kinds = [ReportKind::Standings, ReportKind::MatchupSchedule];
        let results = run_export(&client, &kinds, ExportFormat::Csv, &out)
            .await
            .unwrap();

        assert_eq!(results.len(), 2);
        assert_eq!(results[0], Exported::Written(out.join("standings.csv")));
        assert_eq!(results[1], Exported::Written(out.join("matchup_schedule.csv")));
        assert!(out.join("standings.csv").exists());
    }

    #[tokio::test]
    async fn test_run_export_fetch_failure_stops_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let client = LeagueClient::with_base_url(&config(), server.uri()).unwrap();
        let dir = TempDir::new().unwrap();

        let err = run_export(&client, &[ReportKind::Rosters], ExportFormat::Json, dir.path())
            .await
            .unwrap_err();
        assert!(matches!(err, FflError::Http(_)));
        assert!(!dir.path().join("rosters.json").exists());
    }

    #[tokio::test]
    async fn test_build_report_for_uses_kind_name() {
        let server = league_server().await;
        let client = LeagueClient::with_base_url(&config(), server.uri()).unwrap();

        for kind in [
            ReportKind::Standings,
            ReportKind::Rosters,
            ReportKind::Matchups,
            ReportKind::MatchupSchedule,
        ] {
            let report = build_report_for(&client, kind).await.unwrap();
            assert_eq!(report.name(), kind.base_name());
        }
    }
}
