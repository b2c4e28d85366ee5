//! Entry point: parse CLI and run the export.

use anyhow::Context;
use clap::Parser;
use ffl_export::{
    cli::FflExport,
    commands::export::{handle_export, ExportParams},
};

/// Run the CLI.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let app = FflExport::parse();

    let params = ExportParams {
        kinds: app.selected_reports(),
        format: app.format,
        out_dir: app.out,
        league_id: app.league_id,
        season: app.season,
    };

    handle_export(params)
        .await
        .context("league export failed")?;

    Ok(())
}
