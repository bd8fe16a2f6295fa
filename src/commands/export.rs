use crate::libs::config::Config;
use crate::libs::export::{ExportBundle, ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::storage::StudyStore;
use crate::{msg_error, msg_info};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format; defaults to the configured one.
    #[arg(short, long, value_enum)]
    format: Option<ExportFormat>,
    /// Explicit output file path.
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Skip the confirmation prompt.
    #[arg(short, long)]
    yes: bool,
}

// Exports the three study tables and, only after a successful write, clears
// all recorded data. A failed write leaves the study untouched and suggests
// the alternate format.
pub fn cmd(args: ExportArgs) -> Result<()> {
    let store = StudyStore::new()?;
    let mut study = store.load();

    let bundle = ExportBundle::gather(&study);
    if bundle.is_empty() {
        msg_info!(Message::ExportNothingToExport);
        return Ok(());
    }

    let config = Config::read()?;
    let format = args.format.unwrap_or(config.export_format);

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ExportWillClearData.to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::ExportCancelled);
            return Ok(());
        }
    }

    // Persist the final state so a crash between write and clear cannot
    // lose unexported readings.
    store.save_or_warn(&mut study);

    let exporter = Exporter::new(format, args.output, config.export_dir.clone());
    match exporter.export(&bundle) {
        Ok(()) => {
            study.clear();
            store.clear()?;
            msg_info!(Message::ExportDataCleared);
        }
        Err(e) => {
            msg_error!(Message::ExportFailed(e.to_string()));
            msg_info!(Message::ExportTryAlternateFormat(format.alternate().to_string()));
        }
    }

    Ok(())
}
