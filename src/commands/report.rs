use crate::libs::frequency;
use crate::libs::messages::Message;
use crate::libs::metrics;
use crate::libs::storage::StudyStore;
use crate::libs::view::View;
use crate::{msg_error, msg_info};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Limit the report to one process.
    #[arg(long)]
    process: Option<String>,
    /// Also show the per-subprocess frequency table.
    #[arg(long)]
    frequencies: bool,
}

// Prints the summary and activity analysis tables for the current readings.
pub fn cmd(args: ReportArgs) -> Result<()> {
    let store = StudyStore::new()?;
    let study = store.load();

    let summaries = match &args.process {
        Some(name) => match study.process(name) {
            Some(proc) => metrics::summarize_process(proc),
            None => {
                msg_error!(Message::ProcessNotFound(name.clone()));
                return Ok(());
            }
        },
        None => metrics::summarize(&study),
    };

    if summaries.is_empty() {
        msg_info!(Message::NoReadingsRecorded);
        return Ok(());
    }

    View::summary(&summaries)?;

    let analysis = metrics::analyze_activity(&summaries);
    View::analysis(&analysis)?;

    if args.frequencies {
        for process in &study.processes {
            if args.process.as_deref().is_some_and(|name| name != process.name) {
                continue;
            }
            if process.readings.is_empty() {
                continue;
            }
            let frequencies = frequency::process_frequencies(process);
            View::frequencies(process, &frequencies)?;
        }
    }

    Ok(())
}
