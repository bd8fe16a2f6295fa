use crate::libs::ledger;
use crate::libs::messages::Message;
use crate::libs::storage::StudyStore;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ReadingsArgs {
    #[command(subcommand)]
    command: ReadingsCommands,
}

#[derive(Debug, Subcommand)]
enum ReadingsCommands {
    #[command(about = "List readings of a process, most recent first")]
    List { process: String },
    #[command(about = "Delete one reading, by displayed index or by subprocess")]
    Delete {
        process: String,
        /// 1-based index as shown by `readings list`.
        #[arg(long, conflicts_with = "last")]
        at: Option<usize>,
        /// Delete the most recent reading of this subprocess.
        #[arg(long)]
        last: Option<String>,
    },
}

pub fn cmd(args: ReadingsArgs) -> Result<()> {
    let store = StudyStore::new()?;
    let mut study = store.load();

    match args.command {
        ReadingsCommands::List { process } => {
            let Some(proc) = study.process(&process) else {
                msg_error!(Message::ProcessNotFound(process));
                return Ok(());
            };
            if proc.readings.is_empty() {
                msg_info!(Message::NoReadingsRecorded);
            } else {
                View::readings(proc)?;
            }
        }
        ReadingsCommands::Delete { process, at, last } => {
            let Some(proc) = study.process_mut(&process) else {
                msg_error!(Message::ProcessNotFound(process));
                return Ok(());
            };
            if let Some(at) = at {
                // The list shows readings most recent first; the index is
                // 1-based into that same ordering.
                match at.checked_sub(1).and_then(|i| ledger::delete_at_recent(proc, i)) {
                    Some(removed) => {
                        store.save_or_warn(&mut study);
                        msg_success!(Message::ReadingDeleted(removed.subprocess, removed.time_text));
                    }
                    None => msg_error!(Message::ReadingIndexOutOfRange(at)),
                }
            } else if let Some(sub_name) = last {
                let Some(sub_id) = proc.subprocess_by_name(&sub_name).map(|s| s.id) else {
                    msg_error!(Message::SubprocessNotFound(sub_name));
                    return Ok(());
                };
                match ledger::delete_last_for(proc, sub_id) {
                    Some(removed) => {
                        store.save_or_warn(&mut study);
                        msg_success!(Message::ReadingDeleted(removed.subprocess, removed.time_text));
                    }
                    None => msg_info!(Message::NoReadingsForSubprocess(sub_name)),
                }
            } else {
                msg_info!(Message::NoReadingsRecorded);
            }
        }
    }

    Ok(())
}
