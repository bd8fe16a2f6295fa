use crate::libs::ledger;
use crate::libs::messages::Message;
use crate::libs::storage::StudyStore;
use crate::libs::study::Activity;
use crate::libs::view::View;
use crate::{msg_error, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SubArgs {
    #[command(subcommand)]
    command: SubCommands,
}

#[derive(Debug, Subcommand)]
enum SubCommands {
    #[command(about = "Add a subprocess to a process")]
    Add { process: String, name: String },
    #[command(about = "Remove a subprocess and all of its readings")]
    Remove { process: String, name: String },
    #[command(about = "Update subprocess metadata")]
    Set {
        process: String,
        name: String,
        #[arg(long, value_enum)]
        activity: Option<Activity>,
        #[arg(long)]
        remarks: Option<String>,
        #[arg(long)]
        persons: Option<u32>,
        #[arg(long)]
        qty: Option<u32>,
        /// Performance rating in percent, applied live to all reports.
        #[arg(long)]
        rating: Option<u32>,
    },
    #[command(about = "List subprocesses of a process")]
    List { process: String },
}

pub fn cmd(args: SubArgs) -> Result<()> {
    let store = StudyStore::new()?;
    let mut study = store.load();

    match args.command {
        SubCommands::Add { process, name } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                msg_error!(Message::SubprocessNameEmpty);
            } else if study.process(&process).is_none() {
                msg_error!(Message::ProcessNotFound(process));
            } else if study.add_subprocess(&process, &name).is_some() {
                store.save_or_warn(&mut study);
                msg_success!(Message::SubprocessAdded(process, name));
            }
        }
        SubCommands::Remove { process, name } => {
            let Some(proc) = study.process_mut(&process) else {
                msg_error!(Message::ProcessNotFound(process));
                return Ok(());
            };
            let Some(sub_id) = proc.subprocess_by_name(&name).map(|s| s.id) else {
                msg_error!(Message::SubprocessNotFound(name));
                return Ok(());
            };
            // Readings first, then the entity: two explicit steps composed
            // into one user-visible deletion.
            let deleted = ledger::delete_all_for(proc, sub_id);
            proc.remove_subprocess(sub_id);
            store.save_or_warn(&mut study);
            msg_success!(Message::SubprocessRemoved(name, deleted));
        }
        SubCommands::Set {
            process,
            name,
            activity,
            remarks,
            persons,
            qty,
            rating,
        } => {
            let Some(proc) = study.process_mut(&process) else {
                msg_error!(Message::ProcessNotFound(process));
                return Ok(());
            };
            let Some(sub_id) = proc.subprocess_by_name(&name).map(|s| s.id) else {
                msg_error!(Message::SubprocessNotFound(name));
                return Ok(());
            };
            if let Some(rating) = rating {
                if !(60..=150).contains(&rating) {
                    msg_warning!(Message::RatingOutsideRecommendedRange(rating));
                }
            }
            if let Some(sub) = proc.subprocess_mut(sub_id) {
                if let Some(activity) = activity {
                    sub.activity = activity;
                }
                if let Some(remarks) = remarks {
                    sub.remarks = remarks;
                }
                if let Some(persons) = persons {
                    sub.persons = persons.max(1);
                }
                if let Some(qty) = qty {
                    sub.production_qty = qty;
                }
                if let Some(rating) = rating {
                    sub.rating = rating;
                }
            }
            store.save_or_warn(&mut study);
            msg_success!(Message::SubprocessUpdated(name));
        }
        SubCommands::List { process } => match study.process(&process) {
            Some(proc) => View::subprocesses(proc)?,
            None => msg_error!(Message::ProcessNotFound(process)),
        },
    }

    Ok(())
}
