use crate::libs::messages::Message;
use crate::libs::storage::StudyStore;
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct ProcessArgs {
    #[command(subcommand)]
    command: ProcessCommands,
}

#[derive(Debug, Subcommand)]
enum ProcessCommands {
    #[command(about = "Add a new process")]
    Add { name: String },
    #[command(about = "Rename a process (readings keep their captured name)")]
    Rename { name: String, new_name: String },
    #[command(about = "Delete a process with its subprocesses and readings")]
    Delete { name: String },
    #[command(about = "List processes")]
    List,
}

pub fn cmd(args: ProcessArgs) -> Result<()> {
    let store = StudyStore::new()?;
    let mut study = store.load();

    match args.command {
        ProcessCommands::Add { name } => {
            let name = name.trim().to_string();
            if name.is_empty() {
                msg_error!(Message::ProcessNameEmpty);
            } else if study.process(&name).is_some() {
                msg_error!(Message::ProcessNameTaken(name));
            } else if study.add_process(&name).is_some() {
                store.save_or_warn(&mut study);
                msg_success!(Message::ProcessAdded(name));
            }
        }
        ProcessCommands::Rename { name, new_name } => {
            let new_name = new_name.trim().to_string();
            if new_name.is_empty() {
                msg_error!(Message::ProcessNameEmpty);
            } else if study.process(&new_name).is_some() {
                msg_error!(Message::ProcessNameTaken(new_name));
            } else {
                match study.process_mut(&name) {
                    Some(process) => {
                        process.name = new_name.clone();
                        store.save_or_warn(&mut study);
                        msg_success!(Message::ProcessRenamed(name, new_name));
                    }
                    None => msg_error!(Message::ProcessNotFound(name)),
                }
            }
        }
        ProcessCommands::Delete { name } => {
            if study.remove_process(&name) {
                store.save_or_warn(&mut study);
                msg_success!(Message::ProcessDeleted(name));
            } else {
                msg_error!(Message::ProcessNotFound(name));
            }
        }
        ProcessCommands::List => {
            if study.processes.is_empty() {
                msg_info!(Message::NoProcessesDefined);
            } else {
                View::processes(&study)?;
            }
        }
    }

    Ok(())
}
