use crate::libs::messages::Message;
use crate::libs::storage::StudyStore;
use crate::libs::timer::{self, SystemClock};
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct SetupArgs {
    #[command(subcommand)]
    command: SetupCommands,
}

#[derive(Debug, Subcommand)]
enum SetupCommands {
    #[command(about = "Enter setup mode, stopping every running timer")]
    Enter,
    #[command(about = "Exit setup mode")]
    Exit,
}

pub fn cmd(args: SetupArgs) -> Result<()> {
    let store = StudyStore::new()?;
    let mut study = store.load();

    match args.command {
        SetupCommands::Enter => {
            if study.setup_mode {
                msg_info!(Message::SetupModeUnchanged(true));
            } else {
                timer::enter_setup(&mut study, &SystemClock);
                store.save_or_warn(&mut study);
                msg_success!(Message::SetupModeEntered);
            }
        }
        SetupCommands::Exit => {
            if !study.setup_mode {
                msg_info!(Message::SetupModeUnchanged(false));
            } else {
                timer::exit_setup(&mut study);
                store.save_or_warn(&mut study);
                msg_success!(Message::SetupModeExited);
            }
        }
    }

    Ok(())
}
