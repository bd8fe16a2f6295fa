use crate::libs::config::Config;
use crate::libs::formatter::format_time;
use crate::libs::messages::Message;
use crate::libs::storage::StudyStore;
use crate::libs::timer::{self, Clock, SystemClock};
use crate::libs::view::View;
use crate::{msg_error, msg_info, msg_print, msg_success, msg_warning};
use anyhow::Result;
use clap::{Args, Subcommand};
use std::io::{self, Write};
use tokio::time::{interval, Duration};

#[derive(Debug, Args)]
pub struct TimerArgs {
    #[command(subcommand)]
    command: TimerCommands,
}

#[derive(Debug, Subcommand)]
enum TimerCommands {
    #[command(about = "Start the process lap timer, or a subprocess stopwatch with --sub")]
    Start {
        process: String,
        #[arg(long)]
        sub: Option<String>,
    },
    #[command(about = "Stop a timer; stopping a subprocess stopwatch records a reading")]
    Stop {
        process: String,
        #[arg(long)]
        sub: Option<String>,
    },
    #[command(about = "Record a lap against a subprocess while the process timer runs")]
    Lap { process: String, sub: String },
    #[command(about = "Reset a timer without touching recorded readings")]
    Reset {
        process: String,
        #[arg(long)]
        sub: Option<String>,
    },
    #[command(about = "Live display of all running timers")]
    Watch,
}

pub async fn cmd(args: TimerArgs) -> Result<()> {
    let store = StudyStore::new()?;
    let mut study = store.load();
    let clock = SystemClock;

    match args.command {
        TimerCommands::Start { process, sub } => {
            if study.setup_mode {
                msg_warning!(Message::SetupModeBlocksTimers);
                return Ok(());
            }
            let Some(proc) = study.process_mut(&process) else {
                msg_error!(Message::ProcessNotFound(process));
                return Ok(());
            };
            match sub {
                None => {
                    if proc.timer.running {
                        msg_warning!(Message::TimerAlreadyRunning(process));
                    } else {
                        timer::start_process(proc, &clock);
                        store.save_or_warn(&mut study);
                        msg_success!(Message::TimerStarted(process));
                    }
                }
                Some(sub_name) => {
                    let Some(sub) = proc.subprocesses.iter_mut().find(|s| s.name == sub_name) else {
                        msg_error!(Message::SubprocessNotFound(sub_name));
                        return Ok(());
                    };
                    if sub.timer.running {
                        msg_warning!(Message::TimerAlreadyRunning(sub_name));
                    } else {
                        timer::start_subprocess(sub, &clock);
                        store.save_or_warn(&mut study);
                        msg_success!(Message::TimerStarted(sub_name));
                    }
                }
            }
        }
        TimerCommands::Stop { process, sub } => {
            let Some(proc) = study.process_mut(&process) else {
                msg_error!(Message::ProcessNotFound(process));
                return Ok(());
            };
            match sub {
                None => {
                    if !proc.timer.running {
                        msg_warning!(Message::TimerNotRunning(process));
                    } else {
                        timer::stop_process(proc, &clock);
                        store.save_or_warn(&mut study);
                        msg_success!(Message::TimerStopped(process));
                    }
                }
                Some(sub_name) => {
                    let Some(sub_id) = proc.subprocess_by_name(&sub_name).map(|s| s.id) else {
                        msg_error!(Message::SubprocessNotFound(sub_name));
                        return Ok(());
                    };
                    match timer::stop_subprocess(proc, sub_id, &clock) {
                        Some(elapsed) => {
                            store.save_or_warn(&mut study);
                            msg_success!(Message::TimeRecorded(format_time(elapsed)));
                        }
                        None => msg_warning!(Message::TimerNotRunning(sub_name)),
                    }
                }
            }
        }
        TimerCommands::Lap { process, sub } => {
            let Some(proc) = study.process_mut(&process) else {
                msg_error!(Message::ProcessNotFound(process));
                return Ok(());
            };
            if !proc.timer.running {
                msg_warning!(Message::TimerNotRunning(process));
                return Ok(());
            }
            let Some(sub_id) = proc.subprocess_by_name(&sub).map(|s| s.id) else {
                msg_error!(Message::SubprocessNotFound(sub));
                return Ok(());
            };
            if let Some(lap_ms) = timer::record_lap(proc, sub_id, &clock) {
                store.save_or_warn(&mut study);
                msg_success!(Message::LapRecorded(sub, format_time(lap_ms)));
            }
        }
        TimerCommands::Reset { process, sub } => {
            let Some(proc) = study.process_mut(&process) else {
                msg_error!(Message::ProcessNotFound(process));
                return Ok(());
            };
            match sub {
                None => {
                    timer::reset_process(proc);
                    store.save_or_warn(&mut study);
                    msg_success!(Message::TimerReset(process));
                }
                Some(sub_name) => {
                    let Some(sub) = proc.subprocesses.iter_mut().find(|s| s.name == sub_name) else {
                        msg_error!(Message::SubprocessNotFound(sub_name));
                        return Ok(());
                    };
                    timer::reset_subprocess(sub);
                    store.save_or_warn(&mut study);
                    msg_success!(Message::TimerReset(sub_name));
                }
            }
        }
        TimerCommands::Watch => {
            let config = Config::read()?;
            if timer::sample(&study, clock.now_ms()).is_empty() {
                msg_info!(Message::NoRunningTimers);
                return Ok(());
            }
            msg_print!(Message::WatchStarted(config.tick_interval_ms));

            let mut ticker = interval(Duration::from_millis(config.tick_interval_ms.max(1)));
            loop {
                tokio::select! {
                    _ = tokio::signal::ctrl_c() => break,
                    _ = ticker.tick() => {
                        let samples = timer::sample(&study, clock.now_ms());
                        print!("\r{}", View::samples(&samples));
                        io::stdout().flush()?;
                    }
                }
            }
            println!();
            msg_print!(Message::WatchStopped);
        }
    }

    Ok(())
}
