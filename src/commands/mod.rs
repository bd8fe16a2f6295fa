pub mod export;
pub mod init;
pub mod process;
pub mod readings;
pub mod report;
pub mod setup;
pub mod sub;
pub mod timer;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Manage processes")]
    Process(process::ProcessArgs),
    #[command(about = "Manage subprocesses of a process")]
    Sub(sub::SubArgs),
    #[command(about = "Control process and subprocess timers")]
    Timer(timer::TimerArgs),
    #[command(about = "List and delete recorded readings")]
    Readings(readings::ReadingsArgs),
    #[command(about = "Enter or exit setup mode")]
    Setup(setup::SetupArgs),
    #[command(about = "Show the process summary and activity analysis")]
    Report(report::ReportArgs),
    #[command(about = "Export the study and clear recorded data")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Process(args) => process::cmd(args),
            Commands::Sub(args) => sub::cmd(args),
            Commands::Timer(args) => timer::cmd(args).await,
            Commands::Readings(args) => readings::cmd(args),
            Commands::Setup(args) => setup::cmd(args),
            Commands::Report(args) => report::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
