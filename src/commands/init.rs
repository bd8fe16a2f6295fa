use crate::libs::config::Config;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {}

// Runs the interactive configuration wizard and saves the result.
pub fn cmd(_args: InitArgs) -> Result<()> {
    Config::init()?;
    Ok(())
}
