//! Application configuration management.
//!
//! Settings are stored as pretty-printed JSON in the platform-specific
//! application data directory, next to the study record. Every field is
//! optional or has a default, so a missing or partially filled file never
//! prevents the application from running. The interactive setup wizard
//! (`motus init`) pre-fills prompts with current values.

use crate::libs::export::ExportFormat;
use crate::libs::messages::Message;
use crate::libs::storage::DataStorage;
use crate::{msg_success, msg_warning};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Default interval between display refreshes while watching timers.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 10;

fn default_tick_interval() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Config {
    /// Directory export files are written to. Defaults to the current
    /// working directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,

    /// Export format used when `--format` is not given on the command line.
    #[serde(default)]
    pub export_format: ExportFormat,

    /// Refresh interval in milliseconds for the watch display.
    #[serde(default = "default_tick_interval")]
    pub tick_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export_dir: None,
            export_format: ExportFormat::default(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
        }
    }
}

impl Config {
    /// Reads the configuration file, or returns defaults when none exists.
    /// A file that exists but does not parse is treated as absent with a
    /// warning so one bad edit never locks the user out.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }
        let config_str = fs::read_to_string(config_file_path)?;
        match serde_json::from_str(&config_str) {
            Ok(config) => Ok(config),
            Err(e) => {
                msg_warning!(Message::ConfigParseError(e.to_string()));
                Ok(Config::default())
            }
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let current = Self::read().unwrap_or_default();

        let export_dir: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportDir.to_string())
            .default(
                current
                    .export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| ".".to_string()),
            )
            .interact_text()?;

        let formats = [ExportFormat::Excel, ExportFormat::Csv];
        let format_default = formats
            .iter()
            .position(|f| *f == current.export_format)
            .unwrap_or(0);
        let format_index = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportFormat.to_string())
            .items(&formats.iter().map(|f| f.to_string()).collect::<Vec<_>>())
            .default(format_default)
            .interact()?;

        let tick_interval_ms: u64 = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTickInterval.to_string())
            .default(current.tick_interval_ms)
            .interact_text()?;

        let config = Config {
            export_dir: Some(PathBuf::from(export_dir)),
            export_format: formats[format_index],
            tick_interval_ms,
        };
        config.save()?;
        msg_success!(Message::ConfigSaved);
        Ok(config)
    }
}
