//! Display implementation for motus application messages.
//!
//! All user-facing text lives here, in one place, so commands never format
//! strings ad hoc. Each `Message` variant maps to exactly one line of
//! human-readable text; parameters are interpolated type-safely.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let message = match self {
            // === PROCESS MESSAGES ===
            Message::ProcessAdded(name) => format!("Process '{}' added", name),
            Message::ProcessRenamed(old, new) => format!("Process '{}' renamed to '{}'", old, new),
            Message::ProcessDeleted(name) => format!("Process '{}' deleted along with its subprocesses and readings", name),
            Message::ProcessNotFound(name) => format!("Process '{}' not found", name),
            Message::ProcessNameTaken(name) => format!("A process named '{}' already exists", name),
            Message::ProcessNameEmpty => "Process name must not be empty".to_string(),
            Message::NoProcessesDefined => "No processes defined yet. Add one with 'motus process add <name>'".to_string(),

            // === SUBPROCESS MESSAGES ===
            Message::SubprocessAdded(process, sub) => format!("Subprocess '{}' added to process '{}'", sub, process),
            Message::SubprocessRemoved(sub, count) => {
                format!("Subprocess '{}' removed together with {} reading(s)", sub, count)
            }
            Message::SubprocessNotFound(name) => format!("Subprocess '{}' not found", name),
            Message::SubprocessNameEmpty => "Subprocess name must not be empty".to_string(),
            Message::SubprocessUpdated(name) => format!("Subprocess '{}' updated", name),
            Message::RatingOutsideRecommendedRange(rating) => {
                format!("Rating {}% is outside the recommended 60-150% range", rating)
            }

            // === TIMER MESSAGES ===
            Message::TimerStarted(name) => format!("Timer started for '{}'", name),
            Message::TimerStopped(name) => format!("Timer stopped for '{}'", name),
            Message::TimerReset(name) => format!("Timer reset for '{}' (readings kept)", name),
            Message::TimerAlreadyRunning(name) => format!("Timer for '{}' is already running", name),
            Message::TimerNotRunning(name) => format!("Timer for '{}' is not running", name),
            Message::LapRecorded(sub, time) => format!("Lap recorded for '{}': {}", sub, time),
            Message::TimeRecorded(time) => format!("Time recorded: {}", time),
            Message::SetupModeBlocksTimers => "Setup mode is active; exit it before starting timers".to_string(),
            Message::NoRunningTimers => "No timers are running".to_string(),
            Message::WatchStarted(interval) => format!("Watching running timers (tick {} ms, Ctrl+C to stop)", interval),
            Message::WatchStopped => "Watch stopped".to_string(),

            // === READING MESSAGES ===
            Message::ReadingDeleted(sub, time) => format!("Deleted reading {} of '{}'", time, sub),
            Message::ReadingIndexOutOfRange(index) => format!("No reading at index {}", index),
            Message::NoReadingsRecorded => "No readings recorded yet".to_string(),
            Message::NoReadingsForSubprocess(name) => format!("No readings recorded for '{}'", name),

            // === SETUP MODE MESSAGES ===
            Message::SetupModeEntered => "Setup mode entered; all running timers were stopped".to_string(),
            Message::SetupModeExited => "Setup mode exited".to_string(),
            Message::SetupModeUnchanged(active) => {
                if *active {
                    "Setup mode is already active".to_string()
                } else {
                    "Setup mode is not active".to_string()
                }
            }

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportFailed(err) => format!("Export failed: {}", err),
            Message::ExportTryAlternateFormat(format) => {
                format!("Your data has been preserved. You can retry with '--format {}'", format)
            }
            Message::ExportNothingToExport => "No readings to export".to_string(),
            Message::ExportWillClearData => {
                "After a successful export all recorded data will be removed. Continue?".to_string()
            }
            Message::ExportCancelled => "Export cancelled".to_string(),
            Message::ExportDataCleared => "All study data has been cleared after export".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigParseError(err) => format!("Failed to parse configuration: {}", err),
            Message::PromptExportDir => "Export directory".to_string(),
            Message::PromptExportFormat => "Default export format".to_string(),
            Message::PromptTickInterval => "Watch tick interval (ms)".to_string(),

            // === STORAGE MESSAGES ===
            Message::StudyLoadFailed(err) => {
                format!("Could not read the saved study ({}); starting with an empty one", err)
            }
            Message::StudySaveFailed(err) => format!("Could not save the study: {}", err),
        };
        write!(f, "{}", message)
    }
}
