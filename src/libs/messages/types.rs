#[derive(Debug, Clone)]
pub enum Message {
    // === PROCESS MESSAGES ===
    ProcessAdded(String),
    ProcessRenamed(String, String), // old, new
    ProcessDeleted(String),
    ProcessNotFound(String),
    ProcessNameTaken(String),
    ProcessNameEmpty,
    NoProcessesDefined,

    // === SUBPROCESS MESSAGES ===
    SubprocessAdded(String, String), // process, subprocess
    SubprocessRemoved(String, usize), // subprocess, deleted reading count
    SubprocessNotFound(String),
    SubprocessNameEmpty,
    SubprocessUpdated(String),
    RatingOutsideRecommendedRange(u32),

    // === TIMER MESSAGES ===
    TimerStarted(String),
    TimerStopped(String),
    TimerReset(String),
    TimerAlreadyRunning(String),
    TimerNotRunning(String),
    LapRecorded(String, String), // subprocess, formatted duration
    TimeRecorded(String),        // formatted duration
    SetupModeBlocksTimers,
    NoRunningTimers,
    WatchStarted(u64), // tick interval ms
    WatchStopped,

    // === READING MESSAGES ===
    ReadingDeleted(String, String), // subprocess, formatted duration
    ReadingIndexOutOfRange(usize),
    NoReadingsRecorded,
    NoReadingsForSubprocess(String),

    // === SETUP MODE MESSAGES ===
    SetupModeEntered,
    SetupModeExited,
    SetupModeUnchanged(bool), // current state

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportFailed(String),    // error
    ExportTryAlternateFormat(String), // alternate format name
    ExportNothingToExport,
    ExportWillClearData,
    ExportCancelled,
    ExportDataCleared,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError(String),
    PromptExportDir,
    PromptExportFormat,
    PromptTickInterval,

    // === STORAGE MESSAGES ===
    StudyLoadFailed(String),
    StudySaveFailed(String),
}
