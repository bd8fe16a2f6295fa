//! Data model and application context for a time-and-motion study.
//!
//! A [`Study`] is the single explicitly-owned application context: the
//! process collection, the setup-mode flag and the identifier counter. Every
//! core operation takes a `Study` (or a part of it) by reference; there is no
//! ambient global state.
//!
//! ## Identity
//!
//! Processes and subprocesses carry a stable, opaque [`EntityId`] assigned at
//! creation from the study-level counter. Names are display attributes only:
//! readings reference their subprocess by id, so renames and duplicate names
//! cannot orphan or conflate historical data. (The tool this design replaces
//! keyed everything by name; the id-based ledger is a deliberate behavior
//! change.)
//!
//! ## Persistence shape
//!
//! The whole model is serialized wholesale into one JSON record. Every field
//! is `#[serde(default)]`-tolerant so that a record written by an older or
//! newer build loads without errors; unknown drift degrades to defaults
//! instead of failing the session.

use crate::libs::formatter::{self, ZERO_TIME};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable opaque identifier for processes and subprocesses.
///
/// Assigned once at creation and never reused within a study.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Work-measurement activity classification of a subprocess.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
pub enum Activity {
    /// Not yet classified.
    #[default]
    #[serde(rename = "")]
    #[value(skip)]
    Unset,
    /// Value Added.
    #[serde(rename = "VA")]
    Va,
    /// Non-Value Added.
    #[serde(rename = "NVA")]
    Nva,
    /// Required Non-Value Added.
    #[serde(rename = "RNVA")]
    Rnva,
}

impl Activity {
    pub fn is_set(&self) -> bool {
        !matches!(self, Activity::Unset)
    }

    /// Long-form label used in the activity analysis table.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::Unset => "",
            Activity::Va => "Value Added (VA)",
            Activity::Nva => "Non-Value Added (NVA)",
            Activity::Rnva => "Required Non-Value Added (RNVA)",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let short = match self {
            Activity::Unset => "",
            Activity::Va => "VA",
            Activity::Nva => "NVA",
            Activity::Rnva => "RNVA",
        };
        write!(f, "{}", short)
    }
}

/// Timer state of a process: lap timing against a running reference instant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessTimer {
    /// Whether the lap timer is currently running.
    #[serde(default)]
    pub running: bool,
    /// Reference instant (epoch ms) set on start, `None` while stopped.
    #[serde(default)]
    pub start_ms: Option<i64>,
    /// Elapsed time frozen at the last stop.
    #[serde(default)]
    pub elapsed_ms: i64,
    /// Instant of the last recorded lap; laps measure from here, not from start.
    #[serde(default)]
    pub last_lap_ms: i64,
}

/// Timer state of a subprocess: an independent stopwatch whose accumulated
/// time is flushed into a reading on stop.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubTimer {
    #[serde(default)]
    pub running: bool,
    #[serde(default)]
    pub start_ms: Option<i64>,
    /// Time accumulated since the last stop; reset to 0 when a reading is cut.
    #[serde(default)]
    pub elapsed_ms: i64,
}

fn default_persons() -> u32 {
    1
}

fn default_rating() -> u32 {
    100
}

fn default_last_time_text() -> String {
    ZERO_TIME.to_string()
}

/// A timed work element within a process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subprocess {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub timer: SubTimer,
    /// Duration of the most recent reading, for display.
    #[serde(default)]
    pub last_time_ms: i64,
    #[serde(default = "default_last_time_text")]
    pub last_time_text: String,
    #[serde(default)]
    pub activity: Activity,
    #[serde(default)]
    pub remarks: String,
    /// Number of operators performing the element, at least 1.
    #[serde(default = "default_persons")]
    pub persons: u32,
    /// Units produced per reading; 0 means "not recorded".
    #[serde(default)]
    pub production_qty: u32,
    /// Performance rating in percent. Read live at aggregation time, so a
    /// later correction retroactively applies to past readings.
    #[serde(default = "default_rating")]
    pub rating: u32,
}

impl Subprocess {
    pub fn new(id: EntityId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            timer: SubTimer::default(),
            last_time_ms: 0,
            last_time_text: ZERO_TIME.to_string(),
            activity: Activity::Unset,
            remarks: String::new(),
            persons: 1,
            production_qty: 0,
            rating: 100,
        }
    }

    /// Updates the last-recorded-duration display fields.
    pub fn set_last_time(&mut self, ms: i64) {
        self.last_time_ms = ms;
        self.last_time_text = formatter::format_time(ms);
    }
}

/// An immutable record of one completed timing event.
///
/// Metadata fields are captured copies taken at record time. The performance
/// rating is deliberately absent: it is looked up live from the owning
/// subprocess whenever readings are aggregated or exported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    /// Owning process name at record time.
    pub process: String,
    /// Stable id of the owning subprocess.
    pub subprocess_id: EntityId,
    /// Subprocess name at record time, for display.
    pub subprocess: String,
    /// Measured duration in milliseconds.
    pub time_ms: i64,
    /// Measured duration as `HH:MM:SS.hh`.
    pub time_text: String,
    /// ISO timestamp of record creation.
    pub recorded_at: String,
    #[serde(default)]
    pub activity: Activity,
    #[serde(default)]
    pub remarks: String,
    #[serde(default = "default_persons")]
    pub persons: u32,
    #[serde(default)]
    pub production_qty: u32,
    pub start_ms: i64,
    pub end_ms: i64,
    pub start_text: String,
    pub end_text: String,
}

impl Reading {
    /// Builds a reading for `sub`, capturing its current metadata.
    pub fn capture(process: &str, sub: &Subprocess, time_ms: i64, start_ms: i64, end_ms: i64) -> Self {
        Self {
            process: process.to_string(),
            subprocess_id: sub.id,
            subprocess: sub.name.clone(),
            time_ms,
            time_text: formatter::format_time(time_ms),
            recorded_at: formatter::format_iso(end_ms),
            activity: sub.activity,
            remarks: sub.remarks.clone(),
            persons: sub.persons.max(1),
            production_qty: sub.production_qty,
            start_ms,
            end_ms,
            start_text: formatter::format_datetime(start_ms),
            end_text: formatter::format_datetime(end_ms),
        }
    }
}

/// A studied process: owns its subprocesses and the readings taken against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    pub id: EntityId,
    pub name: String,
    #[serde(default)]
    pub subprocesses: Vec<Subprocess>,
    #[serde(default)]
    pub timer: ProcessTimer,
    #[serde(default)]
    pub readings: Vec<Reading>,
}

impl Process {
    pub fn new(id: EntityId, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            subprocesses: Vec::new(),
            timer: ProcessTimer::default(),
            readings: Vec::new(),
        }
    }

    pub fn subprocess(&self, id: EntityId) -> Option<&Subprocess> {
        self.subprocesses.iter().find(|s| s.id == id)
    }

    pub fn subprocess_mut(&mut self, id: EntityId) -> Option<&mut Subprocess> {
        self.subprocesses.iter_mut().find(|s| s.id == id)
    }

    /// Resolves a subprocess by display name (first match in insertion order).
    pub fn subprocess_by_name(&self, name: &str) -> Option<&Subprocess> {
        self.subprocesses.iter().find(|s| s.name == name)
    }

    /// Removes the subprocess entity itself. Readings are handled separately
    /// by the ledger so callers can compose deletion explicitly.
    pub fn remove_subprocess(&mut self, id: EntityId) -> bool {
        let before = self.subprocesses.len();
        self.subprocesses.retain(|s| s.id != id);
        self.subprocesses.len() != before
    }

    /// Current performance rating of a subprocess, falling back to 100% when
    /// the subprocess no longer exists.
    pub fn rating_for(&self, id: EntityId) -> u32 {
        self.subprocess(id).map(|s| s.rating).unwrap_or(100)
    }
}

/// The whole application state: process collection, setup-mode flag and the
/// identifier counter. Serialized wholesale into one persisted record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Study {
    #[serde(default)]
    pub processes: Vec<Process>,
    #[serde(default)]
    pub setup_mode: bool,
    #[serde(default = "default_next_id")]
    next_id: u64,
    /// ISO timestamp of the last save, informational only.
    #[serde(default)]
    pub saved_at: Option<String>,
}

fn default_next_id() -> u64 {
    1
}

impl Default for Study {
    fn default() -> Self {
        Self {
            processes: Vec::new(),
            setup_mode: false,
            next_id: 1,
            saved_at: None,
        }
    }
}

impl Study {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates the next stable entity id.
    pub fn allocate_id(&mut self) -> EntityId {
        // Re-anchor above any persisted id in case an old record predates the counter.
        let floor = self
            .processes
            .iter()
            .flat_map(|p| std::iter::once(p.id.0).chain(p.subprocesses.iter().map(|s| s.id.0)))
            .max()
            .unwrap_or(0);
        if self.next_id <= floor {
            self.next_id = floor + 1;
        }
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Adds a process with a unique user-chosen name.
    pub fn add_process(&mut self, name: &str) -> Option<EntityId> {
        if name.trim().is_empty() || self.process(name).is_some() {
            return None;
        }
        let id = self.allocate_id();
        self.processes.push(Process::new(id, name.trim()));
        Some(id)
    }

    pub fn process(&self, name: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.name == name)
    }

    pub fn process_mut(&mut self, name: &str) -> Option<&mut Process> {
        self.processes.iter_mut().find(|p| p.name == name)
    }

    pub fn remove_process(&mut self, name: &str) -> bool {
        let before = self.processes.len();
        self.processes.retain(|p| p.name != name);
        self.processes.len() != before
    }

    /// Adds a subprocess under the named process.
    pub fn add_subprocess(&mut self, process: &str, name: &str) -> Option<EntityId> {
        if name.trim().is_empty() || self.process(process).is_none() {
            return None;
        }
        let id = self.allocate_id();
        let proc = self.process_mut(process)?;
        proc.subprocesses.push(Subprocess::new(id, name.trim()));
        Some(id)
    }

    pub fn has_readings(&self) -> bool {
        self.processes.iter().any(|p| !p.readings.is_empty())
    }

    /// Irreversible full clear used after a successful export: all processes,
    /// subprocesses and readings are dropped, setup mode is reset.
    pub fn clear(&mut self) {
        self.processes.clear();
        self.setup_mode = false;
    }
}
