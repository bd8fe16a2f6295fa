//! Timer engine: start/stop/lap state machines for processes and subprocesses.
//!
//! Every timed entity is a two-state machine (`stopped` / `running`) whose
//! state lives in the data model ([`ProcessTimer`] / [`SubTimer`]); this
//! module holds the transitions and the pure elapsed-time queries. Nothing
//! here owns a periodic callback: "is it running" is data, and recomputation
//! is driven by one shared sampling loop (the `timer watch` command) or by
//! whatever instant a command observes through its [`Clock`].
//!
//! ## Semantics
//!
//! - A **process** timer is a lap timer. Stopping it freezes elapsed time and
//!   records nothing; readings against a running process come only from
//!   explicit laps, each measuring the interval since the previous lap.
//! - A **subprocess** timer is an independent stopwatch. Stopping it flushes
//!   the accumulated time into a new reading and resets the accumulator.
//! - Invalid transitions (starting a running timer, lapping a stopped
//!   process) are deliberate no-ops rather than errors: the calling surface
//!   disables the invalid action, and redundant calls must be harmless.
//! - Entering setup mode force-stops every running timer across the study,
//!   with normal stop semantics (running subprocess stopwatches cut readings).
//!
//! [`ProcessTimer`]: crate::libs::study::ProcessTimer
//! [`SubTimer`]: crate::libs::study::SubTimer

use crate::libs::formatter;
use crate::libs::ledger;
use crate::libs::study::{EntityId, Process, Reading, Study, Subprocess};
use chrono::Local;

/// Source of the current instant, in epoch milliseconds.
///
/// Commands use [`SystemClock`]; tests drive the engine with a manual clock
/// to make every elapsed value deterministic.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Wall-clock implementation of [`Clock`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Local::now().timestamp_millis()
    }
}

/// Elapsed time of a process timer at `now_ms`.
///
/// Pure query: `now - start + prior_elapsed` while running, the frozen value
/// while stopped.
pub fn process_elapsed(process: &Process, now_ms: i64) -> i64 {
    match (process.timer.running, process.timer.start_ms) {
        (true, Some(start)) => now_ms - start + process.timer.elapsed_ms,
        _ => process.timer.elapsed_ms,
    }
}

/// Time since the last recorded lap, the value the live display shows for a
/// running process. Zero while stopped.
pub fn process_lap_elapsed(process: &Process, now_ms: i64) -> i64 {
    if process.timer.running {
        now_ms - process.timer.last_lap_ms
    } else {
        0
    }
}

/// Elapsed time of a subprocess stopwatch at `now_ms`.
pub fn sub_elapsed(sub: &Subprocess, now_ms: i64) -> i64 {
    match (sub.timer.running, sub.timer.start_ms) {
        (true, Some(start)) => now_ms - start + sub.timer.elapsed_ms,
        _ => sub.timer.elapsed_ms,
    }
}

/// Starts a process lap timer. No-op if already running.
///
/// The current instant becomes both the elapsed reference and the first lap
/// reference, so the first lap measures from the start press.
pub fn start_process(process: &mut Process, clock: &dyn Clock) {
    if process.timer.running {
        return;
    }
    let now = clock.now_ms();
    process.timer.running = true;
    process.timer.start_ms = Some(now);
    process.timer.last_lap_ms = now;
}

/// Stops a process lap timer, freezing its elapsed time. No reading is
/// created; laps are the only way a process timer feeds the ledger.
pub fn stop_process(process: &mut Process, clock: &dyn Clock) {
    if !process.timer.running {
        return;
    }
    process.timer.elapsed_ms = process_elapsed(process, clock.now_ms());
    process.timer.running = false;
    process.timer.start_ms = None;
}

/// Records a lap against `sub_id` while the process timer runs.
///
/// The lap duration is the interval since the previous lap (or since start
/// for the first lap). A reading is appended to the ledger, the subprocess
/// last-recorded display is updated, and the lap reference resets to now so
/// the next lap measures only its own increment. Returns the lap duration,
/// or `None` when the process timer is stopped or the subprocess is unknown
/// (both guarded no-ops).
pub fn record_lap(process: &mut Process, sub_id: EntityId, clock: &dyn Clock) -> Option<i64> {
    if !process.timer.running {
        return None;
    }
    let now = clock.now_ms();
    let lap_start = process.timer.last_lap_ms;
    let lap_ms = now - lap_start;

    let process_name = process.name.clone();
    let reading = {
        let sub = process.subprocess_mut(sub_id)?;
        sub.set_last_time(lap_ms);
        Reading::capture(&process_name, sub, lap_ms, lap_start, now)
    };
    ledger::append(process, reading);
    process.timer.last_lap_ms = now;
    Some(lap_ms)
}

/// Starts a subprocess stopwatch. No-op if already running.
pub fn start_subprocess(sub: &mut Subprocess, clock: &dyn Clock) {
    if sub.timer.running {
        return;
    }
    sub.timer.running = true;
    sub.timer.start_ms = Some(clock.now_ms());
}

/// Stops a subprocess stopwatch, flushing the accumulated time into a new
/// reading and resetting the accumulator to zero.
///
/// Returns the recorded duration, or `None` when the stopwatch was not
/// running or the subprocess is unknown.
pub fn stop_subprocess(process: &mut Process, sub_id: EntityId, clock: &dyn Clock) -> Option<i64> {
    let now = clock.now_ms();
    let process_name = process.name.clone();
    let reading = {
        let sub = process.subprocess_mut(sub_id)?;
        if !sub.timer.running {
            return None;
        }
        let elapsed = sub_elapsed(sub, now);
        sub.timer.running = false;
        sub.timer.start_ms = None;
        sub.timer.elapsed_ms = 0;
        sub.set_last_time(elapsed);
        Reading::capture(&process_name, sub, elapsed, now - elapsed, now)
    };
    let elapsed = reading.time_ms;
    ledger::append(process, reading);
    Some(elapsed)
}

/// Resets a process timer from any state. Readings are kept; reset is
/// distinct from deletion.
pub fn reset_process(process: &mut Process) {
    process.timer.running = false;
    process.timer.start_ms = None;
    process.timer.elapsed_ms = 0;
    process.timer.last_lap_ms = 0;
}

/// Resets a subprocess stopwatch from any state, discarding accumulated time
/// without cutting a reading.
pub fn reset_subprocess(sub: &mut Subprocess) {
    sub.timer.running = false;
    sub.timer.start_ms = None;
    sub.timer.elapsed_ms = 0;
}

/// Force-stops every running timer across the study with normal stop
/// semantics. Running subprocess stopwatches flush readings; running process
/// timers freeze.
pub fn stop_all(study: &mut Study, clock: &dyn Clock) {
    for process in &mut study.processes {
        let running: Vec<EntityId> = process
            .subprocesses
            .iter()
            .filter(|s| s.timer.running)
            .map(|s| s.id)
            .collect();
        for id in running {
            stop_subprocess(process, id, clock);
        }
        stop_process(process, clock);
    }
}

/// Enters setup mode: every running timer is stopped first so that no timer
/// keeps mutating state while the study is rearranged.
pub fn enter_setup(study: &mut Study, clock: &dyn Clock) {
    stop_all(study, clock);
    study.setup_mode = true;
}

pub fn exit_setup(study: &mut Study) {
    study.setup_mode = false;
}

/// One line of the live display produced by the shared sampling tick.
#[derive(Debug, Clone)]
pub struct RunningSample {
    pub process: String,
    /// `None` for the process lap timer itself.
    pub subprocess: Option<String>,
    /// Lap time for processes, elapsed time for subprocess stopwatches.
    pub display: String,
}

/// Samples every running timer at `now_ms`.
///
/// This is the single shared recomputation driver: the watch loop calls it on
/// each tick instead of every entity owning its own callback, which keeps the
/// engine deterministic under a mock clock.
pub fn sample(study: &Study, now_ms: i64) -> Vec<RunningSample> {
    let mut samples = Vec::new();
    for process in &study.processes {
        if process.timer.running {
            samples.push(RunningSample {
                process: process.name.clone(),
                subprocess: None,
                display: formatter::format_time(process_lap_elapsed(process, now_ms)),
            });
        }
        for sub in &process.subprocesses {
            if sub.timer.running {
                samples.push(RunningSample {
                    process: process.name.clone(),
                    subprocess: Some(sub.name.clone()),
                    display: formatter::format_time(sub_elapsed(sub, now_ms)),
                });
            }
        }
    }
    samples
}
