//! Reading ledger: the per-process append-only log of timed readings.
//!
//! Readings are appended in insertion order; consumers that want "most recent
//! first" sort on the recorded timestamp. Deletion is positional
//! ([`delete_at`]), last-matching ([`delete_last_for`]) or wholesale per
//! subprocess ([`delete_all_for`]). Removing the subprocess *entity* is a
//! separate operation on [`Process`]; the `sub remove` command composes the
//! two so the user still sees one atomic "delete all" action.

use crate::libs::study::{EntityId, Process, Reading};

/// Appends a reading to the owning process, preserving insertion order.
pub fn append(process: &mut Process, reading: Reading) {
    process.readings.push(reading);
}

/// Removes the reading at `index`. Returns it, or `None` when out of range.
pub fn delete_at(process: &mut Process, index: usize) -> Option<Reading> {
    if index < process.readings.len() {
        Some(process.readings.remove(index))
    } else {
        None
    }
}

/// Removes the most recent reading of the given subprocess and recomputes
/// its last-recorded-duration display: the previous matching reading if one
/// remains, a zero display otherwise.
pub fn delete_last_for(process: &mut Process, sub_id: EntityId) -> Option<Reading> {
    let last = process
        .readings
        .iter()
        .rposition(|r| r.subprocess_id == sub_id)?;
    let removed = process.readings.remove(last);

    let previous = process
        .readings
        .iter()
        .rev()
        .find(|r| r.subprocess_id == sub_id)
        .map(|r| r.time_ms);
    if let Some(sub) = process.subprocess_mut(sub_id) {
        sub.set_last_time(previous.unwrap_or(0));
    }
    Some(removed)
}

/// Removes every reading of the given subprocess, and no others.
/// Returns the number of removed readings.
pub fn delete_all_for(process: &mut Process, sub_id: EntityId) -> usize {
    let before = process.readings.len();
    process.readings.retain(|r| r.subprocess_id != sub_id);
    if let Some(sub) = process.subprocess_mut(sub_id) {
        sub.set_last_time(0);
    }
    before - process.readings.len()
}

/// Storage indices of a process's readings ordered most recent first.
/// The single ordering shared by the list view and positional deletion.
fn recent_order(process: &Process) -> Vec<usize> {
    let mut order: Vec<usize> = (0..process.readings.len()).collect();
    order.sort_by(|&a, &b| process.readings[b].recorded_at.cmp(&process.readings[a].recorded_at));
    order
}

/// All readings of a process sorted most recent first, for display.
pub fn recent_first(process: &Process) -> Vec<&Reading> {
    recent_order(process)
        .into_iter()
        .map(|i| &process.readings[i])
        .collect()
}

/// Removes the reading at `index` into the recent-first ordering shown by
/// the list view. Returns it, or `None` when out of range.
pub fn delete_at_recent(process: &mut Process, index: usize) -> Option<Reading> {
    let storage_index = recent_order(process).get(index).copied()?;
    delete_at(process, storage_index)
}
