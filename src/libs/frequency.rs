//! Frequency calculator: occurrence/unit ratios for cycle-time normalization.
//!
//! When the elements of a process repeat at different cadences within one
//! cycle (a carrying step once per five fitting steps, say), their effective
//! times must be normalized by how often each element occurs relative to the
//! most frequent one. The ratio is derived purely from relative reading
//! counts: the most frequent subprocess gets `1/1.00`, a subprocess seen a
//! quarter as often gets `1/4.00`.
//!
//! Counting runs over the union of current subprocesses and every subprocess
//! id referenced by historical readings, so a deleted-but-recorded element
//! still participates and still influences the maximum.

use crate::libs::study::{EntityId, Process};
use std::collections::BTreeMap;

/// Occurrences-per-units ratio of a subprocess within its process cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frequency {
    pub occurrences: u32,
    /// Exact unrounded ratio `max_count / count`; always >= 1 for recorded
    /// subprocesses.
    pub units: f64,
}

impl Frequency {
    /// The identity ratio `1/1.00`, used for subprocesses with no readings.
    pub fn identity() -> Self {
        Self { occurrences: 1, units: 1.0 }
    }

    /// Display form `"occurrences/units"` with units to two decimals.
    pub fn text(&self) -> String {
        format!("{}/{:.2}", self.occurrences, self.units)
    }
}

/// Computes the frequency of every subprocess referenced by `process`, keyed
/// by stable id.
///
/// Subprocesses with zero readings map to the identity ratio, which keeps
/// later divisions well-defined.
pub fn process_frequencies(process: &Process) -> BTreeMap<EntityId, Frequency> {
    let mut counts: BTreeMap<EntityId, usize> = BTreeMap::new();

    for sub in &process.subprocesses {
        counts.entry(sub.id).or_insert(0);
    }
    for reading in &process.readings {
        *counts.entry(reading.subprocess_id).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(0);

    counts
        .into_iter()
        .map(|(id, count)| {
            let frequency = if count == 0 || max_count == 0 {
                Frequency::identity()
            } else {
                Frequency {
                    occurrences: 1,
                    units: max_count as f64 / count as f64,
                }
            };
            (id, frequency)
        })
        .collect()
}
