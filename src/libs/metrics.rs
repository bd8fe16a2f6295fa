//! Metrics aggregator: per-subprocess summary statistics and the
//! process-wide activity analysis.
//!
//! Readings are grouped by subprocess identity and combined with the
//! frequency calculator's output and the subprocess's *current* rating into
//! the standard work-measurement chain:
//!
//! ```text
//! average  = mean(durations rounded to whole seconds)
//! cycle    = average / max(production_qty, 1)
//! basic    = cycle * rating / 100
//! effective = basic * occurrences / units
//! ```
//!
//! Production quantity follows a last-write-wins policy (the most recent
//! non-zero value across the group's readings, falling back to 1), the
//! activity classification is the first non-blank one in reading order, and
//! the rating is looked up live so a correction made after the fact
//! retroactively applies to every report.

use crate::libs::frequency::{self, Frequency};
use crate::libs::study::{Activity, EntityId, Process, Study};

/// Rounds a millisecond duration to whole seconds, the unit every derived
/// metric works in.
pub fn round_secs(ms: i64) -> i64 {
    (ms as f64 / 1000.0).round() as i64
}

/// Aggregated statistics for one (process, subprocess) reading group.
#[derive(Debug, Clone)]
pub struct SubprocessSummary {
    pub process: String,
    pub subprocess_id: EntityId,
    pub subprocess: String,
    pub activity: Activity,
    /// Number of readings in the group.
    pub samples: usize,
    pub avg_secs: f64,
    pub production_qty: u32,
    pub cycle_secs: f64,
    /// Live rating of the owning subprocess at aggregation time.
    pub rating: u32,
    pub basic_secs: f64,
    pub frequency: Frequency,
    pub effective_secs: f64,
}

/// Summarizes every subprocess of a process that has at least one reading.
///
/// Groups appear in the order their first reading was taken.
pub fn summarize_process(process: &Process) -> Vec<SubprocessSummary> {
    let frequencies = frequency::process_frequencies(process);
    let mut groups: Vec<(EntityId, Vec<&crate::libs::study::Reading>)> = Vec::new();

    for reading in &process.readings {
        match groups.iter_mut().find(|(id, _)| *id == reading.subprocess_id) {
            Some((_, readings)) => readings.push(reading),
            None => groups.push((reading.subprocess_id, vec![reading])),
        }
    }

    groups
        .into_iter()
        .map(|(sub_id, readings)| {
            let total: i64 = readings.iter().map(|r| round_secs(r.time_ms)).sum();
            let avg_secs = total as f64 / readings.len() as f64;

            // Last non-zero quantity wins; 1 keeps the division defined.
            let production_qty = readings
                .iter()
                .rev()
                .map(|r| r.production_qty)
                .find(|q| *q != 0)
                .unwrap_or(1);

            let activity = readings
                .iter()
                .map(|r| r.activity)
                .find(|a| a.is_set())
                .unwrap_or(Activity::Unset);

            let rating = process.rating_for(sub_id);
            let frequency = frequencies
                .get(&sub_id)
                .copied()
                .unwrap_or_else(Frequency::identity);

            let cycle_secs = avg_secs / production_qty.max(1) as f64;
            let basic_secs = cycle_secs * rating as f64 / 100.0;
            let effective_secs = basic_secs * frequency.occurrences as f64 / frequency.units;

            let subprocess = process
                .subprocess(sub_id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| readings[0].subprocess.clone());

            SubprocessSummary {
                process: process.name.clone(),
                subprocess_id: sub_id,
                subprocess,
                activity,
                samples: readings.len(),
                avg_secs,
                production_qty,
                cycle_secs,
                rating,
                basic_secs,
                frequency,
                effective_secs,
            }
        })
        .collect()
}

/// Summaries for every process in the study, in process order.
pub fn summarize(study: &Study) -> Vec<SubprocessSummary> {
    study.processes.iter().flat_map(summarize_process).collect()
}

/// Effective-time totals partitioned by activity classification.
#[derive(Debug, Clone, Default)]
pub struct ActivityAnalysis {
    pub va_secs: f64,
    pub nva_secs: f64,
    pub rnva_secs: f64,
}

impl ActivityAnalysis {
    pub fn total_secs(&self) -> f64 {
        self.va_secs + self.nva_secs + self.rnva_secs
    }

    fn percent(&self, secs: f64) -> f64 {
        let total = self.total_secs();
        if total > 0.0 {
            secs / total * 100.0
        } else {
            0.0
        }
    }

    /// The four analysis rows: label, time in seconds, percentage of the
    /// combined total. All percentages are 0 when the total is 0; the Total
    /// row reports 100% otherwise.
    pub fn rows(&self) -> [(&'static str, f64, f64); 4] {
        let total = self.total_secs();
        [
            (Activity::Va.label(), self.va_secs, self.percent(self.va_secs)),
            (Activity::Nva.label(), self.nva_secs, self.percent(self.nva_secs)),
            (Activity::Rnva.label(), self.rnva_secs, self.percent(self.rnva_secs)),
            ("Total", total, if total > 0.0 { 100.0 } else { 0.0 }),
        ]
    }
}

/// Partitions subprocess summaries into VA / NVA / RNVA buckets by effective
/// time. Unclassified groups contribute to no bucket.
pub fn analyze_activity(summaries: &[SubprocessSummary]) -> ActivityAnalysis {
    let mut analysis = ActivityAnalysis::default();
    for summary in summaries {
        match summary.activity {
            Activity::Va => analysis.va_secs += summary.effective_secs,
            Activity::Nva => analysis.nva_secs += summary.effective_secs,
            Activity::Rnva => analysis.rnva_secs += summary.effective_secs,
            Activity::Unset => {}
        }
    }
    analysis
}
