use super::frequency::Frequency;
use super::ledger;
use super::metrics::{ActivityAnalysis, SubprocessSummary};
use super::study::{EntityId, Process, Study};
use super::timer::RunningSample;
use anyhow::Result;
use prettytable::{row, Table};
use std::collections::BTreeMap;

pub struct View {}

impl View {
    pub fn processes(study: &Study) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "PROCESS", "SUBPROCESSES", "READINGS", "TIMER"]);
        for process in &study.processes {
            let timer = if process.timer.running { "running" } else { "stopped" };
            table.add_row(row![
                process.id,
                process.name,
                process.subprocesses.len(),
                process.readings.len(),
                timer
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn subprocesses(process: &Process) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "SUBPROCESS", "LAST TIME", "ACTIVITY", "PERSONS", "QTY", "RATING %", "REMARKS"]);
        for sub in &process.subprocesses {
            table.add_row(row![
                sub.id,
                sub.name,
                sub.last_time_text,
                sub.activity,
                sub.persons,
                sub.production_qty,
                sub.rating,
                sub.remarks
            ]);
        }
        table.printstd();

        Ok(())
    }

    /// Readings of one process, most recent first.
    pub fn readings(process: &Process) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "SUBPROCESS", "TIME", "RECORDED AT", "ACTIVITY", "QTY", "REMARKS"]);
        for (index, reading) in ledger::recent_first(process).iter().enumerate() {
            table.add_row(row![
                index + 1,
                reading.subprocess,
                reading.time_text,
                reading.recorded_at,
                reading.activity,
                reading.production_qty,
                reading.remarks
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary(summaries: &[SubprocessSummary]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row![
            "PROCESS",
            "SUBPROCESS",
            "SAMPLES",
            "AVG (s)",
            "QTY",
            "CYCLE (s)",
            "RATING %",
            "BASIC (s)",
            "FREQUENCY",
            "EFFECTIVE (s)"
        ]);
        for summary in summaries {
            table.add_row(row![
                summary.process,
                summary.subprocess,
                summary.samples,
                format!("{:.1}", summary.avg_secs),
                summary.production_qty,
                format!("{:.1}", summary.cycle_secs),
                summary.rating,
                format!("{:.1}", summary.basic_secs),
                summary.frequency.text(),
                format!("{:.1}", summary.effective_secs)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn analysis(analysis: &ActivityAnalysis) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["CATEGORY", "TIME (s)", "PERCENT"]);
        for (label, secs, percent) in analysis.rows() {
            table.add_row(row![label, format!("{:.1}", secs), format!("{:.1}%", percent)]);
        }
        table.printstd();

        Ok(())
    }

    pub fn frequencies(process: &Process, frequencies: &BTreeMap<EntityId, Frequency>) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["SUBPROCESS", "OCCURRENCES", "UNITS", "FREQUENCY"]);
        for (id, freq) in frequencies {
            let name = process
                .subprocess(*id)
                .map(|s| s.name.clone())
                .unwrap_or_else(|| id.to_string());
            table.add_row(row![name, freq.occurrences, format!("{:.2}", freq.units), freq.text()]);
        }
        table.printstd();

        Ok(())
    }

    /// One line per running timer, rewritten in place by the watch loop.
    pub fn samples(samples: &[RunningSample]) -> String {
        samples
            .iter()
            .map(|sample| match &sample.subprocess {
                Some(sub) => format!("{} / {}: {}", sample.process, sub, sample.display),
                None => format!("{}: {}", sample.process, sample.display),
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }
}
