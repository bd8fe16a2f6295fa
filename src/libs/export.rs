//! Study export: the three report tables written to Excel or CSV.
//!
//! An export always carries the same three tables — detailed readings,
//! per-subprocess summary, activity analysis — with identical numbers in
//! both formats. Excel gets one worksheet per table with formatted headers;
//! CSV gets one file with banner rows separating the sections.
//!
//! Gathering is separated from writing so the destructive post-export clear
//! can key off the write result alone: a failed write leaves every reading
//! untouched.

use crate::libs::formatter::format_time;
use crate::libs::frequency::{self, Frequency};
use crate::libs::messages::Message;
use crate::libs::metrics::{self, round_secs, ActivityAnalysis, SubprocessSummary};
use crate::libs::study::Study;
use crate::msg_success;
use anyhow::Result;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Base name of the default export file in the export directory.
pub const DEFAULT_FILE_STEM: &str = "time_motion_study";

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Excel workbook with one worksheet per table.
    #[default]
    Excel,
    /// Single CSV file with sectioned tables.
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Excel => "xlsx",
            ExportFormat::Csv => "csv",
        }
    }

    /// The other format, offered as a fallback when an export fails.
    pub fn alternate(&self) -> Self {
        match self {
            ExportFormat::Excel => ExportFormat::Csv,
            ExportFormat::Csv => ExportFormat::Excel,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExportFormat::Excel => write!(f, "excel"),
            ExportFormat::Csv => write!(f, "csv"),
        }
    }
}

/// One row of the detailed readings table. Durations and quantities are the
/// values captured with the reading; the rating and frequency are looked up
/// live at gather time.
#[derive(Debug, Clone)]
pub struct DetailRow {
    pub process: String,
    pub subprocess: String,
    pub time_text: String,
    pub time_secs: i64,
    pub start_text: String,
    pub end_text: String,
    pub activity: String,
    pub remarks: String,
    pub persons: u32,
    pub production_qty: u32,
    pub rating: u32,
    pub frequency: String,
}

/// Everything one export writes, gathered before any file is touched.
pub struct ExportBundle {
    pub details: Vec<DetailRow>,
    pub summary: Vec<SubprocessSummary>,
    pub analysis: ActivityAnalysis,
}

impl ExportBundle {
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }

    /// Collects the three tables from the current study state.
    pub fn gather(study: &Study) -> Self {
        let mut details = Vec::new();
        for process in &study.processes {
            let frequencies = frequency::process_frequencies(process);
            for reading in &process.readings {
                let frequency = frequencies
                    .get(&reading.subprocess_id)
                    .copied()
                    .unwrap_or_else(Frequency::identity);
                details.push(DetailRow {
                    process: process.name.clone(),
                    subprocess: reading.subprocess.clone(),
                    time_text: format_time(reading.time_ms),
                    time_secs: round_secs(reading.time_ms),
                    start_text: reading.start_text.clone(),
                    end_text: reading.end_text.clone(),
                    activity: reading.activity.to_string(),
                    remarks: reading.remarks.clone(),
                    persons: reading.persons,
                    production_qty: reading.production_qty,
                    rating: process.rating_for(reading.subprocess_id),
                    frequency: frequency.text(),
                });
            }
        }

        let summary = metrics::summarize(study);
        let analysis = metrics::analyze_activity(&summary);

        Self { details, summary, analysis }
    }
}

/// Writes a gathered bundle to one output file in the selected format.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Creates an exporter writing to `output_path`, or to
    /// `time_motion_study.{xlsx,csv}` under `export_dir` when no explicit
    /// path was given.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, export_dir: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            let file_name = format!("{}.{}", DEFAULT_FILE_STEM, format.extension());
            match export_dir {
                Some(dir) => dir.join(file_name),
                None => PathBuf::from(file_name),
            }
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    pub fn export(&self, bundle: &ExportBundle) -> Result<()> {
        match self.format {
            ExportFormat::Excel => self.export_excel(bundle)?,
            ExportFormat::Csv => self.export_csv(bundle)?,
        }

        msg_success!(Message::ExportCompleted(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_excel(&self, bundle: &ExportBundle) -> Result<()> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        // Sheet 1: detailed readings
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Detailed Readings")?;
        let headers = [
            "Process",
            "Subprocess",
            "Time",
            "Time (s)",
            "Start",
            "End",
            "Activity",
            "Remarks",
            "Persons",
            "Qty",
            "Rating %",
            "Frequency",
        ];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        for (i, row) in bundle.details.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_string(r, 0, &row.process)?;
            worksheet.write_string(r, 1, &row.subprocess)?;
            worksheet.write_string(r, 2, &row.time_text)?;
            worksheet.write_number(r, 3, row.time_secs as f64)?;
            worksheet.write_string(r, 4, &row.start_text)?;
            worksheet.write_string(r, 5, &row.end_text)?;
            worksheet.write_string(r, 6, &row.activity)?;
            worksheet.write_string(r, 7, &row.remarks)?;
            worksheet.write_number(r, 8, row.persons as f64)?;
            worksheet.write_number(r, 9, row.production_qty as f64)?;
            worksheet.write_number(r, 10, row.rating as f64)?;
            worksheet.write_string(r, 11, &row.frequency)?;
        }
        worksheet.autofit();

        // Sheet 2: process summary, derived metrics to one decimal
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Process Summary")?;
        let headers = [
            "Process",
            "Subprocess",
            "Activity",
            "Samples",
            "Avg (s)",
            "Qty",
            "Cycle (s)",
            "Rating %",
            "Basic (s)",
            "Frequency",
            "Effective (s)",
        ];
        for (col, header) in headers.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
        }
        for (i, summary) in bundle.summary.iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_string(r, 0, &summary.process)?;
            worksheet.write_string(r, 1, &summary.subprocess)?;
            worksheet.write_string(r, 2, &summary.activity.to_string())?;
            worksheet.write_number(r, 3, summary.samples as f64)?;
            worksheet.write_number(r, 4, round_tenth(summary.avg_secs))?;
            worksheet.write_number(r, 5, summary.production_qty as f64)?;
            worksheet.write_number(r, 6, round_tenth(summary.cycle_secs))?;
            worksheet.write_number(r, 7, summary.rating as f64)?;
            worksheet.write_number(r, 8, round_tenth(summary.basic_secs))?;
            worksheet.write_string(r, 9, &summary.frequency.text())?;
            worksheet.write_number(r, 10, round_tenth(summary.effective_secs))?;
        }
        worksheet.autofit();

        // Sheet 3: activity analysis
        let worksheet = workbook.add_worksheet();
        worksheet.set_name("Activity Analysis")?;
        worksheet.write_string_with_format(0, 0, "Category", &header_format)?;
        worksheet.write_string_with_format(0, 1, "Time (s)", &header_format)?;
        worksheet.write_string_with_format(0, 2, "Percent", &header_format)?;
        for (i, (label, secs, percent)) in bundle.analysis.rows().iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_string(r, 0, *label)?;
            worksheet.write_number(r, 1, round_tenth(*secs))?;
            worksheet.write_string(r, 2, &format!("{:.1}%", percent))?;
        }
        worksheet.autofit();

        workbook.save(&self.output_path)?;
        Ok(())
    }

    fn export_csv(&self, bundle: &ExportBundle) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new().flexible(true).from_path(&self.output_path)?;

        wtr.write_record(["DETAILED READINGS"])?;
        wtr.write_record([
            "Process",
            "Subprocess",
            "Time",
            "Time (s)",
            "Start",
            "End",
            "Activity",
            "Remarks",
            "Persons",
            "Qty",
            "Rating %",
            "Frequency",
        ])?;
        for row in &bundle.details {
            wtr.write_record([
                row.process.clone(),
                row.subprocess.clone(),
                row.time_text.clone(),
                row.time_secs.to_string(),
                row.start_text.clone(),
                row.end_text.clone(),
                row.activity.clone(),
                row.remarks.clone(),
                row.persons.to_string(),
                row.production_qty.to_string(),
                row.rating.to_string(),
                row.frequency.clone(),
            ])?;
        }

        wtr.write_record([""])?;
        wtr.write_record(["PROCESS SUMMARY"])?;
        wtr.write_record([
            "Process",
            "Subprocess",
            "Activity",
            "Samples",
            "Avg (s)",
            "Qty",
            "Cycle (s)",
            "Rating %",
            "Basic (s)",
            "Frequency",
            "Effective (s)",
        ])?;
        for summary in &bundle.summary {
            wtr.write_record([
                summary.process.clone(),
                summary.subprocess.clone(),
                summary.activity.to_string(),
                summary.samples.to_string(),
                format!("{:.1}", summary.avg_secs),
                summary.production_qty.to_string(),
                format!("{:.1}", summary.cycle_secs),
                summary.rating.to_string(),
                format!("{:.1}", summary.basic_secs),
                summary.frequency.text(),
                format!("{:.1}", summary.effective_secs),
            ])?;
        }

        wtr.write_record([""])?;
        wtr.write_record(["ACTIVITY ANALYSIS"])?;
        wtr.write_record(["Category", "Time (s)", "Percent"])?;
        for (label, secs, percent) in bundle.analysis.rows() {
            wtr.write_record([label.to_string(), format!("{:.1}", secs), format!("{:.1}%", percent)])?;
        }

        wtr.flush()?;
        Ok(())
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
