//! # Motus - Time and Motion Study
//!
//! A command-line tool for work measurement: define processes and
//! subprocesses, time them with stopwatch-style timers, annotate readings,
//! and export aggregated results.
//!
//! ## Features
//!
//! - **Lap Timing**: Process-level lap timers plus independent per-subprocess timers
//! - **Reading Ledger**: Append-only log of timed readings with work-measurement metadata
//! - **Derived Metrics**: Frequency, cycle-time, basic-time and effective-time pipeline
//! - **Activity Analysis**: VA / NVA / RNVA partitioning with percentage breakdown
//! - **Data Export**: Excel and CSV exports with identical numeric content
//! - **Setup Mode**: Stops every running timer while a study is rearranged
//!
//! ## Usage
//!
//! ```rust,no_run
//! use motus::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
