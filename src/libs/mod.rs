//! Core library modules for the motus application.
//!
//! The measurement core lives here: the timer engine, the reading ledger and
//! the derived-metrics pipeline (`frequency`, `metrics`). The remaining
//! modules are the ambient stack shared by every command: configuration,
//! message display, persistence and table rendering.

pub mod config;
pub mod export;
pub mod formatter;
pub mod frequency;
pub mod ledger;
pub mod messages;
pub mod metrics;
pub mod storage;
pub mod study;
pub mod timer;
pub mod view;
