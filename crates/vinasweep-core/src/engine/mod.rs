//! # Engine Module
//!
//! The execution layer of a sweep: everything that is not geometry or file
//! formatting.
//!
//! - **Configuration** ([`config`]) - The validated sweep parameters, built through
//!   [`config::SweepConfigBuilder`] and passed explicitly into every workflow.
//! - **Error Handling** ([`error`]) - [`error::EngineError`], which folds the
//!   per-module errors of [`crate::core`] into one type.
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events.
//! - **Docking Engine** ([`runner`]) - The seam to the external docking program and
//!   its AutoDock Vina implementation.

pub mod config;
pub mod error;
pub mod progress;
pub mod runner;
