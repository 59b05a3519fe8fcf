//! Provides input/output functionality for the files a sweep touches.
//!
//! Structure files are only read for their coordinates. Vina configuration files
//! are written, Vina log files are read back, and the job cache and report are the
//! sweep's own persisted state and final output.

pub mod job_cache;
pub mod report;
pub mod structure;
pub mod vina_conf;
pub mod vina_log;
