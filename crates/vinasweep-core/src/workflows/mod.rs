//! # Workflows Module
//!
//! End-to-end procedures built on [`crate::core`] and [`crate::engine`].
//!
//! - **Sweep** ([`sweep`]) - Plans the grid, writes one Vina config per cell plus the
//!   job cache, then docks every job whose log is not yet complete. Rerunning it over
//!   the same work directory only resubmits unfinished jobs.
//! - **Extract** ([`extract`]) - Parses the logs listed in the job cache and keeps
//!   the binding modes below an energy threshold.
//! - **Status** ([`status`]) - Reports which jobs of a sweep have finished.

pub mod extract;
pub mod status;
pub mod sweep;
