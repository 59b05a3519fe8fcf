//! # Core Module
//!
//! Geometry, naming and file formats for the docking sweep.
//!
//! - **Data Models** ([`models`]) - Bounding boxes, grid planning, job descriptors
//!   and energy aggregation.
//! - **File I/O** ([`io`]) - Coordinate extraction from structure files, Vina
//!   configuration writing, Vina log parsing, the job cache and the TSV report.
//!
//! Everything in this module is free of process launching; the only side effects
//! are reads and writes of the files named by the caller.

pub mod io;
pub mod models;
