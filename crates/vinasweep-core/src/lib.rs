//! # vinasweep Core Library
//!
//! A library for blind docking sweeps: the bounding volume of a receptor-ligand
//! complex is tiled into half-overlapping search boxes, one AutoDock Vina job is
//! generated per box, and the binding-mode energies reported in the job logs are
//! collected and filtered afterwards.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer layout so that each concern can be tested on
//! its own.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`BoundingBox`, grid cells,
//!   job descriptors, energy series) and the file formats the sweep reads and writes
//!   (structure files, Vina configs, Vina logs, the job cache, the report).
//!
//! - **[`engine`]: The Execution Layer.** Sweep configuration, error types, progress
//!   reporting, and the seam to the external docking program.
//!
//! - **[`workflows`]: The Public API.** End-to-end procedures (`sweep`, `extract`,
//!   `status`) that tie `core` and `engine` together.

pub mod core;
pub mod engine;
pub mod workflows;
