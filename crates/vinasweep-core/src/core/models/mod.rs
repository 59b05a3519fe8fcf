//! Data models for the sweep.
//!
//! The models are plain values: a [`bounding_box::BoundingBox`] is `Copy`, grid cells
//! and job descriptors are produced deterministically from the sweep inputs, and
//! aggregation is a pure function over parsed energies.

pub mod bounding_box;
pub mod grid;
pub mod job;
pub mod results;
