//! # Workflows Module
//!
//! High-level entry points that tie the `analysis` and `core` layers
//! together into complete procedures.
//!
//! - **Structure Scan** ([`scan`]) - Scan a whole trajectory for steric
//!   overlaps and over-stretched bonds and hand back the final report.

pub mod scan;
