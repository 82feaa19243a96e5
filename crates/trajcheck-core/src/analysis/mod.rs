//! # Analysis Module
//!
//! This module implements the stateful analysis layer: everything between
//! the raw models and the public workflow entry points.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Cutoff thresholds, validation, TOML loading
//! - **Frame Context** ([`frame`]) - The explicit per-frame value object
//!   (positions + periodic cell) handed to every check
//! - **Trajectory Seam** ([`source`]) - The contract an external trajectory
//!   provider fulfils, plus an in-memory implementation
//! - **Driver** ([`runner`]) - The single-threaded, in-order frame loop
//! - **Checks** ([`checks`]) - The per-frame defect detectors
//! - **Results** ([`report`]) - Post-run report and export
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Analysis-specific error types

pub mod checks;
pub mod config;
pub mod error;
pub mod frame;
pub mod progress;
pub mod report;
pub mod runner;
pub mod source;
