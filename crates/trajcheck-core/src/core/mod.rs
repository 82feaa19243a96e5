//! # Core Module
//!
//! This module provides the fundamental building blocks for trajectory
//! structure validation, serving as the computational core of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and pure algorithms the
//! frame-by-frame checks are built on. It knows nothing about trajectory
//! iteration or result accumulation; everything here is stateless with
//! respect to the scan.
//!
//! ## Architecture
//!
//! - **Molecular Representation** ([`models`]) - Atoms, bonds, selections,
//!   systems, and the periodic simulation cell
//! - **Spatial Algorithms** ([`utils`]) - The distance-capped pair search
//!   used for overlap detection

pub mod models;
pub mod utils;
