//! # Trajcheck Core Library
//!
//! A library for validating molecular-dynamics trajectories before downstream
//! use: it scans a trajectory frame by frame for atoms positioned unphysically
//! close together (steric overlaps) and for covalent bonds stretched beyond a
//! plausible length.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`System`,
//!   `AtomGroup`, `PeriodicBox`) and pure computational utilities such as the
//!   distance-capped neighbor search.
//!
//! - **[`analysis`]: The Logic Core.** This stateful layer hosts the per-frame
//!   checks, the frame-iteration driver, configuration, progress reporting,
//!   and result accumulation.
//!
//! - **[`workflows`]: The Public API.** The highest-level, user-facing layer.
//!   It ties the `analysis` and `core` layers together to execute a complete
//!   trajectory scan and hand back an immutable report.

pub mod analysis;
pub mod core;
pub mod workflows;
