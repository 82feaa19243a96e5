//! # Core Models Module
//!
//! This module contains the data structures used to represent the molecular
//! system under inspection, providing the foundation for all checks.
//!
//! ## Key Components
//!
//! - [`atom`] - Individual atom identity (name, alternate-location code)
//! - [`topology`] - Covalent bond connectivity
//! - [`system`] - Complete system: atom storage, stable serials, bonds
//! - [`group`] - Ordered atom selections handed to an analysis
//! - [`cell`] - The periodic simulation cell and minimum-image geometry
//! - [`ids`] - Unique identifier types for atoms
//!
//! ## Usage
//!
//! Most operations start by constructing a [`system::System`], selecting an
//! [`group::AtomGroup`] from it, and describing the simulation cell with a
//! [`cell::PeriodicBox`].

pub mod atom;
pub mod cell;
pub mod group;
pub mod ids;
pub mod system;
pub mod topology;
