use crate::analysis::config::CheckConfig;
use crate::analysis::error::AnalysisError;
use crate::analysis::frame::Frame;
use crate::analysis::runner::FrameAnalysis;
use crate::core::models::group::AtomGroup;
use crate::core::models::ids::AtomId;
use crate::core::models::system::System;
use crate::core::utils::search::capped_pairs;
use nalgebra::Point3;
use serde::Serialize;
use tracing::warn;

/// A pair of atoms found at or below the overlap cutoff.
///
/// Atoms are identified by their stable serials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Overlap {
    pub atom_a: usize,
    pub atom_b: usize,
    pub distance: f64,
}

/// A bond whose current length strictly exceeds the bond cutoff.
///
/// Atoms are identified by their stable serials.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BondViolation {
    pub atom_a: usize,
    pub atom_b: usize,
    pub length: f64,
}

/// The record kept for a frame with at least one violation.
///
/// A `None` field means either that the corresponding check was disabled or
/// that it ran and found nothing; the two cases are not distinguished at
/// this level. A record is only ever created with at least one `Some` field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadFrame {
    pub frame_index: usize,
    pub overlaps: Option<Vec<Overlap>>,
    pub bond_violations: Option<Vec<BondViolation>>,
}

/// A bond resolved against the group at construction time: endpoint ids for
/// position lookup, endpoint serials for reporting.
#[derive(Debug, Clone, Copy)]
struct ResolvedBond {
    atom_a: AtomId,
    atom_b: AtomId,
    serial_a: usize,
    serial_b: usize,
}

/// Scans trajectory frames for steric overlaps and over-stretched bonds.
///
/// The scanner is constructed once per run against a [`System`] and an
/// [`AtomGroup`]; the selection, its stable serials, and the bonds confined
/// to it are resolved up front so per-frame work touches nothing but the
/// [`Frame`] it is given. Frames with at least one violation accumulate in
/// [`badframes`](Self::badframes), in processing order; clean frames leave
/// no trace.
///
/// Construction fails with [`AnalysisError::MissingTopology`] when bond
/// checking is enabled on a system that carries no bonds at all: bond
/// checking would be meaningless, and silently returning empty results
/// would mask the configuration mistake.
#[derive(Debug)]
pub struct StructureCheck {
    group_ids: Vec<AtomId>,
    group_serials: Vec<usize>,
    group_bonds: Vec<ResolvedBond>,
    overlap_cutoff: Option<f64>,
    bond_cutoff: Option<f64>,
    badframes: Vec<BadFrame>,
}

impl StructureCheck {
    /// Creates a scanner for `group` with the thresholds in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::MissingTopology`] if bond checking is
    /// enabled but `system` has no bond information, and a configuration
    /// error if an enabled cutoff is not positive and finite.
    pub fn new(
        system: &System,
        group: &AtomGroup,
        config: &CheckConfig,
    ) -> Result<Self, AnalysisError> {
        config.validate()?;

        if config.bond_cutoff.is_some() && !system.has_bonds() {
            return Err(AnalysisError::MissingTopology);
        }

        let group_ids: Vec<AtomId> = group.ids().to_vec();
        let mut group_serials = Vec::with_capacity(group_ids.len());
        for &atom_id in &group_ids {
            let serial = system.serial(atom_id).ok_or_else(|| {
                AnalysisError::Internal(
                    "selection references an atom missing from the system".to_string(),
                )
            })?;
            group_serials.push(serial);
        }

        let group_bonds = if config.bond_cutoff.is_some() {
            system
                .bonds_within(group)
                .into_iter()
                .map(|bond| {
                    let serial_a = system.serial(bond.atom_a);
                    let serial_b = system.serial(bond.atom_b);
                    match (serial_a, serial_b) {
                        (Some(serial_a), Some(serial_b)) => Ok(ResolvedBond {
                            atom_a: bond.atom_a,
                            atom_b: bond.atom_b,
                            serial_a,
                            serial_b,
                        }),
                        _ => Err(AnalysisError::Internal(
                            "bond references an atom missing from the system".to_string(),
                        )),
                    }
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        Ok(Self {
            group_ids,
            group_serials,
            group_bonds,
            overlap_cutoff: config.overlap_cutoff,
            bond_cutoff: config.bond_cutoff,
            badframes: Vec::new(),
        })
    }

    /// The accumulated records, one per flagged frame, in processing order.
    pub fn badframes(&self) -> &[BadFrame] {
        &self.badframes
    }

    /// Consumes the scanner and hands back the accumulated records.
    pub fn into_badframes(self) -> Vec<BadFrame> {
        self.badframes
    }

    /// Evaluates a single frame without touching the accumulated state.
    ///
    /// # Return
    ///
    /// Returns `Ok(None)` for a clean frame; otherwise the record that would
    /// be (or was) appended for it.
    pub fn check_frame(&self, frame: &Frame) -> Result<Option<BadFrame>, AnalysisError> {
        let overlaps = match self.overlap_cutoff {
            Some(cutoff) => self.find_overlaps(frame, cutoff)?,
            None => None,
        };
        let bond_violations = match self.bond_cutoff {
            Some(cutoff) => self.find_bond_violations(frame, cutoff)?,
            None => None,
        };

        if overlaps.is_none() && bond_violations.is_none() {
            return Ok(None);
        }
        Ok(Some(BadFrame {
            frame_index: frame.index,
            overlaps,
            bond_violations,
        }))
    }

    fn position_of(&self, frame: &Frame, atom_id: AtomId) -> Result<Point3<f64>, AnalysisError> {
        frame.position(atom_id).ok_or_else(|| {
            AnalysisError::Internal(format!(
                "frame {} carries no position for a selected atom",
                frame.index
            ))
        })
    }

    fn find_overlaps(
        &self,
        frame: &Frame,
        cutoff: f64,
    ) -> Result<Option<Vec<Overlap>>, AnalysisError> {
        let mut positions = Vec::with_capacity(self.group_ids.len());
        for &atom_id in &self.group_ids {
            positions.push(self.position_of(frame, atom_id)?);
        }

        let pairs = capped_pairs(&positions, &frame.cell, cutoff);
        if pairs.is_empty() {
            return Ok(None);
        }

        // Pair indices are positions within the group; reports carry the
        // stable serials instead.
        Ok(Some(
            pairs
                .into_iter()
                .map(|(i, j, distance)| Overlap {
                    atom_a: self.group_serials[i],
                    atom_b: self.group_serials[j],
                    distance,
                })
                .collect(),
        ))
    }

    fn find_bond_violations(
        &self,
        frame: &Frame,
        cutoff: f64,
    ) -> Result<Option<Vec<BondViolation>>, AnalysisError> {
        if self.group_bonds.is_empty() {
            warn!(
                frame_index = frame.index,
                "selection confines no bonds; bond check skipped for this frame"
            );
            return Ok(None);
        }

        let mut violations = Vec::new();
        for bond in &self.group_bonds {
            let a = self.position_of(frame, bond.atom_a)?;
            let b = self.position_of(frame, bond.atom_b)?;
            let length = frame.cell.distance(&a, &b);
            if length > cutoff {
                violations.push(BondViolation {
                    atom_a: bond.serial_a,
                    atom_b: bond.serial_b,
                    length,
                });
            }
        }

        if violations.is_empty() {
            Ok(None)
        } else {
            Ok(Some(violations))
        }
    }
}

impl FrameAnalysis for StructureCheck {
    fn prepare(&mut self) -> Result<(), AnalysisError> {
        self.badframes.clear();
        Ok(())
    }

    fn process_frame(&mut self, frame: &Frame) -> Result<(), AnalysisError> {
        if let Some(record) = self.check_frame(frame)? {
            self.badframes.push(record);
        }
        Ok(())
    }
}
