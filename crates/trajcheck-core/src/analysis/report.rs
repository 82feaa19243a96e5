use super::checks::structure::BadFrame;
use serde::Serialize;
use std::io::Write;

/// The immutable result of a completed scan.
///
/// `badframes` holds one record per flagged frame, in strictly increasing
/// frame order; frames with zero violations never appear.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScanReport {
    /// Total number of frames the scan traversed, flagged or not.
    pub frames_scanned: usize,
    pub badframes: Vec<BadFrame>,
}

/// One row of the flattened violation table.
#[derive(Debug, Serialize)]
struct ViolationRow<'a> {
    frame: usize,
    check: &'a str,
    atom_a: usize,
    atom_b: usize,
    value: f64,
}

impl ScanReport {
    pub fn new(frames_scanned: usize, badframes: Vec<BadFrame>) -> Self {
        Self {
            frames_scanned,
            badframes,
        }
    }

    /// Whether the scan found nothing at all.
    pub fn is_clean(&self) -> bool {
        self.badframes.is_empty()
    }

    /// Total number of individual violations across all flagged frames.
    pub fn n_violations(&self) -> usize {
        self.badframes
            .iter()
            .map(|record| {
                record.overlaps.as_ref().map_or(0, Vec::len)
                    + record.bond_violations.as_ref().map_or(0, Vec::len)
            })
            .sum()
    }

    /// Writes the violations as a flat CSV table with columns
    /// `frame,check,atom_a,atom_b,value` (`value` is a distance for overlap
    /// rows and a length for bond rows).
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        let mut out = csv::Writer::from_writer(writer);
        for record in &self.badframes {
            if let Some(overlaps) = &record.overlaps {
                for overlap in overlaps {
                    out.serialize(ViolationRow {
                        frame: record.frame_index,
                        check: "overlap",
                        atom_a: overlap.atom_a,
                        atom_b: overlap.atom_b,
                        value: overlap.distance,
                    })?;
                }
            }
            if let Some(violations) = &record.bond_violations {
                for violation in violations {
                    out.serialize(ViolationRow {
                        frame: record.frame_index,
                        check: "bond",
                        atom_a: violation.atom_a,
                        atom_b: violation.atom_b,
                        value: violation.length,
                    })?;
                }
            }
        }
        out.flush()?;
        Ok(())
    }
}
