use crate::analysis::checks::structure::StructureCheck;
use crate::analysis::config::CheckConfig;
use crate::analysis::error::AnalysisError;
use crate::analysis::progress::ProgressReporter;
use crate::analysis::report::ScanReport;
use crate::analysis::runner::run_analysis;
use crate::analysis::source::TrajectorySource;
use crate::core::models::group::AtomGroup;
use crate::core::models::system::System;
use tracing::{info, instrument};

/// Scans a trajectory for structure defects and returns the final report.
///
/// This is the single public entry point for a complete scan: it validates
/// the configuration, constructs the scanner (failing fast if bond checking
/// is requested without bond topology), drives it over every frame the
/// source yields, and freezes the accumulated records into a
/// [`ScanReport`].
#[instrument(skip_all, name = "structure_scan_workflow")]
pub fn run<S: TrajectorySource>(
    system: &System,
    group: &AtomGroup,
    config: &CheckConfig,
    source: &mut S,
    reporter: &ProgressReporter,
) -> Result<ScanReport, AnalysisError> {
    info!(
        atoms = group.len(),
        overlap_cutoff = ?config.overlap_cutoff,
        bond_cutoff = ?config.bond_cutoff,
        "Starting structure defect scan."
    );

    let mut check = StructureCheck::new(system, group, config)?;
    let frames_scanned = run_analysis(&mut check, source, reporter)?;
    let badframes = check.into_badframes();

    info!(
        frames = frames_scanned,
        flagged = badframes.len(),
        "Structure defect scan complete."
    );

    Ok(ScanReport::new(frames_scanned, badframes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::frame::Frame;
    use crate::analysis::source::FrameSeries;
    use crate::core::models::atom::Atom;
    use crate::core::models::cell::PeriodicBox;
    use nalgebra::Point3;

    fn cell() -> PeriodicBox {
        PeriodicBox::orthorhombic([50.0, 50.0, 50.0]).unwrap()
    }

    /// A two-atom system whose atoms drift apart over three frames; they are
    /// bonded, so the last frame carries a stretched bond.
    fn create_drifting_pair() -> (System, Vec<Frame>) {
        let mut system = System::new();
        let a = system.add_atom(Atom::new("C1"));
        let b = system.add_atom(Atom::new("C2"));
        system.add_bond(a, b).unwrap();

        let separations = [1.5, 2.0, 8.0];
        let frames = separations
            .iter()
            .enumerate()
            .map(|(index, &separation)| {
                let coords = [
                    Point3::new(10.0, 10.0, 10.0),
                    Point3::new(10.0 + separation, 10.0, 10.0),
                ];
                Frame::from_coords(index, cell(), &system, &coords).unwrap()
            })
            .collect();
        (system, frames)
    }

    #[test]
    fn scan_flags_only_the_defective_frame() {
        let (system, frames) = create_drifting_pair();
        let mut source = FrameSeries::new(frames);

        let config = CheckConfig::default();
        let report = run(
            &system,
            &system.all_atoms(),
            &config,
            &mut source,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(report.frames_scanned, 3);
        assert_eq!(report.badframes.len(), 1);

        let record = &report.badframes[0];
        assert_eq!(record.frame_index, 2);
        assert!(record.overlaps.is_none());
        let violations = record.bond_violations.as_ref().unwrap();
        assert_eq!(violations.len(), 1);
        assert!((violations[0].length - 8.0).abs() < 1e-9);
    }

    #[test]
    fn scan_of_clean_trajectory_returns_clean_report() {
        let (system, frames) = create_drifting_pair();
        let mut source = FrameSeries::new(frames);

        // Generous bond cutoff: nothing to flag anywhere.
        let config = CheckConfig::builder()
            .overlap_cutoff(0.8)
            .bond_cutoff(10.0)
            .build()
            .unwrap();
        let report = run(
            &system,
            &system.all_atoms(),
            &config,
            &mut source,
            &ProgressReporter::new(),
        )
        .unwrap();

        assert_eq!(report.frames_scanned, 3);
        assert!(report.is_clean());
    }

    #[test]
    fn scan_propagates_missing_topology_before_any_frame() {
        let mut system = System::new();
        system.add_atom(Atom::new("CA"));

        let coords = [Point3::new(1.0, 1.0, 1.0)];
        let frame = Frame::from_coords(0, cell(), &system, &coords).unwrap();
        let mut source = FrameSeries::new(vec![frame]);

        let result = run(
            &system,
            &system.all_atoms(),
            &CheckConfig::default(),
            &mut source,
            &ProgressReporter::new(),
        );
        assert!(matches!(result, Err(AnalysisError::MissingTopology)));
        // The source was never advanced.
        assert_eq!(source.n_frames(), Some(1));
    }
}
