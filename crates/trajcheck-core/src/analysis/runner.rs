use super::error::AnalysisError;
use super::frame::Frame;
use super::progress::{Progress, ProgressReporter};
use super::source::TrajectorySource;
use tracing::{info, instrument};

/// A frame-by-frame analysis driven by [`run_analysis`].
///
/// The lifecycle is: `prepare` once before the first frame, `process_frame`
/// once per frame in increasing frame order, `finish` once after the last
/// frame. Both hooks default to no-ops.
pub trait FrameAnalysis {
    fn prepare(&mut self) -> Result<(), AnalysisError> {
        Ok(())
    }

    fn process_frame(&mut self, frame: &Frame) -> Result<(), AnalysisError>;

    fn finish(&mut self) -> Result<(), AnalysisError> {
        Ok(())
    }
}

/// Drives an analysis over a trajectory, one frame fully processed before
/// the next begins.
///
/// # Return
///
/// The number of frames processed.
#[instrument(skip_all, name = "frame_analysis_run")]
pub fn run_analysis<A, S>(
    analysis: &mut A,
    source: &mut S,
    reporter: &ProgressReporter,
) -> Result<usize, AnalysisError>
where
    A: FrameAnalysis,
    S: TrajectorySource,
{
    let total_frames = source.n_frames();
    info!(total_frames = ?total_frames, "Starting frame-by-frame analysis.");
    reporter.report(Progress::ScanStart {
        total_frames: total_frames.map(|n| n as u64),
    });

    analysis.prepare()?;

    let mut processed = 0usize;
    while let Some(frame) = source.next_frame()? {
        let frame_index = frame.index;
        analysis.process_frame(&frame)?;
        processed += 1;
        reporter.report(Progress::FrameDone { frame_index });
    }

    analysis.finish()?;
    reporter.report(Progress::ScanFinish);
    info!(frames = processed, "Frame-by-frame analysis complete.");

    Ok(processed)
}
