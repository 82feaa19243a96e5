use super::error::AnalysisError;
use super::frame::Frame;

/// The contract an external trajectory provider fulfils.
///
/// Implementors hand out frames one at a time, in increasing frame order,
/// with positions and cell dimensions already up to date for each frame.
/// File formats, decoding, and buffering are entirely the provider's
/// concern; this library only consumes the stream.
pub trait TrajectorySource {
    /// Total number of frames, when known in advance. Used only for
    /// progress reporting.
    fn n_frames(&self) -> Option<usize> {
        None
    }

    /// Advances to the next frame.
    ///
    /// # Return
    ///
    /// Returns `Ok(None)` once the trajectory is exhausted.
    fn next_frame(&mut self) -> Result<Option<Frame>, AnalysisError>;
}

/// An in-memory trajectory: a pre-built sequence of frames.
///
/// Primarily useful in tests and for adapters that materialize frames from
/// some other representation before scanning.
pub struct FrameSeries {
    frames: std::vec::IntoIter<Frame>,
}

impl FrameSeries {
    pub fn new(frames: Vec<Frame>) -> Self {
        Self {
            frames: frames.into_iter(),
        }
    }
}

impl TrajectorySource for FrameSeries {
    fn n_frames(&self) -> Option<usize> {
        Some(self.frames.len())
    }

    fn next_frame(&mut self) -> Result<Option<Frame>, AnalysisError> {
        Ok(self.frames.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::cell::PeriodicBox;

    fn cell() -> PeriodicBox {
        PeriodicBox::orthorhombic([10.0, 10.0, 10.0]).unwrap()
    }

    #[test]
    fn frame_series_yields_frames_in_order_then_none() {
        let mut source =
            FrameSeries::new(vec![Frame::new(0, cell()), Frame::new(1, cell())]);
        assert_eq!(source.n_frames(), Some(2));

        assert_eq!(source.next_frame().unwrap().unwrap().index, 0);
        assert_eq!(source.next_frame().unwrap().unwrap().index, 1);
        assert!(source.next_frame().unwrap().is_none());
    }

    #[test]
    fn n_frames_tracks_remaining_frames() {
        let mut source = FrameSeries::new(vec![Frame::new(0, cell())]);
        source.next_frame().unwrap();
        assert_eq!(source.n_frames(), Some(0));
    }
}
