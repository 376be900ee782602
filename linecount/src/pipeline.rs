//! Per-frame orchestration: detections in, tracked boxes and counts out
//!
//! Frame acquisition, the detection model, and rendering stay outside:
//! the caller feeds class-filtered boxes for one frame at a time and
//! draws overlays from the returned summary. Frames must be fed in
//! arrival order; the tracker and the crossing state machine both depend
//! on monotone temporal sequencing of centroid positions.

use crate::config::CountingConfig;
use crate::counter::DirectionalCounts;
use crate::crossing::{CrossingEvent, CrossingMonitor};
use crate::error::Result;
use centrack::CentroidTracker;
use ndarray::{Array2, ArrayView2};

/// Everything the caller needs from one processed frame
#[derive(Debug, Clone)]
pub struct FrameSummary {
    /// Nx5 rows [x1, y1, x2, y2, track_id], in detector order, for
    /// overlay drawing
    pub tracks: Array2<i32>,
    /// Crossings recorded this frame
    pub events: Vec<CrossingEvent>,
    /// Running downward total after this frame
    pub down: usize,
    /// Running upward total after this frame
    pub up: usize,
}

/// Single-threaded frame-at-a-time counting pipeline
pub struct CountingPipeline {
    tracker: CentroidTracker,
    monitor: CrossingMonitor,
}

impl CountingPipeline {
    pub fn new(config: CountingConfig) -> Result<Self> {
        config.validate()?;
        let tracker =
            CentroidTracker::new(config.tracking.max_distance, config.tracking.grace_frames)?;
        let monitor = CrossingMonitor::new(config.lines)?;
        Ok(Self { tracker, monitor })
    }

    /// Process one frame of class-filtered detections (Nx4 [x1, y1, x2, y2]).
    ///
    /// Never fails; an empty detection array is a valid frame and prunes
    /// live tracks per the tracker's grace policy.
    pub fn process_frame(&mut self, detections: ArrayView2<f32>) -> FrameSummary {
        let tracks = self.tracker.update(detections);

        let mut events = Vec::new();
        for row in tracks.outer_iter() {
            let cy = (row[1] + row[3]) / 2;
            let id = row[4] as u32;
            if let Some(event) = self.monitor.update(id, cy) {
                events.push(event);
            }
        }

        FrameSummary {
            down: self.monitor.counts().down(),
            up: self.monitor.counts().up(),
            tracks,
            events,
        }
    }

    /// Running totals
    pub fn counts(&self) -> &DirectionalCounts {
        self.monitor.counts()
    }

    /// Number of live tracks after the last frame
    pub fn num_tracks(&self) -> usize {
        self.tracker.num_tracks()
    }
}
