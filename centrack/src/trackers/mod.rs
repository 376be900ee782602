//! Tracker implementations
//!
//! A single algorithm lives here today; the trait keeps the seam between
//! tracking and its consumers so a different association strategy can be
//! dropped in without touching the counting layer.

use ndarray::{Array2, ArrayView2};

mod centroid;

pub use centroid::CentroidTracker;

/// Common interface for per-frame multi-object trackers
pub trait ObjectTracker: Send {
    /// Update the tracker with one frame of detections
    ///
    /// # Arguments
    /// * `detections` - Nx4 array where each row is [x1, y1, x2, y2]
    ///
    /// # Returns
    /// Nx5 array where each row is [x1, y1, x2, y2, track_id], in input
    /// row order
    fn update(&mut self, detections: ArrayView2<f32>) -> Array2<i32>;

    /// Drop all live tracks
    fn clear_tracks(&mut self);

    /// Get number of live tracks
    fn num_tracks(&self) -> usize;

    /// Get current step (frame) count
    fn step_count(&self) -> u32;
}

impl ObjectTracker for CentroidTracker {
    fn update(&mut self, detections: ArrayView2<f32>) -> Array2<i32> {
        self.update(detections)
    }

    fn clear_tracks(&mut self) {
        self.clear_tracks()
    }

    fn num_tracks(&self) -> usize {
        self.num_tracks()
    }

    fn step_count(&self) -> u32 {
        self.step_count()
    }
}
