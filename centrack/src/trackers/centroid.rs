//! Centroid-distance tracker
//!
//! Matches each frame's detections to live tracks purely by centroid
//! distance. Cheap and sufficient for sparse, slow-moving traffic seen
//! from a fixed camera, where detections rarely cluster within the match
//! threshold of each other. No motion model and no appearance features:
//! an object that leaves the frame and returns gets a fresh identity.

use crate::assignment::DistanceSolver;
use crate::bbox::{centroid_distances, Bbox};
use anyhow::ensure;
use ndarray::prelude::*;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy)]
struct TrackPoint {
    centroid: (i32, i32),
    misses: u32,
}

/// Multi-object tracker keyed on bounding-box centroids
#[derive(Debug, Clone)]
pub struct CentroidTracker {
    /// Maximum centroid distance (pixels) for a detection to match a track
    pub max_distance: f32,
    /// Frames a track survives without a matching detection.
    /// 0 reproduces the strictest policy: one missed frame kills a track.
    pub grace_frames: u32,
    next_track_id: u32,
    tracks: BTreeMap<u32, TrackPoint>,
    n_steps: u32,
}

impl CentroidTracker {
    pub fn new(max_distance: f32, grace_frames: u32) -> anyhow::Result<Self> {
        ensure!(
            max_distance.is_finite() && max_distance > 0.0,
            "max_distance must be a positive finite value, got {max_distance}"
        );
        Ok(Self {
            max_distance,
            grace_frames,
            next_track_id: 0,
            tracks: BTreeMap::new(),
            n_steps: 0,
        })
    }

    /// Update the tracker with one frame of detections.
    ///
    /// # Arguments
    /// * `detections` - Nx4 array where each row is [x1, y1, x2, y2];
    ///   coordinates are truncated to integer pixels on ingestion
    ///
    /// # Returns
    /// Nx5 array where each row is [x1, y1, x2, y2, track_id], in the
    /// same order as the input rows. Matched detections keep their
    /// track's id; unmatched detections allocate fresh ids in row order.
    /// Tracks unmatched for more than `grace_frames` frames are dropped.
    pub fn update(&mut self, detections: ArrayView2<f32>) -> Array2<i32> {
        let boxes: Vec<Bbox> = detections.outer_iter().map(Bbox::from_row).collect();
        let det_centroids: Vec<(i32, i32)> = boxes.iter().map(Bbox::centroid).collect();

        // Columns ordered by ascending id, so the solver's track-index
        // tie-break favors the older track.
        let track_ids: Vec<u32> = self.tracks.keys().copied().collect();
        let track_centroids: Vec<(i32, i32)> =
            self.tracks.values().map(|t| t.centroid).collect();

        let distances = centroid_distances(&det_centroids, &track_centroids);
        let result = DistanceSolver::solve(distances.view(), self.max_distance);

        let mut ids = vec![0u32; boxes.len()];

        for (det_idx, track_col) in result.assignments {
            let id = track_ids[track_col];
            ids[det_idx] = id;
            if let Some(track) = self.tracks.get_mut(&id) {
                track.centroid = det_centroids[det_idx];
                track.misses = 0;
            }
        }

        // New tracks for unmatched detections, allocated in row order so
        // ids stay monotone with arrival order within the frame.
        for det_idx in result.unassigned_detections {
            let id = self.next_track_id;
            self.next_track_id += 1;
            self.tracks.insert(
                id,
                TrackPoint {
                    centroid: det_centroids[det_idx],
                    misses: 0,
                },
            );
            ids[det_idx] = id;
        }

        for &track_col in &result.unassigned_tracks {
            if let Some(track) = self.tracks.get_mut(&track_ids[track_col]) {
                track.misses += 1;
            }
        }
        let grace_frames = self.grace_frames;
        self.tracks.retain(|_, track| track.misses <= grace_frames);

        self.n_steps += 1;

        let mut data = Vec::with_capacity(boxes.len() * 5);
        for (bbox, id) in boxes.iter().zip(&ids) {
            data.extend(bbox.to_bounds());
            data.push(*id as i32);
        }
        Array2::from_shape_vec((boxes.len(), 5), data).unwrap()
    }

    /// Drop all live tracks.
    ///
    /// The id counter is deliberately not reset: identities stay unique
    /// across a clear, so per-identity state held downstream cannot alias
    /// a recycled id.
    pub fn clear_tracks(&mut self) {
        self.tracks.clear();
        self.n_steps = 0;
    }

    /// Get current number of live tracks
    pub fn num_tracks(&self) -> usize {
        self.tracks.len()
    }

    /// Get current step (frame) count
    pub fn step_count(&self) -> u32 {
        self.n_steps
    }
}
