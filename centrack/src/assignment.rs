//! Minimum-distance assignment for detection-to-track association
//!
//! Candidate (detection, track) pairs below the distance threshold are
//! assigned greedily in order of increasing distance, so a detection is
//! matched to the globally closest free track rather than the first track
//! that happens to fall under the threshold in map iteration order.

use ndarray::ArrayView2;

/// Result of a distance assignment
#[derive(Debug, Clone)]
pub struct AssignmentResult {
    /// Assignments as (detection_idx, track_idx) pairs
    pub assignments: Vec<(usize, usize)>,
    /// Indices of unassigned detections, ascending
    pub unassigned_detections: Vec<usize>,
    /// Indices of unassigned tracks, ascending
    pub unassigned_tracks: Vec<usize>,
}

/// Greedy minimum-distance assignment solver
pub struct DistanceSolver;

impl DistanceSolver {
    /// Solve the association problem for one frame.
    ///
    /// # Arguments
    /// * `distance_matrix` - (n_detections, n_tracks) centroid distances
    /// * `threshold` - maximum distance for a valid pair, exclusive:
    ///   a pair at exactly `threshold` is rejected
    ///
    /// Tie-break: candidates sort by (distance, detection index, track
    /// index). At equal distance the earlier detection row wins; at equal
    /// distance and row, the lower track column (the older track, when
    /// columns are ordered by ascending id) wins.
    pub fn solve(distance_matrix: ArrayView2<f32>, threshold: f32) -> AssignmentResult {
        let num_detections = distance_matrix.nrows();
        let num_tracks = distance_matrix.ncols();

        // Collect all valid pairs with their distances
        let mut candidates: Vec<(f32, usize, usize)> = Vec::new();
        for i in 0..num_detections {
            for j in 0..num_tracks {
                let distance = distance_matrix[[i, j]];
                if distance < threshold {
                    candidates.push((distance, i, j));
                }
            }
        }

        // Sort by distance (ascending - best pairs first), then by index
        candidates.sort_by(|a, b| {
            a.0.partial_cmp(&b.0)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.1.cmp(&b.1))
                .then(a.2.cmp(&b.2))
        });

        // Greedily assign
        let mut assignments = Vec::new();
        let mut used_detections = vec![false; num_detections];
        let mut used_tracks = vec![false; num_tracks];

        for (_distance, det_idx, track_idx) in candidates {
            if !used_detections[det_idx] && !used_tracks[track_idx] {
                assignments.push((det_idx, track_idx));
                used_detections[det_idx] = true;
                used_tracks[track_idx] = true;
            }
        }

        let unassigned_detections: Vec<usize> = (0..num_detections)
            .filter(|&i| !used_detections[i])
            .collect();

        let unassigned_tracks: Vec<usize> = (0..num_tracks).filter(|&i| !used_tracks[i]).collect();

        AssignmentResult {
            assignments,
            unassigned_detections,
            unassigned_tracks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_empty_inputs() {
        let m = ndarray::Array2::<f32>::zeros((0, 3));
        let result = DistanceSolver::solve(m.view(), 50.0);
        assert!(result.assignments.is_empty());
        assert!(result.unassigned_detections.is_empty());
        assert_eq!(result.unassigned_tracks, vec![0, 1, 2]);
    }

    #[test]
    fn test_prefers_global_minimum() {
        // Detection 0 is within threshold of both tracks, but track 1 is
        // closer. First-match-in-order would pick track 0; the solver
        // must pick track 1.
        let m = array![[40.0_f32, 10.0], [15.0, 200.0]];
        let result = DistanceSolver::solve(m.view(), 50.0);
        assert!(result.assignments.contains(&(0, 1)));
        assert!(result.assignments.contains(&(1, 0)));
        assert_eq!(result.assignments.len(), 2);
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let m = array![[50.0_f32]];
        let result = DistanceSolver::solve(m.view(), 50.0);
        assert!(result.assignments.is_empty());
        assert_eq!(result.unassigned_detections, vec![0]);
        assert_eq!(result.unassigned_tracks, vec![0]);
    }

    #[test]
    fn test_tie_break_by_detection_index() {
        // Both detections are equidistant from the single track; the
        // earlier row must win.
        let m = array![[20.0_f32], [20.0]];
        let result = DistanceSolver::solve(m.view(), 50.0);
        assert_eq!(result.assignments, vec![(0, 0)]);
        assert_eq!(result.unassigned_detections, vec![1]);
    }

    #[test]
    fn test_tie_break_by_track_index() {
        // One detection equidistant from two tracks; the lower column
        // (older track) must win.
        let m = array![[20.0_f32, 20.0]];
        let result = DistanceSolver::solve(m.view(), 50.0);
        assert_eq!(result.assignments, vec![(0, 0)]);
        assert_eq!(result.unassigned_tracks, vec![1]);
    }

    #[test]
    fn test_each_side_assigned_at_most_once() {
        // Two detections both closest to track 0; only one may take it.
        let m = array![[5.0_f32, 45.0], [6.0, 100.0]];
        let result = DistanceSolver::solve(m.view(), 50.0);
        assert!(result.assignments.contains(&(0, 0)));
        assert!(result.assignments.contains(&(1, 1)) || result.unassigned_detections == vec![1]);
        let mut tracks_seen: Vec<usize> =
            result.assignments.iter().map(|&(_, t)| t).collect();
        tracks_seen.sort_unstable();
        tracks_seen.dedup();
        assert_eq!(tracks_seen.len(), result.assignments.len());
    }
}
