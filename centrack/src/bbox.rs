//! Bounding box operations and centroid distance calculations

use ndarray::prelude::*;
use rayon::prelude::*;
use std::fmt;

/// Axis-aligned bounding box in integer pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bbox {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl Bbox {
    pub fn new(xmin: i32, ymin: i32, xmax: i32, ymax: i32) -> Self {
        Self {
            xmin,
            ymin,
            xmax,
            ymax,
        }
    }

    /// Build from a detector row `[x1, y1, x2, y2, ..]`.
    ///
    /// Float coordinates are truncated toward zero, matching the pixel
    /// coercion applied to every detection on ingestion. No range
    /// validation is performed; negative or out-of-frame values pass
    /// through unchanged.
    pub fn from_row(row: ArrayView1<f32>) -> Self {
        Self {
            xmin: row[0] as i32,
            ymin: row[1] as i32,
            xmax: row[2] as i32,
            ymax: row[3] as i32,
        }
    }

    pub fn width(&self) -> i32 {
        self.xmax - self.xmin
    }

    pub fn height(&self) -> i32 {
        self.ymax - self.ymin
    }

    /// Midpoint of the box with integer division
    pub fn centroid(&self) -> (i32, i32) {
        ((self.xmin + self.xmax) / 2, (self.ymin + self.ymax) / 2)
    }

    /// Convert to bounds array [xmin, ymin, xmax, ymax]
    pub fn to_bounds(&self) -> [i32; 4] {
        [self.xmin, self.ymin, self.xmax, self.ymax]
    }
}

impl fmt::Display for Bbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Bbox({}, {}, {}, {})",
            self.xmin, self.ymin, self.xmax, self.ymax
        )
    }
}

/// Euclidean distance between two centroids
pub fn centroid_distance(a: (i32, i32), b: (i32, i32)) -> f32 {
    let dx = (a.0 - b.0) as f32;
    let dy = (a.1 - b.1) as f32;
    dx.hypot(dy)
}

/// Compute the centroid distance matrix between detections and tracks
/// with parallel processing.
/// Returns: (n_detections, n_tracks) distance matrix
pub fn centroid_distances(detections: &[(i32, i32)], tracks: &[(i32, i32)]) -> Array2<f32> {
    let n_dets = detections.len();
    let n_tracks = tracks.len();

    if n_dets == 0 || n_tracks == 0 {
        return Array2::zeros((n_dets, n_tracks));
    }

    let distance_data: Vec<f32> = (0..n_dets)
        .into_par_iter()
        .flat_map(|i| {
            let det = detections[i];
            tracks
                .iter()
                .map(|&track| centroid_distance(det, track))
                .collect::<Vec<_>>()
        })
        .collect();

    Array2::from_shape_vec((n_dets, n_tracks), distance_data).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn test_bbox_creation() {
        let bbox = Bbox::new(0, 0, 10, 10);
        assert_eq!(bbox.width(), 10);
        assert_eq!(bbox.height(), 10);
        assert_eq!(bbox.centroid(), (5, 5));
    }

    #[test]
    fn test_from_row_truncates() {
        let row = array![10.9_f32, -3.7, 40.2, 20.99];
        let bbox = Bbox::from_row(row.view());
        assert_eq!(bbox, Bbox::new(10, -3, 40, 20));
    }

    #[test]
    fn test_centroid_integer_division() {
        // (100 + 141) / 2 truncates to 120
        let bbox = Bbox::new(100, 190, 141, 211);
        assert_eq!(bbox.centroid(), (120, 200));
    }

    #[test]
    fn test_centroid_distance() {
        let d = centroid_distance((0, 0), (3, 4));
        assert_abs_diff_eq!(d, 5.0, epsilon = 0.0001);
    }

    #[test]
    fn test_distance_matrix() {
        let dets = vec![(0, 0), (10, 0)];
        let tracks = vec![(0, 0), (0, 5), (100, 100)];
        let m = centroid_distances(&dets, &tracks);
        assert_eq!(m.shape(), &[2, 3]);
        assert_abs_diff_eq!(m[[0, 0]], 0.0, epsilon = 0.0001);
        assert_abs_diff_eq!(m[[0, 1]], 5.0, epsilon = 0.0001);
        assert_abs_diff_eq!(m[[1, 0]], 10.0, epsilon = 0.0001);
    }

    #[test]
    fn test_distance_matrix_empty() {
        let m = centroid_distances(&[], &[(1, 1)]);
        assert_eq!(m.shape(), &[0, 1]);
        let m = centroid_distances(&[(1, 1)], &[]);
        assert_eq!(m.shape(), &[1, 0]);
    }
}
