//! Pure Rust centroid-distance tracking library
//!
//! Assigns persistent integer identities to per-frame bounding-box
//! detections by matching each detection to the nearest live track within
//! a distance threshold. No Kalman filtering and no appearance model;
//! suited to sparse, slow-moving objects seen from a fixed camera.
//!
//! ```
//! use centrack::CentroidTracker;
//! use ndarray::array;
//!
//! let mut tracker = CentroidTracker::new(50.0, 0)?;
//!
//! // Each row is [x1, y1, x2, y2]; each output row appends the track id
//! let tracks = tracker.update(array![[10.0, 10.0, 50.0, 50.0]].view());
//! assert_eq!(tracks[[0, 4]], 0);
//!
//! let tracks = tracker.update(array![[12.0, 14.0, 52.0, 54.0]].view());
//! assert_eq!(tracks[[0, 4]], 0);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod assignment;
pub mod bbox;
pub mod trackers;

pub use assignment::{AssignmentResult, DistanceSolver};
pub use bbox::Bbox;
pub use trackers::{CentroidTracker, ObjectTracker};
