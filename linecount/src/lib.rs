//! Directional line-crossing vehicle counting
//!
//! Turns a per-frame stream of class-filtered bounding boxes into
//! deduplicated directional crossing counts: a centroid tracker
//! ([`centrack`]) assigns persistent identities, and a per-identity state
//! machine watches each identity's centroid row against two horizontal
//! tolerance bands, counting each identity at most once per direction.
//!
//! ```
//! use linecount::{CountingConfig, CountingPipeline};
//! use ndarray::array;
//!
//! let mut pipeline = CountingPipeline::new(CountingConfig::default())?;
//!
//! // One frame in the red band, one in the blue band: a downward crossing
//! pipeline.process_frame(array![[100.0, 190.0, 140.0, 210.0]].view());
//! let summary = pipeline.process_frame(array![[100.0, 225.0, 140.0, 245.0]].view());
//! assert_eq!((summary.down, summary.up), (0, 0));
//! let summary = pipeline.process_frame(array![[100.0, 260.0, 140.0, 280.0]].view());
//! assert_eq!((summary.down, summary.up), (1, 0));
//! # Ok::<(), linecount::CountError>(())
//! ```

pub mod config;
pub mod counter;
pub mod crossing;
pub mod error;
pub mod pipeline;

pub use config::{CountingConfig, LineConfig, TrackingConfig};
pub use counter::DirectionalCounts;
pub use crossing::{CrossingEvent, CrossingMonitor, Direction};
pub use error::{CountError, Result};
pub use pipeline::{CountingPipeline, FrameSummary};
