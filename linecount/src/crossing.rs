//! Line-crossing state machine
//!
//! Watches each tracked identity's centroid row against two horizontal
//! tolerance bands and records one count per identity per direction. The
//! two persistent per-identity flags encode "previously observed in the
//! other band before arriving at the current one" - the minimal state
//! needed to detect directional ordering without storing trajectories.

use crate::config::LineConfig;
use crate::counter::DirectionalCounts;
use crate::error::Result;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Direction of a completed crossing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    /// Red band first, then blue band
    Down,
    /// Blue band first, then red band
    Up,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Down => "DOWN",
            Self::Up => "UP",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A completed crossing for one identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrossingEvent {
    pub id: u32,
    pub direction: Direction,
}

/// Per-identity crossing state machine over two horizontal bands.
///
/// The monitor has no notion of identity lifetime of its own: it learns
/// about identities only through `update` calls, and stale flags for
/// identities the tracker has since dropped are harmless because a
/// dropped id is never fed in again.
#[derive(Debug, Clone)]
pub struct CrossingMonitor {
    red_y: i32,
    blue_y: i32,
    offset: i32,
    seen_red: HashSet<u32>,
    seen_blue: HashSet<u32>,
    counts: DirectionalCounts,
}

impl CrossingMonitor {
    /// Build a monitor for the given line geometry.
    ///
    /// Fails if the two tolerance bands intersect.
    pub fn new(lines: LineConfig) -> Result<Self> {
        lines.validate()?;
        Ok(Self {
            red_y: lines.red_y,
            blue_y: lines.blue_y,
            offset: lines.offset,
            seen_red: HashSet::new(),
            seen_blue: HashSet::new(),
            counts: DirectionalCounts::new(),
        })
    }

    // Bands are open at both ends: a centroid exactly offset pixels from
    // the line is outside.
    fn in_red_band(&self, cy: i32) -> bool {
        self.red_y - self.offset < cy && cy < self.red_y + self.offset
    }

    fn in_blue_band(&self, cy: i32) -> bool {
        self.blue_y - self.offset < cy && cy < self.blue_y + self.offset
    }

    /// Feed one tracked centroid row for the current frame.
    ///
    /// The four checks run in fixed order every call:
    /// 1. in red band: mark the identity as seen at red
    /// 2. seen at red and now in blue band: count DOWN once, clear flags
    /// 3. in blue band: mark the identity as seen at blue
    /// 4. seen at blue and now in red band: count UP once, clear flags
    ///
    /// Because the bands are disjoint, at most one count can fire per
    /// call. Re-qualifying an already-counted identity is a silent no-op.
    pub fn update(&mut self, id: u32, cy: i32) -> Option<CrossingEvent> {
        let mut event = None;

        if self.in_red_band(cy) && self.seen_red.insert(id) {
            log::debug!("id {id} entered red band at y={cy}");
        }

        if self.seen_red.contains(&id) && self.in_blue_band(cy) && !self.counts.contains_down(id)
        {
            self.counts.insert_down(id);
            self.seen_red.remove(&id);
            self.seen_blue.remove(&id);
            log::info!("id {id} counted {} (total {})", Direction::Down, self.counts.down());
            event = Some(CrossingEvent {
                id,
                direction: Direction::Down,
            });
        }

        if self.in_blue_band(cy) && self.seen_blue.insert(id) {
            log::debug!("id {id} entered blue band at y={cy}");
        }

        if self.seen_blue.contains(&id) && self.in_red_band(cy) && !self.counts.contains_up(id) {
            self.counts.insert_up(id);
            self.seen_blue.remove(&id);
            self.seen_red.remove(&id);
            log::info!("id {id} counted {} (total {})", Direction::Up, self.counts.up());
            event = Some(CrossingEvent {
                id,
                direction: Direction::Up,
            });
        }

        event
    }

    /// Running totals
    pub fn counts(&self) -> &DirectionalCounts {
        &self.counts
    }
}
