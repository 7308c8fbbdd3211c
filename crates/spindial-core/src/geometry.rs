//! Sector layout math for the dial face.
//!
//! The face is derived from a single width: an inner guide circle, a ring of
//! finger holes (one per entry) and a static ring of labels outside the
//! holes. Angles are standard polar angles in screen space: 0 is east and
//! positive angles run counter-clockwise on screen.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use crate::error::{DialError, DialResult};

/// Radius of each finger hole in logical pixels.
pub const HOLE_RADIUS: f64 = 15.0;

/// Gap between the width-derived base radius and the hole ring.
pub const HOLE_RING_GAP: f64 = 5.0;

/// Caller-facing size configuration for a dial.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DialOptions {
    /// Width of the dial region. The face geometry is derived from this.
    pub width: f32,
    /// Height of the dial region.
    pub height: f32,
}

impl Default for DialOptions {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
        }
    }
}

impl DialOptions {
    /// Create options with an explicit width and height.
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Square options, the common case.
    pub fn square(size: f32) -> Self {
        Self::new(size, size)
    }

    /// Reject sizes the layout cannot work with.
    pub fn validate(&self) -> DialResult<()> {
        if !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
        {
            return Err(DialError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Standard angle of `point` about `center`, normalized to `[0, 2π)`.
///
/// Screen coordinates grow downward, so the y component is flipped before
/// `atan2`: a point above the center has angle π/2.
pub fn polar_angle(center: Point, point: Point) -> f64 {
    let angle = (center.y - point.y).atan2(point.x - center.x);
    if angle < 0.0 { angle + TAU } else { angle }
}

/// Sector geometry derived from the dial width and the entry count.
///
/// Layout is a pure function of its two inputs: the same width and entry
/// count always produce the same sector positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorLayout {
    width: f64,
    entry_count: usize,
}

impl SectorLayout {
    /// Lay out `entry_count` sectors for a dial of the given width.
    pub fn new(width: f64, entry_count: usize) -> Self {
        Self { width, entry_count }
    }

    /// Center of the dial face in local coordinates.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.width / 2.0)
    }

    /// Angular width of one sector.
    ///
    /// Two slots beyond the entry count are reserved so part of the circle
    /// stays uncovered, like the finger stop area on a rotary phone.
    pub fn increment(&self) -> f64 {
        TAU / (self.entry_count as f64 + 2.0)
    }

    /// Radius of the circle the hole centers sit on.
    pub fn ring_radius(&self) -> f64 {
        HOLE_RADIUS + self.width / 6.0 + HOLE_RING_GAP
    }

    /// Radius of the circle the label anchors sit on.
    pub fn label_radius(&self) -> f64 {
        self.ring_radius() + 2.0 * HOLE_RADIUS
    }

    /// Radius of the static inner guide circle.
    pub fn guide_radius(&self) -> f64 {
        self.center().x / 3.0
    }

    /// Number of entry sectors.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Resting angle of sector `index`.
    ///
    /// Sector 0 starts one increment past east, leaving the east slot empty.
    pub fn sector_angle(&self, index: usize) -> f64 {
        self.increment() * (index as f64 + 1.0) + self.increment() / 2.0
    }

    /// Hole center for sector `index` with the ring rotated clockwise by
    /// `rotation` radians.
    pub fn hole_center(&self, index: usize, rotation: f64) -> Point {
        self.point_at(self.sector_angle(index) - rotation, self.ring_radius())
    }

    /// Label anchor for sector `index`. Labels do not rotate.
    pub fn label_center(&self, index: usize) -> Point {
        self.point_at(self.sector_angle(index), self.label_radius())
    }

    fn point_at(&self, angle: f64, radius: f64) -> Point {
        let center = self.center();
        Point::new(
            center.x + radius * angle.cos(),
            center.y - radius * angle.sin(),
        )
    }

    /// Map a clockwise sweep angle to the sector it selects.
    ///
    /// A sweep shorter than two increments lands on sector 0; every further
    /// increment advances one sector. Sweeps past the last sector return
    /// `None`.
    pub fn selection_index(&self, sweep: f64) -> Option<usize> {
        let index = (sweep / self.increment() - 1.0).max(0.0).floor() as usize;
        (index < self.entry_count).then_some(index)
    }
}
