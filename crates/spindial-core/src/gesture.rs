//! Drag gesture tracking for the dial.
//!
//! A gesture runs one cycle per pointer interaction: idle, dragging, idle.
//! While dragging, only clockwise movement (a decreasing standard angle)
//! rotates the dial. Crossing back past the start angle, or wrapping through
//! the 0/2π seam, holds the last accepted rotation.

/// Result of a released drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Standard angle where the pointer went down.
    pub start_angle: f64,
    /// Release angle constrained to the clockwise arc: the raw release angle
    /// when it stayed below the start, otherwise 0.
    pub constrained_angle: f64,
}

impl Sweep {
    /// Clockwise angle swept from press to release.
    pub fn angle(&self) -> f64 {
        self.start_angle - self.constrained_angle
    }
}

/// Tracks one pointer drag over the dial face.
#[derive(Debug, Clone, Default)]
pub struct DragGesture {
    start_angle: f64,
    current_angle: f64,
    active: bool,
}

impl DragGesture {
    /// Create an idle gesture.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a drag is in progress.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start a drag at the given pointer angle.
    pub fn begin(&mut self, angle: f64) {
        self.start_angle = angle;
        self.current_angle = angle;
        self.active = true;
    }

    /// Track pointer movement while dragging.
    ///
    /// Returns the updated rotation when the movement was accepted. Angles
    /// at or past the start angle are rejected and leave the rotation
    /// unchanged; so does movement while idle.
    pub fn track(&mut self, angle: f64) -> Option<f64> {
        if !self.active || angle >= self.start_angle {
            return None;
        }
        self.current_angle = angle;
        Some(self.rotation())
    }

    /// Clockwise rotation accumulated so far, 0 when idle.
    pub fn rotation(&self) -> f64 {
        if self.active {
            self.start_angle - self.current_angle
        } else {
            0.0
        }
    }

    /// Finish the drag at the given pointer angle.
    ///
    /// Returns `None` when no drag was in progress. The sweep uses the raw
    /// release angle, not the last tracked one, constrained to the
    /// clockwise arc.
    pub fn release(&mut self, angle: f64) -> Option<Sweep> {
        if !self.active {
            return None;
        }

        let constrained = if angle < self.start_angle { angle } else { 0.0 };
        let sweep = Sweep {
            start_angle: self.start_angle,
            constrained_angle: constrained,
        };
        self.cancel();
        Some(sweep)
    }

    /// Abandon the drag without producing a sweep.
    pub fn cancel(&mut self) {
        self.start_angle = 0.0;
        self.current_angle = 0.0;
        self.active = false;
    }
}
