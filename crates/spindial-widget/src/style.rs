//! Visual styling for the dial widget.

use egui::Color32;

/// Style configuration for [`RotaryDial`](crate::RotaryDial).
#[derive(Debug, Clone)]
pub struct DialStyle {
    /// Fill color of the finger holes.
    pub hole_fill: Color32,
    /// Stroke color of the finger holes.
    pub hole_stroke: Color32,
    /// Stroke width of the finger holes.
    pub hole_stroke_width: f32,
    /// Stroke color of the inner guide circle.
    pub guide_stroke: Color32,
    /// Stroke width of the inner guide circle.
    pub guide_stroke_width: f32,
    /// Label text color.
    pub label_color: Color32,
    /// Label font size in points.
    pub label_size: f32,
    /// Seconds the hole ring takes to rotate back after a release.
    pub snap_back_time: f32,
}

impl Default for DialStyle {
    fn default() -> Self {
        Self {
            hole_fill: Color32::WHITE,
            hole_stroke: Color32::BLACK,
            hole_stroke_width: 1.0,
            guide_stroke: Color32::GRAY,
            guide_stroke_width: 1.0,
            label_color: Color32::from_rgb(60, 60, 60),
            label_size: 16.0,
            snap_back_time: 0.25,
        }
    }
}
