//! Spindial Core Library
//!
//! Platform-agnostic geometry, gesture tracking and sequence accumulation
//! for the Spindial rotary input.

pub mod error;
pub mod geometry;
pub mod gesture;
pub mod sequence;
pub mod symbols;

pub use error::{DialError, DialResult};
pub use geometry::{polar_angle, DialOptions, SectorLayout, HOLE_RADIUS, HOLE_RING_GAP};
pub use gesture::{DragGesture, Sweep};
pub use sequence::{SequenceBuffer, DEFAULT_FLUSH_DELAY};
pub use symbols::{DialEntry, SymbolEntry, SymbolRing, BACK_LABEL};
