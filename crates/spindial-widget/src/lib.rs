//! Rotary dial input widget for egui.
//!
//! A circular selector in the spirit of a rotary phone: symbols sit on a
//! ring of finger holes over static labels, a clockwise drag selects the
//! sector swept to, and selections accumulate until a quiet period flushes
//! them to a completion callback. A dedicated back sector retracts the
//! accumulated sequence instead.

pub mod dial;
pub mod style;

pub use dial::RotaryDial;
pub use style::DialStyle;

// Core types callers need to build and configure a dial.
pub use spindial_core::{
    DialError, DialOptions, DialResult, SymbolEntry, DEFAULT_FLUSH_DELAY,
};
