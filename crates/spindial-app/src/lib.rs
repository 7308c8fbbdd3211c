//! Spindial Demo Application
//!
//! Native application shell providing windowing, GPU setup and the demo UI
//! for the rotary dial widget.

mod app;
mod ui;

pub use app::{App, AppConfig};
pub use ui::{render_ui, UiState};
