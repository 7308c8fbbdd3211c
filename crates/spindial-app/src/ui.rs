//! Demo UI: a hexadecimal dial that composes unicode characters.
//!
//! Dialed digits accumulate into a hex code point; after the quiet period
//! the code point is decoded and the character appended to a composed line.
//! The back sector of the dial deletes the last composed character.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{Color32, Context, RichText};

use spindial_core::{DialOptions, SymbolEntry};
use spindial_widget::RotaryDial;

/// Line of composed characters, shared with the dial callbacks.
type ComposedLine = Rc<RefCell<String>>;

/// UI state for the demo.
pub struct UiState {
    dial: RotaryDial<char>,
    composed: ComposedLine,
}

impl UiState {
    /// Build the demo state: a hex dial wired to a composed output line.
    pub fn new() -> Self {
        let composed: ComposedLine = Rc::new(RefCell::new(String::new()));

        let mut dial = RotaryDial::new(hex_symbols(), DialOptions::square(500.0))
            .expect("Failed to build hex dial");

        let line = composed.clone();
        dial.on_complete(move |digits| match decode_code_point(&digits) {
            Some(ch) => line.borrow_mut().push(ch),
            None => log::warn!("dialed sequence is not a valid code point"),
        });

        let line = composed.clone();
        dial.on_back(move || {
            line.borrow_mut().pop();
        });

        Self { dial, composed }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

/// The sixteen hexadecimal digits as dial symbols.
fn hex_symbols() -> Vec<SymbolEntry<char>> {
    "0123456789ABCDEF"
        .chars()
        .map(|digit| SymbolEntry::new(digit.to_string(), digit))
        .collect()
}

/// Decode dialed hex digits into a character.
fn decode_code_point(digits: &[char]) -> Option<char> {
    if digits.is_empty() {
        return None;
    }
    let hex: String = digits.iter().collect();
    let code_point = u32::from_str_radix(&hex, 16).ok()?;
    char::from_u32(code_point)
}

/// Render the demo UI.
pub fn render_ui(ctx: &Context, ui_state: &mut UiState) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.add_space(12.0);
            ui.heading("Spindial");
            ui.label(
                RichText::new("Dial hex digits clockwise, pause to compose a character")
                    .color(Color32::from_rgb(120, 120, 120)),
            );
            ui.add_space(8.0);

            let composed = ui_state.composed.borrow().clone();
            ui.label(RichText::new(composed).monospace().size(28.0));

            let pending: String = ui_state.dial.pending().iter().collect();
            ui.label(
                RichText::new(format!("dialing: {}", pending))
                    .monospace()
                    .color(Color32::from_rgb(120, 120, 120)),
            );

            ui.add_space(8.0);
            ui_state.dial.show(ui);
        });
    });
}
