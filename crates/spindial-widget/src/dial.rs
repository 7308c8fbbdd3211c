//! The rotary dial widget.

use std::time::{Duration, Instant};

use egui::{
    vec2, Align2, CursorIcon, FontId, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2,
};
use kurbo::Point;

use spindial_core::{
    polar_angle, DialEntry, DialOptions, DialResult, DragGesture, SectorLayout, SequenceBuffer,
    SymbolEntry, SymbolRing, Sweep, HOLE_RADIUS,
};

use crate::style::DialStyle;

/// Callback invoked with the accumulated sequence once the quiet period
/// elapses.
type CompleteCallback<T> = Box<dyn FnMut(Vec<T>)>;

/// Callback invoked when the back entry is selected.
type BackCallback = Box<dyn FnMut()>;

/// A circular selector operated by clockwise drag sweeps.
///
/// Symbols sit on a ring of finger holes over a static label ring. Dragging
/// clockwise rotates the hole ring; releasing selects the sector the sweep
/// reached. Selected values accumulate and are handed to the completion
/// callback after a quiet period, while the back sector clears them and
/// fires the back callback instead. After every release the ring animates
/// back to its resting position.
///
/// The widget retains interaction state across frames, so the caller keeps
/// it alive and calls [`show`](Self::show) each frame.
pub struct RotaryDial<T> {
    ring: SymbolRing<T>,
    layout: SectorLayout,
    options: DialOptions,
    style: DialStyle,
    gesture: DragGesture,
    sequence: SequenceBuffer<T>,
    /// Top-left of the widget rect, captured when a drag starts so the
    /// whole gesture is measured against one origin.
    drag_origin: Option<Pos2>,
    on_complete: Option<CompleteCallback<T>>,
    on_back: Option<BackCallback>,
}

impl<T: Clone> RotaryDial<T> {
    /// Create a dial from caller symbols.
    ///
    /// Fails when the symbol set is empty, a label collides, or the size is
    /// unusable.
    pub fn new(symbols: Vec<SymbolEntry<T>>, options: DialOptions) -> DialResult<Self> {
        options.validate()?;
        let ring = SymbolRing::new(symbols)?;
        let layout = SectorLayout::new(options.width as f64, ring.len());

        Ok(Self {
            ring,
            layout,
            options,
            style: DialStyle::default(),
            gesture: DragGesture::new(),
            sequence: SequenceBuffer::new(),
            drag_origin: None,
            on_complete: None,
            on_back: None,
        })
    }

    /// Set the visual style.
    pub fn with_style(mut self, style: DialStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the quiet period before accumulated values are flushed.
    pub fn with_flush_delay(mut self, delay: Duration) -> Self {
        self.sequence.set_delay(delay);
        self
    }

    /// Register the completion callback.
    ///
    /// The dial holds a single slot: registering again replaces the
    /// previous callback.
    pub fn on_complete(&mut self, callback: impl FnMut(Vec<T>) + 'static) {
        self.on_complete = Some(Box::new(callback));
    }

    /// Register the back callback.
    ///
    /// The dial holds a single slot: registering again replaces the
    /// previous callback.
    pub fn on_back(&mut self, callback: impl FnMut() + 'static) {
        self.on_back = Some(Box::new(callback));
    }

    /// Values selected since the last flush or back action.
    pub fn pending(&self) -> &[T] {
        self.sequence.values()
    }

    /// Show the dial and run one frame of interaction.
    pub fn show(&mut self, ui: &mut Ui) -> Response {
        let desired = vec2(self.options.width, self.options.height);
        let (rect, response) = ui.allocate_exact_size(desired, Sense::drag());
        let now = Instant::now();

        if response.drag_started() {
            let origin = rect.min;
            self.drag_origin = Some(origin);
            if let Some(pos) = response.interact_pointer_pos() {
                self.gesture.begin(self.pointer_angle(origin, pos));
            }
        } else if response.dragged() && response.drag_delta() != Vec2::ZERO {
            if let Some(origin) = self.drag_origin {
                // Movement mid-gesture holds off the pending flush; a
                // motionless hold does not.
                self.sequence.disarm();
                if let Some(pos) = response.interact_pointer_pos() {
                    self.gesture.track(self.pointer_angle(origin, pos));
                }
            }
        }

        if response.drag_stopped() {
            match (self.drag_origin.take(), response.interact_pointer_pos()) {
                (Some(origin), Some(pos)) => {
                    let angle = self.pointer_angle(origin, pos);
                    if let Some(sweep) = self.gesture.release(angle) {
                        self.resolve_sweep(sweep, now);
                    }
                }
                _ => self.gesture.cancel(),
            }
        }

        if let Some(sequence) = self.sequence.take_due(now) {
            match &mut self.on_complete {
                Some(callback) => callback(sequence),
                None => log::debug!("sequence completed with no callback registered"),
            }
        }
        if let Some(deadline) = self.sequence.deadline() {
            ui.ctx()
                .request_repaint_after(deadline.saturating_duration_since(now));
        }

        // The hole ring follows the pointer while dragging and snaps back
        // linearly once released.
        let rotation_id = response.id.with("rotation");
        let rotation = if self.gesture.is_active() {
            ui.ctx()
                .animate_value_with_time(rotation_id, self.gesture.rotation() as f32, 0.0)
        } else {
            ui.ctx()
                .animate_value_with_time(rotation_id, 0.0, self.style.snap_back_time)
        };

        if ui.is_rect_visible(rect) {
            self.paint(ui, rect, rotation as f64);
        }

        response.on_hover_cursor(if self.gesture.is_active() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        })
    }

    /// Angle of a screen position about the dial center, measured against
    /// the widget origin recorded at drag start.
    fn pointer_angle(&self, origin: Pos2, pos: Pos2) -> f64 {
        let local = Point::new((pos.x - origin.x) as f64, (pos.y - origin.y) as f64);
        polar_angle(self.layout.center(), local)
    }

    /// Map a finished sweep to its sector and apply the selection.
    fn resolve_sweep(&mut self, sweep: Sweep, now: Instant) {
        let Some(index) = self.layout.selection_index(sweep.angle()) else {
            log::debug!("sweep of {:.3} rad landed outside the ring", sweep.angle());
            return;
        };

        match self.ring.get(index) {
            Some(DialEntry::Back) => {
                self.sequence.clear();
                if let Some(callback) = &mut self.on_back {
                    callback();
                }
            }
            Some(DialEntry::Symbol(entry)) => {
                log::debug!("selected sector {} ({})", index, entry.label);
                self.sequence.push(entry.value.clone(), now);
            }
            None => {}
        }
    }

    fn paint(&self, ui: &Ui, rect: Rect, rotation: f64) {
        let painter = ui.painter();
        let origin = rect.min;
        let center = to_screen(origin, self.layout.center());

        painter.circle_stroke(
            center,
            self.layout.guide_radius() as f32,
            Stroke::new(self.style.guide_stroke_width, self.style.guide_stroke),
        );

        for index in 0..self.ring.len() {
            let pos = to_screen(origin, self.layout.hole_center(index, rotation));
            painter.circle(
                pos,
                HOLE_RADIUS as f32,
                self.style.hole_fill,
                Stroke::new(self.style.hole_stroke_width, self.style.hole_stroke),
            );
        }

        // Labels stay put while the holes turn, and draw on top.
        for (index, entry) in self.ring.entries().iter().enumerate() {
            let pos = to_screen(origin, self.layout.label_center(index));
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                entry.label(),
                FontId::proportional(self.style.label_size),
                self.style.label_color,
            );
        }
    }
}

fn to_screen(origin: Pos2, point: Point) -> Pos2 {
    Pos2::new(origin.x + point.x as f32, origin.y + point.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Context, Event, Modifiers, PointerButton, RawInput};
    use std::cell::RefCell;
    use std::f64::consts::TAU;
    use std::rc::Rc;
    use std::thread;

    const WIDTH: f64 = 500.0;
    // 16 hex symbols plus the back entry, with two spare slots.
    const INCREMENT: f64 = TAU / 19.0;

    fn hex_symbols() -> Vec<SymbolEntry<char>> {
        "0123456789ABCDEF"
            .chars()
            .map(|digit| SymbolEntry::new(digit.to_string(), digit))
            .collect()
    }

    fn test_dial() -> RotaryDial<char> {
        RotaryDial::new(hex_symbols(), DialOptions::square(WIDTH as f32))
            .unwrap()
            .with_flush_delay(Duration::from_millis(50))
    }

    /// Screen position on the hole ring at `angle`, assuming the dial is
    /// laid out at the panel origin.
    fn ring_pos(angle: f64) -> Pos2 {
        let center = WIDTH / 2.0;
        let radius = HOLE_RADIUS + WIDTH / 6.0 + 5.0;
        Pos2::new(
            (center + radius * angle.cos()) as f32,
            (center - radius * angle.sin()) as f32,
        )
    }

    fn press(pos: Pos2) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: true,
            modifiers: Modifiers::default(),
        }
    }

    fn release(pos: Pos2) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed: false,
            modifiers: Modifiers::default(),
        }
    }

    fn run_frame(ctx: &Context, dial: &mut RotaryDial<char>, events: Vec<Event>) {
        let input = RawInput {
            events,
            ..Default::default()
        };
        ctx.run(input, |ctx| {
            egui::CentralPanel::default()
                .frame(egui::Frame::new())
                .show(ctx, |ui| {
                    dial.show(ui);
                });
        });
    }

    /// Lay the dial out once so pointer events hit it, then run the event
    /// frames.
    fn run_gesture(ctx: &Context, dial: &mut RotaryDial<char>, frames: Vec<Vec<Event>>) {
        run_frame(ctx, dial, Vec::new());
        for events in frames {
            run_frame(ctx, dial, events);
        }
    }

    #[test]
    fn test_construction_rejects_empty_symbols() {
        let result = RotaryDial::<char>::new(Vec::new(), DialOptions::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_construction_rejects_bad_size() {
        let result = RotaryDial::new(hex_symbols(), DialOptions::new(0.0, 500.0));
        assert!(result.is_err());
    }

    #[test]
    fn test_sweep_selects_third_sector_and_flushes() {
        let ctx = Context::default();
        let mut dial = test_dial();
        let completed: Rc<RefCell<Vec<Vec<char>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = completed.clone();
        dial.on_complete(move |sequence| sink.borrow_mut().push(sequence));

        run_gesture(
            &ctx,
            &mut dial,
            vec![
                vec![press(ring_pos(6.0 * INCREMENT))],
                vec![Event::PointerMoved(ring_pos(4.0 * INCREMENT))],
                // Sweep of 3.5 increments, landing in the third sector.
                vec![release(ring_pos(2.5 * INCREMENT))],
            ],
        );

        assert_eq!(dial.pending(), ['2']);
        assert!(completed.borrow().is_empty());

        thread::sleep(Duration::from_millis(150));
        run_frame(&ctx, &mut dial, Vec::new());

        assert_eq!(completed.borrow().as_slice(), [vec!['2']]);
        assert!(dial.pending().is_empty());
    }

    #[test]
    fn test_tap_selects_sector_under_press_point() {
        let ctx = Context::default();
        let mut dial = test_dial();

        let pos = ring_pos(1.5 * INCREMENT);
        run_gesture(&ctx, &mut dial, vec![vec![press(pos)], vec![release(pos)]]);

        assert_eq!(dial.pending(), ['0']);
    }

    #[test]
    fn test_overlong_sweep_registers_nothing() {
        let ctx = Context::default();
        let mut dial = test_dial();

        run_gesture(
            &ctx,
            &mut dial,
            vec![
                vec![press(ring_pos(18.5 * INCREMENT))],
                vec![Event::PointerMoved(ring_pos(10.0 * INCREMENT))],
                // 18.3 increments of sweep, past the last sector.
                vec![release(ring_pos(0.2 * INCREMENT))],
            ],
        );

        assert!(dial.pending().is_empty());
    }

    #[test]
    fn test_back_clears_pending_and_fires_callback() {
        let ctx = Context::default();
        let mut dial = test_dial();
        let completed: Rc<RefCell<Vec<Vec<char>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = completed.clone();
        dial.on_complete(move |sequence| sink.borrow_mut().push(sequence));
        let back_calls = Rc::new(RefCell::new(0));
        let counter = back_calls.clone();
        dial.on_back(move || *counter.borrow_mut() += 1);

        let tap = ring_pos(1.5 * INCREMENT);
        run_gesture(&ctx, &mut dial, vec![vec![press(tap)], vec![release(tap)]]);
        assert_eq!(dial.pending(), ['0']);

        // Sweep of 17.5 increments lands on the back sector.
        run_gesture(
            &ctx,
            &mut dial,
            vec![
                vec![press(ring_pos(18.5 * INCREMENT))],
                vec![Event::PointerMoved(ring_pos(5.0 * INCREMENT))],
                vec![release(ring_pos(1.0 * INCREMENT))],
            ],
        );

        assert!(dial.pending().is_empty());
        assert_eq!(*back_calls.borrow(), 1);

        // The pending flush died with the buffer.
        thread::sleep(Duration::from_millis(150));
        run_frame(&ctx, &mut dial, Vec::new());
        assert!(completed.borrow().is_empty());
    }

    #[test]
    fn test_selections_within_quiet_period_flush_together() {
        let ctx = Context::default();
        let mut dial = test_dial();
        let completed: Rc<RefCell<Vec<Vec<char>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = completed.clone();
        dial.on_complete(move |sequence| sink.borrow_mut().push(sequence));

        let first = ring_pos(1.5 * INCREMENT);
        run_gesture(&ctx, &mut dial, vec![vec![press(first)], vec![release(first)]]);
        let second = ring_pos(3.5 * INCREMENT);
        run_gesture(&ctx, &mut dial, vec![vec![press(second)], vec![release(second)]]);

        assert_eq!(dial.pending(), ['0', '2']);

        thread::sleep(Duration::from_millis(150));
        run_frame(&ctx, &mut dial, Vec::new());

        assert_eq!(completed.borrow().as_slice(), [vec!['0', '2']]);
    }

    #[test]
    fn test_movement_holds_off_pending_flush() {
        let ctx = Context::default();
        let mut dial = test_dial();
        let completed: Rc<RefCell<Vec<Vec<char>>>> = Rc::new(RefCell::new(Vec::new()));
        let sink = completed.clone();
        dial.on_complete(move |sequence| sink.borrow_mut().push(sequence));

        let tap = ring_pos(1.5 * INCREMENT);
        run_gesture(&ctx, &mut dial, vec![vec![press(tap)], vec![release(tap)]]);
        assert_eq!(dial.pending(), ['0']);

        // Start a new gesture and move before the quiet period elapses.
        run_gesture(
            &ctx,
            &mut dial,
            vec![
                vec![press(ring_pos(18.5 * INCREMENT))],
                vec![Event::PointerMoved(ring_pos(18.3 * INCREMENT))],
            ],
        );
        thread::sleep(Duration::from_millis(150));
        run_frame(&ctx, &mut dial, Vec::new());

        // The flush stayed deferred while the pointer was down.
        assert!(completed.borrow().is_empty());
        assert_eq!(dial.pending(), ['0']);

        // Release past the start angle: the degenerate sweep spans the
        // whole press angle and lands outside the ring, selecting nothing.
        run_frame(&ctx, &mut dial, vec![release(ring_pos(18.7 * INCREMENT))]);
        assert_eq!(dial.pending(), ['0']);

        // A later selection re-arms the flush and carries both values.
        let next = ring_pos(3.5 * INCREMENT);
        run_frame(&ctx, &mut dial, vec![press(next)]);
        run_frame(&ctx, &mut dial, vec![release(next)]);
        thread::sleep(Duration::from_millis(150));
        run_frame(&ctx, &mut dial, Vec::new());

        assert_eq!(completed.borrow().as_slice(), [vec!['0', '2']]);
    }

    #[test]
    fn test_callback_registration_replaces_previous() {
        let ctx = Context::default();
        let mut dial = test_dial();

        let first_hits = Rc::new(RefCell::new(0));
        let counter = first_hits.clone();
        dial.on_complete(move |_| *counter.borrow_mut() += 1);

        let second_hits = Rc::new(RefCell::new(0));
        let counter = second_hits.clone();
        dial.on_complete(move |_| *counter.borrow_mut() += 1);

        let tap = ring_pos(1.5 * INCREMENT);
        run_gesture(&ctx, &mut dial, vec![vec![press(tap)], vec![release(tap)]]);
        thread::sleep(Duration::from_millis(150));
        run_frame(&ctx, &mut dial, Vec::new());

        assert_eq!(*first_hits.borrow(), 0);
        assert_eq!(*second_hits.borrow(), 1);
    }
}
