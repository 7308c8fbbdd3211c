//! Debounced accumulation of selected values.
//!
//! Selected values collect in a buffer. Each selection arms a flush
//! deadline; once the quiet period elapses the whole buffer is handed over
//! at once. At most one deadline is armed at a time: a new selection
//! supersedes the previous deadline, pointer movement disarms it, and the
//! back action drops buffer and deadline together.
//!
//! All time flows through explicit [`Instant`] parameters, so the logic is
//! deterministic under test.

use std::mem;
use std::time::{Duration, Instant};

/// Quiet period before an accumulated sequence is flushed.
pub const DEFAULT_FLUSH_DELAY: Duration = Duration::from_millis(1500);

/// Accumulates selected values and arms the flush deadline.
#[derive(Debug, Clone)]
pub struct SequenceBuffer<T> {
    values: Vec<T>,
    deadline: Option<Instant>,
    delay: Duration,
}

impl<T> Default for SequenceBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SequenceBuffer<T> {
    /// Create an empty buffer with the default flush delay.
    pub fn new() -> Self {
        Self::with_delay(DEFAULT_FLUSH_DELAY)
    }

    /// Create an empty buffer with a custom flush delay.
    pub fn with_delay(delay: Duration) -> Self {
        Self {
            values: Vec::new(),
            deadline: None,
            delay,
        }
    }

    /// Set the flush delay. Applies from the next push.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Get the flush delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Append a value and arm the flush deadline at `now + delay`.
    ///
    /// Any deadline armed earlier is superseded, so only one flush is ever
    /// outstanding.
    pub fn push(&mut self, value: T, now: Instant) {
        self.values.push(value);
        self.deadline = Some(now + self.delay);
    }

    /// Cancel the armed deadline but keep the buffered values.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Drop all buffered values and cancel the armed deadline.
    pub fn clear(&mut self) {
        if !self.values.is_empty() {
            log::debug!("clearing {} buffered values", self.values.len());
        }
        self.values.clear();
        self.deadline = None;
    }

    /// Take the whole buffer if the armed deadline has passed.
    ///
    /// Leaves the buffer empty and disarmed, ready for the next sequence.
    pub fn take_due(&mut self, now: Instant) -> Option<Vec<T>> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                log::debug!("flushing {} buffered values", self.values.len());
                Some(mem::take(&mut self.values))
            }
            _ => None,
        }
    }

    /// The armed flush deadline, if any.
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a flush deadline is armed.
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Values buffered since the last flush or clear, in selection order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Number of buffered values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_arms_deadline() {
        let mut buffer = SequenceBuffer::new();
        let t0 = Instant::now();

        assert!(!buffer.is_armed());
        buffer.push('a', t0);

        assert!(buffer.is_armed());
        assert_eq!(buffer.deadline(), Some(t0 + DEFAULT_FLUSH_DELAY));
        assert_eq!(buffer.values(), ['a']);
    }

    #[test]
    fn test_flush_only_after_quiet_period() {
        let mut buffer = SequenceBuffer::new();
        let t0 = Instant::now();
        buffer.push('a', t0);

        assert!(buffer.take_due(t0 + Duration::from_millis(1499)).is_none());
        assert_eq!(
            buffer.take_due(t0 + Duration::from_millis(1500)),
            Some(vec!['a'])
        );
    }

    #[test]
    fn test_push_supersedes_previous_deadline() {
        let mut buffer = SequenceBuffer::new();
        let t0 = Instant::now();

        buffer.push('a', t0);
        buffer.push('b', t0 + Duration::from_millis(1000));

        // The first deadline has passed, but pushing re-armed it.
        assert!(buffer.take_due(t0 + Duration::from_millis(1600)).is_none());

        let flushed = buffer.take_due(t0 + Duration::from_millis(2500)).unwrap();
        assert_eq!(flushed, vec!['a', 'b']);
    }

    #[test]
    fn test_disarm_keeps_values() {
        let mut buffer = SequenceBuffer::new();
        let t0 = Instant::now();

        buffer.push('a', t0);
        buffer.disarm();

        assert!(!buffer.is_armed());
        assert_eq!(buffer.values(), ['a']);
        assert!(buffer.take_due(t0 + Duration::from_secs(60)).is_none());
    }

    #[test]
    fn test_clear_drops_values_and_deadline() {
        let mut buffer = SequenceBuffer::new();
        let t0 = Instant::now();

        buffer.push('a', t0);
        buffer.push('b', t0);
        buffer.clear();

        assert!(buffer.is_empty());
        assert!(!buffer.is_armed());
        assert!(buffer.take_due(t0 + Duration::from_secs(60)).is_none());
    }

    #[test]
    fn test_take_due_resets_for_next_sequence() {
        let mut buffer = SequenceBuffer::new();
        let t0 = Instant::now();

        buffer.push('a', t0);
        let first = buffer.take_due(t0 + DEFAULT_FLUSH_DELAY).unwrap();
        assert_eq!(first, vec!['a']);
        assert!(buffer.take_due(t0 + Duration::from_secs(60)).is_none());

        // The next sequence starts from an empty buffer.
        let t1 = t0 + Duration::from_secs(90);
        buffer.push('b', t1);
        assert_eq!(buffer.values(), ['b']);
        assert_eq!(buffer.take_due(t1 + DEFAULT_FLUSH_DELAY), Some(vec!['b']));
    }

    #[test]
    fn test_custom_delay() {
        let mut buffer = SequenceBuffer::with_delay(Duration::from_millis(10));
        let t0 = Instant::now();

        buffer.push('a', t0);
        assert!(buffer.take_due(t0 + Duration::from_millis(9)).is_none());
        assert!(buffer.take_due(t0 + Duration::from_millis(10)).is_some());

        buffer.set_delay(Duration::from_millis(100));
        assert_eq!(buffer.delay(), Duration::from_millis(100));
        buffer.push('b', t0);
        assert_eq!(buffer.deadline(), Some(t0 + Duration::from_millis(100)));
    }
}
