use std::time::Instant;

/// Measures wall time between ticks in whole milliseconds.
///
/// Sub-millisecond remainders carry over to the next reading, so the sum of
/// all readings tracks real time. A stall longer than `max_frame_ms` (a
/// suspended terminal, a debugger break) is clamped rather than dumped into
/// a single tick. The clamp also caps the score earned in that tick, so
/// after a stall the score falls behind wall time.
pub struct FrameClock {
    last: Instant,
    max_frame_ms: u64,
}

impl FrameClock {
    pub fn new(max_frame_ms: u64) -> Self {
        Self {
            last: Instant::now(),
            max_frame_ms,
        }
    }

    pub fn reset(&mut self) {
        self.last = Instant::now();
    }

    pub fn elapsed_ms(&mut self) -> u64 {
        let now = Instant::now();
        let since = now.duration_since(self.last);
        let whole = since.as_millis() as u64;

        if whole > self.max_frame_ms {
            log::warn!(
                "frame took {}ms, clamping to {}ms",
                whole,
                self.max_frame_ms
            );
            self.last = now;
            return self.max_frame_ms;
        }

        // Keep the fractional part for the next reading.
        self.last += std::time::Duration::from_millis(whole);
        whole
    }
}
