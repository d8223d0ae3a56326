use std::time::Instant;

/// Monotonic playback clock for the preview front-ends.
///
/// Stores an anchor position plus the instant it was taken; while playing,
/// the current position is the anchor plus the time elapsed since then.
#[derive(Debug, PartialEq, Default)]
pub struct PlaybackTimer {
    /// Anchor position in milliseconds (finite, >= 0).
    anchor_ms: f64,
    /// Set only while playing.
    anchor_instant: Option<Instant>,
}

impl PlaybackTimer {
    /// A running clock starting at `position_ms`.
    pub fn started_at(position_ms: f64) -> Self {
        Self {
            anchor_ms: sanitize_position(position_ms),
            anchor_instant: Some(Instant::now()),
        }
    }

    pub fn is_playing(&self) -> bool {
        self.anchor_instant.is_some()
    }

    /// Jump to `position_ms`, keeping the play/pause state.
    pub fn seek(&mut self, position_ms: f64) {
        self.anchor_ms = sanitize_position(position_ms);
        if self.anchor_instant.is_some() {
            self.anchor_instant = Some(Instant::now());
        }
    }

    pub fn resume(&mut self) {
        if self.anchor_instant.is_none() {
            self.anchor_instant = Some(Instant::now());
        }
    }

    /// Freeze the clock at the current estimate so paused time is not counted.
    pub fn pause(&mut self) {
        self.anchor_ms = self.position_ms_at(Instant::now());
        self.anchor_instant = None;
    }

    pub fn toggle(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.resume();
        }
    }

    pub fn position_ms(&self) -> f64 {
        self.position_ms_at(Instant::now())
    }

    /// Whole milliseconds, as consumed by the renderer.
    pub fn now_ms(&self) -> i64 {
        self.position_ms() as i64
    }

    fn position_ms_at(&self, now: Instant) -> f64 {
        let Some(inst) = self.anchor_instant else {
            return self.anchor_ms;
        };
        let elapsed = now.saturating_duration_since(inst).as_secs_f64() * 1000.0;
        let val = self.anchor_ms + elapsed;
        if val.is_finite() { val } else { self.anchor_ms }
    }
}

pub fn sanitize_position(p: f64) -> f64 {
    if !p.is_finite() || p < 0.0 { 0.0 } else { p }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn paused_clock_does_not_advance() {
        let mut t = PlaybackTimer::started_at(1000.0);
        t.pause();
        let a = t.position_ms();
        std::thread::sleep(Duration::from_millis(15));
        assert_eq!(t.position_ms(), a);
        assert!(a >= 1000.0);
        assert!(!t.is_playing());
    }

    #[test]
    fn running_clock_advances() {
        let t = PlaybackTimer::started_at(0.0);
        std::thread::sleep(Duration::from_millis(15));
        assert!(t.position_ms() >= 15.0);
        assert!(t.now_ms() >= 15);
    }

    #[test]
    fn seek_keeps_pause_state() {
        let mut t = PlaybackTimer::default();
        assert!(!t.is_playing());
        t.seek(2500.0);
        assert_eq!(t.position_ms(), 2500.0);
        assert!(!t.is_playing());
        t.toggle();
        assert!(t.is_playing());
        t.toggle();
        assert!(!t.is_playing());
    }

    #[test]
    fn positions_are_sanitized() {
        assert_eq!(sanitize_position(f64::NAN), 0.0);
        assert_eq!(sanitize_position(f64::INFINITY), 0.0);
        assert_eq!(sanitize_position(-3.0), 0.0);
        assert_eq!(sanitize_position(42.5), 42.5);
        assert_eq!(PlaybackTimer::started_at(f64::NAN).anchor_ms, 0.0);
    }
}
