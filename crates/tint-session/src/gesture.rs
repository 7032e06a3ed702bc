#![forbid(unsafe_code)]

//! Cancellable press timer: tells a short press from a long press.
//!
//! [`PressTimer`] is poll-driven. The host calls [`press`](PressTimer::press)
//! on touch-down, [`poll`](PressTimer::poll) on every tick, and
//! [`release`](PressTimer::release) on touch-up, passing the current
//! [`Instant`] each time. Nothing runs in the background, so there is no
//! timer that could fire late.
//!
//! # Invariants
//!
//! 1. A gesture yields exactly one outcome: `ShortPress` or `LongPress`.
//! 2. Once `LongPress` is reported, the matching release yields nothing.
//! 3. After [`cancel`](PressTimer::cancel) or release, `poll` never fires
//!    for that gesture.
//! 4. A release at or past the threshold that was never polled still reports
//!    `LongPress`: expiry happened first.

use web_time::{Duration, Instant};

/// Default hold time before a press becomes a long press.
pub const DEFAULT_LONG_PRESS: Duration = Duration::from_millis(500);

/// What a finished (or expired) press means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome<T> {
    ShortPress(T),
    LongPress(T),
}

impl<T> PressOutcome<T> {
    pub fn payload(&self) -> &T {
        match self {
            Self::ShortPress(p) | Self::LongPress(p) => p,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingPress<T> {
    payload: T,
    started: Instant,
    fired: bool,
}

/// Press tracker carrying a payload (e.g. the pressed menu cell).
#[derive(Debug, Clone)]
pub struct PressTimer<T> {
    threshold: Duration,
    pending: Option<PendingPress<T>>,
}

impl<T: Copy> PressTimer<T> {
    #[must_use]
    pub fn new(threshold: Duration) -> Self {
        Self {
            threshold,
            pending: None,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> Duration {
        self.threshold
    }

    /// Start a press. A press already in flight is dropped without firing.
    pub fn press(&mut self, payload: T, now: Instant) {
        self.pending = Some(PendingPress {
            payload,
            started: now,
            fired: false,
        });
    }

    /// Fire the long press once the threshold has elapsed.
    pub fn poll(&mut self, now: Instant) -> Option<PressOutcome<T>> {
        let pending = self.pending.as_mut()?;
        if pending.fired || now.saturating_duration_since(pending.started) < self.threshold {
            return None;
        }
        pending.fired = true;
        Some(PressOutcome::LongPress(pending.payload))
    }

    /// End the press. Short press if released early, nothing if the long
    /// press already fired.
    pub fn release(&mut self, now: Instant) -> Option<PressOutcome<T>> {
        let pending = self.pending.take()?;
        if pending.fired {
            None
        } else if now.saturating_duration_since(pending.started) >= self.threshold {
            Some(PressOutcome::LongPress(pending.payload))
        } else {
            Some(PressOutcome::ShortPress(pending.payload))
        }
    }

    /// Abandon the press (finger slid off, view hidden). Nothing fires.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pending.is_some()
    }
}

impl<T: Copy> Default for PressTimer<T> {
    fn default() -> Self {
        Self::new(DEFAULT_LONG_PRESS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS_200: Duration = Duration::from_millis(200);
    const MS_600: Duration = Duration::from_millis(600);

    fn now() -> Instant {
        Instant::now()
    }

    #[test]
    fn early_release_is_short_press() {
        let mut timer = PressTimer::default();
        let t = now();
        timer.press(3u8, t);
        assert_eq!(timer.poll(t + MS_200), None);
        assert_eq!(timer.release(t + MS_200), Some(PressOutcome::ShortPress(3)));
        assert!(!timer.is_pressed());
    }

    #[test]
    fn long_press_fires_once_and_suppresses_release() {
        let mut timer = PressTimer::default();
        let t = now();
        timer.press('a', t);
        assert_eq!(timer.poll(t + MS_600), Some(PressOutcome::LongPress('a')));
        assert_eq!(timer.poll(t + Duration::from_millis(700)), None);
        assert_eq!(timer.release(t + Duration::from_millis(800)), None);
    }

    #[test]
    fn cancelled_press_never_fires() {
        let mut timer = PressTimer::default();
        let t = now();
        timer.press(1u32, t);
        timer.cancel();
        assert_eq!(timer.poll(t + MS_600), None);
        assert_eq!(timer.release(t + MS_600), None);
    }

    #[test]
    fn released_press_never_fires_later() {
        let mut timer = PressTimer::default();
        let t = now();
        timer.press(1u32, t);
        timer.release(t + MS_200);
        assert_eq!(timer.poll(t + MS_600), None);
    }

    #[test]
    fn unpolled_expiry_reports_long_press_on_release() {
        let mut timer = PressTimer::default();
        let t = now();
        timer.press(9u16, t);
        assert_eq!(timer.release(t + MS_600), Some(PressOutcome::LongPress(9)));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut timer = PressTimer::new(Duration::from_millis(250));
        let t = now();
        timer.press((), t);
        assert_eq!(timer.poll(t + Duration::from_millis(249)), None);
        assert_eq!(timer.poll(t + Duration::from_millis(250)), Some(PressOutcome::LongPress(())));
    }

    #[test]
    fn new_press_replaces_old_one() {
        let mut timer = PressTimer::default();
        let t = now();
        timer.press(1u8, t);
        timer.press(2u8, t + Duration::from_millis(400));
        // The first press would have expired at +500ms; the second has not.
        assert_eq!(timer.poll(t + MS_600), None);
        assert_eq!(
            timer.release(t + Duration::from_millis(650)),
            Some(PressOutcome::ShortPress(2))
        );
    }

    #[test]
    fn payload_accessor() {
        assert_eq!(*PressOutcome::LongPress(5).payload(), 5);
        assert_eq!(*PressOutcome::ShortPress(6).payload(), 6);
    }
}
