//! Momentary switch click classification
//!
//! Turns raw pull-up switch samples into single- and double-click events.
//! A press is a falling edge (released → pressed). The first press opens a
//! window; a second press inside it is a double-click, otherwise the first
//! press resolves as a single-click once the window has elapsed.

use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

/// Outcome of classifying one switch sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickEvent {
    None,
    Single,
    Double,
}

/// Click state machine for a pull-up momentary switch
///
/// At most one unresolved press is pending at any time.
#[derive(Debug, Clone)]
pub struct ClickClassifier {
    window: Duration,
    /// Switch level seen on the previous sample, `true` is released
    previous: bool,
    /// Time of the first, not yet resolved press
    pending_since: Option<Instant>,
}

impl ClickClassifier {
    /// Create a classifier with the switch assumed released
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            previous: true,
            pending_since: None,
        }
    }

    /// Time of the pending press, if any
    pub const fn pending_since(&self) -> Option<Instant> {
        self.pending_since
    }

    /// Feed one switch sample and return the event it produces
    ///
    /// `released` follows pull-up semantics: `true` when the switch is open.
    /// Exactly one event is produced per call.
    pub fn classify(&mut self, released: bool, now: Instant) -> ClickEvent {
        let is_press = self.previous && !released;
        self.previous = released;

        match (is_press, self.pending_since) {
            (true, None) => {
                #[cfg(feature = "esp32-log")]
                println!("[click] press @ {}ms", now.as_millis());
                self.pending_since = Some(now);
                ClickEvent::None
            }
            (true, Some(since)) => {
                #[cfg(feature = "esp32-log")]
                println!("[click] press @ {}ms", now.as_millis());
                if self.is_expired(since, now) {
                    // The earlier press resolves and this one starts over
                    self.pending_since = Some(now);
                    ClickEvent::Single
                } else {
                    self.pending_since = None;
                    ClickEvent::Double
                }
            }
            (false, Some(since)) if self.is_expired(since, now) => {
                self.pending_since = None;
                ClickEvent::Single
            }
            (false, _) => ClickEvent::None,
        }
    }

    fn is_expired(&self, since: Instant, now: Instant) -> bool {
        now.saturating_duration_since(since) >= self.window
    }
}
