//! Attention-blink for a just-activated marker, as an explicit cancellable
//! task. Starting a new blink bumps a monotonic token, so a stale timer
//! firing after cancellation is a no-op — two competing blink drivers can
//! never fight over the same marker.
//!
//! The blinker is a pure state machine: the caller (UI timer, test) supplies
//! the tick cadence and applies the returned command to the viewport.

use crate::catalog::EntryId;
use crate::view::MarkerHandle;

/// Opacity used on the dimmed half of a blink cycle.
pub const BLINK_DIM_OPACITY: f64 = 0.4;

pub type BlinkToken = u64;

/// What the caller should do after a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlinkTick {
    /// Token is no longer current; drop the driving timer.
    Stale,
    /// Set the marker to this opacity and keep ticking.
    Toggle { marker: MarkerHandle, opacity: f64 },
    /// Blink completed: force opacity back to 1.0 and, unless `entry` is
    /// still the selected one, clear its highlight.
    Done { marker: MarkerHandle, entry: EntryId },
}

#[derive(Debug)]
struct ActiveBlink {
    entry: EntryId,
    marker: MarkerHandle,
    ticks: u32,
    dimmed: bool,
}

#[derive(Debug)]
pub struct Blinker {
    token: BlinkToken,
    active: Option<ActiveBlink>,
    total_ticks: u32,
}

impl Blinker {
    pub fn new(interval_ms: u64, duration_ms: u64) -> Self {
        Self {
            token: 0,
            active: None,
            total_ticks: (duration_ms / interval_ms.max(1)).max(1) as u32,
        }
    }

    /// Begin a blink on `marker`, implicitly cancelling any prior blink.
    /// Returns the token the driving timer must present on every tick.
    pub fn start(&mut self, entry: EntryId, marker: MarkerHandle) -> BlinkToken {
        self.token += 1;
        self.active = Some(ActiveBlink {
            entry,
            marker,
            ticks: 0,
            dimmed: false,
        });
        self.token
    }

    /// Invalidate the current blink without starting another.
    pub fn cancel(&mut self) {
        self.token += 1;
        self.active = None;
    }

    /// Advance by one interval. Stale tokens are ignored.
    pub fn tick(&mut self, token: BlinkToken) -> BlinkTick {
        if token != self.token {
            return BlinkTick::Stale;
        }
        let Some(active) = self.active.as_mut() else {
            return BlinkTick::Stale;
        };

        active.ticks += 1;
        if active.ticks >= self.total_ticks {
            let done = BlinkTick::Done {
                marker: active.marker,
                entry: active.entry,
            };
            self.active = None;
            done
        } else {
            active.dimmed = !active.dimmed;
            BlinkTick::Toggle {
                marker: active.marker,
                opacity: if active.dimmed { BLINK_DIM_OPACITY } else { 1.0 },
            }
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn current_token(&self) -> BlinkToken {
        self.token
    }
}
