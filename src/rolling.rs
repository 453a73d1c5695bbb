// src/rolling.rs
//! Sliding time window over recent analyses (default 24h).
//!
//! Collects `(timestamp, sentiment score, confidence)` samples and reports
//! averages over the window. Informational only; nothing triggers off it.

use std::{
    collections::VecDeque,
    sync::Mutex,
    time::{Duration, SystemTime, UNIX_EPOCH},
};

/// Thread-safe rolling window over per-analysis scores.
#[derive(Debug)]
pub struct RollingWindow {
    inner: Mutex<Inner>,
    window: Duration,
}

#[derive(Debug)]
struct Inner {
    /// Stored samples as `(unix_seconds, sentiment score, confidence)`.
    buf: VecDeque<(u64, u8, u8)>,
}

impl RollingWindow {
    pub fn with_window(window: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner {
                buf: VecDeque::new(),
            }),
            window,
        }
    }

    /// Convenience constructor for the default 24h window.
    pub fn new_24h() -> Self {
        Self::with_window(Duration::from_secs(24 * 3600))
    }

    /// Record a new observation. If `ts_unix` is `None`, current time is used.
    ///
    /// Discards entries that have aged out of the window.
    pub fn record(&self, sentiment_score: u8, confidence: u8, ts_unix: Option<u64>) {
        let now = now_unix();
        let ts = ts_unix.unwrap_or(now);
        let cutoff = now.saturating_sub(self.window.as_secs());

        let mut inner = self.inner.lock().expect("rolling window mutex poisoned");

        inner.buf.push_back((ts, sentiment_score, confidence));
        while let Some(&(t, _, _)) = inner.buf.front() {
            if t < cutoff {
                inner.buf.pop_front();
            } else {
                break;
            }
        }
    }

    /// Average sentiment score, average confidence, and sample count within
    /// the window. Zeroes when the window is empty.
    pub fn averages_and_count(&self) -> (f32, f32, usize) {
        let now = now_unix();
        let cutoff = now.saturating_sub(self.window.as_secs());

        let inner = self.inner.lock().expect("rolling window mutex poisoned");
        let mut sentiment_sum: u64 = 0;
        let mut confidence_sum: u64 = 0;
        let mut n: usize = 0;

        for &(t, s, c) in inner.buf.iter().rev() {
            if t < cutoff {
                // buffer is time-ordered, everything before this is older
                break;
            }
            sentiment_sum += s as u64;
            confidence_sum += c as u64;
            n += 1;
        }

        if n == 0 {
            return (0.0, 0.0, 0);
        }
        (
            sentiment_sum as f32 / n as f32,
            confidence_sum as f32 / n as f32,
            n,
        )
    }

    /// Length of the window in seconds (for diagnostics).
    pub fn window_secs(&self) -> u64 {
        self.window.as_secs()
    }
}

/// Current UNIX time in seconds.
fn now_unix() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}
