//! Tempo and timing for alankar playback.

use anyhow::{anyhow, Result};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::{Duration, Instant};

/// Slowest accepted tempo.
pub const MIN_BPM: u32 = 40;
/// Fastest accepted tempo.
pub const MAX_BPM: u32 = 200;
/// Default tempo when none has been set.
pub const DEFAULT_BPM: u32 = 90;

/// Beats-per-minute setting, valid only within [`MIN_BPM`, `MAX_BPM`].
///
/// Construction and mutation are validated; a rejected update leaves the
/// previous value in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tempo {
    bpm: u32,
}

impl Tempo {
    /// Create a tempo, rejecting values outside the accepted range.
    pub fn new(bpm: u32) -> Result<Self> {
        if !(MIN_BPM..=MAX_BPM).contains(&bpm) {
            return Err(anyhow!(
                "Tempo must be between {} and {} BPM, got {}",
                MIN_BPM,
                MAX_BPM,
                bpm
            ));
        }
        Ok(Tempo { bpm })
    }

    /// Update the tempo. On a rejected value the previous setting is kept.
    pub fn set(&mut self, bpm: u32) -> Result<()> {
        *self = Tempo::new(bpm)?;
        Ok(())
    }

    pub fn bpm(&self) -> u32 {
        self.bpm
    }

    /// Delay between consecutive notes of a line: one beat spread evenly
    /// across the line. A zero-length line is treated as one note to keep
    /// the divisor sound.
    pub fn note_delay(&self, line_len: usize) -> Duration {
        let notes = line_len.max(1) as f64;
        Duration::from_secs_f64(60.0 / self.bpm as f64 / notes)
    }

    /// Pacing gap between lines: twice the note delay.
    pub fn line_delay(&self, line_len: usize) -> Duration {
        self.note_delay(line_len) * 2
    }
}

impl Default for Tempo {
    fn default() -> Self {
        Tempo { bpm: DEFAULT_BPM }
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} BPM", self.bpm)
    }
}

/// Sleep for `duration` in small increments, checking the cancellation
/// flag between increments. Returns false if interrupted.
pub fn sleep_with_cancel(duration: Duration, cancelled: &AtomicBool) -> bool {
    let target = Instant::now() + duration;
    loop {
        if cancelled.load(Ordering::Relaxed) {
            return false;
        }
        let remaining = target.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return true;
        }
        // Sleep in small increments for responsiveness
        thread::sleep(remaining.min(Duration::from_millis(5)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_tempo_bounds() {
        assert!(Tempo::new(MIN_BPM).is_ok());
        assert!(Tempo::new(MAX_BPM).is_ok());
        assert!(Tempo::new(MIN_BPM - 1).is_err());
        assert!(Tempo::new(MAX_BPM + 1).is_err());
        assert!(Tempo::new(0).is_err());
    }

    #[test]
    fn test_rejected_update_keeps_previous() {
        let mut tempo = Tempo::new(120).unwrap();
        assert!(tempo.set(500).is_err());
        assert_eq!(tempo.bpm(), 120);

        assert!(tempo.set(60).is_ok());
        assert_eq!(tempo.bpm(), 60);
    }

    #[test]
    fn test_note_delay_scales_with_tempo() {
        let slow = Tempo::new(60).unwrap();
        let fast = Tempo::new(120).unwrap();
        // Doubling the tempo halves the delay.
        assert_eq!(fast.note_delay(4) * 2, slow.note_delay(4));
        // At 60 BPM a 1-note line gets one full second.
        assert_eq!(slow.note_delay(1), Duration::from_secs(1));
        // ...and a 4-note line a quarter of it.
        assert_eq!(slow.note_delay(4), Duration::from_millis(250));
    }

    #[test]
    fn test_empty_line_divisor_guard() {
        let tempo = Tempo::default();
        assert_eq!(tempo.note_delay(0), tempo.note_delay(1));
        assert_eq!(tempo.line_delay(0), tempo.note_delay(1) * 2);
    }

    #[test]
    fn test_sleep_completes() {
        let cancelled = AtomicBool::new(false);
        let start = Instant::now();
        assert!(sleep_with_cancel(Duration::from_millis(30), &cancelled));
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[test]
    fn test_sleep_interrupted_promptly() {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let handle = thread::spawn(move || {
            thread::sleep(Duration::from_millis(20));
            flag.store(true, Ordering::Relaxed);
        });

        let start = Instant::now();
        assert!(!sleep_with_cancel(Duration::from_secs(5), &cancelled));
        // Allow generous slack for slow CI schedulers.
        assert!(start.elapsed() < Duration::from_secs(1));
        handle.join().unwrap();
    }
}
