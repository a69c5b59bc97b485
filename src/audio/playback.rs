//! Cooperative playback of generated patterns.
//!
//! Each direction owns one `DirectionPlayer`; starting a new playback for a
//! direction cancels the in-flight task for that direction before the new
//! one begins, so a direction never has two writers of its highlight. The
//! two directions are independent and may play concurrently.

use crate::audio::scheduler::{sleep_with_cancel, Tempo};
use alankar_core::{Direction, GeneratedPattern};
use anyhow::Result;
use crossbeam_channel::Sender;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

/// Capability consumed by the playback scheduler: begin sounding a degree.
///
/// `trigger` returns once playback has started, not once the sound has
/// finished. An unresolvable symbol is a recoverable error, never a panic;
/// the scheduler logs it and moves on.
pub trait SoundTrigger: Send + Sync {
    fn trigger(&self, symbol: &str) -> Result<()>;
}

/// Trigger that makes no sound. Used when no audio device is available.
pub struct NullTrigger;

impl SoundTrigger for NullTrigger {
    fn trigger(&self, _symbol: &str) -> Result<()> {
        Ok(())
    }
}

/// The currently sounding symbol for one direction, or `None` between
/// lines and while idle.
///
/// Written only by that direction's active playback task; everyone else
/// just reads.
#[derive(Clone, Default)]
pub struct HighlightState {
    current: Arc<Mutex<Option<String>>>,
}

impl HighlightState {
    pub fn current(&self) -> Option<String> {
        self.current.lock().expect("highlight lock poisoned").clone()
    }

    fn set(&self, symbol: Option<&str>) {
        *self.current.lock().expect("highlight lock poisoned") = symbol.map(str::to_string);
    }
}

/// Highlight change emitted by a playback task, for live rendering.
#[derive(Debug, Clone)]
pub struct PlaybackEvent {
    pub direction: Direction,
    pub symbol: Option<String>,
}

/// One in-flight playback run. Cancellation is cooperative: the worker
/// checks the flag at every suspension point.
struct PlaybackTask {
    cancelled: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl PlaybackTask {
    fn spawn(
        direction: Direction,
        pattern: GeneratedPattern,
        tempo: Tempo,
        highlight: HighlightState,
        trigger: Arc<dyn SoundTrigger>,
        events: Option<Sender<PlaybackEvent>>,
    ) -> Self {
        let cancelled = Arc::new(AtomicBool::new(false));
        let flag = cancelled.clone();
        let handle = thread::spawn(move || {
            run_pattern(direction, &pattern, tempo, &highlight, &*trigger, &events, &flag);
        });
        PlaybackTask {
            cancelled,
            handle: Some(handle),
        }
    }

    /// Request cancellation and wait for the worker to stop. Joining here
    /// guarantees the old task has released the highlight before a new
    /// task starts writing it.
    fn cancel(&mut self) {
        self.cancelled.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn wait(&mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }
}

impl Drop for PlaybackTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn emit(
    direction: Direction,
    highlight: &HighlightState,
    events: &Option<Sender<PlaybackEvent>>,
    symbol: Option<&str>,
) {
    highlight.set(symbol);
    if let Some(tx) = events {
        let _ = tx.send(PlaybackEvent {
            direction,
            symbol: symbol.map(str::to_string),
        });
    }
}

/// Walk the pattern strictly top-to-bottom, left-to-right, pacing notes
/// and lines from the tempo.
fn run_pattern(
    direction: Direction,
    pattern: &GeneratedPattern,
    tempo: Tempo,
    highlight: &HighlightState,
    trigger: &dyn SoundTrigger,
    events: &Option<Sender<PlaybackEvent>>,
    cancelled: &AtomicBool,
) {
    let mut sounding = false;
    'lines: for line in pattern.lines() {
        let note_delay = tempo.note_delay(line.len());
        let line_delay = tempo.line_delay(line.len());

        for symbol in line.symbols() {
            if cancelled.load(Ordering::Relaxed) {
                break 'lines;
            }
            emit(direction, highlight, events, Some(symbol));
            sounding = true;
            if let Err(e) = trigger.trigger(symbol) {
                // One missing sound must not abort the rest of the run.
                eprintln!("playback: could not sound '{}': {}", symbol, e);
            }
            if !sleep_with_cancel(note_delay, cancelled) {
                break 'lines;
            }
        }

        // An empty line triggers nothing but still takes its pacing gap.
        emit(direction, highlight, events, None);
        sounding = false;
        if !sleep_with_cancel(line_delay, cancelled) {
            break 'lines;
        }
    }

    // A cancelled task may have left a note highlighted.
    if sounding {
        emit(direction, highlight, events, None);
    }
}

/// Playback scheduler for one direction.
pub struct DirectionPlayer {
    direction: Direction,
    highlight: HighlightState,
    trigger: Arc<dyn SoundTrigger>,
    events: Option<Sender<PlaybackEvent>>,
    task: Option<PlaybackTask>,
}

impl DirectionPlayer {
    pub fn new(direction: Direction, trigger: Arc<dyn SoundTrigger>) -> Self {
        DirectionPlayer {
            direction,
            highlight: HighlightState::default(),
            trigger,
            events: None,
            task: None,
        }
    }

    /// Forward every highlight change to `sender` as well.
    pub fn with_events(mut self, sender: Sender<PlaybackEvent>) -> Self {
        self.events = Some(sender);
        self
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Start playing a pattern at the given tempo, cancelling any playback
    /// already running for this direction.
    pub fn play(&mut self, pattern: &GeneratedPattern, tempo: Tempo) {
        self.stop();
        if pattern.is_empty() {
            return;
        }
        self.task = Some(PlaybackTask::spawn(
            self.direction,
            pattern.clone(),
            tempo,
            self.highlight.clone(),
            self.trigger.clone(),
            self.events.clone(),
        ));
    }

    /// Cancel any in-flight playback and clear the highlight.
    pub fn stop(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.cancel();
        }
    }

    /// Block until the current playback finishes on its own.
    pub fn wait(&mut self) {
        if let Some(mut task) = self.task.take() {
            task.wait();
        }
    }

    pub fn is_playing(&self) -> bool {
        self.task.as_ref().map_or(false, |t| !t.is_finished())
    }

    /// Read handle for this direction's highlight.
    pub fn highlight(&self) -> &HighlightState {
        &self.highlight
    }
}
