//! # Alankar
//!
//! An interactive generator and player for sargam alankar exercises. From
//! a user-chosen seed of scale degrees it produces the transposed variants
//! of the exercise (ascending and descending families use distinct degree
//! alphabets and stop rules), renders them, and plays them back as timed
//! cues at a chosen tempo while tracking the currently sounding degree.
//!
//! ## Modules
//!
//! - `audio`: tempo and delay math, the cooperative playback scheduler,
//!   and the cpal-backed sound trigger.
//! - `commands`: the REPL command registry and handlers.
//! - `repl`: the interactive Read-Eval-Print Loop.
//!
//! The audio-free core (alphabets, seeds, patterns, transposition engine)
//! lives in the `alankar-core` crate.

pub mod audio;
pub mod commands;
pub mod repl;

// Re-export commonly used types and functions for convenience
pub use alankar_core::{engine, DegreeAlphabet, Direction, GeneratedPattern, Line, SeedSequence};
