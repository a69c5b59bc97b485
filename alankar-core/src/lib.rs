//! # Alankar Core
//!
//! Audio-free core for generating sargam alankar exercises: the two degree
//! alphabets (आरोह / अवरोह), seed sequences, generated patterns, and the
//! transposition engine that expands a seed into its transposed lines.
//!
//! ## Features
//!
//! - **serde**: Enable serialization of patterns and seeds for interop
//! - **colored**: Enable colored highlight rendering (default)
//!
//! ## Example
//!
//! ```
//! use alankar_core::{engine, Direction, SeedSequence};
//!
//! let mut seed = SeedSequence::new(Direction::Ascending);
//! seed.push("सा").unwrap();
//! seed.push("ग").unwrap();
//! seed.push("प").unwrap();
//!
//! let pattern = engine::generate(&seed);
//! assert_eq!(pattern.len(), 4);
//! ```

pub mod engine;
pub mod types;

// Re-export commonly used types
pub use types::{DegreeAlphabet, Direction, GeneratedPattern, Line, SeedSequence};
