pub mod degree;
pub mod pattern;
pub mod seed;

pub use degree::{DegreeAlphabet, Direction};
pub use pattern::{GeneratedPattern, Line};
pub use seed::SeedSequence;
