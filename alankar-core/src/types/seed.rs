use crate::types::degree::Direction;
use anyhow::{anyhow, Result};
use std::fmt;

/// An ordered, mutable sequence of degree symbols belonging to one
/// direction's alphabet.
///
/// Grows one symbol at a time as the user selects degrees; shrinks only by
/// removing the last element (undo) or by a full reset (clear). Each
/// direction owns exactly one seed sequence.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeedSequence {
    direction: Direction,
    symbols: Vec<String>,
}

impl SeedSequence {
    /// Create an empty seed for the given direction.
    pub fn new(direction: Direction) -> Self {
        SeedSequence {
            direction,
            symbols: Vec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Append a symbol. Only membership in this direction's alphabet is
    /// validated; no musical correctness checks.
    pub fn push(&mut self, symbol: &str) -> Result<()> {
        if !self.direction.alphabet().contains(symbol) {
            return Err(anyhow!(
                "'{}' is not a {} degree",
                symbol,
                self.direction.label()
            ));
        }
        self.symbols.push(symbol.to_string());
        Ok(())
    }

    /// Remove and return the last symbol. No-op on an empty seed.
    pub fn undo(&mut self) -> Option<String> {
        self.symbols.pop()
    }

    /// Reset to empty.
    pub fn clear(&mut self) {
        self.symbols.clear();
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The selected symbols in selection order.
    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }
}

impl fmt::Display for SeedSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_validates_membership() {
        let mut seed = SeedSequence::new(Direction::Ascending);
        assert!(seed.push("सा").is_ok());
        assert!(seed.push("ग").is_ok());
        assert!(seed.push("X").is_err());
        // ध़ belongs to the descending alphabet only.
        assert!(seed.push("ध़").is_err());
        assert_eq!(seed.len(), 2);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut seed = SeedSequence::new(Direction::Descending);
        assert_eq!(seed.undo(), None);
        assert!(seed.is_empty());

        seed.push("गं").unwrap();
        assert_eq!(seed.undo(), Some("गं".to_string()));
        assert_eq!(seed.undo(), None);
    }

    #[test]
    fn test_clear() {
        let mut seed = SeedSequence::new(Direction::Ascending);
        seed.push("सा").unwrap();
        seed.push("रे").unwrap();
        seed.clear();
        assert!(seed.is_empty());
        // Clearing twice is fine.
        seed.clear();
        assert!(seed.is_empty());
    }

    #[test]
    fn test_display_space_joined() {
        let mut seed = SeedSequence::new(Direction::Ascending);
        seed.push("सा").unwrap();
        seed.push("ग").unwrap();
        seed.push("प").unwrap();
        assert_eq!(format!("{}", seed), "सा ग प");
    }
}
