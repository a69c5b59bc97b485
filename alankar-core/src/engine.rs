//! The transposition engine.
//!
//! One algorithm, parameterized per direction: cyclic shifts of the seed
//! over the direction's alphabet, with an alphabet-specific shift bound and
//! stop sentinel. The engine is fully synchronous and never blocks.

use crate::types::degree::DegreeAlphabet;
use crate::types::pattern::{GeneratedPattern, Line};
use crate::types::seed::SeedSequence;

/// Generate the alankar for a seed using its direction's parameters.
///
/// An empty seed short-circuits to an empty pattern: without a last element
/// the stop sentinel can never match, and a run of empty lines carries no
/// playable content.
pub fn generate(seed: &SeedSequence) -> GeneratedPattern {
    let direction = seed.direction();
    generate_with(
        seed.symbols(),
        direction.alphabet(),
        direction.shift_bound(),
        direction.stop_sentinel(),
    )
}

/// Core transposition loop, shared by both directions.
///
/// For each shift `j` in `0..=shift_bound`, every seed symbol is moved up
/// by `j` ordinals; symbols whose shifted ordinal leaves the alphabet are
/// silently dropped, so a line may be shorter than the seed or empty.
/// Generation stops early as soon as a line ends on `stop_sentinel`.
pub fn generate_with(
    seed: &[String],
    alphabet: &DegreeAlphabet,
    shift_bound: u32,
    stop_sentinel: &str,
) -> GeneratedPattern {
    if seed.is_empty() {
        return GeneratedPattern::default();
    }

    let ordinals: Vec<Option<u32>> = seed
        .iter()
        .map(|s| alphabet.ordinal_for_symbol(s))
        .collect();

    let mut lines = Vec::new();
    for shift in 0..=shift_bound {
        let line = Line::new(
            ordinals
                .iter()
                .filter_map(|o| o.and_then(|o| alphabet.symbol_for_ordinal(o + shift)))
                .map(str::to_string)
                .collect(),
        );
        let stop = line.last() == Some(stop_sentinel);
        lines.push(line);
        if stop {
            break;
        }
    }
    GeneratedPattern::new(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::degree::Direction;

    fn seed(direction: Direction, symbols: &[&str]) -> SeedSequence {
        let mut seed = SeedSequence::new(direction);
        for s in symbols {
            seed.push(s).unwrap();
        }
        seed
    }

    fn line_strs(pattern: &GeneratedPattern) -> Vec<Vec<&str>> {
        pattern
            .lines()
            .iter()
            .map(|l| l.symbols().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_ascending_stops_on_upper_tonic() {
        // सा ग प (ordinals 1 3 5): the fourth shift lands ध on सां.
        let pattern = generate(&seed(Direction::Ascending, &["सा", "ग", "प"]));
        assert_eq!(
            line_strs(&pattern),
            vec![
                vec!["सा", "ग", "प"],
                vec!["रे", "म", "ध"],
                vec!["ग", "प", "नि"],
                vec!["म", "ध", "सां"],
            ]
        );
    }

    #[test]
    fn test_descending_stops_on_lower_tonic() {
        // गं सां प (ordinals 1 3 6): shift 4 ends on सा (ordinal 10).
        let pattern = generate(&seed(Direction::Descending, &["गं", "सां", "प"]));
        assert_eq!(
            line_strs(&pattern),
            vec![
                vec!["गं", "सां", "प"],
                vec!["रें", "नि", "म"],
                vec!["सां", "ध", "ग"],
                vec!["नि", "प", "रे"],
                vec!["ध", "म", "सा"],
            ]
        );
    }

    #[test]
    fn test_out_of_range_symbols_dropped() {
        // सां गं (ordinals 8 10): गं falls off the alphabet after one
        // shift, सां after two; later lines are empty but still emitted.
        let pattern = generate(&seed(Direction::Ascending, &["सां", "गं"]));
        let lines = line_strs(&pattern);
        assert_eq!(lines.len(), 9); // sentinel never ends a line
        assert_eq!(lines[0], vec!["सां", "गं"]);
        assert_eq!(lines[1], vec!["रें"]);
        assert_eq!(lines[2], vec!["गं"]);
        for shifted_off in &lines[3..] {
            assert!(shifted_off.is_empty());
        }
    }

    #[test]
    fn test_bounded_emission() {
        for direction in [Direction::Ascending, Direction::Descending] {
            // A single non-tonic degree never produces the sentinel as a
            // last element once it shifts out of range.
            let pattern = generate(&seed(direction, &["रे"]));
            assert!(pattern.len() <= direction.shift_bound() as usize + 1);
            let alphabet = direction.alphabet();
            for line in pattern.lines() {
                for symbol in line.symbols() {
                    assert!(alphabet.contains(symbol));
                }
            }
        }
    }

    #[test]
    fn test_termination_count_matches_sentinel_shift() {
        // Seed ending on सा (ordinal 1, ascending): सां is reached at
        // shift 7, so exactly 8 lines come out.
        let pattern = generate(&seed(Direction::Ascending, &["ग", "सा"]));
        assert_eq!(pattern.len(), 8);
        assert_eq!(pattern.lines().last().unwrap().last(), Some("सां"));
    }

    #[test]
    fn test_sentinel_only_counts_as_last_element() {
        // सां रे: line 0 contains सां but does not end on it, so
        // generation keeps going.
        let pattern = generate(&seed(Direction::Ascending, &["सां", "रे"]));
        assert!(pattern.len() > 1);
    }

    #[test]
    fn test_empty_seed_short_circuits() {
        for direction in [Direction::Ascending, Direction::Descending] {
            let pattern = generate(&SeedSequence::new(direction));
            assert!(pattern.is_empty());
        }
    }

    #[test]
    fn test_full_bound_when_sentinel_unreachable() {
        // रें (ordinal 9, ascending) shifts straight out of range and the
        // sentinel never appears; all shift_bound + 1 lines are emitted.
        let pattern = generate(&seed(Direction::Ascending, &["रें"]));
        assert_eq!(pattern.len(), 9);
    }

    #[test]
    fn test_descending_reaches_low_degrees() {
        // प (ordinal 6, descending) walks down through सा onto ऩि and ध़.
        let pattern = generate(&seed(Direction::Descending, &["प"]));
        let lines = line_strs(&pattern);
        // Shift 4 ends the line on सा.
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[4], vec!["सा"]);

        // रे म (ordinals 9 7): the leading रे walks through सा into the
        // low degrees ऩि and ध़ while the trailing म ends the run on सा.
        let pattern = generate(&seed(Direction::Descending, &["रे", "म"]));
        let lines = line_strs(&pattern);
        assert_eq!(lines[2], vec!["ऩि", "रे"]);
        assert_eq!(lines[3], vec!["ध़", "सा"]);
        assert_eq!(lines.len(), 4);
    }
}
