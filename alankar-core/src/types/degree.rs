use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Ascending (आरोह) degree symbols, ordered by ordinal 1..=10.
/// सां/रें/गं are the upper-octave tonic, second and third.
const ASCENDING_SYMBOLS: [&str; 10] = [
    "सा", "रे", "ग", "म", "प", "ध", "नि", "सां", "रें", "गं",
];

/// Descending (अवरोह) degree symbols, ordered by ordinal 1..=12.
/// The octave is encoded in reverse: ordinal 1 is the upper third and
/// ordinal 10 the tonic, with ऩि/ध़ reaching below it.
const DESCENDING_SYMBOLS: [&str; 12] = [
    "गं", "रें", "सां", "नि", "ध", "प", "म", "ग", "रे", "सा", "ऩि", "ध़",
];

/// An immutable bidirectional mapping between degree symbols and positive
/// integer ordinals.
///
/// Lookup is O(1) both ways: a `Vec` indexed by ordinal for the forward
/// direction and a `HashMap` for the reverse. Reverse lookup is partial;
/// an ordinal outside the defined range yields `None`.
pub struct DegreeAlphabet {
    symbols: Vec<&'static str>,
    ordinals: HashMap<&'static str, u32>,
}

impl DegreeAlphabet {
    fn new(symbols: &[&'static str]) -> Self {
        let ordinals = symbols
            .iter()
            .enumerate()
            .map(|(i, &s)| (s, i as u32 + 1))
            .collect();
        DegreeAlphabet {
            symbols: symbols.to_vec(),
            ordinals,
        }
    }

    /// Get the symbol for an ordinal, or `None` if the ordinal is outside
    /// this alphabet's range. Ordinals are 1-based.
    pub fn symbol_for_ordinal(&self, ordinal: u32) -> Option<&'static str> {
        if ordinal == 0 {
            return None;
        }
        self.symbols.get(ordinal as usize - 1).copied()
    }

    /// Get the ordinal for a symbol, or `None` if the symbol is not a
    /// member of this alphabet.
    pub fn ordinal_for_symbol(&self, symbol: &str) -> Option<u32> {
        self.ordinals.get(symbol).copied()
    }

    /// Check whether a symbol belongs to this alphabet.
    pub fn contains(&self, symbol: &str) -> bool {
        self.ordinals.contains_key(symbol)
    }

    /// Number of degrees in this alphabet.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate the symbols in ordinal order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.symbols.iter().copied()
    }
}

static ASCENDING: LazyLock<DegreeAlphabet> =
    LazyLock::new(|| DegreeAlphabet::new(&ASCENDING_SYMBOLS));

static DESCENDING: LazyLock<DegreeAlphabet> =
    LazyLock::new(|| DegreeAlphabet::new(&DESCENDING_SYMBOLS));

/// Playback direction of an alankar exercise.
///
/// Each direction owns its own alphabet and the parameters that drive the
/// transposition engine; the engine itself is direction-agnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// आरोह - ascending
    Ascending,
    /// अवरोह - descending
    Descending,
}

impl Direction {
    /// The degree alphabet this direction transposes over.
    pub fn alphabet(&self) -> &'static DegreeAlphabet {
        match self {
            Direction::Ascending => &ASCENDING,
            Direction::Descending => &DESCENDING,
        }
    }

    /// Largest transposition shift the engine will apply (inclusive).
    pub fn shift_bound(&self) -> u32 {
        match self {
            Direction::Ascending => 8,
            Direction::Descending => 9,
        }
    }

    /// Symbol that terminates generation when it ends a line: the upper
    /// tonic going up, the lower tonic coming down.
    pub fn stop_sentinel(&self) -> &'static str {
        match self {
            Direction::Ascending => "सां",
            Direction::Descending => "सा",
        }
    }

    /// Devanagari label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Ascending => "आरोह",
            Direction::Descending => "अवरोह",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
