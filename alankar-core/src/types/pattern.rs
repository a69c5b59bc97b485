use std::fmt;

#[cfg(feature = "colored")]
use colored::Colorize;

/// One transposed rendition of the seed. May be shorter than the seed, or
/// empty, when shifted ordinals fall outside the alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    symbols: Vec<String>,
}

impl Line {
    pub fn new(symbols: Vec<String>) -> Self {
        Line { symbols }
    }

    pub fn symbols(&self) -> &[String] {
        &self.symbols
    }

    pub fn last(&self) -> Option<&str> {
        self.symbols.last().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbols.join(" "))
    }
}

/// The ordered lines produced by one run of the transposition engine.
///
/// Immutable once produced; a new generation replaces the whole pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedPattern {
    lines: Vec<Line>,
}

impl GeneratedPattern {
    pub fn new(lines: Vec<Line>) -> Self {
        GeneratedPattern { lines }
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Render the pattern, marking the currently sounding symbol.
    ///
    /// Every occurrence of the highlighted symbol is marked; the playback
    /// highlight is a symbol, not a position.
    pub fn render(&self, highlight: Option<&str>) -> String {
        self.lines
            .iter()
            .map(|line| render_line(line, highlight))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for GeneratedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render(None))
    }
}

fn render_line(line: &Line, highlight: Option<&str>) -> String {
    line.symbols()
        .iter()
        .map(|s| {
            if highlight == Some(s.as_str()) {
                mark(s)
            } else {
                s.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(feature = "colored")]
fn mark(symbol: &str) -> String {
    symbol.bright_yellow().bold().to_string()
}

#[cfg(not(feature = "colored"))]
fn mark(symbol: &str) -> String {
    format!("[{}]", symbol)
}
