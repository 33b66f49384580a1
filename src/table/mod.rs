//! Per-element reference data keyed by chemical symbol.
//!
//! The table is read from a line-oriented dataset where every data line holds
//! seven whitespace-separated fields:
//!
//! ```text
//! symbol  atomic_number  covalent_radius  max_bonds  r  g  b
//! ```
//!
//! Lines starting with `#` and blank lines are skipped. Every entry is
//! validated when the table is built, so lookups never encounter partial data.

mod error;

pub use error::{Error, UnknownElement};

use crate::model::element::{Color, ElementEntry, Symbol};
use log::debug;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::BufRead;
use std::str::FromStr;
use std::sync::OnceLock;

const BUILTIN_DATA: &str = include_str!("../../resources/elements.dat");

static BUILTIN: OnceLock<ElementTable> = OnceLock::new();

const FIELD_COUNT: usize = 7;

/// How repeated symbols in a dataset are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// A repeated symbol fails the load with [`Error::DuplicateSymbol`].
    #[default]
    Reject,
    /// A repeated symbol replaces the earlier entry.
    LastWins,
}

/// Immutable mapping from chemical symbol to [`ElementEntry`].
#[derive(Debug, Clone, Default)]
pub struct ElementTable {
    entries: HashMap<Symbol, ElementEntry>,
}

impl ElementTable {
    /// Returns the embedded default table, parsed on first use.
    ///
    /// # Panics
    ///
    /// Panics if the embedded dataset is malformed, which is a library bug.
    pub fn builtin() -> &'static ElementTable {
        BUILTIN.get_or_init(|| {
            Self::from_str(BUILTIN_DATA)
                .expect("Failed to parse embedded element data. This is a library bug.")
        })
    }

    /// Reads a table, rejecting repeated symbols.
    pub fn load<R: BufRead>(reader: R) -> Result<Self, Error> {
        Self::load_with(reader, DuplicatePolicy::default())
    }

    /// Reads a table with an explicit duplicate-symbol policy.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedReferenceData`] for lines with the wrong field
    /// count or invalid values, and [`Error::DuplicateSymbol`] for repeated
    /// symbols under [`DuplicatePolicy::Reject`].
    pub fn load_with<R: BufRead>(reader: R, policy: DuplicatePolicy) -> Result<Self, Error> {
        let mut entries = HashMap::new();
        let mut defined_at: HashMap<Symbol, usize> = HashMap::new();

        for (i, line) in reader.lines().enumerate() {
            let content = line?;
            let ln = i + 1;
            let trimmed = content.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let entry = parse_entry(trimmed, ln)?;
            match defined_at.entry(entry.symbol.clone()) {
                Entry::Occupied(mut first) => match policy {
                    DuplicatePolicy::Reject => {
                        return Err(Error::DuplicateSymbol {
                            symbol: entry.symbol.to_string(),
                            line: ln,
                            first_line: *first.get(),
                        });
                    }
                    DuplicatePolicy::LastWins => {
                        debug!(
                            "element '{}' at line {} overrides line {}",
                            entry.symbol,
                            ln,
                            first.get()
                        );
                        first.insert(ln);
                    }
                },
                Entry::Vacant(slot) => {
                    slot.insert(ln);
                }
            }
            entries.insert(entry.symbol.clone(), entry);
        }

        debug!("loaded element table with {} entries", entries.len());
        Ok(Self { entries })
    }

    /// Resolves a symbol to its entry.
    ///
    /// There is no fallback entry: an absent symbol is always an error.
    pub fn lookup(&self, symbol: &str) -> Result<&ElementEntry, UnknownElement> {
        self.entries
            .get(symbol)
            .ok_or_else(|| UnknownElement(symbol.to_string()))
    }

    pub fn get(&self, symbol: &str) -> Option<&ElementEntry> {
        self.entries.get(symbol)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.contains_key(symbol)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries ordered by atomic number, then symbol.
    pub fn iter(&self) -> impl Iterator<Item = &ElementEntry> {
        let mut sorted: Vec<_> = self.entries.values().collect();
        sorted.sort_by(|a, b| {
            a.atomic_number
                .cmp(&b.atomic_number)
                .then_with(|| a.symbol.cmp(&b.symbol))
        });
        sorted.into_iter()
    }
}

impl FromStr for ElementTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::load(s.as_bytes())
    }
}

fn parse_entry(line: &str, ln: usize) -> Result<ElementEntry, Error> {
    let tokens: Vec<_> = line.split_whitespace().collect();
    if tokens.len() != FIELD_COUNT {
        return Err(Error::malformed(
            ln,
            format!("expected {FIELD_COUNT} fields, found {}", tokens.len()),
        ));
    }

    let atomic_number = tokens[1]
        .parse::<u32>()
        .map_err(|_| Error::malformed(ln, format!("invalid atomic number '{}'", tokens[1])))?;
    if atomic_number == 0 {
        return Err(Error::malformed(ln, "atomic number must be positive"));
    }

    let covalent_radius = tokens[2]
        .parse::<f64>()
        .map_err(|_| Error::malformed(ln, format!("invalid covalent radius '{}'", tokens[2])))?;
    if !(covalent_radius.is_finite() && covalent_radius > 0.0) {
        return Err(Error::malformed(
            ln,
            "covalent radius must be a positive finite number",
        ));
    }

    let max_bonds = tokens[3]
        .parse::<u32>()
        .map_err(|_| Error::malformed(ln, format!("invalid maximum bond count '{}'", tokens[3])))?;

    let mut color: Color = [0.0; 3];
    for (channel, (token, name)) in color
        .iter_mut()
        .zip(tokens[4..].iter().zip(["red", "green", "blue"]))
    {
        let value = token
            .parse::<f32>()
            .map_err(|_| Error::malformed(ln, format!("invalid {name} channel '{token}'")))?;
        if !(0.0..=1.0).contains(&value) {
            return Err(Error::malformed(
                ln,
                format!("{name} channel {value} is outside [0, 1]"),
            ));
        }
        *channel = value;
    }

    Ok(ElementEntry {
        symbol: Symbol::from(tokens[0]),
        atomic_number,
        covalent_radius,
        max_bonds,
        color,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WATER_TABLE: &str = "\
# symbol Z radius max_bonds r g b
H 1 0.31 1 1.0 1.0 1.0
O 8 0.66 2 1.0 0.0 0.0
";

    #[test]
    fn loads_entries_and_skips_comments() {
        let table: ElementTable = WATER_TABLE.parse().unwrap();
        assert_eq!(table.len(), 2);

        let o = table.lookup("O").unwrap();
        assert_eq!(o.atomic_number, 8);
        assert_eq!(o.covalent_radius, 0.66);
        assert_eq!(o.max_bonds, 2);
        assert_eq!(o.color, [1.0, 0.0, 0.0]);
    }

    #[test]
    fn skips_blank_lines() {
        let table: ElementTable = "\n  \nH 1 0.31 1 1 1 1\n\n".parse().unwrap();
        assert!(table.contains("H"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn lookup_unknown_symbol_fails() {
        let table: ElementTable = WATER_TABLE.parse().unwrap();
        let err = table.lookup("Xx").unwrap_err();
        assert_eq!(err.symbol(), "Xx");
        assert!(table.get("Xx").is_none());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let table: ElementTable = WATER_TABLE.parse().unwrap();
        assert!(table.lookup("h").is_err());
    }

    #[test]
    fn rejects_wrong_field_count() {
        let err = "# header\nH 1 0.31 1 1.0 1.0\n"
            .parse::<ElementTable>()
            .unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedReferenceData { line: 2, .. }
        ));
    }

    #[test]
    fn rejects_non_numeric_fields() {
        for bad in [
            "H one 0.31 1 1 1 1",
            "H 1 small 1 1 1 1",
            "H 1 0.31 x 1 1 1",
            "H 1 0.31 1 1 white 1",
        ] {
            let err = bad.parse::<ElementTable>().unwrap_err();
            assert!(
                matches!(err, Error::MalformedReferenceData { line: 1, .. }),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_out_of_range_values() {
        for bad in [
            "H 0 0.31 1 1 1 1",
            "H 1 0.0 1 1 1 1",
            "H 1 -0.3 1 1 1 1",
            "H 1 0.31 -1 1 1 1",
            "H 1 0.31 1 1.5 1 1",
            "H 1 NaN 1 1 1 1",
        ] {
            assert!(bad.parse::<ElementTable>().is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn rejects_duplicate_symbols_by_default() {
        let data = "H 1 0.31 1 1 1 1\nO 8 0.66 2 1 0 0\nH 1 0.32 1 1 1 1\n";
        let err = data.parse::<ElementTable>().unwrap_err();
        match err {
            Error::DuplicateSymbol {
                symbol,
                line,
                first_line,
            } => {
                assert_eq!(symbol, "H");
                assert_eq!(line, 3);
                assert_eq!(first_line, 1);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn last_wins_policy_keeps_latest_entry() {
        let data = "H 1 0.31 1 1 1 1\nH 1 0.32 1 1 1 1\n";
        let table = ElementTable::load_with(data.as_bytes(), DuplicatePolicy::LastWins).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("H").unwrap().covalent_radius, 0.32);
    }

    #[test]
    fn iter_orders_by_atomic_number() {
        let data = "O 8 0.66 2 1 0 0\nC 6 0.76 4 0.5 0.5 0.5\nH 1 0.31 1 1 1 1\n";
        let table: ElementTable = data.parse().unwrap();
        let symbols: Vec<_> = table.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["H", "C", "O"]);
    }

    #[test]
    fn builtin_table_covers_common_elements() {
        let table = ElementTable::builtin();
        for symbol in ["H", "C", "N", "O", "S", "P", "Cl", "Fe", "Au"] {
            assert!(table.contains(symbol), "missing {symbol}");
        }
        assert_eq!(table.lookup("H").unwrap().covalent_radius, 0.31);
        assert_eq!(table.lookup("O").unwrap().covalent_radius, 0.66);
        assert_eq!(table.lookup("C").unwrap().atomic_number, 6);
    }

    #[test]
    fn empty_source_builds_empty_table() {
        let table: ElementTable = "# nothing here\n".parse().unwrap();
        assert!(table.is_empty());
    }
}
