use std::borrow::Borrow;
use std::fmt;

/// RGB display color with channels in `[0, 1]`.
pub type Color = [f32; 3];

/// Chemical symbol keying an [`ElementTable`](crate::ElementTable).
///
/// Symbols are compared case-sensitively, so `"Co"` and `"CO"` are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Symbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Reference constants for one chemical element.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementEntry {
    pub symbol: Symbol,
    pub atomic_number: u32,
    /// Covalent radius in Ångströms, always positive.
    pub covalent_radius: f64,
    /// Upper bound on the number of bonds, used only as a hint.
    pub max_bonds: u32,
    pub color: Color,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn symbol_lookup_by_str_through_borrow() {
        let mut map = HashMap::new();
        map.insert(Symbol::new("Na"), 11);
        assert_eq!(map.get("Na"), Some(&11));
        assert_eq!(map.get("NA"), None);
    }

    #[test]
    fn symbol_display_matches_input() {
        assert_eq!(Symbol::from("Cl").to_string(), "Cl");
        assert_eq!(Symbol::new(String::from("Fe")).as_str(), "Fe");
    }
}
