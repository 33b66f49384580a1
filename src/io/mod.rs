//! Loading of XYZ atom lists into normalized [`Structure`]s.
//!
//! The accepted format is the plain XYZ layout:
//!
//! ```text
//! 3                      <- atom count
//! water                  <- free-form title
//! O  0.000  0.000  0.000 <- symbol x y z, one line per atom
//! H  0.000  0.000  0.900
//! H  0.000  0.000 -0.900
//! ```
//!
//! Loading is all-or-nothing: any error aborts the load and no partially
//! built structure is returned.

pub mod error;
mod xyz;

pub use error::Error;

use crate::model::structure::{MAX_ATOMS, Structure};
use xyz::AXES;
use crate::table::ElementTable;
use log::debug;
use std::io::BufRead;

/// Builds [`Structure`]s against an injected [`ElementTable`].
#[derive(Debug, Clone, Copy)]
pub struct StructureLoader<'a> {
    table: &'a ElementTable,
}

impl<'a> StructureLoader<'a> {
    pub fn new(table: &'a ElementTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a ElementTable {
        self.table
    }

    /// Parses an XYZ document held in memory.
    ///
    /// # Arguments
    ///
    /// * `input` - Full XYZ text
    /// * `center` - Whether to move the centroid to the origin after the origin shift
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAtomCount`], [`Error::TruncatedInput`],
    /// [`Error::MalformedCoordinateLine`], or [`Error::UnknownElement`].
    pub fn parse(&self, input: &str, center: bool) -> Result<Structure, Error> {
        self.read(input.as_bytes(), center)
    }

    /// Reads the first XYZ frame from `reader`.
    ///
    /// Same contract as [`parse`](Self::parse), plus [`Error::Io`] for read failures.
    pub fn read<R: BufRead>(&self, reader: R, center: bool) -> Result<Structure, Error> {
        let frame = xyz::read(reader)?;
        self.from_atoms(
            frame.title,
            frame.atoms.iter().map(|(s, p)| (s.as_str(), *p)),
            center,
        )
    }

    /// Builds a structure from in-memory `(symbol, position)` pairs.
    ///
    /// Resolution and normalization are identical to [`parse`](Self::parse).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CoordinateOutOfRange`] if a coordinate is not finite or
    /// the spread along an axis overflows `f64`, and [`Error::UnknownElement`]
    /// for unresolved symbols.
    pub fn from_atoms<'s, I>(
        &self,
        title: impl Into<String>,
        atoms: I,
        center: bool,
    ) -> Result<Structure, Error>
    where
        I: IntoIterator<Item = (&'s str, [f64; 3])>,
    {
        let mut resolved = Vec::new();
        let mut low = [f64::INFINITY; 3];
        let mut high = [f64::NEG_INFINITY; 3];
        for (atom, (symbol, position)) in atoms.into_iter().enumerate() {
            if atom >= MAX_ATOMS {
                return Err(Error::invalid_atom_count(format!(
                    "more than {MAX_ATOMS} atoms supplied"
                )));
            }
            for (k, axis) in AXES.iter().enumerate() {
                let value = position[k];
                if !value.is_finite() {
                    return Err(Error::out_of_range(
                        atom,
                        format!("{axis} coordinate {value} is not finite"),
                    ));
                }
                low[k] = low[k].min(value);
                high[k] = high[k].max(value);
                if !(high[k] - low[k]).is_finite() {
                    return Err(Error::out_of_range(
                        atom,
                        format!(
                            "{axis} coordinates span [{:e}, {:e}], which overflows",
                            low[k], high[k]
                        ),
                    ));
                }
            }
            let entry = self
                .table
                .lookup(symbol)
                .map_err(|source| Error::UnknownElement { atom, source })?;
            resolved.push((position, entry));
        }

        let structure = Structure::normalized(title.into(), resolved, center);
        debug!(
            "loaded {} atoms (origin {:?}, extent {:?}, centered: {})",
            structure.atom_count(),
            structure.origin(),
            structure.bounding_box_max(),
            structure.is_centered()
        );
        Ok(structure)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "\
H 1 0.31 1 1.0 1.0 1.0
O 8 0.66 2 1.0 0.0 0.0
C 6 0.76 4 0.5 0.5 0.5
";

    const WATER: &str = "3\ntitle\nO 0 0 0\nH 0 0 0.9\nH 0 0 -0.9\n";

    fn table() -> ElementTable {
        TABLE.parse().unwrap()
    }

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn water_is_origin_shifted() {
        let table = table();
        let s = StructureLoader::new(&table).parse(WATER, false).unwrap();

        assert_eq!(s.atom_count(), 3);
        assert_eq!(s.title(), "title");
        let symbols: Vec<_> = s.symbols().iter().map(|s| s.as_str()).collect();
        assert_eq!(symbols, vec!["O", "H", "H"]);

        assert_eq!(s.origin(), [0.0, 0.0, -0.9]);
        assert!(approx_eq(s.positions()[0][2], 0.9, 1e-12));
        assert!(approx_eq(s.positions()[1][2], 1.8, 1e-12));
        assert_eq!(s.positions()[2][2], 0.0);
        assert!(approx_eq(s.bounding_box_max()[2], 1.8, 1e-12));
        assert_eq!(s.radii(), &[0.66, 0.31, 0.31]);
        assert_eq!(s.colors()[0], [1.0, 0.0, 0.0]);
    }

    #[test]
    fn parallel_sequences_share_length() {
        let table = table();
        let s = StructureLoader::new(&table).parse(WATER, true).unwrap();
        let n = s.atom_count();
        assert_eq!(s.symbols().len(), n);
        assert_eq!(s.positions().len(), n);
        assert_eq!(s.radii().len(), n);
        assert_eq!(s.colors().len(), n);
        assert_eq!(s.max_bonds().len(), n);
    }

    #[test]
    fn centering_zeroes_the_mean() {
        let table = table();
        let input = "4\n\nC 1.0 2.0 3.0\nO -4.0 0.5 7.25\nH 3.3 -1.1 0.0\nH 10.0 10.0 -10.0\n";
        let s = StructureLoader::new(&table).parse(input, true).unwrap();

        for k in 0..3 {
            let mean: f64 = s.positions().iter().map(|p| p[k]).sum::<f64>() / 4.0;
            assert!(approx_eq(mean, 0.0, 1e-9), "axis {k} mean {mean}");
        }
        assert!(s.is_centered());
        assert_eq!(s.origin(), [-4.0, -1.1, -10.0]);
        let extent = s.bounding_box_max();
        for (got, want) in extent.iter().zip([14.0, 11.1, 17.25]) {
            assert!(approx_eq(*got, want, 1e-12));
        }
    }

    #[test]
    fn unknown_symbol_aborts_the_load() {
        let table = table();
        let input = "3\nt\nO 0 0 0\nXx 0 0 1\nH 0 0 2\n";
        let err = StructureLoader::new(&table).parse(input, true).unwrap_err();

        assert_eq!(err.unknown_symbol(), Some("Xx"));
        assert!(matches!(err, Error::UnknownElement { atom: 1, .. }));
    }

    #[test]
    fn exactly_max_atoms_loads() {
        let table = table();
        let mut input = format!("{MAX_ATOMS}\nbig\n");
        for i in 0..MAX_ATOMS {
            input.push_str(&format!("H {} 0 0\n", i as f64 * 3.0));
        }
        let s = StructureLoader::new(&table).parse(&input, false).unwrap();
        assert_eq!(s.atom_count(), MAX_ATOMS);
        assert!(s.is_large());
    }

    #[test]
    fn one_past_max_atoms_is_rejected() {
        let table = table();
        let input = format!("{}\nbig\n", MAX_ATOMS + 1);
        let err = StructureLoader::new(&table).parse(&input, false).unwrap_err();
        assert!(matches!(err, Error::InvalidAtomCount { .. }));
    }

    #[test]
    fn from_atoms_matches_text_loading() {
        let table = table();
        let loader = StructureLoader::new(&table);
        let from_text = loader.parse(WATER, true).unwrap();
        let from_atoms = loader
            .from_atoms(
                "title",
                [
                    ("O", [0.0, 0.0, 0.0]),
                    ("H", [0.0, 0.0, 0.9]),
                    ("H", [0.0, 0.0, -0.9]),
                ],
                true,
            )
            .unwrap();
        assert_eq!(from_text, from_atoms);
    }

    #[test]
    fn empty_structure_loads() {
        let table = table();
        let s = StructureLoader::new(&table).parse("0\nempty\n", true).unwrap();
        assert!(s.is_empty());
        assert_eq!(s.bounding_box_max(), [0.0; 3]);
    }

    #[test]
    fn coordinate_span_overflow_is_rejected() {
        let table = table();
        let input = "3\nfar apart\nH 0 0 0\nH -1e308 0 0\nH 1e308 0 0\n";
        let err = StructureLoader::new(&table).parse(input, true).unwrap_err();

        assert!(matches!(err, Error::CoordinateOutOfRange { atom: 2, .. }));
        assert!(err.to_string().contains("x coordinates"));
    }

    #[test]
    fn wide_but_finite_span_centers_cleanly() {
        let table = table();
        let input = "2\nwide\nH -8e307 0 0\nH 8e307 0 1\n";
        let s = StructureLoader::new(&table).parse(input, true).unwrap();

        assert!(s.positions().iter().flatten().all(|v| v.is_finite()));
        assert_eq!(s.bounding_box_max(), [1.6e308, 0.0, 1.0]);
        assert!(approx_eq(s.positions()[0][0], -8e307, 1e294));
    }

    #[test]
    fn non_finite_in_memory_coordinates_are_rejected() {
        let table = table();
        let err = StructureLoader::new(&table)
            .from_atoms("t", [("H", [0.0, 0.0, 0.0]), ("H", [0.0, f64::NAN, 0.0])], false)
            .unwrap_err();
        assert!(matches!(err, Error::CoordinateOutOfRange { atom: 1, .. }));
    }

    #[test]
    fn reads_from_buffered_reader() {
        let table = table();
        let reader = std::io::BufReader::new(WATER.as_bytes());
        let s = StructureLoader::new(&table).read(reader, false).unwrap();
        assert_eq!(s.atom_count(), 3);
    }
}
