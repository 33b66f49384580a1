//! A pure Rust library for molecular structure ingestion and geometric bond inference.
//! It turns XYZ atom lists into normalized, read-only structures and derives their
//! connectivity from covalent radii alone, ready for renderers, analyzers, and exporters.
//!
//! # Features
//!
//! - **Element reference data** — A validated symbol → constants table (atomic number,
//!   covalent radius, maximum bond count, display color), embedded or user-supplied
//! - **Structure loading** — All-or-nothing XYZ parsing with origin normalization,
//!   optional centroid centering, and bounding-box extents
//! - **Bond detection** — Distance-threshold connectivity with brute-force, spatially
//!   binned, and parallel strategies that produce identical results
//!
//! # Quick Start
//!
//! Load a structure against the embedded [`ElementTable`] and detect its bonds:
//!
//! ```
//! use xyzbond::{BondDetector, ElementTable, LoadError, StructureLoader};
//!
//! let input = "\
//! 3
//! water
//! O  0.000  0.000  0.000
//! H  0.000  0.000  0.900
//! H  0.000  0.000 -0.900
//! ";
//!
//! let table = ElementTable::builtin();
//! let structure = StructureLoader::new(table).parse(input, false)?;
//!
//! // Positions are shifted so the lowest coordinate on each axis is zero.
//! assert_eq!(structure.atom_count(), 3);
//! assert_eq!(structure.origin(), [0.0, 0.0, -0.9]);
//! assert_eq!(structure.positions()[2], [0.0, 0.0, 0.0]);
//!
//! // Both O–H pairs are bonded; the H–H pair is not.
//! let bonds = BondDetector::default().detect(&structure);
//! assert_eq!(bonds.bond_count(), 2);
//! assert_eq!((bonds.bonds()[0].i, bonds.bonds()[0].j), (0, 1));
//! assert_eq!((bonds.bonds()[1].i, bonds.bonds()[1].j), (0, 2));
//! # Ok::<(), LoadError>(())
//! ```
//!
//! # Module Organization
//!
//! - [`io`] — XYZ loading through [`StructureLoader`]
//! - [`ElementTable`] — Reference data and its dataset format
//! - [`BondDetector`] — Connectivity inference and its [`DetectConfig`]
//!
//! # Data Types
//!
//! - [`ElementEntry`] — Constants for one element, keyed by [`Symbol`]
//! - [`Structure`] — Normalized atoms with derived radii, colors, and extents
//! - [`BondSet`] — Bonded index pairs with their lengths
//! - [`Bond`] — One unordered pair of atom indices
//!
//! # Configuration
//!
//! - [`DuplicatePolicy`] — Reject or last-wins handling of repeated symbols
//! - [`ThresholdConvention`] — Legacy (`d² < t`) or squared (`d² < t²`) comparison
//! - [`Strategy`] — Brute-force, grid, or parallel pair enumeration

mod detect;
mod model;
mod table;

pub mod io;

pub use model::bonds::{Bond, BondSet};
pub use model::element::{Color, ElementEntry, Symbol};
pub use model::structure::{LARGE_STRUCTURE_ATOMS, MAX_ATOMS, Structure};

pub use table::{DuplicatePolicy, ElementTable, UnknownElement};

pub use io::StructureLoader;

pub use detect::{BondDetector, DetectConfig, Strategy, ThresholdConvention, detect_bonds};

pub use io::Error as LoadError;
pub use table::Error as TableError;
