//! Distance-based bond detection.
//!
//! A pair of distinct atoms `(i, j)` is bonded when its squared separation
//! falls strictly below a threshold derived from the two covalent radii (see
//! [`ThresholdConvention`]). No bond orders, aromaticity, or valence rules are
//! considered.
//!
//! Every [`Strategy`] evaluates candidate pairs through the same predicate and
//! returns bonds sorted by `(i, j)`, so the resulting [`BondSet`]s are
//! identical, lengths included.

mod config;
mod grid;

pub use config::{DetectConfig, Strategy, ThresholdConvention};

use crate::model::bonds::{Bond, BondSet};
use crate::model::structure::Structure;
use log::debug;
use rayon::prelude::*;

/// Infers connectivity from a [`Structure`]'s geometry.
#[derive(Debug, Clone, Copy, Default)]
pub struct BondDetector {
    config: DetectConfig,
}

impl BondDetector {
    pub fn new(config: DetectConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DetectConfig {
        &self.config
    }

    /// Detects all bonded pairs in `structure`.
    ///
    /// Never fails; an empty or single-atom structure yields an empty set.
    pub fn detect(&self, structure: &Structure) -> BondSet {
        let convention = self.config.threshold;
        let bonds = match self.config.strategy {
            Strategy::BruteForce => brute_force(structure, convention),
            Strategy::Grid => grid::detect(structure, convention),
            Strategy::Parallel => parallel(structure, convention),
        };
        debug!(
            "detected {} bonds among {} atoms ({:?}, {:?})",
            bonds.bond_count(),
            structure.atom_count(),
            self.config.strategy,
            convention
        );
        bonds
    }
}

/// Detects bonds with the default configuration.
pub fn detect_bonds(structure: &Structure) -> BondSet {
    BondDetector::default().detect(structure)
}

/// Returns the Euclidean length of `(i, j)` if the pair is bonded.
#[inline]
pub(crate) fn evaluate_pair(
    positions: &[[f64; 3]],
    radii: &[f64],
    convention: ThresholdConvention,
    i: usize,
    j: usize,
) -> Option<f64> {
    let a = positions[i];
    let b = positions[j];
    let dx = a[0] - b[0];
    let dy = a[1] - b[1];
    let dz = a[2] - b[2];
    let d2 = dx * dx + dy * dy + dz * dz;
    (d2 < convention.threshold(radii[i], radii[j])).then(|| d2.sqrt())
}

fn brute_force(structure: &Structure, convention: ThresholdConvention) -> BondSet {
    let positions = structure.positions();
    let radii = structure.radii();
    let n = positions.len();

    let mut bonds = BondSet::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if let Some(length) = evaluate_pair(positions, radii, convention, i, j) {
                bonds.push(Bond { i, j }, length);
            }
        }
    }
    bonds
}

fn parallel(structure: &Structure, convention: ThresholdConvention) -> BondSet {
    let positions = structure.positions();
    let radii = structure.radii();
    let n = positions.len();

    // Indexed collect keeps rows in `i` order.
    let rows: Vec<Vec<(Bond, f64)>> = (0..n)
        .into_par_iter()
        .map(|i| {
            ((i + 1)..n)
                .filter_map(|j| {
                    evaluate_pair(positions, radii, convention, i, j)
                        .map(|length| (Bond { i, j }, length))
                })
                .collect()
        })
        .collect();

    rows.into_iter().flatten().collect()
}
