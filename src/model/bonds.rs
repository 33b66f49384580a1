use super::structure::Structure;

/// An unordered pair of distinct atom indices, stored with `i < j`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Bond {
    pub i: usize,
    pub j: usize,
}

impl Bond {
    pub fn new(idx1: usize, idx2: usize) -> Self {
        debug_assert_ne!(idx1, idx2, "a bond cannot join an atom to itself");
        if idx1 <= idx2 {
            Self { i: idx1, j: idx2 }
        } else {
            Self { i: idx2, j: idx1 }
        }
    }

    /// Returns the partner of `atom` in this bond, if `atom` takes part in it.
    #[inline]
    pub fn other(&self, atom: usize) -> Option<usize> {
        if atom == self.i {
            Some(self.j)
        } else if atom == self.j {
            Some(self.i)
        } else {
            None
        }
    }
}

/// Connectivity inferred from a [`Structure`].
///
/// Bonds are ordered by `(i, j)` ascending and each carries its true
/// Euclidean length in Ångströms at the same index in [`lengths`](Self::lengths).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BondSet {
    bonds: Vec<Bond>,
    lengths: Vec<f64>,
}

impl BondSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, bond: Bond, length: f64) {
        self.bonds.push(bond);
        self.lengths.push(length);
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Bond, f64)> + '_ {
        self.bonds.iter().copied().zip(self.lengths.iter().copied())
    }

    /// Number of bonds each atom takes part in.
    ///
    /// The result has `atom_count` entries, or more if the set references a
    /// higher atom index.
    pub fn degrees(&self, atom_count: usize) -> Vec<usize> {
        let len = self
            .bonds
            .iter()
            .map(|b| b.j + 1)
            .max()
            .map_or(atom_count, |needed| needed.max(atom_count));
        let mut degrees = vec![0; len];
        for bond in &self.bonds {
            degrees[bond.i] += 1;
            degrees[bond.j] += 1;
        }
        degrees
    }

    /// Atoms bonded to `atom`, in ascending order.
    pub fn neighbors(&self, atom: usize) -> Vec<usize> {
        let mut neighbors: Vec<_> = self.bonds.iter().filter_map(|b| b.other(atom)).collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// Atoms with more bonds than their element's maximum bond count.
    ///
    /// A hint for inspection only; never an error.
    pub fn overbonded(&self, structure: &Structure) -> Vec<usize> {
        self.degrees(structure.atom_count())
            .into_iter()
            .zip(structure.max_bonds())
            .enumerate()
            .filter(|(_, (degree, max))| *degree > **max as usize)
            .map(|(idx, _)| idx)
            .collect()
    }
}

impl FromIterator<(Bond, f64)> for BondSet {
    fn from_iter<T: IntoIterator<Item = (Bond, f64)>>(iter: T) -> Self {
        let mut set = BondSet::new();
        for (bond, length) in iter {
            set.push(bond, length);
        }
        set
    }
}
