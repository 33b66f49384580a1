use super::element::{Color, ElementEntry, Symbol};

/// Hard ceiling on the number of atoms a structure may hold.
pub const MAX_ATOMS: usize = 100_000;

/// Atom count above which a structure is considered large for display purposes.
pub const LARGE_STRUCTURE_ATOMS: usize = 10_000;

/// A normalized atom set with per-atom reference data resolved.
///
/// Positions are translated so that the minimum along every axis is zero and,
/// if centering was requested at load time, further translated so that their
/// centroid sits at the origin. All per-atom sequences share the same length.
///
/// Instances are produced by [`StructureLoader`](crate::StructureLoader) and
/// expose no mutation API.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    title: String,
    symbols: Vec<Symbol>,
    positions: Vec<[f64; 3]>,
    radii: Vec<f64>,
    colors: Vec<Color>,
    max_bonds: Vec<u32>,
    origin: [f64; 3],
    bounding_box_max: [f64; 3],
    centroid: Option<[f64; 3]>,
}

impl Structure {
    /// Builds a structure from raw positions and their resolved element entries.
    ///
    /// The origin shift is always applied; the centroid shift only when `center`
    /// is set and at least one atom is present.
    pub(crate) fn normalized(
        title: String,
        atoms: Vec<([f64; 3], &ElementEntry)>,
        center: bool,
    ) -> Self {
        let n = atoms.len();
        let mut symbols = Vec::with_capacity(n);
        let mut positions = Vec::with_capacity(n);
        let mut radii = Vec::with_capacity(n);
        let mut colors = Vec::with_capacity(n);
        let mut max_bonds = Vec::with_capacity(n);

        for (position, entry) in atoms {
            symbols.push(entry.symbol.clone());
            positions.push(position);
            radii.push(entry.covalent_radius);
            colors.push(entry.color);
            max_bonds.push(entry.max_bonds);
        }

        let origin = component_fold(&positions, f64::min);
        for p in &mut positions {
            for k in 0..3 {
                p[k] -= origin[k];
            }
        }
        let bounding_box_max = component_fold(&positions, f64::max);

        // Each term is scaled before summing so the mean stays within the extent.
        let centroid = if center && n > 0 {
            let inv_n = 1.0 / n as f64;
            let mut c = [0.0; 3];
            for p in &positions {
                for k in 0..3 {
                    c[k] += p[k] * inv_n;
                }
            }
            for p in &mut positions {
                for k in 0..3 {
                    p[k] -= c[k];
                }
            }
            Some(c)
        } else {
            None
        };

        Self {
            title,
            symbols,
            positions,
            radii,
            colors,
            max_bonds,
            origin,
            bounding_box_max,
            centroid,
        }
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Whether the structure exceeds [`LARGE_STRUCTURE_ATOMS`].
    #[inline]
    pub fn is_large(&self) -> bool {
        self.atom_count() > LARGE_STRUCTURE_ATOMS
    }

    /// The free-form title line, with trailing whitespace removed.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn positions(&self) -> &[[f64; 3]] {
        &self.positions
    }

    /// Covalent radii in Ångströms, parallel to [`positions`](Self::positions).
    pub fn radii(&self) -> &[f64] {
        &self.radii
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Per-atom maximum bond counts taken from the element table.
    pub fn max_bonds(&self) -> &[u32] {
        &self.max_bonds
    }

    /// Component-wise minimum of the raw input coordinates.
    pub fn origin(&self) -> [f64; 3] {
        self.origin
    }

    /// Component-wise maximum of the origin-shifted positions.
    ///
    /// This is measured before centering and therefore describes the extent
    /// of the structure rather than a corner in the current frame.
    pub fn bounding_box_max(&self) -> [f64; 3] {
        self.bounding_box_max
    }

    /// The centroid that was subtracted during centering, in the origin-shifted frame.
    pub fn centroid_offset(&self) -> Option<[f64; 3]> {
        self.centroid
    }

    #[inline]
    pub fn is_centered(&self) -> bool {
        self.centroid.is_some()
    }
}

fn component_fold(positions: &[[f64; 3]], f: fn(f64, f64) -> f64) -> [f64; 3] {
    let Some(first) = positions.first() else {
        return [0.0; 3];
    };
    positions
        .iter()
        .skip(1)
        .fold(*first, |acc, p| [f(acc[0], p[0]), f(acc[1], p[1]), f(acc[2], p[2])])
}
