//! Spatial binning for bond detection.
//!
//! Atoms are sorted into uniform cubic cells whose edge is at least the largest
//! possible bonding distance, so every bonded partner of an atom lies in its own
//! cell or one of the 26 surrounding cells.

use super::{ThresholdConvention, evaluate_pair};
use crate::model::bonds::{Bond, BondSet};
use crate::model::structure::Structure;
use log::trace;
use std::collections::HashMap;

/// Relative slack on the cell edge; absorbs rounding in the coordinate-to-cell
/// conversion.
const CELL_PADDING: f64 = 1.0 + 1e-6;

/// Grid-based spatial index over atom positions.
#[derive(Debug)]
pub(crate) struct SpatialGrid {
    /// Inverse cell size for fast coordinate-to-cell conversion.
    inv_cell_size: f64,
    /// Map from cell coordinates to atom indices.
    cells: HashMap<(i32, i32, i32), Vec<usize>>,
}

impl SpatialGrid {
    /// # Panics
    ///
    /// Panics if `cell_size` is not positive.
    pub fn new(cell_size: f64) -> Self {
        assert!(cell_size > 0.0, "Cell size must be positive");
        Self {
            inv_cell_size: 1.0 / cell_size,
            cells: HashMap::new(),
        }
    }

    pub fn from_positions(positions: &[[f64; 3]], cell_size: f64) -> Self {
        let mut grid = Self::new(cell_size);
        for (idx, pos) in positions.iter().enumerate() {
            grid.insert(idx, *pos);
        }
        grid
    }

    fn cell_coords(&self, pos: [f64; 3]) -> (i32, i32, i32) {
        (
            (pos[0] * self.inv_cell_size).floor() as i32,
            (pos[1] * self.inv_cell_size).floor() as i32,
            (pos[2] * self.inv_cell_size).floor() as i32,
        )
    }

    pub fn insert(&mut self, idx: usize, pos: [f64; 3]) {
        let cell = self.cell_coords(pos);
        self.cells.entry(cell).or_default().push(idx);
    }

    pub fn occupied_cells(&self) -> usize {
        self.cells.len()
    }

    /// Indices stored in the cell containing `pos` and its 26 neighbors.
    ///
    /// Neighbor offsets saturate at the `i32` range, so a cell may be visited
    /// more than once for positions far outside it; callers must tolerate
    /// repeated indices.
    pub fn neighborhood(&self, pos: [f64; 3]) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy, cz) = self.cell_coords(pos);
        (-1..=1)
            .flat_map(move |dx| {
                (-1..=1).flat_map(move |dy| {
                    (-1..=1).map(move |dz| {
                        (
                            cx.saturating_add(dx),
                            cy.saturating_add(dy),
                            cz.saturating_add(dz),
                        )
                    })
                })
            })
            .filter_map(|cell| self.cells.get(&cell))
            .flatten()
            .copied()
    }
}

/// Detects bonds by comparing each atom only against its spatial neighborhood.
pub(super) fn detect(structure: &Structure, convention: ThresholdConvention) -> BondSet {
    let positions = structure.positions();
    let radii = structure.radii();
    if positions.len() < 2 {
        return BondSet::new();
    }

    let max_radius = radii.iter().copied().fold(0.0, f64::max);
    let cell_size = (convention.max_bond_distance(max_radius) * CELL_PADDING).max(f64::EPSILON);
    let grid = SpatialGrid::from_positions(positions, cell_size);
    trace!(
        "spatial grid: {} atoms in {} cells of edge {:.3} Å",
        positions.len(),
        grid.occupied_cells(),
        cell_size
    );

    let mut pairs = Vec::new();
    let mut partners = Vec::new();
    for (i, pos) in positions.iter().enumerate() {
        partners.clear();
        partners.extend(grid.neighborhood(*pos).filter(|&j| j > i));
        partners.sort_unstable();
        partners.dedup();
        for &j in &partners {
            if let Some(length) = evaluate_pair(positions, radii, convention, i, j) {
                pairs.push((Bond { i, j }, length));
            }
        }
    }

    pairs.sort_unstable_by_key(|(bond, _)| *bond);
    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_sorted(grid: &SpatialGrid, pos: [f64; 3]) -> Vec<usize> {
        let mut found: Vec<_> = grid.neighborhood(pos).collect();
        found.sort_unstable();
        found
    }

    #[test]
    fn empty_grid() {
        let grid = SpatialGrid::new(2.0);
        assert_eq!(grid.occupied_cells(), 0);
        assert!(grid.neighborhood([0.0, 0.0, 0.0]).next().is_none());
    }

    #[test]
    fn neighborhood_covers_adjacent_cells_only() {
        let positions = vec![
            [0.5, 0.5, 0.5],
            [2.5, 0.5, 0.5],
            [4.5, 0.5, 0.5],
            [-1.5, -1.5, -1.5],
        ];
        let grid = SpatialGrid::from_positions(&positions, 2.0);

        assert_eq!(collect_sorted(&grid, [0.5, 0.5, 0.5]), vec![0, 1, 3]);
        assert_eq!(collect_sorted(&grid, [4.5, 0.5, 0.5]), vec![1, 2]);
    }

    #[test]
    fn cell_boundary_handling() {
        let positions = vec![[1.99, 0.0, 0.0], [2.01, 0.0, 0.0]];
        let grid = SpatialGrid::from_positions(&positions, 2.0);
        assert_eq!(grid.occupied_cells(), 2);
        assert_eq!(collect_sorted(&grid, [-0.5, 0.0, 0.0]), vec![0]);
        assert_eq!(collect_sorted(&grid, [4.5, 0.0, 0.0]), vec![1]);
    }

    #[test]
    #[should_panic(expected = "Cell size must be positive")]
    fn rejects_non_positive_cell_size() {
        SpatialGrid::new(0.0);
    }
}
