//! Board geometry.
//!
//! A [`Grid`] fixes the identifier set, its row-major order and the
//! straight lines used by line-completion rules. It is built once and
//! never changes.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use super::cell::CellId;
use super::error::{EngineError, Result};

/// A straight line of cells (row, column or diagonal).
pub type Line<K> = SmallVec<[K; 8]>;

/// Rectangular board layout over identifiers of type `K`.
///
/// Lines are precomputed in scan order: rows top-to-bottom, then columns
/// left-to-right, then (square grids only) the main diagonal followed by
/// the anti-diagonal.
#[derive(Clone, Debug)]
pub struct Grid<K> {
    width: usize,
    height: usize,
    /// Identifiers in row-major order.
    cells: Vec<K>,
    index: FxHashMap<K, usize>,
    lines: Vec<Line<K>>,
}

impl Grid<u32> {
    /// Square grid numbered `1..=size*size`, row-major.
    ///
    /// Fails with `InvalidConfig` when `size * size` does not fit the
    /// identifier type.
    ///
    /// ```
    /// use turnboard::core::Grid;
    ///
    /// let grid = Grid::square(3).unwrap();
    /// assert_eq!(grid.len(), 9);
    /// assert_eq!(grid.position(5), Some((1, 1)));
    /// assert_eq!(grid.lines().len(), 8);
    /// ```
    pub fn square(size: usize) -> Result<Self> {
        let last = size
            .checked_mul(size)
            .and_then(|count| u32::try_from(count).ok())
            .ok_or_else(|| EngineError::invalid_config(format!("grid size {size} is too large")))?;
        Self::new(size, size, (1..=last).collect())
    }
}

impl<K: CellId> Grid<K> {
    /// Create a grid from row-major identifiers.
    ///
    /// Fails on a zero dimension, a length mismatch or a repeated identifier.
    pub fn new(width: usize, height: usize, cells: Vec<K>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EngineError::EmptyGrid { width, height });
        }
        if cells.len() != width * height {
            return Err(EngineError::GridShape {
                expected: width * height,
                actual: cells.len(),
            });
        }

        let mut index = FxHashMap::default();
        for (i, id) in cells.iter().enumerate() {
            if index.insert(*id, i).is_some() {
                return Err(EngineError::DuplicateCell {
                    cell: id.to_string(),
                });
            }
        }

        let mut grid = Self {
            width,
            height,
            cells,
            index,
            lines: Vec::new(),
        };
        grid.lines = grid.compute_lines();
        Ok(grid)
    }

    fn compute_lines(&self) -> Vec<Line<K>> {
        let mut lines = Vec::with_capacity(self.width + self.height + 2);

        for row in 0..self.height {
            lines.push((0..self.width).map(|col| self.at(row, col)).collect());
        }
        for col in 0..self.width {
            lines.push((0..self.height).map(|row| self.at(row, col)).collect());
        }
        if self.is_square() {
            let n = self.width;
            lines.push((0..n).map(|i| self.at(i, i)).collect());
            lines.push((0..n).map(|i| self.at(i, n - 1 - i)).collect());
        }

        lines
    }

    fn at(&self, row: usize, col: usize) -> K {
        self.cells[row * self.width + col]
    }

    /// Columns per row.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always false: construction rejects empty grids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Identifiers in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[K] {
        &self.cells
    }

    /// Check whether `id` is part of this grid.
    #[must_use]
    pub fn contains(&self, id: K) -> bool {
        self.index.contains_key(&id)
    }

    /// Row-major slot of `id`.
    #[must_use]
    pub fn slot(&self, id: K) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// `(row, column)` of `id`.
    #[must_use]
    pub fn position(&self, id: K) -> Option<(usize, usize)> {
        self.slot(id).map(|i| (i / self.width, i % self.width))
    }

    /// All straight lines, in scan order.
    #[must_use]
    pub fn lines(&self) -> &[Line<K>] {
        &self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_ids() {
        let grid = Grid::square(3).unwrap();
        assert_eq!(grid.cells(), &[1, 2, 3, 4, 5, 6, 7, 8, 9]);
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert!(grid.contains(9));
        assert!(!grid.contains(0));
        assert!(!grid.contains(10));
    }

    #[test]
    fn test_square_size_overflow() {
        for size in [usize::MAX, usize::MAX / 2, 65_536] {
            assert!(matches!(
                Grid::square(size),
                Err(EngineError::InvalidConfig { .. })
            ));
        }
        assert!(matches!(Grid::square(0), Err(EngineError::EmptyGrid { .. })));
    }

    #[test]
    fn test_line_scan_order() {
        let grid = Grid::square(3).unwrap();
        let lines: Vec<Vec<u32>> = grid.lines().iter().map(|l| l.to_vec()).collect();
        assert_eq!(
            lines,
            vec![
                vec![1, 2, 3],
                vec![4, 5, 6],
                vec![7, 8, 9],
                vec![1, 4, 7],
                vec![2, 5, 8],
                vec![3, 6, 9],
                vec![1, 5, 9],
                vec![3, 5, 7],
            ]
        );
    }

    #[test]
    fn test_rectangular_has_no_diagonals() {
        let grid = Grid::new(3, 2, vec!['a', 'b', 'c', 'd', 'e', 'f']).unwrap();
        assert_eq!(grid.lines().len(), 2 + 3);
        assert_eq!(grid.position('e'), Some((1, 1)));
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(matches!(
            Grid::square(0),
            Err(EngineError::EmptyGrid { width: 0, height: 0 })
        ));
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let result = Grid::new(2, 2, vec![1, 2, 3]);
        assert!(matches!(
            result,
            Err(EngineError::GridShape { expected: 4, actual: 3 })
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let result = Grid::new(2, 1, vec![7, 7]);
        assert!(matches!(result, Err(EngineError::DuplicateCell { .. })));
    }
}
