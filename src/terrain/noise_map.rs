//! NoiseMap grid storage.

use serde::{Deserialize, Serialize};

/// A width x height grid of height values.
///
/// Values are stored row-major (`values[y * width + x]`) and addressed as
/// `(x, y)`. After generation every value lies in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseMap {
    /// Number of columns.
    pub width: usize,
    /// Number of rows.
    pub height: usize,
    /// Height values stored in row-major order.
    pub values: Vec<f32>,
}

impl NoiseMap {
    /// Creates a map with every value initialized to 0.0.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            values: vec![0.0; width * height],
        }
    }

    /// Wraps existing row-major values.
    ///
    /// # Panics
    /// Panics if `values.len() != width * height`.
    pub fn from_values(width: usize, height: usize, values: Vec<f32>) -> Self {
        assert_eq!(
            values.len(),
            width * height,
            "value count does not match {}x{} map",
            width,
            height
        );
        Self { width, height, values }
    }

    /// Returns the flat index of `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    /// Returns the value at the given cell.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.index(x, y)]
    }

    /// Sets the value at the given cell.
    ///
    /// # Panics
    /// Panics if x or y is out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.index(x, y);
        self.values[i] = value;
    }

    /// Returns the values as a row-major slice.
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Returns the total number of cells.
    pub fn cell_count(&self) -> usize {
        self.values.len()
    }

    /// Returns row `y` as a slice of `width` values.
    pub fn row(&self, y: usize) -> &[f32] {
        let start = y * self.width;
        &self.values[start..start + self.width]
    }

    /// Iterates over rows from top (`y = 0`) to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> + '_ {
        self.values.chunks(self.width.max(1))
    }

    /// Returns an iterator over all (x, y) cell coordinates in storage order.
    pub fn cell_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)))
    }

    /// Returns the plain (min, max) of all values.
    pub fn height_range(&self) -> (f32, f32) {
        let min = self.values.iter().cloned().fold(f32::MAX, f32::min);
        let max = self.values.iter().cloned().fold(f32::MIN, f32::max);
        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_creation() {
        let map = NoiseMap::new(8, 4);
        assert_eq!(map.cell_count(), 32);
        assert!(map.values().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_get_set() {
        let mut map = NoiseMap::new(5, 3);
        map.set(4, 2, 0.5);
        assert_eq!(map.get(4, 2), 0.5);
        assert_eq!(map.values()[2 * 5 + 4], 0.5);
    }

    #[test]
    fn test_rows_are_row_major() {
        let map = NoiseMap::from_values(3, 2, vec![0.0, 0.1, 0.2, 1.0, 1.1, 1.2]);
        let rows: Vec<&[f32]> = map.rows().collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], &[1.0, 1.1, 1.2]);
        assert_eq!(map.row(0), &[0.0, 0.1, 0.2]);
        assert_eq!(map.get(2, 1), 1.2);
    }

    #[test]
    #[should_panic]
    fn test_from_values_rejects_wrong_length() {
        NoiseMap::from_values(2, 2, vec![0.0; 3]);
    }

    #[test]
    fn test_height_range() {
        let mut map = NoiseMap::new(4, 4);
        map.set(0, 0, -0.5);
        map.set(3, 3, 1.5);

        let (min, max) = map.height_range();
        assert_eq!(min, -0.5);
        assert_eq!(max, 1.5);
    }

    #[test]
    fn test_cell_coords_iterator() {
        let map = NoiseMap::new(3, 2);
        let coords: Vec<_> = map.cell_coords().collect();

        assert_eq!(coords.len(), 6);
        assert_eq!(coords[0], (0, 0));
        assert_eq!(coords[1], (1, 0));
        assert_eq!(coords[3], (0, 1));
        assert_eq!(coords[5], (2, 1));
    }
}
