//! Vertex-grid dimensions.
//!
//! The cloth is a regular grid of `columns × rows` vertices stored
//! row-major: vertex `(x, y)` lives at index `y * columns + x`.

use serde::{Deserialize, Serialize};

/// Dimensions of a row-major vertex grid (vertex counts, not cell counts).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GridDims {
    /// Vertices along X (`resolution_x + 1`).
    pub columns: usize,
    /// Vertices along Z (`resolution_y + 1`).
    pub rows: usize,
}

impl GridDims {
    /// Grid for the given cell resolution.
    pub fn from_resolution(resolution_x: usize, resolution_y: usize) -> Self {
        Self {
            columns: resolution_x + 1,
            rows: resolution_y + 1,
        }
    }

    /// Total number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.columns * self.rows
    }

    /// Number of quads along X.
    #[inline]
    pub fn cells_x(&self) -> usize {
        self.columns.saturating_sub(1)
    }

    /// Number of quads along Z.
    #[inline]
    pub fn cells_y(&self) -> usize {
        self.rows.saturating_sub(1)
    }

    /// Row-major index of vertex `(x, y)`.
    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    /// Inverse of [`index`](Self::index).
    #[inline]
    pub fn coords(&self, index: usize) -> (usize, usize) {
        (index % self.columns, index / self.columns)
    }

    /// Indices of the first row (`y = 0`).
    pub fn top_edge(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).map(move |x| self.index(x, 0))
    }

    /// Indices of the four corner vertices, deduplicated for
    /// degenerate one-row or one-column grids.
    pub fn corners(&self) -> Vec<usize> {
        if self.vertex_count() == 0 {
            return Vec::new();
        }
        let last_x = self.columns - 1;
        let last_y = self.rows - 1;
        let mut corners = vec![
            self.index(0, 0),
            self.index(last_x, 0),
            self.index(0, last_y),
            self.index(last_x, last_y),
        ];
        corners.sort_unstable();
        corners.dedup();
        corners
    }
}
