//! Export mesh type.
//!
//! Buffers are flat and interleaved per vertex, ready for upload as
//! vertex attributes:
//! - `positions: [x0, y0, z0, x1, y1, z1, ...]`
//! - `normals:   [nx0, ny0, nz0, ...]`
//! - `uvs:       [u0, v0, u1, v1, ...]`

use drape_math::{GridDims, Vec2, Vec3};
use drape_types::{DrapeError, DrapeResult};
use serde::{Deserialize, Serialize};

use crate::grid::grid_indices;
use crate::normals::grid_normals;

/// Triangle mesh exported from a cloth grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshData {
    /// Interleaved vertex positions.
    pub positions: Vec<f32>,
    /// Interleaved unit vertex normals.
    pub normals: Vec<f32>,
    /// Interleaved texture coordinates.
    pub uvs: Vec<f32>,
    /// Triangle indices: each triangle is `[v0, v1, v2]`, stored flat.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Builds a mesh from a row-major particle grid.
    ///
    /// `positions` and `uvs` must both hold exactly `dims.vertex_count()`
    /// entries.
    pub fn from_grid(positions: &[Vec3], uvs: &[Vec2], dims: GridDims) -> DrapeResult<Self> {
        let n = dims.vertex_count();
        if positions.len() != n {
            return Err(DrapeError::InvalidConfig(format!(
                "Position count ({}) != grid vertex count ({}x{} = {})",
                positions.len(),
                dims.columns,
                dims.rows,
                n
            )));
        }
        if uvs.len() != n {
            return Err(DrapeError::InvalidConfig(format!(
                "UV count ({}) != grid vertex count ({})",
                uvs.len(),
                n
            )));
        }

        let normals = grid_normals(positions, dims);

        Ok(Self {
            positions: positions.iter().flat_map(|p| p.to_array()).collect(),
            normals: normals.iter().flat_map(|n| n.to_array()).collect(),
            uvs: uvs.iter().flat_map(|uv| uv.to_array()).collect(),
            indices: grid_indices(dims),
        })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the position of vertex `i`.
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.positions[i * 3..i * 3 + 3])
    }

    /// Returns the normal of vertex `i`.
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::from_slice(&self.normals[i * 3..i * 3 + 3])
    }

    /// Returns the three vertex indices of triangle `t`.
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [self.indices[base], self.indices[base + 1], self.indices[base + 2]]
    }

    /// Validates buffer consistency.
    ///
    /// Checks:
    /// - Position and normal buffers have the same length, divisible by 3
    /// - UV buffer holds two entries per vertex
    /// - Triangle indices are within bounds
    pub fn validate(&self) -> DrapeResult<()> {
        if self.positions.len() % 3 != 0 || self.normals.len() != self.positions.len() {
            return Err(DrapeError::InvalidConfig(
                "Position and normal buffers have inconsistent lengths".into(),
            ));
        }
        let n = self.vertex_count();
        if self.uvs.len() != n * 2 {
            return Err(DrapeError::InvalidConfig(
                "UV buffer length does not match vertex count".into(),
            ));
        }
        if self.indices.len() % 3 != 0 {
            return Err(DrapeError::InvalidConfig(
                "Index count is not divisible by 3".into(),
            ));
        }
        if let Some(i) = self.indices.iter().position(|&idx| idx as usize >= n) {
            let idx = self.indices[i];
            return Err(DrapeError::InvalidConfig(format!(
                "Index {} at position {} is out of range (vertex count: {})",
                idx, i, n
            )));
        }
        Ok(())
    }
}
