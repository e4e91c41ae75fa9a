//! Vertex normal computation for particle grids.
//!
//! Each normal is the cross product of the grid tangents at the vertex,
//! taken by finite difference against the neighbouring row and column.
//! Forward differences are used everywhere except the last column/row,
//! which falls back to backward differences.

use drape_math::{GridDims, Vec3};

/// Compute one unit normal per grid vertex.
///
/// Degenerate vertices (collapsed neighbours, single-vertex grids)
/// get a zero normal.
pub fn grid_normals(positions: &[Vec3], dims: GridDims) -> Vec<Vec3> {
    let mut normals = Vec::with_capacity(positions.len());

    for y in 0..dims.rows {
        for x in 0..dims.columns {
            let p = positions[dims.index(x, y)];

            let tangent_x = if x + 1 < dims.columns {
                positions[dims.index(x + 1, y)] - p
            } else if x > 0 {
                p - positions[dims.index(x - 1, y)]
            } else {
                Vec3::ZERO
            };

            let tangent_z = if y + 1 < dims.rows {
                positions[dims.index(x, y + 1)] - p
            } else if y > 0 {
                p - positions[dims.index(x, y - 1)]
            } else {
                Vec3::ZERO
            };

            normals.push(tangent_z.cross(tangent_x).normalize_or_zero());
        }
    }

    normals
}
