//! Triangle index generation for vertex grids.

use drape_math::GridDims;

/// Two triangles per grid cell, wound so the face normal of a flat
/// XZ grid points along +Y.
///
/// ```
/// use drape_math::GridDims;
/// use drape_mesh::grid::grid_indices;
/// let indices = grid_indices(GridDims::from_resolution(2, 1));
/// assert_eq!(indices.len(), 2 * 1 * 2 * 3);
/// ```
pub fn grid_indices(dims: GridDims) -> Vec<u32> {
    let mut indices = Vec::with_capacity(dims.cells_x() * dims.cells_y() * 6);

    for y in 0..dims.cells_y() {
        for x in 0..dims.cells_x() {
            let top_left = dims.index(x, y) as u32;
            let top_right = top_left + 1;
            let bot_left = dims.index(x, y + 1) as u32;
            let bot_right = bot_left + 1;

            indices.extend_from_slice(&[top_left, bot_left, top_right]);
            indices.extend_from_slice(&[top_right, bot_left, bot_right]);
        }
    }

    indices
}
