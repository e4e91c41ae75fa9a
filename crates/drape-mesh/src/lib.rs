//! # drape-mesh
//!
//! Converts a simulated particle grid into render-ready triangle data.
//!
//! ## Key Types
//!
//! - [`MeshData`]: Flat position / normal / UV / index buffers.
//! - [`normals::grid_normals`]: Finite-difference vertex normals.
//! - [`grid::grid_indices`]: Two triangles per grid cell.
//!
//! The grid's real column and row counts are carried through
//! explicitly; nothing here infers dimensions from the vertex count.

pub mod grid;
pub mod mesh;
pub mod normals;

pub use mesh::MeshData;
