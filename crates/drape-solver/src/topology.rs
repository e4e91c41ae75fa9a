//! Cloth topology builder.
//!
//! Lays out a flat particle grid in the XZ plane and generates the
//! four spring families cell by cell.

use drape_material::FabricProperties;
use drape_math::{GridDims, Vec2, Vec3};
use drape_types::{DrapeError, DrapeResult, SpringKind};

use crate::state::{ClothState, Particle, Spring};

/// Builds a `width × height` cloth of `resolution_x × resolution_y` cells
/// centered on `origin`.
///
/// Particle `(x, y)` sits at
/// `origin + (-width/2 + x·width/rx, 0, -height/2 + y·height/ry)` with
/// UV `(x/rx, y/ry)`. The fabric's total mass is split evenly across
/// all particles.
///
/// For every cell `(x, y)` springs are emitted in this order:
/// 1. structural `(x,y)–(x+1,y)`
/// 2. structural `(x,y)–(x,y+1)`
/// 3. shear `(x,y)–(x+1,y+1)` and `(x+1,y)–(x,y+1)`
/// 4. bend `(x,y)–(x+2,y)` when `x + 2 <= rx`
/// 5. bend `(x,y)–(x,y+2)` when `y + 2 <= ry`
///
/// Springs only originate from cells, so the last column's vertical
/// edges and the last row's horizontal edges carry no structural spring.
///
/// ```
/// use drape_material::MaterialDatabase;
/// use drape_math::Vec3;
/// use drape_solver::topology::build_grid;
/// use drape_types::SpringKind;
///
/// let db = MaterialDatabase::with_defaults();
/// let cloth = build_grid(2.0, 2.0, 1, 1, Vec3::ZERO, db.get("cotton").unwrap()).unwrap();
/// assert_eq!(cloth.particle_count(), 4);
/// assert_eq!(cloth.spring_count(SpringKind::Structural), 2);
/// assert_eq!(cloth.spring_count(SpringKind::Shear), 2);
/// assert_eq!(cloth.spring_count(SpringKind::Bend), 0);
/// ```
pub fn build_grid(
    width: f32,
    height: f32,
    resolution_x: usize,
    resolution_y: usize,
    origin: Vec3,
    fabric: &FabricProperties,
) -> DrapeResult<ClothState> {
    validate(width, height, resolution_x, resolution_y)?;

    let dims = GridDims::from_resolution(resolution_x, resolution_y);
    let n = dims.vertex_count();
    let mass = fabric.mass_per_particle(n, width * height);

    let cell_w = width / resolution_x as f32;
    let cell_h = height / resolution_y as f32;
    let corner = origin - Vec3::new(width / 2.0, 0.0, height / 2.0);

    let mut particles = Vec::with_capacity(n);
    for y in 0..dims.rows {
        for x in 0..dims.columns {
            let position = corner + Vec3::new(x as f32 * cell_w, 0.0, y as f32 * cell_h);
            let uv = Vec2::new(
                x as f32 / resolution_x as f32,
                y as f32 / resolution_y as f32,
            );
            particles.push(Particle::new(position, mass, uv));
        }
    }

    let mut springs = Vec::new();
    let mut link = |a: usize, b: usize, kind: SpringKind| {
        springs.push(Spring::between(&particles, a, b, kind, fabric));
    };

    for y in 0..resolution_y {
        for x in 0..resolution_x {
            let here = dims.index(x, y);
            let right = dims.index(x + 1, y);
            let down = dims.index(x, y + 1);
            let diagonal = dims.index(x + 1, y + 1);

            link(here, right, SpringKind::Structural);
            link(here, down, SpringKind::Structural);

            link(here, diagonal, SpringKind::Shear);
            link(right, down, SpringKind::Shear);

            if x + 2 <= resolution_x {
                link(here, dims.index(x + 2, y), SpringKind::Bend);
            }
            if y + 2 <= resolution_y {
                link(here, dims.index(x, y + 2), SpringKind::Bend);
            }
        }
    }

    tracing::debug!(
        particles = n,
        springs = springs.len(),
        columns = dims.columns,
        rows = dims.rows,
        fabric = %fabric.name,
        "built cloth grid"
    );

    Ok(ClothState {
        particles,
        springs,
        dims,
        size: Vec2::new(width, height),
    })
}

fn validate(width: f32, height: f32, resolution_x: usize, resolution_y: usize) -> DrapeResult<()> {
    if !(width > 0.0 && width.is_finite()) || !(height > 0.0 && height.is_finite()) {
        return Err(DrapeError::InvalidConfig(format!(
            "Cloth size must be positive and finite (got {width} x {height})"
        )));
    }
    if resolution_x == 0 || resolution_y == 0 {
        return Err(DrapeError::InvalidConfig(format!(
            "Cloth resolution must be at least 1x1 (got {resolution_x} x {resolution_y})"
        )));
    }
    Ok(())
}
