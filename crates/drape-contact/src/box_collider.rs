//! Axis-aligned box collision.
//!
//! The box is centered on the collider position and `size` holds the
//! full extents. A particle strictly inside all three half extents is
//! pushed out through the nearest face, padded by `thickness`. There is
//! no swept test, so a fast particle that entered through one face may
//! leave through another.

use drape_math::Vec3;

use crate::contact::Contact;

/// Tests `position` against the box centered on `center`.
pub fn box_contact(position: Vec3, center: Vec3, size: Vec3, thickness: f32) -> Option<Contact> {
    let half = size * 0.5;
    let local = position - center;
    let depth = half - local.abs();

    if depth.min_element() <= 0.0 {
        return None;
    }

    // Nearest face; ties resolve X, then Y, then Z.
    let mut axis = 0;
    for i in 1..3 {
        if depth[i] < depth[axis] {
            axis = i;
        }
    }

    let mut normal = Vec3::ZERO;
    normal[axis] = if local[axis] < 0.0 { -1.0 } else { 1.0 };

    Some(Contact {
        normal,
        push: depth[axis] + thickness,
    })
}
