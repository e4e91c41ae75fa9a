//! Analytical sphere collision.

use drape_math::Vec3;

use crate::contact::Contact;

/// Tests `position` against a sphere inflated by `thickness`.
///
/// A particle sitting exactly on the center has no defined outward
/// direction and is pushed along +Y.
pub fn sphere_contact(position: Vec3, center: Vec3, radius: f32, thickness: f32) -> Option<Contact> {
    let min_distance = radius + thickness;
    let offset = position - center;
    let distance = offset.length();

    if distance >= min_distance {
        return None;
    }

    let normal = if distance > 0.0 {
        offset / distance
    } else {
        Vec3::Y
    };

    Some(Contact {
        normal,
        push: min_distance - distance,
    })
}
