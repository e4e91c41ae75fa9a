//! Infinite plane collision.
//!
//! The plane passes through the collider position; its normal points
//! to the free side. Anything closer than `thickness` on the normal
//! side, or anywhere behind the plane, is lifted back out.

use drape_math::Vec3;

use crate::contact::Contact;

/// Tests `position` against the plane through `origin` with `normal`.
///
/// The normal does not need to be unit length. A zero normal never
/// collides.
pub fn plane_contact(position: Vec3, origin: Vec3, normal: Vec3, thickness: f32) -> Option<Contact> {
    let normal = normal.normalize_or_zero();
    if normal == Vec3::ZERO {
        return None;
    }

    let signed_distance = (position - origin).dot(normal);
    (signed_distance < thickness).then(|| Contact {
        normal,
        push: thickness - signed_distance,
    })
}
