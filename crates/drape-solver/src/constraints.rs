//! Spring relaxation.
//!
//! One call is one Gauss-Seidel sweep over all springs in insertion
//! order. Later springs see the corrections of earlier ones, so the
//! result depends on generation order; callers repeat the sweep
//! `solver_iterations` times per step.

use drape_types::constants::SPRING_CORRECTION_SHARE;

use crate::state::ClothState;

/// Nudges both endpoints of every spring toward its rest length.
///
/// Each free endpoint moves by `(d - rest) / d × stiffness × 0.5` of the
/// separation vector. A pinned endpoint receives nothing, and its partner
/// still only receives its own half. Zero-length springs are skipped.
pub fn satisfy_constraints(state: &mut ClothState) {
    let ClothState {
        particles, springs, ..
    } = state;

    for spring in springs.iter() {
        let (a, b) = (spring.p1.index(), spring.p2.index());
        let delta = particles[b].position - particles[a].position;
        let distance = delta.length();
        if distance == 0.0 {
            continue;
        }

        let diff = (distance - spring.rest_length) / distance;
        let correction = delta * (diff * spring.stiffness * SPRING_CORRECTION_SHARE);

        if !particles[a].pinned {
            particles[a].position += correction;
        }
        if !particles[b].pinned {
            particles[b].position -= correction;
        }
    }
}
