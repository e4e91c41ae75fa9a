//! Integration tests for drape-solver.

use drape_material::{FabricOverrides, FabricProperties, MaterialDatabase};
use drape_math::{Vec2, Vec3};
use drape_solver::config::SimulationSettings;
use drape_solver::constraints::satisfy_constraints;
use drape_solver::integrator::{apply_forces, combined_damping, integrate};
use drape_solver::state::{ClothState, Particle, Spring};
use drape_solver::topology::build_grid;
use drape_types::{ParticleId, SpringKind};
use rand::rngs::StdRng;
use rand::SeedableRng;

const DT: f32 = 1.0 / 60.0;

fn cotton() -> FabricProperties {
    MaterialDatabase::with_defaults()
        .get("cotton")
        .cloned()
        .unwrap()
}

fn rigid_fabric() -> FabricProperties {
    cotton().with_overrides(&FabricOverrides {
        stretch_stiffness: Some(1.0),
        shear_stiffness: Some(1.0),
        bend_stiffness: Some(1.0),
        air_resistance: Some(0.0),
        ..Default::default()
    })
}

fn two_particles(distance: f32, rest_length: f32, stiffness: f32) -> ClothState {
    ClothState {
        particles: vec![
            Particle::new(Vec3::ZERO, 1.0, Vec2::ZERO),
            Particle::new(Vec3::new(distance, 0.0, 0.0), 1.0, Vec2::ONE),
        ],
        springs: vec![Spring {
            p1: ParticleId(0),
            p2: ParticleId(1),
            rest_length,
            stiffness,
            kind: SpringKind::Structural,
        }],
        ..Default::default()
    }
}

// ─── Topology Tests ───────────────────────────────────────────

#[test]
fn single_cell_counts() {
    let cloth = build_grid(2.0, 2.0, 1, 1, Vec3::ZERO, &cotton()).unwrap();
    assert_eq!(cloth.particle_count(), 4);
    assert_eq!(cloth.spring_count(SpringKind::Structural), 2);
    assert_eq!(cloth.spring_count(SpringKind::Shear), 2);
    assert_eq!(cloth.spring_count(SpringKind::Bend), 0);
}

#[test]
fn rectangular_grid_counts() {
    let cloth = build_grid(3.0, 2.0, 3, 2, Vec3::ZERO, &cotton()).unwrap();
    assert_eq!(cloth.particle_count(), 12);
    assert_eq!(cloth.dims.columns, 4);
    assert_eq!(cloth.dims.rows, 3);
    // 6 cells × 2
    assert_eq!(cloth.spring_count(SpringKind::Structural), 12);
    assert_eq!(cloth.spring_count(SpringKind::Shear), 12);
    // right: x ∈ {0,1} × y ∈ {0,1}; down: y = 0 × x ∈ {0,1,2}
    assert_eq!(cloth.spring_count(SpringKind::Bend), 7);
}

#[test]
fn spring_generation_order() {
    let cloth = build_grid(2.0, 2.0, 2, 2, Vec3::ZERO, &cotton()).unwrap();
    let pairs: Vec<(u32, u32, SpringKind)> = cloth
        .springs
        .iter()
        .take(6)
        .map(|s| (s.p1.0, s.p2.0, s.kind))
        .collect();
    assert_eq!(
        pairs,
        vec![
            (0, 1, SpringKind::Structural),
            (0, 3, SpringKind::Structural),
            (0, 4, SpringKind::Shear),
            (1, 3, SpringKind::Shear),
            (0, 2, SpringKind::Bend),
            (0, 6, SpringKind::Bend),
        ]
    );
}

#[test]
fn grid_is_centered_in_xz_plane() {
    let origin = Vec3::new(1.0, 2.0, 3.0);
    let cloth = build_grid(2.0, 4.0, 2, 2, origin, &cotton()).unwrap();
    assert!(cloth.particles.iter().all(|p| p.position.y == 2.0));
    assert_eq!(cloth.particles[0].position, Vec3::new(0.0, 2.0, 1.0));
    assert_eq!(cloth.particles[8].position, Vec3::new(2.0, 2.0, 5.0));
    assert_eq!(cloth.particles[4].position, origin);
}

#[test]
fn uvs_are_linear() {
    let cloth = build_grid(1.0, 1.0, 4, 2, Vec3::ZERO, &cotton()).unwrap();
    assert_eq!(cloth.particles[0].uv, Vec2::ZERO);
    assert_eq!(cloth.particles[cloth.dims.index(2, 1)].uv, Vec2::new(0.5, 0.5));
    assert_eq!(cloth.particles[cloth.particle_count() - 1].uv, Vec2::ONE);
}

#[test]
fn mass_is_uniform_share_of_weight() {
    let fabric = cotton();
    let cloth = build_grid(2.0, 1.0, 1, 1, Vec3::ZERO, &fabric).unwrap();
    let expected = fabric.weight / 1000.0 * 2.0 / 4.0;
    assert!(cloth.particles.iter().all(|p| (p.mass - expected).abs() < 1e-7));
}

#[test]
fn rest_lengths_match_geometry() {
    let cloth = build_grid(3.0, 4.0, 1, 1, Vec3::ZERO, &cotton()).unwrap();
    let structural: Vec<f32> = cloth
        .springs
        .iter()
        .filter(|s| s.kind == SpringKind::Structural)
        .map(|s| s.rest_length)
        .collect();
    assert_eq!(structural, vec![3.0, 4.0]);
    for shear in cloth.springs.iter().filter(|s| s.kind == SpringKind::Shear) {
        assert!((shear.rest_length - 5.0).abs() < 1e-6);
    }
}

#[test]
fn stiffness_stamped_by_kind() {
    let fabric = cotton();
    let cloth = build_grid(1.0, 1.0, 3, 3, Vec3::ZERO, &fabric).unwrap();
    for spring in &cloth.springs {
        assert_eq!(spring.stiffness, fabric.stiffness_for(spring.kind));
    }
}

#[test]
fn invalid_dimensions_rejected() {
    let fabric = cotton();
    assert!(build_grid(0.0, 1.0, 1, 1, Vec3::ZERO, &fabric).is_err());
    assert!(build_grid(1.0, -1.0, 1, 1, Vec3::ZERO, &fabric).is_err());
    assert!(build_grid(1.0, f32::NAN, 1, 1, Vec3::ZERO, &fabric).is_err());
    assert!(build_grid(1.0, 1.0, 0, 1, Vec3::ZERO, &fabric).is_err());
    assert!(build_grid(1.0, 1.0, 1, 0, Vec3::ZERO, &fabric).is_err());
}

// ─── State Tests ──────────────────────────────────────────────

#[test]
fn restamp_updates_every_spring() {
    let db = MaterialDatabase::with_defaults();
    let mut cloth = build_grid(1.0, 1.0, 3, 3, Vec3::ZERO, db.get("silk").unwrap()).unwrap();
    let denim = db.get("denim").unwrap();
    cloth.restamp_stiffness(denim);
    for spring in &cloth.springs {
        assert_eq!(spring.stiffness, denim.stiffness_for(spring.kind));
    }
}

#[test]
fn fresh_cloth_is_settled() {
    let cloth = build_grid(1.0, 1.0, 2, 2, Vec3::ZERO, &cotton()).unwrap();
    assert!(cloth.is_settled());
    assert_eq!(cloth.kinetic_energy(), 0.0);
    assert_eq!(cloth.max_strain(), 0.0);
}

#[test]
fn pin_freezes_and_relocates() {
    let mut p = Particle::new(Vec3::ZERO, 1.0, Vec2::ZERO);
    p.previous_position = Vec3::new(0.0, 1.0, 0.0);
    p.pin(Some(Vec3::new(5.0, 5.0, 5.0)));
    assert!(p.pinned);
    assert_eq!(p.position, Vec3::splat(5.0));
    assert_eq!(p.previous_position, Vec3::splat(5.0));
    p.unpin();
    assert!(!p.pinned);
    assert_eq!(p.previous_position, p.position);
}

#[test]
fn clear_empties_state() {
    let mut cloth = build_grid(1.0, 1.0, 2, 2, Vec3::ZERO, &cotton()).unwrap();
    cloth.clear();
    assert!(cloth.is_empty());
    assert!(cloth.springs.is_empty());
    assert_eq!(cloth.dims.vertex_count(), 0);
}

// ─── Integrator Tests ─────────────────────────────────────────

#[test]
fn first_step_under_gravity() {
    let mut cloth = two_particles(1.0, 1.0, 1.0);
    let settings = SimulationSettings::default();
    let fabric = rigid_fabric();
    let mut rng = StdRng::seed_from_u64(0);

    apply_forces(&mut cloth, &settings, &fabric, &mut rng);
    integrate(&mut cloth, DT, 1.0);

    let p = &cloth.particles[0];
    assert!((p.position.y - (-9.81 * DT * DT)).abs() < 1e-7);
    assert!((p.velocity.y - (-9.81 * DT)).abs() < 1e-5);
    assert_eq!(p.previous_position, Vec3::ZERO);
}

#[test]
fn pinned_particle_is_skipped() {
    let mut cloth = two_particles(1.0, 1.0, 1.0);
    cloth.particles[0].pin(None);
    let settings = SimulationSettings::default().with_wind(Vec3::X, 1.0);
    let mut rng = StdRng::seed_from_u64(0);

    for _ in 0..10 {
        apply_forces(&mut cloth, &settings, &cotton(), &mut rng);
        integrate(&mut cloth, DT, 1.0);
    }
    let p = &cloth.particles[0];
    assert_eq!(p.position, Vec3::ZERO);
    assert_eq!(p.previous_position, Vec3::ZERO);
    assert_eq!(p.acceleration, Vec3::ZERO);
    assert_eq!(p.velocity, Vec3::ZERO);
}

#[test]
fn steady_wind_without_turbulence() {
    let mut cloth = two_particles(1.0, 1.0, 1.0);
    let settings = SimulationSettings::default()
        .with_gravity(Vec3::ZERO)
        .with_wind(Vec3::new(2.0, 0.0, 0.0), 0.0);
    let mut rng = StdRng::seed_from_u64(0);

    apply_forces(&mut cloth, &settings, &rigid_fabric(), &mut rng);
    assert_eq!(cloth.particles[1].acceleration, Vec3::new(2.0, 0.0, 0.0));
}

#[test]
fn turbulence_is_bounded() {
    let mut cloth = build_grid(1.0, 1.0, 8, 8, Vec3::ZERO, &rigid_fabric()).unwrap();
    let settings = SimulationSettings::default()
        .with_gravity(Vec3::ZERO)
        .with_wind(Vec3::new(0.0, 0.0, 1.0), 0.4);
    let mut rng = StdRng::seed_from_u64(3);

    apply_forces(&mut cloth, &settings, &rigid_fabric(), &mut rng);
    let accelerations: Vec<Vec3> = cloth.particles.iter().map(|p| p.acceleration).collect();
    for a in &accelerations {
        assert!(a.x.abs() <= 0.2 && a.y.abs() <= 0.2);
        assert!((a.z - 1.0).abs() <= 0.2);
    }
    // Resampled per particle.
    assert!(accelerations.windows(2).any(|w| w[0] != w[1]));
}

#[test]
fn no_turbulence_without_wind() {
    let mut cloth = two_particles(1.0, 1.0, 1.0);
    let mut settings = SimulationSettings::default();
    settings.turbulence = 10.0;
    let mut rng = StdRng::seed_from_u64(0);

    apply_forces(&mut cloth, &settings, &rigid_fabric(), &mut rng);
    assert_eq!(cloth.particles[0].acceleration, settings.gravity_vec());
}

#[test]
fn air_resistance_opposes_velocity() {
    let mut cloth = two_particles(1.0, 1.0, 1.0);
    cloth.particles[0].velocity = Vec3::new(10.0, 0.0, 0.0);
    let fabric = rigid_fabric().with_overrides(&FabricOverrides {
        air_resistance: Some(0.5),
        ..Default::default()
    });
    let settings = SimulationSettings::default().with_gravity(Vec3::ZERO);
    let mut rng = StdRng::seed_from_u64(0);

    apply_forces(&mut cloth, &settings, &fabric, &mut rng);
    assert_eq!(cloth.particles[0].acceleration, Vec3::new(-5.0, 0.0, 0.0));
}

#[test]
fn damping_scales_inertia() {
    let mut cloth = two_particles(1.0, 1.0, 1.0);
    cloth.particles[0].previous_position = Vec3::new(-0.1, 0.0, 0.0);

    integrate(&mut cloth, DT, 0.5);
    let p = &cloth.particles[0];
    assert!((p.position.x - 0.05).abs() < 1e-6);
    assert_eq!(p.previous_position, Vec3::ZERO);
}

#[test]
fn combined_damping_multiplies() {
    let mut settings = SimulationSettings::default();
    settings.damping = 0.5;
    let fabric = cotton();
    assert!((combined_damping(&fabric, &settings) - fabric.damping * 0.5).abs() < 1e-7);
}

#[test]
fn seeded_turbulence_is_deterministic() {
    let run = || {
        let mut cloth = build_grid(1.0, 1.0, 4, 4, Vec3::ZERO, &cotton()).unwrap();
        let settings = SimulationSettings::default().with_wind(Vec3::X, 0.5);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..30 {
            apply_forces(&mut cloth, &settings, &cotton(), &mut rng);
            integrate(&mut cloth, DT, 0.97);
            satisfy_constraints(&mut cloth);
        }
        cloth.positions()
    };
    assert_eq!(run(), run());
}

// ─── Constraint Tests ─────────────────────────────────────────

#[test]
fn stretched_spring_contracts_symmetrically() {
    let mut cloth = two_particles(2.0, 1.0, 1.0);
    satisfy_constraints(&mut cloth);
    // diff = 0.5, correction = 0.25 of the 2.0 separation per side
    assert!((cloth.particles[0].position.x - 0.5).abs() < 1e-6);
    assert!((cloth.particles[1].position.x - 1.5).abs() < 1e-6);
}

#[test]
fn compressed_spring_expands() {
    let mut cloth = two_particles(0.5, 1.0, 1.0);
    satisfy_constraints(&mut cloth);
    assert!(cloth.particles[0].position.x < 0.0);
    assert!(cloth.particles[1].position.x > 0.5);
}

#[test]
fn pinned_endpoint_gets_no_correction() {
    let mut cloth = two_particles(2.0, 1.0, 1.0);
    cloth.particles[0].pin(None);
    satisfy_constraints(&mut cloth);
    assert_eq!(cloth.particles[0].position, Vec3::ZERO);
    // The free partner still only moves its own half.
    assert!((cloth.particles[1].position.x - 1.5).abs() < 1e-6);
}

#[test]
fn zero_length_spring_is_skipped() {
    let mut cloth = two_particles(0.0, 1.0, 1.0);
    satisfy_constraints(&mut cloth);
    assert_eq!(cloth.particles[0].position, Vec3::ZERO);
    assert_eq!(cloth.particles[1].position, Vec3::ZERO);
}

#[test]
fn zero_stiffness_is_inert() {
    let mut cloth = two_particles(2.0, 1.0, 0.0);
    satisfy_constraints(&mut cloth);
    assert_eq!(cloth.particles[1].position.x, 2.0);
}

#[test]
fn perturbed_cloth_relaxes_to_rest_lengths() {
    let fabric = rigid_fabric();
    let mut cloth = build_grid(1.0, 1.0, 3, 3, Vec3::ZERO, &fabric).unwrap();
    cloth.particles[0].pin(None);
    let center = cloth.dims.index(2, 2);
    cloth.particles[center].position += Vec3::new(0.05, 0.2, -0.05);

    let settings = SimulationSettings::default().with_gravity(Vec3::ZERO);
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..600 {
        apply_forces(&mut cloth, &settings, &fabric, &mut rng);
        integrate(&mut cloth, DT, combined_damping(&fabric, &settings));
        for _ in 0..40 {
            satisfy_constraints(&mut cloth);
        }
    }
    assert!(cloth.max_strain() < 0.01, "max strain {}", cloth.max_strain());
}

// ─── Config Tests ─────────────────────────────────────────────

#[test]
fn config_defaults() {
    let config = SimulationSettings::default();
    assert_eq!(config.gravity, [0.0, -9.81, 0.0]);
    assert!((config.time_step - 1.0 / 60.0).abs() < 1e-9);
    assert_eq!(config.solver_iterations, 10);
    assert_eq!(config.collision_iterations, 2);
    assert!(!config.has_wind());
    assert!(config.validate().is_ok());
}

#[test]
fn config_presets() {
    assert!(SimulationSettings::high_quality().solver_iterations > SimulationSettings::default().solver_iterations);
    assert!(SimulationSettings::preview().solver_iterations < SimulationSettings::default().solver_iterations);
}

#[test]
fn config_serialization() {
    let config = SimulationSettings::default().with_wind(Vec3::new(1.0, 0.0, 0.5), 0.2);
    let toml_str = toml::to_string(&config).unwrap();
    let recovered: SimulationSettings = toml::from_str(&toml_str).unwrap();
    assert_eq!(recovered, config);
}

#[test]
fn partial_toml_keeps_defaults() {
    let config: SimulationSettings = toml::from_str("solver_iterations = 25\n").unwrap();
    assert_eq!(config.solver_iterations, 25);
    assert_eq!(config.gravity, SimulationSettings::default().gravity);
}

#[test]
fn validate_rejects_bad_time_step() {
    let mut config = SimulationSettings::default();
    config.time_step = 0.0;
    assert!(config.validate().is_err());
    config.time_step = f32::INFINITY;
    assert!(config.validate().is_err());
}

#[test]
fn validate_rejects_non_finite_wind() {
    let config = SimulationSettings::default().with_wind(Vec3::new(f32::NAN, 0.0, 0.0), 0.0);
    assert!(config.validate().is_err());
}
