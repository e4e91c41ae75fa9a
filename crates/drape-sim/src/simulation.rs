//! Simulation driver.

use drape_contact::{handle_collisions, Collider, ColliderSet, ColliderShape, ContactResult};
use drape_material::{FabricOverrides, FabricProperties, MaterialDatabase};
use drape_math::Vec3;
use drape_mesh::MeshData;
use drape_solver::constraints::satisfy_constraints;
use drape_solver::integrator::{apply_forces, combined_damping, integrate};
use drape_solver::topology::build_grid;
use drape_solver::{ClothState, Particle, SimulationSettings};
use drape_telemetry::{EventBus, EventKind, EventSink, ParticleSnapshot, SimulationEvent};
use drape_types::constants::DEFAULT_FABRIC;
use drape_types::{ColliderId, DrapeError, DrapeResult};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::report::StepReport;
use crate::status::SimulationStatus;

/// A single cloth simulation.
///
/// Everything a step touches is owned here and mutated through
/// `&mut self`, so nothing can observe a half-finished step. Events
/// raised during a call are delivered to sinks before the call
/// returns.
pub struct Simulation {
    materials: MaterialDatabase,
    fabric: FabricProperties,
    settings: SimulationSettings,
    cloth: ClothState,
    colliders: ColliderSet,
    bus: EventBus,
    rng: StdRng,
    sim_time: f64,
    timestep: u32,
    status: SimulationStatus,
}

impl Simulation {
    /// Creates a simulation with the built-in fabric presets.
    pub fn new(settings: SimulationSettings) -> Self {
        Self::with_materials(MaterialDatabase::with_defaults(), settings)
    }

    /// Creates a simulation that looks presets up in `materials`.
    ///
    /// The active fabric starts as the database's `cotton` entry, or
    /// the built-in cotton values if the database has none.
    pub fn with_materials(materials: MaterialDatabase, settings: SimulationSettings) -> Self {
        let fabric = materials
            .get(DEFAULT_FABRIC)
            .cloned()
            .unwrap_or_default();
        Self {
            materials,
            fabric,
            settings,
            cloth: ClothState::default(),
            colliders: ColliderSet::new(),
            bus: EventBus::new(),
            rng: StdRng::from_os_rng(),
            sim_time: 0.0,
            timestep: 0,
            status: SimulationStatus::Idle,
        }
    }

    /// Reseeds the turbulence generator for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    // ─── Accessors ───────────────────────────────────────────

    pub fn status(&self) -> SimulationStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status.is_running()
    }

    /// Simulation time in seconds.
    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    /// Steps taken since the last reset.
    pub fn timestep(&self) -> u32 {
        self.timestep
    }

    pub fn fabric(&self) -> &FabricProperties {
        &self.fabric
    }

    pub fn materials(&self) -> &MaterialDatabase {
        &self.materials
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    /// Replaces the settings. Takes effect on the next step.
    pub fn set_settings(&mut self, settings: SimulationSettings) {
        self.settings = settings;
    }

    pub fn cloth(&self) -> &ClothState {
        &self.cloth
    }

    pub fn particles(&self) -> &[Particle] {
        &self.cloth.particles
    }

    pub fn colliders(&self) -> &ColliderSet {
        &self.colliders
    }

    // ─── Events ──────────────────────────────────────────────

    /// Registers a sink for simulation events.
    pub fn add_sink(&mut self, sink: Box<dyn EventSink>) {
        self.bus.add_sink(sink);
    }

    /// Enables or disables event delivery.
    pub fn set_events_enabled(&mut self, enabled: bool) {
        self.bus.set_enabled(enabled);
    }

    fn emit(&self, kind: EventKind) {
        self.bus.emit(SimulationEvent::new(self.timestep, kind));
    }

    fn listening(&self) -> bool {
        self.bus.is_enabled() && self.bus.sink_count() > 0
    }

    /// Reports `err` as an error event and hands it back.
    fn fail(&mut self, err: DrapeError) -> DrapeError {
        tracing::debug!(error = %err, "operation rejected");
        self.emit(EventKind::Error {
            message: err.to_string(),
        });
        self.bus.flush();
        err
    }

    // ─── Cloth ───────────────────────────────────────────────

    /// Builds a new cloth, replacing any existing particles and springs.
    ///
    /// The grid spans `width × height` meters in the XZ plane, centered
    /// on `origin`, with `resolution_x × resolution_y` cells. On error
    /// the current cloth is left untouched.
    pub fn create_cloth(
        &mut self,
        width: f32,
        height: f32,
        resolution_x: usize,
        resolution_y: usize,
        origin: Vec3,
    ) -> DrapeResult<()> {
        let cloth = build_grid(width, height, resolution_x, resolution_y, origin, &self.fabric)
            .map_err(|err| self.fail(err))?;

        tracing::info!(
            particles = cloth.particle_count(),
            springs = cloth.springs.len(),
            fabric = %self.fabric.name,
            "cloth created"
        );
        self.cloth = cloth;
        Ok(())
    }

    /// Switches to a named fabric preset and re-stamps every spring.
    ///
    /// Returns `false` and changes nothing if the preset is unknown.
    /// Particle masses keep the weight they were built with.
    pub fn load_preset(&mut self, name: &str) -> bool {
        let Some(fabric) = self.materials.get(name) else {
            tracing::debug!(preset = name, "unknown fabric preset ignored");
            return false;
        };
        self.fabric = fabric.clone();
        self.cloth.restamp_stiffness(&self.fabric);
        tracing::debug!(preset = name, "fabric preset loaded");
        true
    }

    /// Merges `overrides` into the active fabric and re-stamps every spring.
    pub fn set_fabric_properties(&mut self, overrides: &FabricOverrides) {
        self.fabric.apply(overrides);
        self.cloth.restamp_stiffness(&self.fabric);
    }

    // ─── Pins ────────────────────────────────────────────────

    fn check_index(&mut self, index: usize) -> DrapeResult<()> {
        let count = self.cloth.particle_count();
        if index >= count {
            return Err(self.fail(DrapeError::ParticleOutOfBounds { index, count }));
        }
        Ok(())
    }

    /// Pins a particle, optionally moving it to `position` first.
    pub fn pin_particle(&mut self, index: usize, position: Option<Vec3>) -> DrapeResult<()> {
        self.check_index(index)?;
        self.cloth.particles[index].pin(position);
        Ok(())
    }

    /// Releases a pinned particle.
    pub fn unpin_particle(&mut self, index: usize) -> DrapeResult<()> {
        self.check_index(index)?;
        self.cloth.particles[index].unpin();
        Ok(())
    }

    /// Pins every particle of the first grid row in place.
    pub fn pin_top_edge(&mut self) {
        let dims = self.cloth.dims;
        for index in dims.top_edge() {
            self.cloth.particles[index].pin(None);
        }
    }

    /// Pins the four corner particles in place.
    pub fn pin_corners(&mut self) {
        for index in self.cloth.dims.corners() {
            self.cloth.particles[index].pin(None);
        }
    }

    // ─── Colliders ───────────────────────────────────────────

    /// Registers a collider at `position`.
    pub fn add_collider(&mut self, shape: ColliderShape, position: Vec3) -> ColliderId {
        self.colliders.insert(shape, position)
    }

    /// Removes a collider. Returns `None` if it was not registered.
    pub fn remove_collider(&mut self, id: ColliderId) -> Option<Collider> {
        self.colliders.remove(id)
    }

    /// Moves a collider. Takes effect on the next step.
    pub fn set_collider_position(&mut self, id: ColliderId, position: Vec3) -> DrapeResult<()> {
        self.colliders
            .set_position(id, position)
            .map_err(|err| self.fail(err))
    }

    // ─── Stepping ────────────────────────────────────────────

    /// Advances the simulation by one `time_step`.
    pub fn step(&mut self) -> StepReport {
        let dt = self.settings.time_step;

        apply_forces(&mut self.cloth, &self.settings, &self.fabric, &mut self.rng);
        integrate(
            &mut self.cloth,
            dt,
            combined_damping(&self.fabric, &self.settings),
        );

        for _ in 0..self.settings.solver_iterations {
            satisfy_constraints(&mut self.cloth);
        }

        let mut contacts = ContactResult::default();
        for _ in 0..self.settings.collision_iterations {
            let pass = handle_collisions(&mut self.cloth, &self.colliders, &self.fabric);
            contacts.merge(&pass.result);
            for (particle, collider) in pass.hits {
                self.emit(EventKind::Collision { particle, collider });
            }
        }

        self.sim_time += f64::from(dt);

        if self.listening() {
            self.emit(EventKind::Step {
                sim_time: self.sim_time,
                particles: self.cloth.particles.iter().map(snapshot).collect(),
            });
        }

        let settled = self.cloth.is_settled();
        if settled {
            self.emit(EventKind::Settled {
                sim_time: self.sim_time,
            });
        }
        self.bus.flush();

        let report = StepReport {
            timestep: self.timestep,
            sim_time: self.sim_time,
            contacts,
            max_speed: self.cloth.max_free_speed(),
            kinetic_energy: self.cloth.kinetic_energy(),
            settled,
        };
        self.timestep = self.timestep.wrapping_add(1);

        tracing::trace!(
            timestep = report.timestep,
            contacts = report.contacts.resolved_count,
            max_speed = report.max_speed,
            settled,
            "step"
        );
        report
    }

    // ─── Playback ────────────────────────────────────────────

    /// Starts the frame loop. No-op while already running.
    pub fn start(&mut self) {
        if self.status.is_running() {
            return;
        }
        self.status = SimulationStatus::Running;
        tracing::debug!("simulation started");
    }

    /// Stops the frame loop. No-op unless running.
    pub fn stop(&mut self) {
        if !self.status.is_running() {
            return;
        }
        self.status = SimulationStatus::Stopped;
        tracing::debug!(timestep = self.timestep, "simulation stopped");
    }

    /// Called by the host once per display frame. Steps only while running.
    pub fn on_frame(&mut self) -> Option<StepReport> {
        self.status.is_running().then(|| self.step())
    }

    /// Stops, drops the cloth and rewinds time. Colliders, fabric and
    /// sinks are kept.
    pub fn reset(&mut self) {
        self.stop();
        self.cloth.clear();
        self.sim_time = 0.0;
        self.timestep = 0;
    }

    /// Resets, then drops every collider and event sink.
    pub fn dispose(&mut self) {
        self.reset();
        self.colliders.clear();
        self.bus.clear_sinks();
    }

    // ─── Export ──────────────────────────────────────────────

    /// Exports the current cloth as a triangle mesh.
    pub fn export_mesh(&self) -> DrapeResult<MeshData> {
        MeshData::from_grid(&self.cloth.positions(), &self.cloth.uvs(), self.cloth.dims)
    }
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("status", &self.status)
            .field("fabric", &self.fabric.name)
            .field("particles", &self.cloth.particle_count())
            .field("colliders", &self.colliders.len())
            .field("timestep", &self.timestep)
            .field("sim_time", &self.sim_time)
            .finish()
    }
}

fn snapshot(particle: &Particle) -> ParticleSnapshot {
    ParticleSnapshot {
        position: particle.position.to_array(),
        previous_position: particle.previous_position.to_array(),
        velocity: particle.velocity.to_array(),
        acceleration: particle.acceleration.to_array(),
        mass: particle.mass,
        pinned: particle.pinned,
        uv: particle.uv.to_array(),
    }
}
