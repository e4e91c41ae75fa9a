//! CLI command implementations.

use std::path::{Path, PathBuf};

use drape_cli::{load_settings, RunSummary, Scenario, ScenarioKind};
use drape_material::MaterialDatabase;
use drape_sim::Simulation;
use drape_solver::SimulationSettings;
use drape_telemetry::TracingSink;

type CmdResult = Result<(), Box<dyn std::error::Error>>;

/// Options of the `simulate` command.
pub struct SimulateArgs {
    pub scenario: ScenarioKind,
    pub material: String,
    pub steps: Option<u32>,
    pub config: Option<PathBuf>,
    pub seed: u64,
    pub until_settled: bool,
    pub output: Option<PathBuf>,
}

/// List fabric presets.
pub fn presets() -> CmdResult {
    let db = MaterialDatabase::with_defaults();

    println!("Fabric Presets");
    println!("══════════════");
    println!();
    println!(
        "{:<10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>9}",
        "name", "g/m²", "stretch", "bend", "shear", "friction", "thickness"
    );
    for name in db.names() {
        let Some(f) = db.get(name) else { continue };
        println!(
            "{:<10} {:>8.0} {:>8.2} {:>8.2} {:>8.2} {:>8.2} {:>9.4}",
            f.name,
            f.weight,
            f.stretch_stiffness,
            f.bend_stiffness,
            f.shear_stiffness,
            f.friction,
            f.thickness
        );
    }
    Ok(())
}

/// Run a scenario.
pub fn simulate(args: &SimulateArgs) -> CmdResult {
    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => SimulationSettings::default(),
    };

    let mut sim = Simulation::new(settings).with_seed(args.seed);
    if !sim.load_preset(&args.material) {
        let available = sim.materials().names().join(", ");
        return Err(format!(
            "Unknown material: '{}'. Available: {available}",
            args.material
        )
        .into());
    }
    sim.add_sink(Box::new(TracingSink::new()));

    let scenario = Scenario::from_kind(args.scenario);
    scenario.setup(&mut sim)?;
    let steps = args.steps.unwrap_or(scenario.steps);

    println!("drape Simulation");
    println!("────────────────");
    println!(
        "Running: {} with {} ({} particles, {} springs, {} steps)",
        scenario.kind,
        args.material,
        sim.particles().len(),
        sim.cloth().springs.len(),
        steps
    );

    let mut summary = RunSummary::new(scenario.kind.name(), &args.material, sim.particles().len());
    sim.start();
    for _ in 0..steps {
        let Some(report) = sim.on_frame() else { break };
        summary.record(&report);
        if args.until_settled && report.settled {
            break;
        }
    }
    sim.stop();

    println!("  Steps:         {}", summary.steps);
    println!("  Sim time:      {:.3}s", summary.sim_time);
    println!("  Contacts:      {}", summary.total_contacts);
    println!("  Max push:      {:.5}m", summary.max_penetration);
    println!("  Final speed:   {:.6}m/s", summary.final_max_speed);
    println!("  Final KE:      {:.6e}", summary.final_kinetic_energy);
    match summary.settled_at {
        Some(step) => println!("  Settled at:    step {step}"),
        None => println!("  Settled at:    -"),
    }

    if let Some(path) = &args.output {
        let mesh = sim.export_mesh()?;
        let json = serde_json::to_string(&mesh)?;
        std::fs::write(path, json)?;
        println!();
        println!(
            "Mesh written to: {} ({} vertices, {} triangles)",
            path.display(),
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }

    sim.dispose();
    Ok(())
}

/// Validate a settings file.
pub fn validate(path: &Path) -> CmdResult {
    println!("Validating: {}", path.display());

    let settings = load_settings(path)?;
    println!("  Gravity:       {:?}", settings.gravity);
    println!("  Time step:     {:.5}s", settings.time_step);
    println!("  Solver iters:  {}", settings.solver_iterations);
    println!("  Contact iters: {}", settings.collision_iterations);
    if settings.has_wind() {
        println!(
            "  Wind:          {:?} (turbulence {})",
            settings.wind, settings.turbulence
        );
    }
    println!("  Damping:       {}", settings.damping);
    println!();
    println!("✓ Settings are valid");
    Ok(())
}
