//! Run summary printed after a simulation.

use drape_sim::StepReport;
use serde::Serialize;

/// Aggregate of the step reports of one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    pub scenario: String,
    pub material: String,
    pub steps: u32,
    pub sim_time: f64,
    pub particles: usize,
    pub total_contacts: u64,
    pub max_penetration: f32,
    pub final_max_speed: f32,
    pub final_kinetic_energy: f64,
    /// First step on which the cloth was settled, if any.
    pub settled_at: Option<u32>,
}

impl RunSummary {
    pub fn new(scenario: &str, material: &str, particles: usize) -> Self {
        Self {
            scenario: scenario.to_string(),
            material: material.to_string(),
            particles,
            ..Default::default()
        }
    }

    /// Folds one step into the summary.
    pub fn record(&mut self, report: &StepReport) {
        self.steps += 1;
        self.sim_time = report.sim_time;
        self.total_contacts += u64::from(report.contacts.resolved_count);
        self.max_penetration = self.max_penetration.max(report.contacts.max_penetration);
        self.final_max_speed = report.max_speed;
        self.final_kinetic_energy = report.kinetic_energy;
        if report.settled && self.settled_at.is_none() {
            self.settled_at = Some(report.timestep);
        }
    }
}
