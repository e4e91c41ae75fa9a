//! Playback state.

use std::fmt;

/// Frame-loop state of a [`Simulation`](crate::Simulation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SimulationStatus {
    /// Never started.
    #[default]
    Idle,
    /// `on_frame` advances the simulation.
    Running,
    /// Halted; particle state is frozen at the last step.
    Stopped,
}

impl SimulationStatus {
    pub fn is_running(self) -> bool {
        self == Self::Running
    }
}

impl fmt::Display for SimulationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Stopped => "stopped",
        };
        f.write_str(name)
    }
}
