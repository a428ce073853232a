//! Simulation configuration.

use crate::strategy::StrategyKind;

/// Default simulated horizon in seconds.
pub const DEFAULT_DURATION: f64 = 10_000_000_000.0;

/// Configuration for a simulator invocation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Simulated horizon in seconds.
    pub duration: f64,

    /// Reference strategies to run, in report order.
    pub strategies: Vec<StrategyKind>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-strategy detail).
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            strategies: StrategyKind::all().to_vec(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Short-horizon configuration for smoke runs.
    pub fn quick() -> Self {
        Self {
            duration: 10_000.0,
            ..Default::default()
        }
    }

    /// Run a single strategy at the default horizon.
    pub fn single(kind: StrategyKind) -> Self {
        Self {
            strategies: vec![kind],
            ..Default::default()
        }
    }
}
