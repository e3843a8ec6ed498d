//! Shared handler state

use smm_core::config::{PricingConfig, DEFAULT_OFFERED_DURATIONS};
use smm_pricing::{PricingEngine, PricingPolicy};

/// Pricing state shared by all workers
#[derive(Debug, Clone)]
pub struct PricingState {
    /// Engine configured with the active pricing policy
    pub engine: PricingEngine,
    /// Durations quoted when a caller does not list any
    pub offered_durations: Vec<u32>,
}

impl PricingState {
    /// Build state from the pricing section of the configuration
    pub fn from_config(config: &PricingConfig) -> Self {
        Self {
            engine: PricingEngine::new(PricingPolicy::from(config)),
            offered_durations: config.offered_durations.clone(),
        }
    }
}

impl Default for PricingState {
    fn default() -> Self {
        Self {
            engine: PricingEngine::default(),
            offered_durations: DEFAULT_OFFERED_DURATIONS.to_vec(),
        }
    }
}
