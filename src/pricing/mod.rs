pub mod breakdown;

use crate::catalog::TripTemplate;
use crate::config::PricingConfig;
pub use breakdown::{per_person_cost, price, CostBreakdown, CONTINGENCY_RATE};

pub trait CostModel {
    fn price(&self, template: &TripTemplate) -> CostBreakdown;

    /// Used for affordability checks before a full breakdown is needed.
    fn per_person_cost(&self, template: &TripTemplate) -> f64 {
        self.price(template).total
    }
}

/// v0: converted costs, flight/hotel discounts, 5% contingency.
#[derive(Debug, Clone, Default)]
pub struct ContingencyPricing {
    config: PricingConfig,
}

impl ContingencyPricing {
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PricingConfig {
        &self.config
    }
}

impl CostModel for ContingencyPricing {
    fn price(&self, template: &TripTemplate) -> CostBreakdown {
        price(template, self.config.currency_rate)
    }

    fn per_person_cost(&self, template: &TripTemplate) -> f64 {
        per_person_cost(template, self.config.currency_rate)
    }
}
