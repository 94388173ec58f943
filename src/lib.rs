//! Deterministic budget-based trip pricing and suggestion engine.
//!
//! `trip-budget-core` prices trip templates (currency conversion, flight and
//! hotel discounts, a 5% contingency buffer) and selects at most three
//! suggestions for a total budget and traveler count. All operations are
//! pure: identical inputs always produce identical outputs, and every failure
//! is reported in the result's `error_message` rather than returned as `Err`.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod pricing;
pub mod selection;
pub mod types;

pub use catalog::{Catalog, Category, CostTemplate, DiscountOffer, TripTemplate};
pub use config::{PlannerConfig, PricingConfig, SelectionPolicy, USD_TO_BDT};
pub use pricing::{per_person_cost, price, CostBreakdown};
pub use selection::SuggestionSelector;
pub use types::{PricedTrip, SuggestionError, SuggestionResult};

/// Generate suggestions with the default policy for a catalog priced in the
/// target currency.
pub fn generate_suggestions(
    total_budget: impl Into<types::UserInput>,
    traveler_count: impl Into<types::UserInput>,
    catalog: &[TripTemplate],
) -> SuggestionResult {
    SuggestionSelector::default().generate(total_budget, traveler_count, catalog)
}
