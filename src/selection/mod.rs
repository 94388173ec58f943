pub mod budgeting;
pub mod filters;
pub mod ranking;

use tracing::debug;

use crate::catalog::{screen, Screened, TripTemplate};
use crate::config::{PlannerConfig, SelectionPolicy};
use crate::pricing::{ContingencyPricing, CostBreakdown, CostModel};
use crate::types::{
	SelectionMetadata, SuggestionError, SuggestionRequest, SuggestionResult, UserInput,
};
pub use budgeting::{apply_quota, QuotaResult};
pub use filters::{apply_tier, budget_tier, retain_affordable, FilterResult};
pub use ranking::rank;

/// Internal: a priced catalog entry that has not been selected yet.
/// Borrows the template so nothing is cloned before selection.
#[derive(Debug, Clone)]
pub struct Candidate<'a> {
	pub template: &'a TripTemplate,
	pub breakdown: CostBreakdown,
	pub per_person_cost: f64,
	pub group_cost: f64,
}

pub struct SuggestionSelector<P> {
	pricing: P,
	policy: SelectionPolicy,
}

impl Default for SuggestionSelector<ContingencyPricing> {
	fn default() -> Self {
		Self {
			pricing: ContingencyPricing::default(),
			policy: SelectionPolicy::v0(),
		}
	}
}

impl SuggestionSelector<ContingencyPricing> {
	pub fn from_config(config: &PlannerConfig) -> Self {
		Self::new(ContingencyPricing::new(config.pricing.clone()), config.policy.clone())
	}
}

impl<P> SuggestionSelector<P>
where
	P: CostModel,
{
	pub fn new(pricing: P, policy: SelectionPolicy) -> Self {
		Self { pricing, policy }
	}

	pub fn policy(&self) -> &SelectionPolicy {
		&self.policy
	}

	/// Coerce raw inputs, then select. Invalid inputs short-circuit.
	pub fn generate(
		&self,
		total_budget: impl Into<UserInput>,
		traveler_count: impl Into<UserInput>,
		catalog: &[TripTemplate],
	) -> SuggestionResult {
		match SuggestionRequest::parse(total_budget, traveler_count) {
			Ok(request) => self.select(request, catalog),
			Err(error) => SuggestionResult::with_error(error, Vec::new(), None),
		}
	}

	pub fn select(&self, request: SuggestionRequest, catalog: &[TripTemplate]) -> SuggestionResult {
		let mut metadata = SelectionMetadata::for_request(request);

		// 0. Screening Phase
		let Screened { kept, dropped } = screen(catalog);
		metadata.candidates_considered = kept.len();
		metadata.candidates_dropped = dropped;

		// 1. Pricing Phase
		let travelers = request.traveler_count as f64;
		let candidates: Vec<Candidate> = kept
			.into_iter()
			.map(|template| {
				let per_person_cost = self.pricing.per_person_cost(template);
				Candidate {
					template,
					breakdown: self.pricing.price(template),
					per_person_cost,
					group_cost: per_person_cost * travelers,
				}
			})
			.collect();

		// 2. Affordability Phase
		let affordable = retain_affordable(candidates, request.total_budget);
		metadata.excluded_by_budget = affordable.excluded;
		if affordable.eligible.is_empty() {
			return SuggestionResult::with_error(SuggestionError::BudgetTooLow, Vec::new(), Some(metadata));
		}

		// 3. Tier Phase
		let tier = budget_tier(request, &self.policy);
		metadata.tier = Some(tier);
		let FilterResult { mut eligible, excluded } = apply_tier(affordable.eligible, tier, &self.policy);
		metadata.excluded_by_tier = excluded;
		debug!(?tier, eligible = eligible.len(), excluded, "budget tier applied");
		if eligible.is_empty() {
			return SuggestionResult::with_error(
				SuggestionError::TierExhausted { tier },
				Vec::new(),
				Some(metadata),
			);
		}

		// 4. Ordering Phase
		rank(&mut eligible);

		// 5. Quota Phase
		let QuotaResult { selected, found_short } = apply_quota(eligible, self.policy.max_suggestions);
		metadata.selected = selected.len();

		match found_short {
			Some(found) => SuggestionResult::with_error(
				SuggestionError::PartialResult { found },
				selected,
				Some(metadata),
			),
			None => SuggestionResult::success(selected, metadata),
		}
	}
}
