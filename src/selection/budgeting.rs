use crate::selection::Candidate;
use crate::types::PricedTrip;

pub struct QuotaResult {
    pub selected: Vec<PricedTrip>,
    /// Set when fewer than the quota were available.
    pub found_short: Option<usize>,
}

/// Take the first `quota` ranked candidates.
pub fn apply_quota(ranked: Vec<Candidate<'_>>, quota: usize) -> QuotaResult {
    let available = ranked.len();

    let selected: Vec<PricedTrip> = ranked
        .into_iter()
        .take(quota)
        .map(|candidate| PricedTrip {
            template: candidate.template.clone(),
            breakdown: candidate.breakdown,
            per_person_cost: candidate.per_person_cost,
            group_cost: candidate.group_cost,
        })
        .collect();

    QuotaResult {
        selected,
        found_short: (available < quota).then_some(available),
    }
}
