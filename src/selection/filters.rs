use tracing::debug;

use crate::catalog::Category;
use crate::config::SelectionPolicy;
use crate::selection::Candidate;
use crate::types::{BudgetTier, SuggestionRequest};

pub struct FilterResult<'a> {
    pub eligible: Vec<Candidate<'a>>,
    pub excluded: usize,
}

/// Keep candidates whose group cost fits in the total budget.
pub fn retain_affordable(candidates: Vec<Candidate<'_>>, total_budget: u64) -> FilterResult<'_> {
    let before = candidates.len();
    let budget = total_budget as f64;
    let eligible: Vec<Candidate<'_>> = candidates
        .into_iter()
        .filter(|candidate| candidate.group_cost <= budget)
        .collect();

    FilterResult {
        excluded: before - eligible.len(),
        eligible,
    }
}

pub fn budget_tier(request: SuggestionRequest, policy: &SelectionPolicy) -> BudgetTier {
    if request.total_budget >= policy.high_budget_threshold {
        BudgetTier::High
    } else if request.total_budget
        < policy
            .low_budget_per_traveler
            .saturating_mul(request.traveler_count)
    {
        BudgetTier::Low
    } else {
        BudgetTier::Mid
    }
}

/// Apply the category rule of `tier`.
///
/// High tier keeps International only. When at least one but fewer than
/// `max_suggestions` International candidates remain, the most expensive
/// Domestic candidate (first in catalog order on ties) is admitted as well.
pub fn apply_tier<'a>(
    candidates: Vec<Candidate<'a>>,
    tier: BudgetTier,
    policy: &SelectionPolicy,
) -> FilterResult<'a> {
    let before = candidates.len();

    let eligible = match tier {
        BudgetTier::Mid => candidates,
        BudgetTier::Low => candidates
            .into_iter()
            .filter(|c| matches!(c.template.category, Category::Domestic | Category::DayTour))
            .collect(),
        BudgetTier::High => {
            let (mut international, rest): (Vec<_>, Vec<_>) = candidates
                .into_iter()
                .partition(|c| c.template.category == Category::International);

            if !international.is_empty() && international.len() < policy.max_suggestions {
                let mut fallback: Option<Candidate<'a>> = None;
                for candidate in rest {
                    if candidate.template.category != Category::Domestic {
                        continue;
                    }
                    let better = fallback
                        .as_ref()
                        .map_or(true, |best| candidate.group_cost > best.group_cost);
                    if better {
                        fallback = Some(candidate);
                    }
                }
                if let Some(domestic) = fallback {
                    debug!(name = domestic.template.name.as_str(), "admitting domestic fallback");
                    international.push(domestic);
                }
            }
            international
        }
    };

    FilterResult {
        excluded: before - eligible.len(),
        eligible,
    }
}
