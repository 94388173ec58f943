use serde::{Deserialize, Serialize};

use crate::catalog::TripTemplate;
use crate::pricing::CostBreakdown;

/// A budget or traveler count as entered by the user.
///
/// Coercion rules:
/// - Text is trimmed, then parsed as an integer or a decimal
/// - Decimals truncate toward zero
/// - Empty, non-numeric, non-finite and non-positive values are invalid
#[derive(Debug, Clone, PartialEq)]
pub enum UserInput {
    Text(String),
    Number(f64),
}

impl UserInput {
    pub fn coerce(&self) -> Option<u64> {
        let value = match self {
            UserInput::Text(raw) => {
                let trimmed = raw.trim();
                if let Ok(whole) = trimmed.parse::<u64>() {
                    return (whole > 0).then_some(whole);
                }
                trimmed.parse::<f64>().ok()?
            }
            UserInput::Number(value) => *value,
        };

        if !value.is_finite() {
            return None;
        }
        let truncated = value.trunc();
        if truncated < 1.0 || truncated > u64::MAX as f64 {
            return None;
        }
        Some(truncated as u64)
    }
}

impl From<&str> for UserInput {
    fn from(value: &str) -> Self {
        UserInput::Text(value.to_string())
    }
}

impl From<String> for UserInput {
    fn from(value: String) -> Self {
        UserInput::Text(value)
    }
}

impl From<f64> for UserInput {
    fn from(value: f64) -> Self {
        UserInput::Number(value)
    }
}

macro_rules! user_input_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for UserInput {
                fn from(value: $ty) -> Self {
                    UserInput::Number(value as f64)
                }
            }
        )*
    };
}

user_input_from_int!(i32, i64, u32, u64, usize);

/// Validated scalar inputs of one "generate" action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionRequest {
    pub total_budget: u64,
    pub traveler_count: u64,
}

impl SuggestionRequest {
    pub fn parse(
        total_budget: impl Into<UserInput>,
        traveler_count: impl Into<UserInput>,
    ) -> Result<Self, SuggestionError> {
        let total_budget = total_budget.into().coerce();
        let traveler_count = traveler_count.into().coerce();

        match (total_budget, traveler_count) {
            (Some(total_budget), Some(traveler_count)) => Ok(Self {
                total_budget,
                traveler_count,
            }),
            _ => Err(SuggestionError::InvalidInput),
        }
    }
}

/// Which category rule applied to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BudgetTier {
    /// International only, with a single Domestic top-up.
    High,
    /// Domestic and Day Tour only.
    Low,
    /// Everything affordable, International preferred.
    Mid,
}

impl BudgetTier {
    fn exhausted_message(self) -> &'static str {
        match self {
            BudgetTier::High => {
                "no International trips available for this budget; try increasing the budget"
            }
            BudgetTier::Low => {
                "no Domestic or Day Tour options available for this budget; try increasing the budget"
            }
            BudgetTier::Mid => "no trips available for this budget; try increasing the budget",
        }
    }
}

/// A catalog entry with its computed prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricedTrip {
    #[serde(flatten)]
    pub template: TripTemplate,
    pub breakdown: CostBreakdown,
    pub per_person_cost: f64,
    pub group_cost: f64,
}

/// Counters describing how the suggestions were reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionMetadata {
    pub total_budget: u64,
    pub traveler_count: u64,
    pub tier: Option<BudgetTier>,

    pub candidates_considered: usize,
    pub candidates_dropped: usize,
    pub excluded_by_budget: usize,
    pub excluded_by_tier: usize,
    pub selected: usize,
}

impl SelectionMetadata {
    pub fn for_request(request: SuggestionRequest) -> Self {
        Self {
            total_budget: request.total_budget,
            traveler_count: request.traveler_count,
            tier: None,
            candidates_considered: 0,
            candidates_dropped: 0,
            excluded_by_budget: 0,
            excluded_by_tier: 0,
            selected: 0,
        }
    }
}

/// Outcome of one "generate" action. `error_message` is empty on success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionResult {
    pub error_message: String,
    pub suggestions: Vec<PricedTrip>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<SuggestionError>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionMetadata>,
}

impl SuggestionResult {
    pub fn success(suggestions: Vec<PricedTrip>, selection: SelectionMetadata) -> Self {
        Self {
            error_message: String::new(),
            suggestions,
            error: None,
            selection: Some(selection),
        }
    }

    /// Any error, fatal or not. Partial results keep their suggestions.
    pub fn with_error(
        error: SuggestionError,
        suggestions: Vec<PricedTrip>,
        selection: Option<SelectionMetadata>,
    ) -> Self {
        Self {
            error_message: error.to_string(),
            suggestions,
            error: Some(error),
            selection,
        }
    }

    pub fn is_success(&self) -> bool {
        self.error_message.is_empty()
    }
}

/// Every failure is reported through `SuggestionResult`, never returned as `Err`
/// from selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum SuggestionError {
    #[error("invalid input: enter a positive total budget and number of travelers")]
    InvalidInput,

    #[error("budget too low for available options; try increasing the budget or reducing travelers")]
    BudgetTooLow,

    #[error("{}", .tier.exhausted_message())]
    TierExhausted { tier: BudgetTier },

    #[error("only {found} found within budget; try increasing the budget or reducing travelers")]
    PartialResult { found: usize },
}

impl SuggestionError {
    /// Partial results still carry usable suggestions.
    pub fn is_partial(&self) -> bool {
        matches!(self, SuggestionError::PartialResult { .. })
    }
}
