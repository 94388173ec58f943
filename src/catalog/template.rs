use serde::{Deserialize, Serialize};

use crate::types::identifiers::TripName;

/// Trip category. Drives the budget-tier policy and the ranking priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    International,
    Domestic,
    #[serde(alias = "Day Tour", alias = "Day Trip")]
    DayTour,
}

impl Category {
    /// Lower sorts first.
    pub fn priority(self) -> u8 {
        match self {
            Category::International => 0,
            Category::Domestic => 1,
            Category::DayTour => 2,
        }
    }
}

/// Raw cost fields, all in one currency (target or foreign).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostTemplate {
    #[serde(default)]
    pub flight: f64,
    #[serde(default)]
    pub transport: f64,
    #[serde(default)]
    pub hotel_per_night: f64,
    #[serde(default)]
    pub activities: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountOffer {
    #[serde(default)]
    pub flight_discount_pct: f64,
    #[serde(default)]
    pub hotel_discount_pct: f64,
    #[serde(default)]
    pub extra_perks: Vec<String>,
}

/// A catalog entry. Immutable once loaded.
///
/// `category` and `name` are required; an entry without them does not decode
/// and is dropped at the catalog boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripTemplate {
    pub category: Category,
    pub name: TripName,
    #[serde(default)]
    pub nights: u32,
    #[serde(default)]
    pub cost_template: CostTemplate,
    #[serde(default)]
    pub stay_description: String,
    #[serde(default)]
    pub highlight_list: Vec<String>,
    #[serde(default)]
    pub itinerary_list: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_offer: Option<DiscountOffer>,
}

impl TripTemplate {
    /// Minimal template with empty descriptive fields.
    pub fn new(category: Category, name: TripName, nights: u32, cost_template: CostTemplate) -> Self {
        Self {
            category,
            name,
            nights,
            cost_template,
            stay_description: String::new(),
            highlight_list: Vec::new(),
            itinerary_list: Vec::new(),
            discount_offer: None,
        }
    }

    pub fn with_discount(mut self, offer: DiscountOffer) -> Self {
        self.discount_offer = Some(offer);
        self
    }
}
