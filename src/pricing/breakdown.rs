use serde::{Deserialize, Serialize};

use crate::catalog::TripTemplate;

/// Share of the post-discount subtotal held back for unexpected expenses.
pub const CONTINGENCY_RATE: f64 = 0.05;

/// Finalized per-person costs in whole target-currency units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostBreakdown {
    pub flight: f64,
    pub hotel: f64,
    pub activities: f64,
    pub transport: f64,
    pub contingency: f64,
    pub total: f64,
    pub savings_flight: f64,
    pub savings_hotel: f64,
}

/// Unrounded components after conversion and discounts.
#[derive(Debug, Clone, Copy)]
struct Components {
    flight: f64,
    hotel: f64,
    activities: f64,
    transport: f64,
    flight_before_discount: f64,
    hotel_before_discount: f64,
}

impl Components {
    fn of(template: &TripTemplate, currency_rate: f64) -> Self {
        let cost = &template.cost_template;
        let rate = non_negative(currency_rate);

        let flight = non_negative(cost.flight) * rate;
        let hotel = non_negative(cost.hotel_per_night) * rate * f64::from(template.nights);
        let activities = non_negative(cost.activities) * rate;
        let transport = non_negative(cost.transport) * rate;

        let (flight_pct, hotel_pct) = template
            .discount_offer
            .as_ref()
            .map(|offer| {
                (
                    clamp_pct(offer.flight_discount_pct),
                    clamp_pct(offer.hotel_discount_pct),
                )
            })
            .unwrap_or((0.0, 0.0));

        Components {
            flight: apply_discount(flight, flight_pct),
            hotel: apply_discount(hotel, hotel_pct),
            activities,
            transport,
            flight_before_discount: flight,
            hotel_before_discount: hotel,
        }
    }

    fn subtotal(&self) -> f64 {
        self.flight + self.hotel + self.activities + self.transport
    }

    fn contingency(&self) -> f64 {
        self.subtotal() * CONTINGENCY_RATE
    }

    fn total(&self) -> f64 {
        self.subtotal() + self.contingency()
    }
}

fn apply_discount(base: f64, pct: f64) -> f64 {
    if pct > 0.0 && base > 0.0 {
        base * (1.0 - pct / 100.0)
    } else {
        base
    }
}

// Negative and non-finite inputs count as zero.
fn non_negative(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

fn clamp_pct(pct: f64) -> f64 {
    if pct.is_finite() {
        pct.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// Round to whole units, half-up. Inputs are never negative here, so
/// `f64::round` (half away from zero) is half-up.
fn round_unit(value: f64) -> f64 {
    value.round()
}

/// Price one template. `total` is rounded once from the unrounded sum,
/// never summed from rounded parts.
pub fn price(template: &TripTemplate, currency_rate: f64) -> CostBreakdown {
    let parts = Components::of(template, currency_rate);

    let flight = round_unit(parts.flight);
    let hotel = round_unit(parts.hotel);

    CostBreakdown {
        flight,
        hotel,
        activities: round_unit(parts.activities),
        transport: round_unit(parts.transport),
        contingency: round_unit(parts.contingency()),
        total: round_unit(parts.total()),
        savings_flight: round_unit(parts.flight_before_discount) - flight,
        savings_hotel: round_unit(parts.hotel_before_discount) - hotel,
    }
}

/// Per-person total without building the breakdown. Always equals
/// `price(template, currency_rate).total`.
pub fn per_person_cost(template: &TripTemplate, currency_rate: f64) -> f64 {
    round_unit(Components::of(template, currency_rate).total())
}
