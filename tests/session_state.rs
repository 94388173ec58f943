use chrono::{Duration, TimeZone, Utc};
use trip_budget_core::cache::{RateLimiter, SuggestionCache};
use trip_budget_core::catalog::{reference_catalog, Catalog};
use trip_budget_core::config::{PlannerConfig, PricingConfig, SelectionPolicy};
use trip_budget_core::selection::SuggestionSelector;
use trip_budget_core::types::SuggestionError;

fn usd_selector() -> SuggestionSelector<trip_budget_core::pricing::ContingencyPricing> {
    SuggestionSelector::from_config(&PlannerConfig {
        pricing: PricingConfig::usd(),
        policy: SelectionPolicy::v0(),
    })
}

#[test]
fn cache_returns_identical_result_for_identical_inputs() {
    let catalog = reference_catalog().unwrap();
    let selector = usd_selector();
    let mut cache = SuggestionCache::new();

    let first = cache.get_or_generate(&selector, &catalog, 500_000, 2);
    // Same coerced inputs, different spelling
    let second = cache.get_or_generate(&selector, &catalog, " 500000 ", "2");

    assert_eq!(first, second);
    assert_eq!(first, selector.generate(500_000, 2, catalog.templates()));
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);
}

#[test]
fn cache_separates_catalog_versions() {
    let reference = reference_catalog().unwrap();
    let mut trimmed = reference.templates().to_vec();
    trimmed.truncate(2);
    let trimmed = Catalog::from_templates(trimmed).unwrap();

    let selector = usd_selector();
    let mut cache = SuggestionCache::new();

    let full = cache.get_or_generate(&selector, &reference, 40_000, 2);
    let partial = cache.get_or_generate(&selector, &trimmed, 40_000, 2);

    assert_eq!(full.suggestions.len(), 3);
    assert_eq!(partial.error, Some(SuggestionError::PartialResult { found: 2 }));
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.hits(), 0);
}

#[test]
fn cache_skips_invalid_inputs() {
    let catalog = reference_catalog().unwrap();
    let selector = usd_selector();
    let mut cache = SuggestionCache::new();

    let result = cache.get_or_generate(&selector, &catalog, "", 2);

    assert_eq!(result.error, Some(SuggestionError::InvalidInput));
    assert!(cache.is_empty());
    assert_eq!(cache.misses(), 0);

    cache.get_or_generate(&selector, &catalog, 40_000, 2);
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn separate_sessions_do_not_share_state() {
    let catalog = reference_catalog().unwrap();
    let selector = usd_selector();

    let mut session_a = SuggestionCache::new();
    let session_b = SuggestionCache::new();

    session_a.get_or_generate(&selector, &catalog, 40_000, 2);

    assert_eq!(session_a.len(), 1);
    assert!(session_b.is_empty());
}

#[test]
fn rate_limiter_spaces_calls_per_api() {
    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let mut limiter = RateLimiter::default();

    assert!(limiter.check("generator", start));
    assert!(!limiter.check("generator", start + Duration::milliseconds(999)));
    // Other APIs are tracked independently
    assert!(limiter.check("translator", start + Duration::milliseconds(10)));
    assert!(limiter.check("generator", start + Duration::milliseconds(1_000)));

    assert_eq!(
        limiter.last_call("generator"),
        Some(start + Duration::milliseconds(1_000))
    );
    assert_eq!(limiter.last_call("unknown"), None);
}

#[test]
fn rate_limiters_are_isolated_instances() {
    let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let mut first = RateLimiter::new(Duration::milliseconds(5_000));
    let mut second = RateLimiter::new(Duration::milliseconds(5_000));

    assert!(first.check("generator", now));
    assert!(second.check("generator", now));
    assert!(!first.check("generator", now + Duration::milliseconds(4_999)));
}
