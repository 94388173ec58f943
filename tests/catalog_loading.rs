use std::fs;

use tempfile::tempdir;
use trip_budget_core::catalog::{
    parse_payload, parse_reply, reference_catalog, Catalog, CatalogError, Category, GeneratorError,
};

const MIXED_CATALOG: &str = r#"[
  {
    "category": "Domestic",
    "name": "Cox's Bazar",
    "nights": 3,
    "costTemplate": { "flight": 0, "transport": 25, "hotelPerNight": 35, "activities": 30 },
    "stayDescription": "Beachside hotel",
    "highlightList": ["Beach sunset"],
    "itineraryList": ["Day 1: Arrive"],
    "discountOffer": { "flightDiscountPct": 0, "hotelDiscountPct": 10, "extraPerks": ["HOTEL10"] }
  },
  { "name": "No Category", "nights": 1 },
  { "category": "International", "nights": 2 },
  { "category": "International", "name": "   ", "nights": 2 },
  { "category": "Cruise", "name": "Unknown Category" },
  { "category": "Domestic", "name": "Negative Nights", "nights": -1 },
  { "category": "Day Trip", "name": "Sonargaon" },
  { "category": "Day Tour", "name": "Old Dhaka" },
  { "category": "DayTour", "name": "Panam City" },
  { "category": "Domestic", "name": "cox's bazar", "nights": 1 }
]"#;

#[test]
fn malformed_entries_are_dropped_not_fatal() {
    let catalog = Catalog::from_json_str(MIXED_CATALOG).unwrap();

    let names: Vec<&str> = catalog.templates().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Cox's Bazar", "Sonargaon", "Old Dhaka", "Panam City"]);

    // 5 undecodable + 1 duplicate name
    assert_eq!(catalog.dropped(), 6);
    assert_eq!(catalog.len(), 4);
}

#[test]
fn category_aliases_decode_to_day_tour() {
    let catalog = Catalog::from_json_str(MIXED_CATALOG).unwrap();

    for template in &catalog.templates()[1..] {
        assert_eq!(template.category, Category::DayTour);
        assert_eq!(template.nights, 0);
        assert!(template.discount_offer.is_none());
    }

    let cox = &catalog.templates()[0];
    assert_eq!(cox.cost_template.hotel_per_night, 35.0);
    assert_eq!(cox.discount_offer.as_ref().unwrap().extra_perks, vec!["HOTEL10"]);
    assert_eq!(cox.highlight_list, vec!["Beach sunset"]);
}

#[test]
fn non_array_catalog_is_rejected() {
    let err = Catalog::from_json_str(r#"{"trips": []}"#).unwrap_err();
    assert!(matches!(err, CatalogError::NotAnArray));

    let err = Catalog::from_json_str("not json").unwrap_err();
    assert!(matches!(err, CatalogError::Serialization(_)));
}

#[test]
fn version_depends_only_on_screened_content() {
    let a = Catalog::from_json_str(MIXED_CATALOG).unwrap();
    let b = Catalog::from_json_str(MIXED_CATALOG).unwrap();
    assert_eq!(a.version(), b.version());
    assert!(a.version().as_str().starts_with("sha256:"));
    assert_eq!(a.version().as_str().len(), "sha256:".len() + 64);

    // Rebuilding from the screened templates yields the same version
    let rebuilt = Catalog::from_templates(a.templates().to_vec()).unwrap();
    assert_eq!(rebuilt.version(), a.version());
    assert_eq!(rebuilt.dropped(), 0);

    let mut changed = a.templates().to_vec();
    changed[0].nights = 4;
    let changed = Catalog::from_templates(changed).unwrap();
    assert_ne!(changed.version(), a.version());
}

#[test]
fn catalog_loads_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, MIXED_CATALOG).unwrap();

    let loaded = Catalog::load(&path).unwrap();
    let parsed = Catalog::from_json_str(MIXED_CATALOG).unwrap();
    assert_eq!(loaded.templates(), parsed.templates());
    assert_eq!(loaded.version(), parsed.version());

    let missing = Catalog::load(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(missing, CatalogError::Io { .. }));
}

#[test]
fn reference_catalog_is_complete() {
    let catalog = reference_catalog().unwrap();

    assert_eq!(catalog.len(), 5);
    assert_eq!(catalog.dropped(), 0);

    let categories: Vec<Category> = catalog.templates().iter().map(|t| t.category).collect();
    assert_eq!(
        categories,
        vec![
            Category::Domestic,
            Category::Domestic,
            Category::International,
            Category::International,
            Category::DayTour,
        ]
    );
}

fn envelope(inner: &str) -> String {
    serde_json::json!({ "result": inner }).to_string()
}

#[test]
fn generator_reply_with_trips_key_is_accepted() {
    let inner = r#"
      {"trips": [
        {"category": "International", "name": "Bangkok", "nights": 4,
         "costTemplate": {"flight": 31250, "transport": 5000, "hotelPerNight": 5625, "activities": 8750}},
        {"category": "Domestic", "nights": 2},
        {"category": "Day Tour", "name": "Sonargaon"}
      ]}
    "#;

    let catalog = parse_reply(&envelope(inner)).unwrap();

    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.dropped(), 1);
    assert_eq!(catalog.templates()[0].name.as_str(), "Bangkok");
}

#[test]
fn generator_reply_rejects_undocumented_shapes() {
    // Root array instead of envelope
    let err = parse_reply("[]").unwrap_err();
    assert!(matches!(err, GeneratorError::Envelope(_)));

    // Extra envelope keys
    let err = parse_reply(r#"{"result": "{\"trips\": []}", "status": "ok"}"#).unwrap_err();
    assert!(matches!(err, GeneratorError::Envelope(_)));

    // Non-string result
    let err = parse_reply(r#"{"result": {"trips": []}}"#).unwrap_err();
    assert!(matches!(err, GeneratorError::Envelope(_)));

    // Trips under some other key
    let err = parse_reply(&envelope(r#"{"options": []}"#)).unwrap_err();
    assert!(matches!(err, GeneratorError::Payload(_)));

    // Inner root array
    let err = parse_reply(&envelope(r#"[{"category": "Domestic", "name": "Sylhet"}]"#)).unwrap_err();
    assert!(matches!(err, GeneratorError::Payload(_)));

    let err = parse_reply(&envelope("   ")).unwrap_err();
    assert!(matches!(err, GeneratorError::EmptyResult));
}

#[test]
fn generator_payload_is_trimmed() {
    let catalog = parse_payload("\n  {\"trips\": [{\"category\": \"Domestic\", \"name\": \"Sylhet\"}]}  \n").unwrap();
    assert_eq!(catalog.len(), 1);
}
