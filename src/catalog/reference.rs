use crate::catalog::catalog::{Catalog, CatalogError};

/// Bundled catalog. Costs are in USD; price it with [`crate::config::USD_TO_BDT`].
const REFERENCE_CATALOG_JSON: &str = include_str!("../../data/reference_catalog.json");

pub fn reference_catalog() -> Result<Catalog, CatalogError> {
    Catalog::from_json_str(REFERENCE_CATALOG_JSON)
}
