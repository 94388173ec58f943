pub mod catalog;
pub mod generator;
pub mod reference;
pub mod template;

pub use catalog::{screen, Catalog, CatalogError, Screened};
pub use generator::{parse_payload, parse_reply, GeneratorError};
pub use reference::reference_catalog;
pub use template::{Category, CostTemplate, DiscountOffer, TripTemplate};
