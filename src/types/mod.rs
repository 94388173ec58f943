pub mod identifiers;
pub mod suggestion;

pub use identifiers::{CatalogVersion, TripName, TripNameError};
pub use suggestion::{
    BudgetTier, PricedTrip, SelectionMetadata, SuggestionError, SuggestionRequest,
    SuggestionResult, UserInput,
};
