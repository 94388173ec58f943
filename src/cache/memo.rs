use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::pricing::CostModel;
use crate::selection::SuggestionSelector;
use crate::types::identifiers::CatalogVersion;
use crate::types::{SuggestionRequest, SuggestionResult, UserInput};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CacheKey {
    catalog: CatalogVersion,
    request: SuggestionRequest,
}

/// Per-session memo of suggestion results.
///
/// Keyed by catalog version and coerced inputs. A cache serves one selector;
/// results computed under a different pricing or policy must not share it.
#[derive(Debug, Default)]
pub struct SuggestionCache {
    entries: BTreeMap<CacheKey, SuggestionResult>,
    hits: u64,
    misses: u64,
}

impl SuggestionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_generate<P: CostModel>(
        &mut self,
        selector: &SuggestionSelector<P>,
        catalog: &Catalog,
        total_budget: impl Into<UserInput>,
        traveler_count: impl Into<UserInput>,
    ) -> SuggestionResult {
        let request = match SuggestionRequest::parse(total_budget, traveler_count) {
            Ok(request) => request,
            // Invalid inputs are cheap and never cached
            Err(error) => return SuggestionResult::with_error(error, Vec::new(), None),
        };

        let key = CacheKey {
            catalog: catalog.version().clone(),
            request,
        };

        if let Some(cached) = self.entries.get(&key) {
            self.hits += 1;
            return cached.clone();
        }

        self.misses += 1;
        let result = selector.select(request, catalog.templates());
        self.entries.insert(key, result.clone());
        result
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
