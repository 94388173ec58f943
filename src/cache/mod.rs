pub mod memo;
pub mod rate_limit;

pub use memo::SuggestionCache;
pub use rate_limit::RateLimiter;
