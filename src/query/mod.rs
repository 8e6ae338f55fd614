pub mod executor;
pub mod pattern;

pub use executor::QueryExecutor;
pub use pattern::PatternCache;
