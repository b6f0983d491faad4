//! # Quickmatch
//!
//! Quickmatch is the search core of a desktop trading assistant. It filters
//! and ranks in-memory lists against a live query string, and models the
//! declarative filter/sort expressions the application serializes and hands
//! to its native backend.
//!
//! ## Features
//!
//! - Fuzzy matching with exact, substring and subsequence scoring
//! - Multi-token AND queries with per-keystroke friendly cost
//! - Match span reporting for result highlighting
//! - Validated, serializable filter expressions and sort specifications
//!
//! ## Example
//!
//! ```rust
//! use quickmatch::{fuzzy_search, FuzzySearchOptions};
//!
//! let items = vec!["Apple", "Grape", "Pineapple"];
//! let options = FuzzySearchOptions::new().with_sort_by_score(true);
//!
//! let results = fuzzy_search(&items, "pp", &options).unwrap();
//! for result in &results {
//!     println!("Found: {} (score: {})", result.item, result.score);
//! }
//! assert_eq!(*results[0].item, "Apple");
//! ```

mod candidate;
mod error;
mod filter;
mod matcher;
mod options;
mod search;
mod sorting;

// Re-export public API
pub use candidate::Candidate;
pub use error::{QuickMatchError, Result};
pub use matcher::{MatchSpans, Span, EXACT_SCORE};
pub use options::{FuzzySearchOptions, TokenSplitter};
pub use search::{fuzzy_search, FuzzySearchResult};

// Re-export filter expression API
pub use filter::{
    FilterOperator,
    FilterValue,
    ParameterType,
    SearchExpression,
    SearchFilter,
    SearchOrParameter,
    SearchParameter,
};
pub use sorting::{effective_sort, SortDirection, SortingField};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
