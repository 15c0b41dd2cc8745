//! Constraint-based candidate suggestion
//!
//! History -> `ConstraintModel` -> filtered pool -> ranked suggestions.
//! Scoring is a positional letter heuristic over consistent words.

mod constraints;
mod engine;
mod filter;
mod scorer;

pub use constraints::{ConstraintModel, build_constraint_model};
pub use engine::{SuggestConfig, Suggester, Suggestions};
pub use filter::{FilterOptions, FilterResult, filter_candidates, filter_with_fallback};
pub use scorer::{ScoreWeights, SuggestionCandidate, rank_candidates, rank_scored, score};
