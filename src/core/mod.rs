// Compatibility engine exports
pub mod codes;
pub mod criteria;
pub mod ranker;
pub mod scoring;
pub mod text;

pub use codes::codes_match;
pub use criteria::{excluded_codes, extract_conditions, required_codes};
pub use ranker::{RankedSuggestions, Ranker};
pub use scoring::score_trial;
pub use text::fuzzy_matches;
