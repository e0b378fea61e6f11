pub mod role_matcher;
pub mod suggestions;

pub use role_matcher::{KeywordRoleMatcher, MatchResult, RoleMatcher};
pub use suggestions::generate_suggestions;
