pub mod intent;
pub mod patterns;
pub mod predicate;
pub mod resolver;

pub use intent::{Gender, IntentExtractor, SearchIntent};
pub use patterns::{COLOR_KEYWORDS, FILLER_WORDS, GENDER_KEYWORDS};
pub use predicate::{ProductRecord, QueryPredicate, build_predicate};
pub use resolver::{CategoryResolver, MatchTier, Resolution};
