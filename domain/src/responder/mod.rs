//! Question responder: scripted Q&A over an ordered keyword rule table.
//!
//! A question is lowercased and tested against each [`KeywordRule`] in
//! priority order; the first rule whose phrase occurs as a substring wins.
//! When nothing matches, the [`RuleSet`] fallback answer is returned.
//!
//! Matching is plain substring containment, not tokenized: a question about
//! "unsupervised learning" that lacks the phrase "supervised and
//! unsupervised learning" falls through to the fallback.
//!
//! ```
//! use folio_domain::responder::{RuleSet, answers};
//!
//! let rules = RuleSet::standard();
//! assert_eq!(
//!     rules.respond_str("Any tips on PROMPT ENGINEERING and generative AI?"),
//!     answers::PROMPT_ENGINEERING,
//! );
//! assert_eq!(rules.respond_str("What is your favorite color?"), answers::FALLBACK);
//! ```

pub mod answers;
pub mod presets;
pub mod rule;
pub mod rule_set;
pub mod selection;

pub use presets::PresetQuestions;
pub use rule::KeywordRule;
pub use rule_set::{Answer, RuleMatch, RuleSet};
pub use selection::QuestionSelection;
