//! Local deterministic fallback: keyword classification plus canned replies.

pub mod catalog;
pub mod responder;
pub mod rules;

pub use catalog::{FallbackCatalog, COMPANY_NAME, CONTACT_EMAIL};
pub use responder::LocalResponder;
pub use rules::{classify, default_rules, KeywordRule, Topic};
