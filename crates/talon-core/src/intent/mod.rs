//! Query intent classification.
//!
//! Free-text requirements are classified into a fixed set of categorical
//! fields that condition response synthesis. Classification is best-effort:
//! any provider or parse failure degrades to a complete set of documented
//! defaults, never an error.

mod analyzer;
mod model;


pub use analyzer::IntentAnalyzer;
pub use model::{
    CompanyCulture, ExperienceLevel, LocationPreference, QueryIntent, RoleCategory, Urgency,
    WorkArrangement,
};
