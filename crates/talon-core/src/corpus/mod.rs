//! Candidate corpus (raw profiles, records with embeddings, snapshot).
//!
//! Built once per process lifetime, read many times. Every record in a loaded
//! corpus carries an embedding of the configured dimensionality; profiles
//! whose embedding cannot be obtained are dropped at build time with a logged
//! reason, never stored with a placeholder vector.

pub mod error;
mod model;
mod profile;
mod store;


pub use error::{CorpusError, CorpusResult};
pub use model::{CandidateRecord, CorpusSnapshot};
pub use profile::{RawProfile, load_raw_profiles};
pub use store::Corpus;
