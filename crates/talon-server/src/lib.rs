//! Talon HTTP gateway library.
//!
//! Thin Axum layer over [`talon::MatchEngine`]: routes, request/response
//! marshaling, CORS, and per-session conversation bookkeeping. All matching
//! logic lives in the core crate.

pub mod gateway;
