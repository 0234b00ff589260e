//! Candidate questionnaire intake: rule-based normalization, scoring, tagging and
//! validation of free-text questionnaire answers, served over HTTP.

pub mod candidate;
pub mod config;
pub mod errors;
pub mod models;
pub mod normalization;
pub mod routes;
pub mod state;

pub use candidate::{process, ParsedRecord};
pub use models::RawQuestionnaire;
