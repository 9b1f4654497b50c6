//! Questionnaire scoring for hiring positions: per-answer scoring strategies, position-specific
//! point overrides, application totals and breakdowns, candidate rankings, and question
//! performance analysis with optional external enrichment.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
