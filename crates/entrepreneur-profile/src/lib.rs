//! Entrepreneur personality profile: answer scoring, report assembly and the
//! HTTP surface around them.

pub mod answers;
pub mod assessment;
pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
