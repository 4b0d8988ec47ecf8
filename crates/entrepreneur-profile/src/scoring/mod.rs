//! Config-driven scoring of assessment answers.
//!
//! Two additive axes (risk appetite, reward drive) are summed from per-question
//! point maps and banded into levels; a battery of categorical questions votes
//! for one of four archetypes with a deterministic tie-break. Every function in
//! this module is pure and total.

mod additive;
mod category;
mod config;
mod level;
mod pipeline;
mod reference;
mod resolver;

pub use additive::{calculate_score, calculate_score_with_neutral};
pub use category::Category;
pub use config::{
    AdditiveQuestion, CategoryQuestion, ConfigIssue, QuestionKind, ScoringConfig,
    ThresholdConfig, TieBreakerQuestion, NEUTRAL_POINTS,
};
pub use level::{classify_level, Level};
pub use pipeline::{run_scoring_engine, ScoringEngine, ScoringResult};
pub use resolver::{resolve_type, TypeResolution, VoteBreakdown};
