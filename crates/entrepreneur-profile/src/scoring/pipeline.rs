use serde::{Deserialize, Serialize};

use super::additive::calculate_score_with_neutral;
use super::category::Category;
use super::config::ScoringConfig;
use super::level::{classify_level, Level};
use super::resolver::{resolve_type, VoteBreakdown};
use crate::answers::AnswerMap;

/// Complete outcome of one scoring run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringResult {
    pub risk_score: i32,
    pub reward_score: i32,
    pub risk_level: Level,
    pub reward_level: Level,
    pub category_type: Category,
    pub vote_breakdown: VoteBreakdown,
}

/// Score an answer map against a configuration snapshot.
///
/// Total over all inputs: partial or malformed answers are scored with the
/// defaults of each stage instead of being rejected.
pub fn run_scoring_engine(answers: &AnswerMap, config: &ScoringConfig) -> ScoringResult {
    let risk_score =
        calculate_score_with_neutral(answers, &config.risk_questions, config.neutral_points);
    let reward_score =
        calculate_score_with_neutral(answers, &config.reward_questions, config.neutral_points);
    let resolution = resolve_type(answers, &config.category_questions, &config.tie_breaker);

    ScoringResult {
        risk_score,
        reward_score,
        risk_level: classify_level(risk_score, &config.risk_thresholds),
        reward_level: classify_level(reward_score, &config.reward_thresholds),
        category_type: resolution.category,
        vote_breakdown: resolution.vote_breakdown,
    }
}

/// Stateless scorer bound to one configuration snapshot.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, answers: &AnswerMap) -> ScoringResult {
        run_scoring_engine(answers, &self.config)
    }
}
