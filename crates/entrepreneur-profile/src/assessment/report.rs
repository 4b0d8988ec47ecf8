use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::content::{ContentCatalog, ContentSection};
use crate::scoring::{Category, Level, ScoringResult, VoteBreakdown};

/// Who took the assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub email: String,
}

/// Unscored single-select answers that pick report sections directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSelections {
    pub driver: String,
    pub primary_area: String,
    pub secondary_area: String,
    pub strategy: String,
}

impl Default for ReportSelections {
    fn default() -> Self {
        Self {
            driver: "Boss".to_string(),
            primary_area: "Tech".to_string(),
            secondary_area: "Digital".to_string(),
            strategy: "Creator".to_string(),
        }
    }
}

/// Scoring outcome joined with its report copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentReport {
    pub name: String,
    pub email: String,
    pub report_date: NaiveDate,
    pub archetype: Category,
    pub personality: ContentSection,
    pub vote_breakdown: VoteBreakdown,
    pub risk_score: i32,
    pub risk_level: Level,
    pub risk: ContentSection,
    pub reward_score: i32,
    pub reward_level: Level,
    pub reward: ContentSection,
    pub driver: ContentSection,
    pub primary_area: ContentSection,
    pub secondary_area: ContentSection,
    pub strategy: ContentSection,
}

impl AssessmentReport {
    pub fn assemble(
        participant: &Participant,
        result: &ScoringResult,
        selections: &ReportSelections,
        catalog: &ContentCatalog,
        report_date: NaiveDate,
    ) -> Self {
        Self {
            name: participant.name.clone(),
            email: participant.email.clone(),
            report_date,
            archetype: result.category_type,
            personality: ContentSection::resolve(
                &catalog.archetypes,
                result.category_type.name(),
            ),
            vote_breakdown: result.vote_breakdown.clone(),
            risk_score: result.risk_score,
            risk_level: result.risk_level,
            risk: ContentSection::resolve(&catalog.risk_levels, result.risk_level.name()),
            reward_score: result.reward_score,
            reward_level: result.reward_level,
            reward: ContentSection::resolve(&catalog.reward_levels, result.reward_level.name()),
            driver: ContentSection::resolve(&catalog.drivers, &selections.driver),
            primary_area: ContentSection::resolve(&catalog.areas, &selections.primary_area),
            secondary_area: ContentSection::resolve(&catalog.areas, &selections.secondary_area),
            strategy: ContentSection::resolve(&catalog.strategies, &selections.strategy),
        }
    }

    /// One-line digest used in logs and the admin listing.
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            name: self.name.clone(),
            email: self.email.clone(),
            archetype: self.archetype,
            risk_level: self.risk_level,
            reward_level: self.reward_level,
            report_date: self.report_date,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub name: String,
    pub email: String,
    pub archetype: Category,
    pub risk_level: Level,
    pub reward_level: Level,
    pub report_date: NaiveDate,
}
