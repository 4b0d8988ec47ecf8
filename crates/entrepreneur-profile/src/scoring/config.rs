use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Contribution used for an unanswered or unmapped additive question.
///
/// Midpoint of the reference 1-5 point scale.
pub const NEUTRAL_POINTS: i32 = 3;

fn default_neutral_points() -> i32 {
    NEUTRAL_POINTS
}

/// Presentation style of an additive question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Two-option A/B choice.
    Binary,
    /// 1-5 agreement scale.
    Likert,
}

/// Question contributing points to the risk or reward axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdditiveQuestion {
    pub order: u16,
    pub reference: String,
    pub text: String,
    pub kind: QuestionKind,
    /// Informational only; reversal is already baked into `point_map`.
    #[serde(default)]
    pub reversed: bool,
    pub point_map: BTreeMap<String, i32>,
    #[serde(default)]
    pub option_labels: BTreeMap<String, String>,
}

/// Question casting one vote for an archetype.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryQuestion {
    pub order: u16,
    pub reference: String,
    pub text: String,
    /// Option key (upper-case letter) to stored category name.
    pub option_to_category: BTreeMap<String, String>,
    /// Display order of the option letters, e.g. `"DCAB"`.
    #[serde(default)]
    pub letter_order: String,
    #[serde(default)]
    pub option_labels: BTreeMap<String, String>,
}

/// Question consulted only when the category battery ends in a tie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieBreakerQuestion {
    pub reference: String,
    pub text: String,
    pub option_to_category: BTreeMap<String, String>,
    #[serde(default)]
    pub option_labels: BTreeMap<String, String>,
}

/// Two inclusive cut points splitting the score line into Low/Medium/High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdConfig {
    pub low_max: i32,
    pub medium_max: i32,
}

/// Immutable snapshot of everything the scoring pipeline reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub risk_questions: Vec<AdditiveQuestion>,
    pub reward_questions: Vec<AdditiveQuestion>,
    pub category_questions: Vec<CategoryQuestion>,
    pub tie_breaker: TieBreakerQuestion,
    pub risk_thresholds: ThresholdConfig,
    pub reward_thresholds: ThresholdConfig,
    #[serde(default = "default_neutral_points")]
    pub neutral_points: i32,
}

/// Problem found while validating a configuration before it is saved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfigIssue {
    pub location: String,
    pub message: String,
}

impl ConfigIssue {
    fn new(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            message: message.into(),
        }
    }
}

impl ScoringConfig {
    /// Check the configuration for mistakes an editor could make.
    ///
    /// The scoring pipeline never calls this; it tolerates every issue listed here.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        check_thresholds("risk_thresholds", &self.risk_thresholds, &mut issues);
        check_thresholds("reward_thresholds", &self.reward_thresholds, &mut issues);

        let mut seen = BTreeSet::new();
        let references = self
            .risk_questions
            .iter()
            .map(|question| question.reference.as_str())
            .chain(
                self.reward_questions
                    .iter()
                    .map(|question| question.reference.as_str()),
            )
            .chain(
                self.category_questions
                    .iter()
                    .map(|question| question.reference.as_str()),
            )
            .chain(std::iter::once(self.tie_breaker.reference.as_str()));
        for reference in references {
            if reference.trim().is_empty() {
                issues.push(ConfigIssue::new("questions", "question reference is empty"));
            } else if !seen.insert(reference) {
                issues.push(ConfigIssue::new(
                    reference,
                    "question reference is used more than once",
                ));
            }
        }

        for question in self.risk_questions.iter().chain(&self.reward_questions) {
            if question.point_map.is_empty() {
                issues.push(ConfigIssue::new(
                    &question.reference,
                    "point map has no options",
                ));
            }
        }
        check_score_range(
            "risk_questions",
            &self.risk_questions,
            self.neutral_points,
            &mut issues,
        );
        check_score_range(
            "reward_questions",
            &self.reward_questions,
            self.neutral_points,
            &mut issues,
        );

        for question in &self.category_questions {
            check_category_table(&question.reference, &question.option_to_category, &mut issues);
        }
        check_category_table(
            &self.tie_breaker.reference,
            &self.tie_breaker.option_to_category,
            &mut issues,
        );

        issues
    }
}

fn check_thresholds(location: &str, thresholds: &ThresholdConfig, issues: &mut Vec<ConfigIssue>) {
    if thresholds.low_max >= thresholds.medium_max {
        issues.push(ConfigIssue::new(
            location,
            format!(
                "low_max ({}) must be below medium_max ({})",
                thresholds.low_max, thresholds.medium_max
            ),
        ));
    }
}

/// Reject batteries whose lowest or highest possible total leaves the `i32` range.
fn check_score_range(
    location: &str,
    questions: &[AdditiveQuestion],
    neutral: i32,
    issues: &mut Vec<ConfigIssue>,
) {
    let neutral = i64::from(neutral);
    let (lowest, highest) = questions.iter().fold((0_i64, 0_i64), |(low, high), question| {
        let points = question.point_map.values().map(|points| i64::from(*points));
        let min = points.clone().min().unwrap_or(neutral).min(neutral);
        let max = points.max().unwrap_or(neutral).max(neutral);
        (low + min, high + max)
    });

    if lowest < i64::from(i32::MIN) || highest > i64::from(i32::MAX) {
        issues.push(ConfigIssue::new(
            location,
            format!("possible scores {lowest}..={highest} exceed the supported range"),
        ));
    }
}

fn check_category_table(
    reference: &str,
    table: &BTreeMap<String, String>,
    issues: &mut Vec<ConfigIssue>,
) {
    if table.is_empty() {
        issues.push(ConfigIssue::new(reference, "option table has no options"));
    }
    for (option, name) in table {
        if Category::from_name(name).is_none() {
            issues.push(ConfigIssue::new(
                reference,
                format!("option {option} maps to unknown category '{name}'"),
            ));
        }
        if option.to_uppercase() != *option {
            issues.push(ConfigIssue::new(
                reference,
                format!("option key '{option}' must be upper-case"),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_config_is_valid() {
        let issues = ScoringConfig::reference().validate();
        assert!(issues.is_empty(), "unexpected issues: {issues:?}");
    }

    #[test]
    fn validation_flags_inverted_thresholds_and_unknown_categories() {
        let mut config = ScoringConfig::reference();
        config.risk_thresholds = ThresholdConfig {
            low_max: 40,
            medium_max: 20,
        };
        config
            .tie_breaker
            .option_to_category
            .insert("E".to_string(), "Wolf".to_string());

        let issues = config.validate();

        assert!(issues
            .iter()
            .any(|issue| issue.location == "risk_thresholds"));
        assert!(issues
            .iter()
            .any(|issue| issue.message.contains("unknown category 'Wolf'")));
    }

    #[test]
    fn validation_flags_point_values_whose_total_overflows() {
        let mut config = ScoringConfig::reference();
        for question in config.risk_questions.iter_mut().take(2) {
            question.point_map.insert("A".to_string(), i32::MAX);
        }

        let issues = config.validate();

        assert!(issues
            .iter()
            .any(|issue| issue.location == "risk_questions"));
        assert!(!issues
            .iter()
            .any(|issue| issue.location == "reward_questions"));
    }

    #[test]
    fn validation_flags_oversized_neutral_points() {
        let mut config = ScoringConfig::reference();
        config.neutral_points = i32::MAX;

        let locations: Vec<String> = config
            .validate()
            .into_iter()
            .map(|issue| issue.location)
            .collect();

        assert!(locations.contains(&"risk_questions".to_string()));
        assert!(locations.contains(&"reward_questions".to_string()));
    }

    #[test]
    fn validation_flags_duplicate_references() {
        let mut config = ScoringConfig::reference();
        let duplicate = config.risk_questions[0].clone();
        config.reward_questions.push(duplicate);

        let issues = config.validate();

        assert!(issues
            .iter()
            .any(|issue| issue.location == "risk_q1" && issue.message.contains("more than once")));
    }

    #[test]
    fn neutral_points_default_when_absent() {
        let mut value = serde_json::to_value(ScoringConfig::reference()).expect("serialize");
        value
            .as_object_mut()
            .expect("object")
            .remove("neutral_points");

        let config: ScoringConfig = serde_json::from_value(value).expect("deserialize");
        assert_eq!(config.neutral_points, NEUTRAL_POINTS);
    }
}
