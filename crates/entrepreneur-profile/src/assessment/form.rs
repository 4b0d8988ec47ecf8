//! Public layout of the assessment form.
//!
//! Built from the stored scoring configuration so the hosted form always
//! renders the live battery. Point maps and category tables stay server side.

use std::collections::BTreeMap;

use serde::Serialize;

use super::store::StoredScoringConfig;
use crate::scoring::{AdditiveQuestion, CategoryQuestion, QuestionKind, TieBreakerQuestion};

const ABOUT_YOU: [(&str, &str); 2] = [
    ("user_name", "What is your first and last name?"),
    ("user_email", "What is your email address?"),
];

const DRIVER_OPTIONS: [(&str, &str); 7] = [
    ("Boss", "Be my own boss"),
    ("Control", "Control my time & schedule"),
    ("Passion", "Turn passion into income"),
    ("Money", "Earn more money"),
    ("Solve", "Solve a problem"),
    ("Impact", "Have a positive social impact"),
    ("Legacy", "Build a legacy"),
];

const AREA_OPTIONS: [(&str, &str); 11] = [
    ("Arts", "Arts & Culture (design, restoration, events, supplies)"),
    ("Consulting", "Consulting (accounting, law, business, personal)"),
    ("Digital", "Digital Services (graphic design, coding, website)"),
    ("Education", "Education (teaching, tutoring, test prep)"),
    ("Hospitality", "Food & Hospitality (restaurant, hotel, travel & leisure)"),
    ("Health", "Health (caregiving, personal training, medical)"),
    ("Personal", "Personal & Home (landscaping, pet care, salon)"),
    ("Retail", "Retail (clothes, ecommerce, physical & digital goods)"),
    ("Social", "Social (environmental, political, activism)"),
    ("Tech", "Technology (IT, software, SaaS, AI)"),
    ("Trades", "Trades (plumbing, HVAC, construction)"),
];

const STRATEGY_OPTIONS: [(&str, &str); 4] = [
    (
        "Creator",
        "Creator: Starting from scratch (new independent business you design, name, and build yourself).",
    ),
    (
        "Consolidator",
        "Consolidator: Buying an existing business (acquire operations, customers, and systems already in place).",
    ),
    (
        "Franchisee",
        "Franchisee: Buying into a franchise (operate under an established brand and playbook for fees/royalties).",
    ),
    (
        "Contractor",
        "Contractor: Starting as a contractor/freelancer/consultant (sell your skills, maybe formalize into a firm later).",
    ),
];

/// Where a question's answer goes once submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionSource {
    Risk,
    Reward,
    Category,
    TieBreaker,
    /// Collected for contact details or report selections, never scored.
    FormOnly,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormOption {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormQuestion {
    pub reference: String,
    pub source: QuestionSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<QuestionKind>,
    pub text: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FormOption>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FormSection {
    pub key: &'static str,
    pub title: &'static str,
    pub questions: Vec<FormQuestion>,
}

/// Sections in the order the hosted form presents them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessmentForm {
    /// Version of the scoring configuration the layout was built from.
    pub version: u32,
    pub sections: Vec<FormSection>,
}

impl AssessmentForm {
    pub fn from_scoring(stored: &StoredScoringConfig) -> Self {
        let config = &stored.config;

        let mut personality: Vec<&CategoryQuestion> = config.category_questions.iter().collect();
        personality.sort_by_key(|question| question.order);
        let mut personality: Vec<FormQuestion> =
            personality.into_iter().map(category_question).collect();
        personality.push(tie_breaker_question(&config.tie_breaker));

        let goals = vec![
            selection_question(
                "select_driver",
                "What is driving you to think about becoming an entrepreneur?",
                &DRIVER_OPTIONS,
            ),
            selection_question(
                "select_aoi1",
                "Regardless of what you've done in the past, which ONE field interests you the most when it comes to entrepreneurship?",
                &AREA_OPTIONS,
            ),
            selection_question(
                "select_aoi2",
                "What is your SECOND choice area of interest for entrepreneurship?",
                &AREA_OPTIONS,
            ),
            selection_question(
                "select_strategy",
                "Which business path sounds most like you?",
                &STRATEGY_OPTIONS,
            ),
        ];

        Self {
            version: stored.version,
            sections: vec![
                FormSection {
                    key: "about_you",
                    title: "About you",
                    questions: ABOUT_YOU
                        .iter()
                        .map(|(reference, text)| selection_question(reference, text, &[]))
                        .collect(),
                },
                FormSection {
                    key: "risk",
                    title: "Risk",
                    questions: additive_questions(&config.risk_questions, QuestionSource::Risk),
                },
                FormSection {
                    key: "reward",
                    title: "Reward",
                    questions: additive_questions(
                        &config.reward_questions,
                        QuestionSource::Reward,
                    ),
                },
                FormSection {
                    key: "personality",
                    title: "Personality",
                    questions: personality,
                },
                FormSection {
                    key: "goals",
                    title: "Goals",
                    questions: goals,
                },
            ],
        }
    }

    pub fn question(&self, reference: &str) -> Option<&FormQuestion> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
            .find(|question| question.reference == reference)
    }
}

fn additive_questions(questions: &[AdditiveQuestion], source: QuestionSource) -> Vec<FormQuestion> {
    let mut ordered: Vec<&AdditiveQuestion> = questions.iter().collect();
    ordered.sort_by_key(|question| question.order);
    ordered
        .into_iter()
        .map(|question| FormQuestion {
            reference: question.reference.clone(),
            source,
            kind: Some(question.kind),
            text: question.text.clone(),
            options: labelled(question.point_map.keys(), &question.option_labels),
        })
        .collect()
}

fn category_question(question: &CategoryQuestion) -> FormQuestion {
    FormQuestion {
        reference: question.reference.clone(),
        source: QuestionSource::Category,
        kind: None,
        text: question.text.clone(),
        options: labelled(question.option_to_category.keys(), &question.option_labels),
    }
}

fn tie_breaker_question(question: &TieBreakerQuestion) -> FormQuestion {
    FormQuestion {
        reference: question.reference.clone(),
        source: QuestionSource::TieBreaker,
        kind: None,
        text: question.text.clone(),
        options: labelled(question.option_to_category.keys(), &question.option_labels),
    }
}

fn selection_question(reference: &str, text: &str, options: &[(&str, &str)]) -> FormQuestion {
    FormQuestion {
        reference: reference.to_string(),
        source: QuestionSource::FormOnly,
        kind: None,
        text: text.to_string(),
        options: options
            .iter()
            .map(|(key, label)| FormOption {
                key: key.to_string(),
                label: Some(label.to_string()),
            })
            .collect(),
    }
}

fn labelled<'a>(
    keys: impl Iterator<Item = &'a String>,
    labels: &BTreeMap<String, String>,
) -> Vec<FormOption> {
    keys.map(|key| FormOption {
        key: key.clone(),
        label: labels.get(key).cloned(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::ScoringConfig;
    use chrono::Utc;

    fn reference_form() -> AssessmentForm {
        AssessmentForm::from_scoring(&StoredScoringConfig {
            version: 4,
            updated_at: Utc::now(),
            config: ScoringConfig::reference(),
        })
    }

    #[test]
    fn sections_follow_form_order() {
        let form = reference_form();
        let keys: Vec<_> = form.sections.iter().map(|section| section.key).collect();

        assert_eq!(form.version, 4);
        assert_eq!(
            keys,
            ["about_you", "risk", "reward", "personality", "goals"]
        );
        assert_eq!(form.sections[1].questions.len(), 10);
        assert_eq!(form.sections[3].questions.len(), 11);
        assert_eq!(
            form.sections[3].questions.last().map(|q| q.source),
            Some(QuestionSource::TieBreaker)
        );
    }

    #[test]
    fn additive_questions_expose_labels_but_not_points() {
        let form = reference_form();
        let question = form.question("risk_q6").expect("likert question present");

        assert_eq!(question.source, QuestionSource::Risk);
        assert_eq!(question.kind, Some(QuestionKind::Likert));
        let keys: Vec<_> = question.options.iter().map(|option| option.key.as_str()).collect();
        assert_eq!(keys, ["1", "2", "3", "4", "5"]);
        assert_eq!(
            question.options[4].label.as_deref(),
            Some("Exactly like me")
        );

        let json = serde_json::to_value(&form).expect("form serializes");
        let text = json.to_string();
        assert!(!text.contains("point_map"));
        assert!(!text.contains("option_to_category"));
        assert!(!text.contains("letter_order"));
    }

    #[test]
    fn goals_carry_fixed_selection_options() {
        let form = reference_form();

        let driver = form.question("select_driver").expect("driver question");
        assert_eq!(driver.source, QuestionSource::FormOnly);
        assert_eq!(driver.options.len(), 7);
        assert_eq!(driver.options[0].key, "Boss");

        let second_area = form.question("select_aoi2").expect("second area question");
        assert_eq!(second_area.options.len(), 11);
        assert_eq!(
            form.question("select_strategy").map(|q| q.options.len()),
            Some(4)
        );
        assert!(form
            .question("user_email")
            .is_some_and(|question| question.options.is_empty()));
    }
}
