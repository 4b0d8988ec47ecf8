use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AdaptedSubmission, IntakeError};
use crate::answers::{AnswerMap, AnswerValue};
use crate::assessment::report::{Participant, ReportSelections};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// References the hosted form collects that never reach the scorer.
pub const FORM_ONLY_REFERENCES: [&str; 6] = [
    "user_name",
    "user_email",
    "select_driver",
    "select_aoi1",
    "select_aoi2",
    "select_strategy",
];

/// Body posted by the hosted multi-step form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NativeSubmission {
    #[serde(default, alias = "firstName")]
    pub first_name: String,
    #[serde(default, alias = "lastName")]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub answers: BTreeMap<String, Value>,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Scored answers from raw form values, without the form-only references.
/// Null values are dropped so the question scores as unanswered.
pub fn flatten_answers(answers: &BTreeMap<String, Value>) -> AnswerMap {
    answers
        .iter()
        .filter(|(reference, _)| !FORM_ONLY_REFERENCES.contains(&reference.as_str()))
        .filter_map(|(reference, value)| flatten(value).map(|answer| (reference.clone(), answer)))
        .collect()
}

/// Validate the contact fields and flatten form answers into an answer map.
///
/// Lists (rank order, multi-select) are comma-joined and matrix objects are
/// JSON-encoded so every scored reference holds a single primitive.
pub fn adapt_native(submission: &NativeSubmission) -> Result<AdaptedSubmission, IntakeError> {
    let first_name = submission.first_name.trim();
    let last_name = submission.last_name.trim();
    let email = submission.email.trim();

    let missing: Vec<&'static str> = [
        ("email", email),
        ("first_name", first_name),
        ("last_name", last_name),
    ]
    .into_iter()
    .filter(|(_, value)| value.is_empty())
    .map(|(field, _)| field)
    .collect();
    if !missing.is_empty() {
        return Err(IntakeError::MissingFields(missing));
    }
    if !is_valid_email(email) {
        return Err(IntakeError::InvalidEmail(email.to_string()));
    }

    let answers = flatten_answers(&submission.answers);

    let defaults = ReportSelections::default();
    let selections = ReportSelections {
        driver: selection(&submission.answers, "select_driver", defaults.driver),
        primary_area: selection(&submission.answers, "select_aoi1", defaults.primary_area),
        secondary_area: selection(&submission.answers, "select_aoi2", defaults.secondary_area),
        strategy: selection(&submission.answers, "select_strategy", defaults.strategy),
    };

    Ok(AdaptedSubmission {
        participant: Participant {
            name: format!("{first_name} {last_name}"),
            email: email.to_string(),
        },
        answers,
        selections,
        raw_answers: Value::Object(
            submission
                .answers
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        ),
    })
}

fn flatten(value: &Value) -> Option<AnswerValue> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(AnswerValue::Text(text.clone())),
        Value::Number(number) => number.as_f64().map(AnswerValue::Number),
        Value::Bool(flag) => Some(AnswerValue::from(if *flag { "B" } else { "A" })),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(flatten)
                .map(|item| item.to_string())
                .collect::<Vec<_>>()
                .join(",");
            Some(AnswerValue::Text(joined))
        }
        Value::Object(_) => Some(AnswerValue::Text(value.to_string())),
    }
}

fn selection(answers: &BTreeMap<String, Value>, reference: &str, default: String) -> String {
    answers
        .get(reference)
        .and_then(flatten)
        .map(|answer| answer.to_string())
        .filter(|key| !key.trim().is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission(answers: Value) -> NativeSubmission {
        NativeSubmission {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            answers: serde_json::from_value(answers).expect("answers object"),
        }
    }

    #[test]
    fn flattens_lists_and_matrices() {
        let adapted = adapt_native(&submission(json!({
            "risk_q1": "B",
            "risk_q6": 4,
            "rank_q": ["Money", "Impact", "Legacy"],
            "matrix_q": {"row1": "col2"},
            "skipped": null
        })))
        .expect("valid submission");

        assert_eq!(adapted.answers.get("risk_q1"), Some(&AnswerValue::from("B")));
        assert_eq!(adapted.answers.get("risk_q6"), Some(&AnswerValue::from(4_i64)));
        assert_eq!(
            adapted.answers.get("rank_q"),
            Some(&AnswerValue::from("Money,Impact,Legacy"))
        );
        assert_eq!(
            adapted.answers.get("matrix_q"),
            Some(&AnswerValue::from(r#"{"row1":"col2"}"#))
        );
        assert!(adapted.answers.get("skipped").is_none());
    }

    #[test]
    fn flatten_answers_accepts_booleans_and_drops_nulls() {
        let raw: BTreeMap<String, Value> = serde_json::from_value(json!({
            "risk_q1": true,
            "risk_q2": false,
            "risk_q3": null,
            "select_driver": "Money"
        }))
        .expect("answers object");

        let answers = flatten_answers(&raw);

        assert_eq!(answers.get("risk_q1"), Some(&AnswerValue::from("B")));
        assert_eq!(answers.get("risk_q2"), Some(&AnswerValue::from("A")));
        assert!(answers.get("risk_q3").is_none());
        assert!(answers.get("select_driver").is_none());
        assert_eq!(answers.len(), 2);
    }

    #[test]
    fn form_only_references_become_selections() {
        let adapted = adapt_native(&submission(json!({
            "user_email": "grace@example.com",
            "select_driver": "Money",
            "select_aoi1": "Health",
            "select_strategy": ""
        })))
        .expect("valid submission");

        assert!(adapted.answers.is_empty());
        assert_eq!(adapted.selections.driver, "Money");
        assert_eq!(adapted.selections.primary_area, "Health");
        assert_eq!(adapted.selections.secondary_area, "Digital");
        assert_eq!(adapted.selections.strategy, "Creator");
        assert_eq!(adapted.participant.name, "Grace Hopper");
        assert_eq!(adapted.raw_answers["select_driver"], "Money");
    }

    #[test]
    fn reports_every_missing_contact_field() {
        let mut incomplete = submission(json!({}));
        incomplete.first_name = "  ".to_string();
        incomplete.email.clear();

        let err = adapt_native(&incomplete).expect_err("fields missing");

        match err {
            IntakeError::MissingFields(fields) => assert_eq!(fields, vec!["email", "first_name"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["grace", "grace@example", "gr ace@example.com", "@example.com"] {
            let mut invalid = submission(json!({}));
            invalid.email = email.to_string();
            assert!(
                matches!(adapt_native(&invalid), Err(IntakeError::InvalidEmail(_))),
                "{email}"
            );
        }
    }

    #[test]
    fn accepts_camel_case_contact_fields() {
        let parsed: NativeSubmission = serde_json::from_value(json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@example.com",
            "answers": {"type_q1": "A"}
        }))
        .expect("camelCase body parses");

        assert_eq!(parsed.first_name, "Grace");
        assert!(adapt_native(&parsed).is_ok());
    }
}
