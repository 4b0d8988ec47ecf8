use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{AdaptedSubmission, IntakeError};
use crate::answers::{AnswerMap, AnswerValue};
use crate::assessment::report::{Participant, ReportSelections};

const DRIVER_FLAGS: [(&str, &str); 7] = [
    ("boss", "Boss"),
    ("control", "Control"),
    ("passion", "Passion"),
    ("money", "Money"),
    ("solve", "Solve"),
    ("impact", "Impact"),
    ("legacy", "Legacy"),
];

const AREA_FLAGS: [(&str, &str); 11] = [
    ("arts", "Arts"),
    ("consult", "Consulting"),
    ("digital", "Digital"),
    ("educate", "Education"),
    ("hospitality", "Hospitality"),
    ("health", "Health"),
    ("personal", "Personal"),
    ("retail", "Retail"),
    ("social", "Social"),
    ("tech", "Tech"),
    ("trade", "Trades"),
];

const STRATEGY_FLAGS: [(&str, &str); 4] = [
    ("creator", "Creator"),
    ("consolidator", "Consolidator"),
    ("franchisee", "Franchisee"),
    ("contractor", "Contractor"),
];

/// The `form_response` object of a hosted-form webhook delivery.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormResponse {
    #[serde(default)]
    pub answers: Vec<WebhookAnswer>,
    #[serde(default)]
    pub variables: Vec<WebhookVariable>,
    #[serde(default)]
    pub hidden: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookAnswer {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub boolean: Option<bool>,
    #[serde(default)]
    pub number: Option<f64>,
    #[serde(default)]
    pub choice: Option<WebhookChoice>,
    #[serde(default)]
    pub field: Option<WebhookField>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookChoice {
    #[serde(default)]
    pub label: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookField {
    #[serde(rename = "ref", default)]
    pub reference: Option<String>,
}

/// Calculated variable. Selection flags are numeric and set to 1 when chosen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebhookVariable {
    pub key: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub number: Option<f64>,
    #[serde(default)]
    pub text: Option<String>,
}

impl WebhookVariable {
    fn is_set(&self) -> bool {
        self.kind == "number" && self.number == Some(1.0)
    }
}

/// Translate a raw webhook body into a scored-ready submission.
///
/// The body must carry a `form_response` object. Answers without a field
/// reference are skipped.
pub fn adapt_webhook(payload: &Value) -> Result<AdaptedSubmission, IntakeError> {
    let response = payload
        .get("form_response")
        .filter(|value| value.is_object())
        .ok_or(IntakeError::MissingFormResponse)?;
    let response: FormResponse = serde_json::from_value(response.clone())?;

    let answers: AnswerMap = response
        .answers
        .iter()
        .filter_map(|answer| {
            let reference = answer.field.as_ref()?.reference.as_deref()?;
            translate(answer).map(|value| (reference, value))
        })
        .collect();

    let email = participant_email(&response);
    let name = match email.split_once('@') {
        Some((local, _)) if !local.is_empty() => local.to_string(),
        _ => "Participant".to_string(),
    };

    let raw_answers = serde_json::to_value(&answers)?;

    Ok(AdaptedSubmission {
        participant: Participant { name, email },
        answers,
        selections: selections(&response.variables),
        raw_answers,
    })
}

fn translate(answer: &WebhookAnswer) -> Option<AnswerValue> {
    let choice_label = || {
        answer
            .choice
            .as_ref()
            .and_then(|choice| choice.label.clone())
    };

    match answer.kind.as_deref() {
        Some("choice") => Some(AnswerValue::Text(choice_label().unwrap_or_default())),
        Some("number") => answer.number.map(AnswerValue::Number),
        Some("text") => answer.text.clone().map(AnswerValue::Text),
        Some("email") => answer.email.clone().map(AnswerValue::Text),
        Some("boolean") => answer
            .boolean
            .map(|flag| AnswerValue::from(if flag { "B" } else { "A" })),
        _ => answer
            .text
            .clone()
            .filter(|text| !text.is_empty())
            .or_else(|| choice_label().filter(|label| !label.is_empty()))
            .map(AnswerValue::Text),
    }
}

/// First email answer, then the hidden `email` field, then any text answer
/// that looks like an address. Empty when none is found.
fn participant_email(response: &FormResponse) -> String {
    let from_answers = response
        .answers
        .iter()
        .find(|answer| answer.email.is_some() || answer.kind.as_deref() == Some("email"))
        .and_then(|answer| answer.email.clone())
        .filter(|email| !email.is_empty());
    let from_hidden = || {
        response
            .hidden
            .get("email")
            .and_then(Value::as_str)
            .filter(|email| !email.is_empty())
            .map(str::to_string)
    };
    let from_text = || {
        response
            .answers
            .iter()
            .filter_map(|answer| answer.text.as_deref())
            .find(|text| text.contains('@'))
            .map(str::to_string)
    };

    from_answers
        .or_else(from_hidden)
        .or_else(from_text)
        .unwrap_or_default()
}

fn flagged(variables: &[WebhookVariable], flags: &[(&str, &'static str)]) -> Vec<&'static str> {
    flags
        .iter()
        .filter(|(key, _)| {
            variables
                .iter()
                .find(|variable| variable.key == *key)
                .is_some_and(WebhookVariable::is_set)
        })
        .map(|(_, name)| *name)
        .collect()
}

fn selections(variables: &[WebhookVariable]) -> ReportSelections {
    let driver = flagged(variables, &DRIVER_FLAGS).first().copied().unwrap_or("Money");
    let areas = flagged(variables, &AREA_FLAGS);
    let primary_area = areas.first().copied().unwrap_or("Digital");
    let secondary_area = areas.get(1).copied().unwrap_or(if primary_area == "Consulting" {
        "Digital"
    } else {
        "Consulting"
    });
    let strategy = flagged(variables, &STRATEGY_FLAGS).first().copied().unwrap_or("Creator");

    ReportSelections {
        driver: driver.to_string(),
        primary_area: primary_area.to_string(),
        secondary_area: secondary_area.to_string(),
        strategy: strategy.to_string(),
    }
}
