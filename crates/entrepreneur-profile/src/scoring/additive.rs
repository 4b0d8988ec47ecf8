use tracing::debug;

use super::config::{AdditiveQuestion, NEUTRAL_POINTS};
use crate::answers::AnswerMap;

/// Sum the point contributions of `questions` using the reference neutral default.
pub fn calculate_score(answers: &AnswerMap, questions: &[AdditiveQuestion]) -> i32 {
    calculate_score_with_neutral(answers, questions, NEUTRAL_POINTS)
}

/// Sum the point contributions of `questions`.
///
/// Every question contributes exactly once: its mapped points when the answer's
/// option key is in the point map, `neutral` when the answer is missing or unmapped.
/// Totals outside the `i32` range saturate at its bounds.
pub fn calculate_score_with_neutral(
    answers: &AnswerMap,
    questions: &[AdditiveQuestion],
    neutral: i32,
) -> i32 {
    let total = questions
        .iter()
        .map(|question| i64::from(question_points(answers, question, neutral)))
        .fold(0_i64, i64::saturating_add);
    saturate(total)
}

fn saturate(total: i64) -> i32 {
    i32::try_from(total).unwrap_or(if total < 0 { i32::MIN } else { i32::MAX })
}

fn question_points(answers: &AnswerMap, question: &AdditiveQuestion, neutral: i32) -> i32 {
    let Some(answer) = answers.get(&question.reference) else {
        debug!(question = %question.reference, "unanswered question scored as neutral");
        return neutral;
    };

    let key = answer.as_key();
    match question.point_map.get(key.as_ref()) {
        Some(points) => *points,
        None => {
            debug!(
                question = %question.reference,
                answer = %key,
                "answer missing from point map, scored as neutral"
            );
            neutral
        }
    }
}
