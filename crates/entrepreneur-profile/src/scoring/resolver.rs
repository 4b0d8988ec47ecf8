use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::category::Category;
use super::config::{CategoryQuestion, TieBreakerQuestion};
use crate::answers::{AnswerMap, AnswerValue};

/// Vote count per archetype. Always holds all four categories.
pub type VoteBreakdown = BTreeMap<Category, u32>;

/// Winning archetype together with the full tally it was chosen from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeResolution {
    pub category: Category,
    pub vote_breakdown: VoteBreakdown,
}

/// How a tied tally was settled. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TieBreak {
    ExactMatch,
    MovedUp,
    Fallback,
}

/// Tally the category battery and pick a single archetype.
///
/// Plurality wins outright. A tie is settled by the tie-breaker answer: a tied
/// category it maps to wins, otherwise the scan moves up the circular order from
/// the tie-breaker's category to the next tied one. Without a usable tie-breaker
/// answer the first tied category in order wins.
pub fn resolve_type(
    answers: &AnswerMap,
    questions: &[CategoryQuestion],
    tie_breaker: &TieBreakerQuestion,
) -> TypeResolution {
    let vote_breakdown = tally_votes(answers, questions);

    let max_votes = vote_breakdown.values().copied().max().unwrap_or(0);
    let tied: Vec<Category> = Category::ORDER
        .into_iter()
        .filter(|category| vote_breakdown.get(category).copied().unwrap_or(0) == max_votes)
        .collect();

    if let [winner] = tied.as_slice() {
        return TypeResolution {
            category: *winner,
            vote_breakdown,
        };
    }

    let (category, rule) = break_tie(&tied, answers, tie_breaker);
    debug!(
        winner = %category,
        ?rule,
        tied = tied.len(),
        "category tie settled"
    );

    TypeResolution {
        category,
        vote_breakdown,
    }
}

fn tally_votes(answers: &AnswerMap, questions: &[CategoryQuestion]) -> VoteBreakdown {
    let mut votes: VoteBreakdown = Category::ORDER.into_iter().map(|c| (c, 0)).collect();

    for question in questions {
        let Some(answer) = answers.get(&question.reference) else {
            continue;
        };
        if let Some(category) = mapped_category(answer, &question.option_to_category) {
            *votes.entry(category).or_insert(0) += 1;
        }
    }

    votes
}

fn break_tie(
    tied: &[Category],
    answers: &AnswerMap,
    tie_breaker: &TieBreakerQuestion,
) -> (Category, TieBreak) {
    let preferred = answers
        .get(&tie_breaker.reference)
        .and_then(|answer| mapped_category(answer, &tie_breaker.option_to_category));

    if let Some(preferred) = preferred {
        if tied.contains(&preferred) {
            return (preferred, TieBreak::ExactMatch);
        }
        if let Some(next) = move_up(preferred, tied) {
            return (next, TieBreak::MovedUp);
        }
    }

    let first = Category::ORDER
        .into_iter()
        .find(|category| tied.contains(category))
        .unwrap_or(Category::Lion);
    (first, TieBreak::Fallback)
}

/// Walk the circular order forward from `from`, returning the first tied category.
fn move_up(from: Category, tied: &[Category]) -> Option<Category> {
    let len = Category::ORDER.len();
    (1..=len)
        .map(|offset| Category::ORDER[(from.position() + offset) % len])
        .find(|candidate| tied.contains(candidate))
}

fn mapped_category(answer: &AnswerValue, table: &BTreeMap<String, String>) -> Option<Category> {
    let key = answer.as_key().trim().to_uppercase();
    table
        .get(&key)
        .and_then(|name| Category::from_name(name))
}
