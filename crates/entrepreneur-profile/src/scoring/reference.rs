use std::collections::BTreeMap;

use super::category::Category;
use super::config::{
    AdditiveQuestion, CategoryQuestion, QuestionKind, ScoringConfig, ThresholdConfig,
    TieBreakerQuestion, NEUTRAL_POINTS,
};

const LIKERT_LABELS: [(&str, &str); 5] = [
    ("1", "Not at all like me"),
    ("2", "A little like me"),
    ("3", "Somewhat like me"),
    ("4", "Usually like me"),
    ("5", "Exactly like me"),
];

impl ScoringConfig {
    /// Seeded configuration shipped with a fresh installation.
    pub fn reference() -> Self {
        Self {
            risk_questions: risk_questions(),
            reward_questions: reward_questions(),
            category_questions: category_questions(),
            tie_breaker: tie_breaker(),
            risk_thresholds: ThresholdConfig {
                low_max: 20,
                medium_max: 39,
            },
            reward_thresholds: ThresholdConfig {
                low_max: 20,
                medium_max: 39,
            },
            neutral_points: NEUTRAL_POINTS,
        }
    }
}

fn labels(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(key, label)| (key.to_string(), label.to_string()))
        .collect()
}

fn binary(
    order: u16,
    reference: &str,
    text: &str,
    reversed: bool,
    options: (&str, &str),
) -> AdditiveQuestion {
    let (a_points, b_points) = if reversed { (5, 1) } else { (1, 5) };
    AdditiveQuestion {
        order,
        reference: reference.to_string(),
        text: text.to_string(),
        kind: QuestionKind::Binary,
        reversed,
        point_map: BTreeMap::from([("A".to_string(), a_points), ("B".to_string(), b_points)]),
        option_labels: labels(&[("A", options.0), ("B", options.1)]),
    }
}

fn likert(order: u16, reference: &str, text: &str, reversed: bool) -> AdditiveQuestion {
    AdditiveQuestion {
        order,
        reference: reference.to_string(),
        text: text.to_string(),
        kind: QuestionKind::Likert,
        reversed,
        point_map: (1..=5)
            .map(|value| (value.to_string(), if reversed { 6 - value } else { value }))
            .collect(),
        option_labels: labels(&LIKERT_LABELS),
    }
}

fn risk_questions() -> Vec<AdditiveQuestion> {
    vec![
        binary(
            1,
            "risk_q1",
            "A friend dares you to try karaoke in front of a crowd. Do you grab the mic?",
            false,
            ("No way", "Hell ya!"),
        ),
        binary(
            2,
            "risk_q2",
            "You're running late and can either take a risky shortcut you don't know well, or take the longer, familiar route. Which do you choose?",
            false,
            ("Stick with the familiar route", "Take the shortcut"),
        ),
        binary(
            3,
            "risk_q3",
            "You're at a theme park staring at the tallest roller coaster. Do you get in line or find a calmer ride?",
            false,
            ("Find a less scary ride", "Hop in line!"),
        ),
        binary(
            4,
            "risk_q4",
            "You get invited to a networking mixer where you don't know anyone. Do you show up anyway or skip it?",
            false,
            ("Enjoy a night in", "Join the party!"),
        ),
        binary(
            5,
            "risk_q5",
            "You're trying out a new restaurant. Do you order something you know you love or try the chef's special?",
            false,
            ("Stick with my usual", "Let's spice things up"),
        ),
        likert(
            6,
            "risk_q6",
            "I value financial security more than the chance of a big bonus.",
            true,
        ),
        likert(7, "risk_q7", "I prefer stability over uncertainty.", true),
        likert(8, "risk_q8", "I enjoy pushing myself beyond what feels comfortable.", false),
        likert(
            9,
            "risk_q9",
            "I believe that risk is an essential part of growth and success.",
            false,
        ),
        likert(10, "risk_q10", "I often make impulsive decisions.", false),
    ]
}

fn reward_questions() -> Vec<AdditiveQuestion> {
    vec![
        binary(
            1,
            "reward_q1",
            "A promotion would come with a huge raise, but also 60-hour weeks. Do you take it?",
            false,
            ("No, I need balance", "Yes, I'd take it!"),
        ),
        binary(
            2,
            "reward_q2",
            "Your startup could attract investors fast if you pivot away from your original mission. Do you pivot or stay true to your purpose?",
            false,
            ("Stay put", "Pivot"),
        ),
        binary(
            3,
            "reward_q3",
            "You've reached your financial goals. Do you keep chasing more success or switch focus to personal interests?",
            false,
            ("Switch it up", "Push forward"),
        ),
        binary(
            4,
            "reward_q4",
            "When I wake up every day, I want to:",
            false,
            ("Change the world", "Reach personal financial success"),
        ),
        binary(
            5,
            "reward_q5",
            "Start a business by yourself and keep all the profits, or bring in co-founders who might double the success but split the reward?",
            true,
            ("#1 By Yourself", "#2 Add Co-Founder"),
        ),
        likert(
            6,
            "reward_q6",
            "I'm always focusing on how to get the best results possible.",
            false,
        ),
        likert(
            7,
            "reward_q7",
            "I'd rather split success with others if it means achieving something bigger.",
            true,
        ),
        likert(
            8,
            "reward_q8",
            "I'm more motivated by the achievement of the team than by personal prestige.",
            true,
        ),
        likert(9, "reward_q9", "Personal achievement is one of my primary drivers in life.", false),
        likert(10, "reward_q10", "Earning more money drives me to perform better.", false),
    ]
}

/// The n-th letter of `letter_order` votes for the n-th category in [`Category::ORDER`].
fn category_question(order: u16, text: &str, letter_order: &str) -> CategoryQuestion {
    let option_to_category = letter_order
        .chars()
        .zip(Category::ORDER)
        .map(|(letter, category)| (letter.to_string(), category.name().to_string()))
        .collect();
    CategoryQuestion {
        order,
        reference: format!("type_q{order}"),
        text: text.to_string(),
        option_to_category,
        letter_order: letter_order.to_string(),
        option_labels: BTreeMap::new(),
    }
}

fn category_questions() -> Vec<CategoryQuestion> {
    vec![
        category_question(
            1,
            "When you picture your ideal business setup, what appeals to you most?",
            "ABCD",
        ),
        category_question(
            2,
            "When you think about failure in business, what best describes your attitude?",
            "CDBA",
        ),
        category_question(3, "How do you prefer your business to grow?", "ACDB"),
        category_question(
            4,
            "How would you like to use your personal energy as an entrepreneur?",
            "BADC",
        ),
        category_question(
            5,
            "When you face an unclear, high-ambiguity situation, what do you tend to do?",
            "ABCD",
        ),
        category_question(
            6,
            "When you feel strongly about an idea, what do you usually do first?",
            "BCDA",
        ),
        category_question(
            7,
            "In a dream world, where will you be in 10 years as an entrepreneur?",
            "CDAB",
        ),
        category_question(8, "How do you prefer to grow as a business owner?", "ABDC"),
        category_question(
            9,
            "When you look back at your proudest work moment, what made it satisfying?",
            "ACDB",
        ),
        category_question(
            10,
            "How have you felt about rules and processes in your past jobs?",
            "DCBA",
        ),
    ]
}

fn tie_breaker() -> TieBreakerQuestion {
    TieBreakerQuestion {
        reference: "tiebreaker".to_string(),
        text: "Running a business is a lot like hunting out in the wild. Which row of hunting styles sounds most like your business personality?".to_string(),
        option_to_category: labels(&[
            ("A", "Tiger"),
            ("B", "Lion"),
            ("C", "African Dog"),
            ("D", "Killer Whale"),
        ]),
        option_labels: labels(&[
            ("A", "Tiger"),
            ("B", "Lion"),
            ("C", "African Wild Dog"),
            ("D", "Killer Whale"),
        ]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_batteries_have_ten_questions_each() {
        let config = ScoringConfig::reference();
        assert_eq!(config.risk_questions.len(), 10);
        assert_eq!(config.reward_questions.len(), 10);
        assert_eq!(config.category_questions.len(), 10);
    }

    #[test]
    fn letter_order_maps_position_to_category() {
        let question = category_question(2, "text", "CDBA");
        assert_eq!(question.option_to_category["C"], "African Dog");
        assert_eq!(question.option_to_category["D"], "Lion");
        assert_eq!(question.option_to_category["B"], "Killer Whale");
        assert_eq!(question.option_to_category["A"], "Tiger");
    }

    #[test]
    fn reversed_questions_invert_their_points() {
        let config = ScoringConfig::reference();
        let security = &config.risk_questions[5];
        assert!(security.reversed);
        assert_eq!(security.point_map["1"], 5);
        assert_eq!(security.point_map["5"], 1);

        let solo = &config.reward_questions[4];
        assert_eq!(solo.point_map["A"], 5);
        assert_eq!(solo.point_map["B"], 1);
    }
}
