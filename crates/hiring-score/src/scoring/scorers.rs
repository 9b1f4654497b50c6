use rust_decimal::Decimal;

use super::domain::{Question, QuestionType};
use super::overrides::PointTable;

/// Ceiling applied to rating, number and text answers.
pub const MAX_QUESTION_POINTS: i64 = 10;

const POSITIVE_KEYWORDS: [&str; 8] = [
    "experience",
    "developed",
    "implemented",
    "managed",
    "led",
    "created",
    "improved",
    "achieved",
];

fn ceiling() -> Decimal {
    Decimal::from(MAX_QUESTION_POINTS)
}

fn clamp_points(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, ceiling())
}

/// Score one raw answer. `table` is only consulted for choice questions.
pub fn score_answer(question: &Question, answer: &str, table: &PointTable) -> Decimal {
    if answer.is_empty() {
        return Decimal::ZERO;
    }

    match &question.question_type {
        QuestionType::Choice => score_choice(answer, table),
        QuestionType::Rating => score_rating(answer),
        QuestionType::Number => score_number(&question.text, answer),
        QuestionType::Text => score_text(answer),
        QuestionType::Unknown(_) => Decimal::ZERO,
    }
}

/// Upper bound of [`score_answer`] for the question under the given table.
pub fn max_points(question: &Question, table: &PointTable) -> Decimal {
    match &question.question_type {
        QuestionType::Choice => table.max_points(),
        QuestionType::Rating | QuestionType::Number | QuestionType::Text => ceiling(),
        QuestionType::Unknown(_) => Decimal::ZERO,
    }
}

pub(crate) fn score_choice(answer: &str, table: &PointTable) -> Decimal {
    table
        .points_for(answer)
        .map(|points| points.max(Decimal::ZERO))
        .unwrap_or(Decimal::ZERO)
}

/// 1-5 scale doubled onto 0-10.
pub(crate) fn score_rating(answer: &str) -> Decimal {
    match answer.trim().parse::<i64>() {
        Ok(rating) => clamp_points(Decimal::from(rating.saturating_mul(2))),
        Err(_) => Decimal::ZERO,
    }
}

/// Years-of-experience questions are doubled; every other number is taken as is.
pub(crate) fn score_number(question_text: &str, answer: &str) -> Decimal {
    let Ok(number) = answer.trim().parse::<Decimal>() else {
        return Decimal::ZERO;
    };

    let text = question_text.to_lowercase();
    if text.contains("year") && text.contains("experience") {
        clamp_points(number.saturating_mul(Decimal::TWO))
    } else {
        clamp_points(number)
    }
}

pub(crate) fn score_text(answer: &str) -> Decimal {
    if answer.is_empty() {
        return Decimal::ZERO;
    }

    let base = match answer.chars().count() {
        0..=19 => 1,
        20..=99 => 4,
        100..=299 => 7,
        _ => 9,
    };

    let lowered = answer.to_lowercase();
    let keyword_hits = POSITIVE_KEYWORDS
        .iter()
        .filter(|keyword| lowered.contains(*keyword))
        .count();
    let keyword_bonus = (Decimal::new(5, 1) * Decimal::from(keyword_hits)).min(Decimal::TWO);

    let example_bonus = if lowered.contains("example") || lowered.contains("specific") {
        Decimal::ONE
    } else {
        Decimal::ZERO
    };

    clamp_points(Decimal::from(base) + keyword_bonus + example_bonus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::domain::{OptionId, QuestionId};
    use crate::scoring::overrides::EffectivePoint;

    fn question(question_type: QuestionType, text: &str) -> Question {
        Question {
            id: QuestionId(1),
            text: text.to_string(),
            question_type,
            active: true,
        }
    }

    fn dec(value: &str) -> Decimal {
        value.parse().expect("valid decimal literal")
    }

    #[test]
    fn rating_doubles_and_clamps() {
        assert_eq!(score_rating("3"), dec("6"));
        assert_eq!(score_rating("7"), dec("10"));
        assert_eq!(score_rating(" 5 "), dec("10"));
        assert_eq!(score_rating("-2"), Decimal::ZERO);
        assert_eq!(score_rating("4.5"), Decimal::ZERO);
        assert_eq!(score_rating("great"), Decimal::ZERO);
    }

    #[test]
    fn number_doubles_only_for_years_of_experience() {
        let years = "Years of experience in Go";
        assert_eq!(score_number(years, "4"), dec("8"));
        assert_eq!(score_number(years, "9"), dec("10"));
        assert_eq!(score_number(years, "2.5"), dec("5"));

        assert_eq!(score_number("Team size you managed", "4"), dec("4"));
        assert_eq!(score_number("Team size you managed", "40"), dec("10"));
        assert_eq!(score_number("Team size you managed", "-3"), Decimal::ZERO);
        assert_eq!(score_number(years, "several"), Decimal::ZERO);
    }

    #[test]
    fn text_uses_length_tiers() {
        assert_eq!(score_text("Yes"), dec("1"));
        assert_eq!(score_text(&"a".repeat(20)), dec("4"));
        assert_eq!(score_text(&"a".repeat(100)), dec("7"));
        assert_eq!(score_text(&"a".repeat(300)), dec("9"));
    }

    #[test]
    fn text_awards_keyword_and_example_bonuses() {
        let mut answer = String::from("I implemented a specific caching layer. ");
        while answer.chars().count() < 150 {
            answer.push('x');
        }
        assert_eq!(answer.chars().count(), 150);
        assert_eq!(score_text(&answer), dec("8.5"));
    }

    #[test]
    fn text_keyword_bonus_is_capped() {
        let answer = "experience developed implemented managed led created improved achieved";
        assert!(answer.len() < 100 && answer.len() >= 20);
        // 4 base + 2 capped keyword bonus
        assert_eq!(score_text(answer), dec("6"));

        let long = format!("{answer} for example {}", "z".repeat(300));
        assert_eq!(score_text(&long), dec("10"));
    }

    #[test]
    fn empty_answers_score_zero_for_every_type() {
        let table = PointTable::default();
        for question_type in [
            QuestionType::Choice,
            QuestionType::Rating,
            QuestionType::Number,
            QuestionType::Text,
        ] {
            let question = question(question_type, "Anything");
            assert_eq!(score_answer(&question, "", &table), Decimal::ZERO);
        }
    }

    #[test]
    fn unknown_type_scores_zero() {
        let question = question(QuestionType::parse("essay"), "Describe yourself");
        assert_eq!(
            question.question_type,
            QuestionType::Unknown("essay".to_string())
        );
        assert_eq!(
            score_answer(&question, "A long and detailed answer", &PointTable::default()),
            Decimal::ZERO
        );
        assert_eq!(max_points(&question, &PointTable::default()), Decimal::ZERO);
    }

    #[test]
    fn choice_matches_labels_case_insensitively() {
        let table = PointTable::new(vec![
            EffectivePoint {
                option_id: OptionId(1),
                label: "Beginner".to_string(),
                points: dec("2"),
                overridden: false,
            },
            EffectivePoint {
                option_id: OptionId(2),
                label: "Advanced".to_string(),
                points: dec("10"),
                overridden: true,
            },
        ]);
        let question = question(QuestionType::parse("Choice"), "Go proficiency");

        assert_eq!(score_answer(&question, "Advanced", &table), dec("10"));
        assert_eq!(score_answer(&question, "advanced", &table), dec("10"));
        assert_eq!(score_answer(&question, "Expert", &table), Decimal::ZERO);
        assert_eq!(max_points(&question, &table), dec("10"));
    }

    #[test]
    fn fixed_types_share_the_ten_point_ceiling() {
        for raw in ["rating", "NUMBER", "Text"] {
            let question = question(QuestionType::parse(raw), "Any");
            assert_eq!(max_points(&question, &PointTable::default()), dec("10"));
        }
    }
}
