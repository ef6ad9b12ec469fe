use std::fmt;

use super::answers::{Answer, AnswerSet};
use super::questions::{Category, QUESTIONS_PER_CATEGORY, QUESTION_COUNT};

pub const MAX_SCORE: u32 = QUESTION_COUNT as u32;
pub const MAX_CATEGORY_SCORE: u32 = QUESTIONS_PER_CATEGORY as u32;

/// Yes-counts derived from an [`AnswerSet`]. Never stored; recompute it
/// whenever the answers change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub total: u32,
    by_category: [u32; 4],
}

impl Score {
    pub fn from_answers(answers: &AnswerSet) -> Self {
        let mut score = Score::default();
        for (question, answer) in answers.iter() {
            if answer == Some(Answer::Yes) {
                score.total += 1;
                score.by_category[question.category.index()] += 1;
            }
        }
        score
    }

    pub fn category(&self, category: Category) -> u32 {
        self.by_category[category.index()]
    }

    /// Per-category counts in declaration order.
    pub fn categories(&self) -> impl Iterator<Item = (Category, u32)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.category(c)))
    }

    pub fn tier(&self) -> Tier {
        Tier::classify(self.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    CoachReady,
    Progressing,
    AtRisk,
}

impl Tier {
    pub fn classify(total: u32) -> Self {
        if total >= 10 {
            Tier::CoachReady
        } else if total >= 6 {
            Tier::Progressing
        } else {
            Tier::AtRisk
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::CoachReady => "Coach-Ready",
            Tier::Progressing => "Progressing",
            Tier::AtRisk => "At Risk",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tier::CoachReady => "You have strong foundations. Focus on scaling and consistency.",
            Tier::Progressing => "Good momentum. Address the weakest categories to accelerate results.",
            Tier::AtRisk => "Coaching gaps are blocking performance. Prioritize quick wins now.",
        }
    }

    /// CSS modifier for the result badge.
    pub fn badge_class(self) -> &'static str {
        match self {
            Tier::CoachReady => "tier-badge tier-emerald",
            Tier::Progressing => "tier-badge tier-amber",
            Tier::AtRisk => "tier-badge tier-rose",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::questions::QUESTIONS;

    fn answers_from_mask(mask: u32) -> AnswerSet {
        let mut answers = AnswerSet::new();
        for (i, q) in QUESTIONS.iter().enumerate() {
            let answer = if mask & (1 << i) != 0 { Answer::Yes } else { Answer::No };
            answers.set(q.id, answer);
        }
        answers
    }

    #[test]
    fn tier_thresholds() {
        for total in 0..=MAX_SCORE {
            let tier = Tier::classify(total);
            match total {
                10..=12 => assert_eq!(tier.label(), "Coach-Ready"),
                6..=9 => assert_eq!(tier.label(), "Progressing"),
                _ => assert_eq!(tier.label(), "At Risk"),
            }
        }
        assert_eq!(Tier::classify(11), Tier::CoachReady);
        assert_eq!(Tier::classify(7), Tier::Progressing);
        assert_eq!(Tier::classify(3), Tier::AtRisk);
    }

    #[test]
    fn category_counts_sum_to_total_for_every_combination() {
        for mask in 0..(1u32 << QUESTION_COUNT) {
            let score = Score::from_answers(&answers_from_mask(mask));
            let sum: u32 = score.categories().map(|(_, n)| n).sum();
            assert_eq!(sum, score.total);
            assert_eq!(score.total, mask.count_ones());
            assert!(score.categories().all(|(_, n)| n <= MAX_CATEGORY_SCORE));
        }
    }

    #[test]
    fn no_answers_scores_zero() {
        let score = Score::from_answers(&AnswerSet::new());
        assert_eq!(score.total, 0);
        assert_eq!(score.tier(), Tier::AtRisk);
    }

    #[test]
    fn all_yes_is_coach_ready() {
        let score = Score::from_answers(&answers_from_mask(0xFFF));
        assert_eq!(score.total, 12);
        assert!(score.categories().all(|(_, n)| n == 3));
        assert_eq!(score.tier(), Tier::CoachReady);
    }

    #[test]
    fn first_six_yes_fills_clarity_and_coaching() {
        let score = Score::from_answers(&answers_from_mask(0b11_1111));
        assert_eq!(score.total, 6);
        assert_eq!(score.category(Category::Clarity), 3);
        assert_eq!(score.category(Category::Coaching), 3);
        assert_eq!(score.category(Category::Performance), 0);
        assert_eq!(score.category(Category::Scale), 0);
        assert_eq!(score.tier(), Tier::Progressing);
    }

    #[test]
    fn unanswered_questions_do_not_count() {
        let mut answers = AnswerSet::new();
        answers.set("q7", Answer::Yes);
        answers.set("q8", Answer::No);
        let score = Score::from_answers(&answers);
        assert_eq!(score.total, 1);
        assert_eq!(score.category(Category::Performance), 1);
    }
}
