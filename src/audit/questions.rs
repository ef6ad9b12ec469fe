use std::fmt;

pub const QUESTION_COUNT: usize = 12;
pub const QUESTIONS_PER_CATEGORY: usize = 3;

/// The four areas the audit measures. Declaration order is also the
/// tie-break order used when ranking categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Clarity,
    Coaching,
    Performance,
    Scale,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Clarity,
        Category::Coaching,
        Category::Performance,
        Category::Scale,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Clarity => "Clarity",
            Category::Coaching => "Coaching",
            Category::Performance => "Performance",
            Category::Scale => "Scale",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: &'static str,
    pub text: &'static str,
    pub category: Category,
}

pub static QUESTIONS: [Question; QUESTION_COUNT] = [
    Question { id: "q1", text: "Every team member can clearly state their top 3 priorities for this quarter.", category: Category::Clarity },
    Question { id: "q2", text: "Leaders consistently tie goals to business impact (the ‘why’ is explicit).", category: Category::Clarity },
    Question { id: "q3", text: "Success is measured the same way across teams (clear metrics, visible).", category: Category::Clarity },

    Question { id: "q4", text: "Managers have regular coaching conversations (not just status updates).", category: Category::Coaching },
    Question { id: "q5", text: "Employees leave 1:1s with confidence, ownership, and next steps.", category: Category::Coaching },
    Question { id: "q6", text: "Leaders use a shared framework or toolset to guide coaching (e.g., CLEAR).", category: Category::Coaching },

    Question { id: "q7", text: "Engagement has improved in the last 12 months.", category: Category::Performance },
    Question { id: "q8", text: "Mid-performer retention is trending up (or regrettable churn is down).", category: Category::Performance },
    Question { id: "q9", text: "Coaching efforts can be linked to execution, productivity, or EBITDA gains.", category: Category::Performance },

    Question { id: "q10", text: "New managers are trained to coach from day one.", category: Category::Scale },
    Question { id: "q11", text: "Coaching is documented and repeatable (playbooks, cards, templates).", category: Category::Scale },
    Question { id: "q12", text: "There’s a pipeline of leaders developing future leaders.", category: Category::Scale },
];

/// Position of a question id in [`QUESTIONS`].
pub fn position(id: &str) -> Option<usize> {
    QUESTIONS.iter().position(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn each_category_has_three_questions() {
        for category in Category::ALL {
            let count = QUESTIONS.iter().filter(|q| q.category == category).count();
            assert_eq!(count, QUESTIONS_PER_CATEGORY, "{}", category);
        }
    }

    #[test]
    fn ids_are_unique_and_resolvable() {
        let ids: HashSet<_> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), QUESTION_COUNT);
        assert_eq!(position("q1"), Some(0));
        assert_eq!(position("q12"), Some(11));
        assert_eq!(position("q13"), None);
    }

    #[test]
    fn category_index_follows_declaration_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
        assert_eq!(Category::Performance.to_string(), "Performance");
    }
}
