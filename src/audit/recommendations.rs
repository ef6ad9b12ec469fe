use super::questions::Category;
use super::score::Score;

const WEAKEST_TAKEN: usize = 2;
const MAX_RECOMMENDATIONS: usize = 6;

pub fn recommendations_for(category: Category) -> &'static [&'static str; 3] {
    match category {
        Category::Clarity => &[
            "Adopt a single goals format org-wide (top 3 priorities per person).",
            "Tie every goal to a clear business impact and deadline.",
            "Publish success metrics in a shared dashboard or weekly scorecard.",
        ],
        Category::Coaching => &[
            "Introduce a weekly 1:1 coaching cadence (not just status).",
            "Equip leaders with a shared framework (e.g., CLEAR Coaching Cards).",
            "End every 1:1 with ‘owner + next step + when’.",
        ],
        Category::Performance => &[
            "Link coaching to 1–2 outcome KPIs (execution speed, quality, retention).",
            "Celebrate small wins publicly to reinforce behavior.",
            "Run a 30-day sprint to remove 1 execution bottleneck per team.",
        ],
        Category::Scale => &[
            "Onboard new managers with a coaching crash course.",
            "Create a simple playbook so coaching is repeatable.",
            "Start a ‘coach the coaches’ circle for peer feedback.",
        ],
    }
}

/// The two lowest-scoring categories, weakest first. Ties keep declaration
/// order.
pub fn weakest_categories(score: &Score) -> Vec<Category> {
    let mut ranked: Vec<(Category, u32)> = score.categories().collect();
    // Stable sort, so equal counts stay in Category::ALL order.
    ranked.sort_by_key(|(_, count)| *count);
    ranked
        .into_iter()
        .take(WEAKEST_TAKEN)
        .map(|(category, _)| category)
        .collect()
}

pub fn recommendations(score: &Score) -> Vec<&'static str> {
    weakest_categories(score)
        .into_iter()
        .flat_map(|category| recommendations_for(category).iter().copied())
        .take(MAX_RECOMMENDATIONS)
        .collect()
}
