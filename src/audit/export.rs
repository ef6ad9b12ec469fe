use urlencoding::encode;

use super::lead::LeadInfo;
use super::recommendations::recommendations;
use super::score::{Score, MAX_CATEGORY_SCORE, MAX_SCORE};

/// Plain-text report handed to the visitor's mail client.
pub fn summary(lead: &LeadInfo, score: &Score) -> String {
    let by_category = score
        .categories()
        .map(|(category, count)| format!("{}: {}/{}", category, count, MAX_CATEGORY_SCORE))
        .collect::<Vec<_>>()
        .join(", ");

    let mut body = format!(
        "Name: {}\nEmail: {}\nCompany: {}\nRole: {}\nTeam size: {}\nPrimary challenge: {}\n\n",
        lead.name, lead.email, lead.company, lead.role, lead.team_size, lead.challenge
    );
    body.push_str(&format!(
        "Score: {}/{} ({})\nBy Category: {}\n\n",
        score.total,
        MAX_SCORE,
        score.tier(),
        by_category
    ));
    body.push_str("Recommendations:\n- ");
    body.push_str(&recommendations(score).join("\n- "));
    body
}

pub fn mailto_link(recipient: &str, subject: &str, lead: &LeadInfo, score: &Score) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        encode(subject),
        encode(&summary(lead, score))
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::answers::{Answer, AnswerSet};
    use crate::audit::lead::{Challenge, TeamSize};
    use crate::audit::questions::QUESTIONS;

    fn lead() -> LeadInfo {
        LeadInfo {
            name: "Jane Doe".to_string(),
            email: "jane@company.com".to_string(),
            company: "Company Inc.".to_string(),
            role: "CEO".to_string(),
            team_size: TeamSize::UpTo200,
            challenge: Challenge::Turnover,
        }
    }

    fn first_six_yes() -> Score {
        let mut answers = AnswerSet::new();
        for (i, q) in QUESTIONS.iter().enumerate() {
            answers.set(q.id, if i < 6 { Answer::Yes } else { Answer::No });
        }
        Score::from_answers(&answers)
    }

    #[test]
    fn summary_layout() {
        let text = summary(&lead(), &first_six_yes());
        let expected_head = "Name: Jane Doe\nEmail: jane@company.com\nCompany: Company Inc.\nRole: CEO\n\
Team size: 51–200\nPrimary challenge: Reducing turnover\n\n\
Score: 6/12 (Progressing)\n\
By Category: Clarity: 3/3, Coaching: 3/3, Performance: 0/3, Scale: 0/3\n\n\
Recommendations:\n- Link coaching to 1–2 outcome KPIs";
        assert!(text.starts_with(expected_head), "{}", text);
        assert!(text.ends_with("\n- Start a ‘coach the coaches’ circle for peer feedback."));
        assert_eq!(text.matches("\n- ").count(), 6);
    }

    #[test]
    fn mailto_is_percent_encoded() {
        let link = mailto_link("kent@getclearliving.com", "CLEAR Leadership Audit Results", &lead(), &first_six_yes());
        assert!(link.starts_with(
            "mailto:kent@getclearliving.com?subject=CLEAR%20Leadership%20Audit%20Results&body=Name%3A%20Jane%20Doe%0AEmail%3A%20jane%40company.com"
        ));
        let body = link.split("&body=").nth(1).unwrap_or_default();
        assert!(!body.contains(' '));
        assert!(!body.contains('\n'));
        assert!(!body.contains('&'));
    }
}
