use log::{debug, info, warn};

use super::answers::{Answer, AnswerSet};
use super::error::AuditError;
use super::lead::{Challenge, LeadField, LeadInfo, TeamSize};
use super::questions::{self, Question, QUESTION_COUNT};
use super::score::Score;

/// Where the visitor is in the funnel. Moves forward one step at a time;
/// only [`AuditWizard::reset`] and the header shortcuts move backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stage {
    #[default]
    Hero,
    Lead,
    Audit,
    Result,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AuditWizard {
    stage: Stage,
    lead: LeadInfo,
    lead_submitted: bool,
    answers: AnswerSet,
    index: usize,
}

impl AuditWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn lead(&self) -> &LeadInfo {
        &self.lead
    }

    pub fn lead_submitted(&self) -> bool {
        self.lead_submitted
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.answers
    }

    pub fn current_question(&self) -> &'static Question {
        // index is kept within 0..QUESTION_COUNT by next/prev.
        &questions::QUESTIONS[self.index]
    }

    pub fn is_first_question(&self) -> bool {
        self.index == 0
    }

    pub fn is_last_question(&self) -> bool {
        self.index == QUESTION_COUNT - 1
    }

    pub fn score(&self) -> Score {
        Score::from_answers(&self.answers)
    }

    // -- stage transitions ---------------------------------------------------

    pub fn start(&mut self) {
        self.move_to(Stage::Lead);
    }

    /// Back to the top of the page. Answers and lead are kept.
    pub fn show_overview(&mut self) {
        self.move_to(Stage::Hero);
    }

    pub fn submit_lead(&mut self) -> Result<(), AuditError> {
        if let Err(e) = self.lead.validate() {
            debug!("Lead submission refused: {}", e);
            return Err(e);
        }
        self.lead_submitted = true;
        self.move_to(Stage::Audit);
        Ok(())
    }

    /// Header "Questions": the audit once the lead is in, the form otherwise.
    pub fn open_questions(&mut self) -> Stage {
        if self.lead_submitted {
            self.move_to(Stage::Audit);
        } else {
            self.move_to(Stage::Lead);
        }
        self.stage
    }

    /// Header "Results": stays on the result stage if it was reached,
    /// otherwise sends the visitor to the form.
    pub fn open_results(&mut self) -> Stage {
        if self.stage != Stage::Result {
            self.move_to(Stage::Lead);
        }
        self.stage
    }

    pub fn submit_audit(&mut self) -> Result<(), AuditError> {
        if !self.lead_submitted {
            warn!("Audit submitted before lead details");
            return Err(AuditError::LeadRequired);
        }
        let answered = self.answers.answered_count();
        if answered < QUESTION_COUNT {
            debug!("Audit submission refused at {}/{}", answered, QUESTION_COUNT);
            return Err(AuditError::AuditIncomplete {
                answered,
                total: QUESTION_COUNT,
            });
        }
        self.move_to(Stage::Result);
        Ok(())
    }

    pub fn reset(&mut self) {
        info!("Resetting audit");
        self.answers.clear();
        self.index = 0;
        self.lead_submitted = false;
        self.stage = Stage::Hero;
    }

    // -- lead form -----------------------------------------------------------

    pub fn set_lead_field(&mut self, field: LeadField, value: String) {
        self.lead.set_field(field, value);
    }

    pub fn set_team_size(&mut self, team_size: TeamSize) {
        self.lead.team_size = team_size;
    }

    pub fn set_challenge(&mut self, challenge: Challenge) {
        self.lead.challenge = challenge;
    }

    // -- question navigation -------------------------------------------------

    /// Records an answer without advancing. Returns false for unknown ids.
    pub fn set_answer(&mut self, id: &str, answer: Answer) -> bool {
        let known = self.answers.set(id, answer);
        if !known {
            warn!("Ignoring answer for unknown question {}", id);
        }
        known
    }

    pub fn answer_current(&mut self, answer: Answer) {
        let id = self.current_question().id;
        self.set_answer(id, answer);
    }

    pub fn next(&mut self) -> bool {
        if self.index + 1 < QUESTION_COUNT {
            self.index += 1;
            true
        } else {
            false
        }
    }

    pub fn prev(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            true
        } else {
            false
        }
    }

    fn move_to(&mut self, stage: Stage) {
        if self.stage != stage {
            info!("Stage {:?} -> {:?}", self.stage, stage);
            self.stage = stage;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::questions::QUESTIONS;
    use crate::audit::score::Tier;

    fn fill_lead(wizard: &mut AuditWizard) {
        wizard.set_lead_field(LeadField::Name, "Jane Doe".to_string());
        wizard.set_lead_field(LeadField::Email, "jane@company.com".to_string());
        wizard.set_lead_field(LeadField::Company, "Company Inc.".to_string());
        wizard.set_lead_field(LeadField::Role, "CEO".to_string());
    }

    fn wizard_in_audit() -> AuditWizard {
        let mut wizard = AuditWizard::new();
        wizard.start();
        fill_lead(&mut wizard);
        wizard.submit_lead().expect("complete lead");
        wizard
    }

    fn answer_all(wizard: &mut AuditWizard, answer: Answer) {
        for q in QUESTIONS.iter() {
            assert!(wizard.set_answer(q.id, answer));
        }
    }

    #[test]
    fn starts_on_hero() {
        let wizard = AuditWizard::new();
        assert_eq!(wizard.stage(), Stage::Hero);
        assert!(!wizard.lead_submitted());
        assert_eq!(wizard.current_question().id, "q1");
        assert_eq!(wizard.answers().answered_count(), 0);
    }

    #[test]
    fn start_opens_the_form() {
        let mut wizard = AuditWizard::new();
        wizard.start();
        assert_eq!(wizard.stage(), Stage::Lead);
    }

    #[test]
    fn incomplete_lead_stays_on_form() {
        let mut wizard = AuditWizard::new();
        wizard.start();
        wizard.set_lead_field(LeadField::Name, "Jane".to_string());
        wizard.set_lead_field(LeadField::Email, "jane@company.com".to_string());
        wizard.set_lead_field(LeadField::Company, "Company Inc.".to_string());

        let err = wizard.submit_lead().unwrap_err();
        assert_eq!(err, AuditError::MissingLeadField(LeadField::Role));
        assert_eq!(err.to_string(), "Please enter your role to continue");
        assert_eq!(wizard.stage(), Stage::Lead);
        assert!(!wizard.lead_submitted());
    }

    #[test]
    fn complete_lead_unlocks_audit() {
        let wizard = wizard_in_audit();
        assert_eq!(wizard.stage(), Stage::Audit);
        assert!(wizard.lead_submitted());
    }

    #[test]
    fn navigation_is_clamped() {
        let mut wizard = wizard_in_audit();
        assert!(!wizard.prev());
        assert_eq!(wizard.current_question().id, "q1");
        for _ in 0..QUESTION_COUNT + 3 {
            wizard.next();
        }
        assert_eq!(wizard.current_question().id, "q12");
        assert!(wizard.is_last_question());
        assert!(!wizard.next());
        assert!(wizard.prev());
        assert_eq!(wizard.current_question().id, "q11");
    }

    #[test]
    fn answering_does_not_advance() {
        let mut wizard = wizard_in_audit();
        wizard.answer_current(Answer::Yes);
        assert_eq!(wizard.current_question().id, "q1");
        assert_eq!(wizard.answers().get("q1"), Some(Answer::Yes));
        wizard.answer_current(Answer::No);
        assert_eq!(wizard.answers().get("q1"), Some(Answer::No));
    }

    #[test]
    fn no_answers_blocks_submission() {
        let mut wizard = wizard_in_audit();
        assert_eq!(
            wizard.submit_audit(),
            Err(AuditError::AuditIncomplete { answered: 0, total: QUESTION_COUNT })
        );
        assert_eq!(wizard.stage(), Stage::Audit);
        assert_eq!(wizard.score().total, 0);
        assert_eq!(wizard.score().tier(), Tier::AtRisk);
    }

    #[test]
    fn eleven_answers_still_blocks_submission() {
        let mut wizard = wizard_in_audit();
        for q in QUESTIONS.iter().skip(1) {
            wizard.set_answer(q.id, Answer::Yes);
        }
        assert!(matches!(
            wizard.submit_audit(),
            Err(AuditError::AuditIncomplete { answered: 11, .. })
        ));
        assert_eq!(wizard.stage(), Stage::Audit);
    }

    #[test]
    fn submission_requires_lead() {
        let mut wizard = AuditWizard::new();
        answer_all(&mut wizard, Answer::Yes);
        assert_eq!(wizard.submit_audit(), Err(AuditError::LeadRequired));
        assert_eq!(wizard.stage(), Stage::Hero);
    }

    #[test]
    fn full_run_reaches_result() {
        let mut wizard = wizard_in_audit();
        answer_all(&mut wizard, Answer::Yes);
        assert_eq!(wizard.submit_audit(), Ok(()));
        assert_eq!(wizard.stage(), Stage::Result);
        assert_eq!(wizard.score().total, 12);
        assert_eq!(wizard.score().tier(), Tier::CoachReady);
    }

    #[test]
    fn reset_clears_everything_but_the_lead_fields() {
        let mut wizard = wizard_in_audit();
        answer_all(&mut wizard, Answer::No);
        wizard.next();
        wizard.next();
        wizard.submit_audit().expect("all answered");

        wizard.reset();
        assert_eq!(wizard.stage(), Stage::Hero);
        assert!(!wizard.lead_submitted());
        assert_eq!(wizard.current_question().id, "q1");
        assert_eq!(wizard.answers(), &AnswerSet::new());
    }

    #[test]
    fn questions_shortcut_respects_lead_gate() {
        let mut wizard = AuditWizard::new();
        assert_eq!(wizard.open_questions(), Stage::Lead);

        let mut wizard = wizard_in_audit();
        wizard.show_overview();
        assert_eq!(wizard.stage(), Stage::Hero);
        assert_eq!(wizard.open_questions(), Stage::Audit);
    }

    #[test]
    fn results_shortcut_only_stays_on_result() {
        let mut wizard = wizard_in_audit();
        assert_eq!(wizard.open_results(), Stage::Lead);

        let mut wizard = wizard_in_audit();
        answer_all(&mut wizard, Answer::Yes);
        wizard.submit_audit().expect("all answered");
        assert_eq!(wizard.open_results(), Stage::Result);
    }

    #[test]
    fn overview_keeps_answers() {
        let mut wizard = wizard_in_audit();
        wizard.answer_current(Answer::Yes);
        wizard.show_overview();
        assert_eq!(wizard.answers().answered_count(), 1);
        assert!(wizard.lead_submitted());
    }

    #[test]
    fn lead_selections_are_stored() {
        let mut wizard = AuditWizard::new();
        wizard.set_team_size(TeamSize::Over500);
        wizard.set_challenge(Challenge::Other);
        assert_eq!(wizard.lead().team_size, TeamSize::Over500);
        assert_eq!(wizard.lead().challenge, Challenge::Other);
    }
}
