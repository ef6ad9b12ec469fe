//! Leadership audit logic: the question bank, answer tracking, scoring,
//! recommendations and the stage machine driving the landing page.
//! Nothing in here touches the browser.

pub mod answers;
pub mod error;
pub mod export;
pub mod lead;
pub mod questions;
pub mod recommendations;
pub mod score;
pub mod wizard;

pub use answers::Answer;
pub use error::AuditError;
pub use lead::{Challenge, LeadField, LeadInfo, TeamSize};
pub use questions::{Question, QUESTION_COUNT};
pub use score::Score;
pub use wizard::{AuditWizard, Stage};
