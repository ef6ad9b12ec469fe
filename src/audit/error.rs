use thiserror::Error;

use super::lead::LeadField;

/// Reasons a wizard transition was refused. The wizard state is left as it
/// was whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuditError {
    #[error("Please enter your {0} to continue")]
    MissingLeadField(LeadField),

    #[error("Answer every question first ({answered}/{total} answered)")]
    AuditIncomplete { answered: usize, total: usize },

    #[error("Please complete your details first")]
    LeadRequired,
}
