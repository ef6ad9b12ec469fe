use std::fmt;

use super::error::AuditError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamSize {
    #[default]
    UpTo10,
    UpTo50,
    UpTo200,
    UpTo500,
    Over500,
}

impl TeamSize {
    pub const ALL: [TeamSize; 5] = [
        TeamSize::UpTo10,
        TeamSize::UpTo50,
        TeamSize::UpTo200,
        TeamSize::UpTo500,
        TeamSize::Over500,
    ];

    pub fn label(self) -> &'static str {
        match self {
            TeamSize::UpTo10 => "1–10",
            TeamSize::UpTo50 => "11–50",
            TeamSize::UpTo200 => "51–200",
            TeamSize::UpTo500 => "201–500",
            TeamSize::Over500 => "500+",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.label() == label)
    }
}

impl fmt::Display for TeamSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Challenge {
    #[default]
    Engagement,
    Turnover,
    Execution,
    CoachingSkills,
    Other,
}

impl Challenge {
    pub const ALL: [Challenge; 5] = [
        Challenge::Engagement,
        Challenge::Turnover,
        Challenge::Execution,
        Challenge::CoachingSkills,
        Challenge::Other,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Challenge::Engagement => "Improving engagement",
            Challenge::Turnover => "Reducing turnover",
            Challenge::Execution => "Accelerating execution",
            Challenge::CoachingSkills => "Scaling coaching skills",
            Challenge::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|challenge| challenge.label() == label)
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The free-text fields of the lead form. All of them are required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeadField {
    Name,
    Email,
    Company,
    Role,
}

impl LeadField {
    pub const REQUIRED: [LeadField; 4] = [
        LeadField::Name,
        LeadField::Email,
        LeadField::Company,
        LeadField::Role,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LeadField::Name => "full name",
            LeadField::Email => "work email",
            LeadField::Company => "company",
            LeadField::Role => "role",
        }
    }
}

impl fmt::Display for LeadField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadInfo {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub team_size: TeamSize,
    pub challenge: Challenge,
}

impl LeadInfo {
    pub fn field(&self, field: LeadField) -> &str {
        match field {
            LeadField::Name => &self.name,
            LeadField::Email => &self.email,
            LeadField::Company => &self.company,
            LeadField::Role => &self.role,
        }
    }

    /// Edits are accepted as typed; checking happens on submit.
    pub fn set_field(&mut self, field: LeadField, value: String) {
        match field {
            LeadField::Name => self.name = value,
            LeadField::Email => self.email = value,
            LeadField::Company => self.company = value,
            LeadField::Role => self.role = value,
        }
    }

    /// First required field that is empty or only whitespace.
    pub fn missing_field(&self) -> Option<LeadField> {
        LeadField::REQUIRED
            .into_iter()
            .find(|field| self.field(*field).trim().is_empty())
    }

    pub fn validate(&self) -> Result<(), AuditError> {
        match self.missing_field() {
            Some(field) => Err(AuditError::MissingLeadField(field)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_lead() -> LeadInfo {
        LeadInfo {
            name: "Jane Doe".to_string(),
            email: "jane@company.com".to_string(),
            company: "Company Inc.".to_string(),
            role: "HR Director".to_string(),
            ..LeadInfo::default()
        }
    }

    #[test]
    fn defaults_match_the_form_preselection() {
        let lead = LeadInfo::default();
        assert_eq!(lead.team_size.label(), "1–10");
        assert_eq!(lead.challenge.label(), "Improving engagement");
    }

    #[test]
    fn complete_lead_validates() {
        assert!(complete_lead().validate().is_ok());
    }

    #[test]
    fn each_required_field_is_checked() {
        for field in LeadField::REQUIRED {
            let mut lead = complete_lead();
            lead.set_field(field, String::new());
            assert_eq!(lead.validate(), Err(AuditError::MissingLeadField(field)));
        }
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut lead = complete_lead();
        lead.set_field(LeadField::Company, "   ".to_string());
        assert_eq!(lead.missing_field(), Some(LeadField::Company));
    }

    #[test]
    fn first_missing_field_is_reported() {
        let lead = LeadInfo::default();
        assert_eq!(lead.missing_field(), Some(LeadField::Name));
    }

    #[test]
    fn select_labels_parse_back() {
        for size in TeamSize::ALL {
            assert_eq!(TeamSize::from_label(size.label()), Some(size));
        }
        for challenge in Challenge::ALL {
            assert_eq!(Challenge::from_label(challenge.label()), Some(challenge));
        }
        assert_eq!(TeamSize::from_label("1-10"), None);
        assert_eq!(Challenge::from_label(""), None);
    }
}
