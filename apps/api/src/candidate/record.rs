use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::candidate::consistency::Inconsistency;
use crate::candidate::quality::QualityScore;
use crate::candidate::sections::{
    AdditionalSection, AvailabilitySection, JobPreferencesSection, SkillsSection,
};

/// The four normalized sections. Each is always present, defaulted when not submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedSections {
    pub job_preferences: JobPreferencesSection,
    pub skills: SkillsSection,
    pub availability: AvailabilitySection,
    pub additional: AdditionalSection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordMetadata {
    pub parsed_at: DateTime<Utc>,
    pub data_quality: QualityScore,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inconsistencies: Vec<Inconsistency>,
}

/// A fully processed questionnaire, ready for the matching system.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParsedRecord {
    #[serde(flatten)]
    pub sections: ParsedSections,
    pub metadata: RecordMetadata,
    pub tags: Vec<String>,
}
