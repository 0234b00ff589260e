use serde::Serialize;

use crate::models::RawJobPreferences;
use crate::normalization::{clean, correct, parse_salary, SalaryRange};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedJobPreferences {
    pub preferred_role: String,
    pub contract_type: String,
    pub location: String,
    pub remote_preference: String,
    pub salary_expectation: SalaryRange,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobPreferencesSection {
    #[serde(flatten)]
    pub raw: RawJobPreferences,
    pub normalized: NormalizedJobPreferences,
}

pub fn parse_job_preferences(raw: Option<&RawJobPreferences>) -> JobPreferencesSection {
    let raw = raw.cloned().unwrap_or_default();

    let normalized = NormalizedJobPreferences {
        preferred_role: raw.preferred_role.as_deref().map(clean).unwrap_or_default(),
        contract_type: raw.contract_type.as_deref().map(correct).unwrap_or_default(),
        location: raw.location.as_deref().map(clean).unwrap_or_default(),
        remote_preference: raw
            .remote_preference
            .as_deref()
            .map(correct)
            .unwrap_or_default(),
        salary_expectation: raw
            .salary_expectation
            .as_deref()
            .map(parse_salary)
            .unwrap_or_default(),
    };

    JobPreferencesSection { raw, normalized }
}
