use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::lenient::{self, Answer};

/// The candidate questionnaire as submitted. Every section is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawQuestionnaire {
    pub job_preferences: Option<RawJobPreferences>,
    pub skills: Option<RawSkills>,
    pub availability: Option<RawAvailability>,
    pub additional: Option<RawAdditional>,
}

impl RawQuestionnaire {
    /// True when no section was submitted at all.
    pub fn is_empty(&self) -> bool {
        self.job_preferences.is_none()
            && self.skills.is_none()
            && self.availability.is_none()
            && self.additional.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawJobPreferences {
    #[serde(default, deserialize_with = "lenient::text")]
    pub preferred_role: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub contract_type: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub formatted_location: Option<String>,
    #[serde(default)]
    pub location_coordinates: Option<Value>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub remote_preference: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub salary_expectation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub start_date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSkills {
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub technical_skills: Vec<String>,
    /// Skill name → free-text level ("avancé", "notions", ...).
    #[serde(default, deserialize_with = "lenient::text_map")]
    pub technical_skill_levels: BTreeMap<String, String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub soft_skills: Vec<String>,
    /// Free-text entries such as "Anglais (B2)".
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub languages: Vec<String>,
    #[serde(default, deserialize_with = "lenient::text_list")]
    pub certifications: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAvailability {
    #[serde(default, deserialize_with = "lenient::text")]
    pub currently_employed: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_search_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub job_end_reason: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub notice_period: Option<String>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub notice_negotiable: Option<Answer>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub recruitment_status: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub interview_availability: Option<String>,
    #[serde(default, deserialize_with = "lenient::answer")]
    pub relocate_willing: Option<Answer>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAdditional {
    #[serde(default, deserialize_with = "lenient::text")]
    pub motivation: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub strengths: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub challenges: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub additional_info: Option<String>,
    /// Priority label → rank, values as submitted.
    #[serde(default, deserialize_with = "lenient::object")]
    pub priorities: BTreeMap<String, Value>,
}

/// Returns the value when it holds something other than whitespace.
pub fn filled(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
