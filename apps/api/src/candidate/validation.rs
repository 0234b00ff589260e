use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::candidate::record::ParsedRecord;
use crate::candidate::sections::{
    AvailabilitySection, EmploymentStatus, JobPreferencesSection, SkillsSection,
};
use crate::models::questionnaire::filled;

/// Digits, separators, `k` and `€` only: "40k€", "40-50k", "45 000".
static SALARY_FORMAT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^[\d\s.,k€-]+$").expect("valid salary format regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Default)]
struct Findings {
    errors: Vec<String>,
    warnings: Vec<String>,
    suggestions: Vec<String>,
}

impl Findings {
    fn warn(&mut self, message: &str) {
        self.warnings.push(message.to_string());
    }

    fn suggest(&mut self, message: &str) {
        self.suggestions.push(message.to_string());
    }

    fn into_result(self) -> ValidationResult {
        ValidationResult {
            valid: self.errors.is_empty(),
            errors: self.errors,
            warnings: self.warnings,
            suggestions: self.suggestions,
        }
    }
}

/// Checks a processed record for missing or malformed answers.
///
/// Only a fully absent submission is an error. Everything else is a warning,
/// sometimes paired with a suggestion, and never affects `valid`.
pub fn validate_record(record: Option<&ParsedRecord>) -> ValidationResult {
    let Some(record) = record else {
        let mut findings = Findings::default();
        findings.errors.push("No questionnaire data was submitted".to_string());
        return findings.into_result();
    };

    let mut findings = Findings::default();
    validate_job_preferences(&record.sections.job_preferences, &mut findings);
    validate_skills(&record.sections.skills, &mut findings);
    validate_availability(&record.sections.availability, &mut findings);
    findings.into_result()
}

fn validate_job_preferences(section: &JobPreferencesSection, findings: &mut Findings) {
    let raw = &section.raw;

    if filled(raw.preferred_role.as_deref()).is_none() {
        findings.warn("The preferred role is not specified");
        findings.suggest("Specify the preferred role to improve matching accuracy");
    }
    if filled(raw.contract_type.as_deref()).is_none() {
        findings.warn("The contract type is not specified");
    }
    if filled(raw.location.as_deref()).is_none() {
        findings.warn("The location is not specified");
    }
    if let Some(salary) = filled(raw.salary_expectation.as_deref()) {
        if !SALARY_FORMAT.is_match(salary) {
            findings.warn("The salary expectation format is incorrect");
            findings.suggest("Express the salary expectation as \"40K€\" or \"40-50K€\"");
        }
    }
}

fn validate_skills(section: &SkillsSection, findings: &mut Findings) {
    let normalized = &section.normalized;

    if normalized.technical_skills.is_empty() {
        findings.warn("No technical skills are specified");
        findings.suggest("Add technical skills to improve matching");
    }
    if normalized.soft_skills.is_empty() {
        findings.warn("No soft skills are specified");
    }
    if normalized.languages.is_empty() {
        findings.warn("No languages are specified");
    }
}

fn validate_availability(section: &AvailabilitySection, findings: &mut Findings) {
    let submitted = filled(section.currently_employed.as_deref());

    match (submitted, section.normalized.currently_employed) {
        (None, _) => findings.warn("The employment status is not specified"),
        (Some(_), None) => {
            findings.warn("The employment status is not recognized");
            findings.suggest("Answer the employment status question with \"oui\" or \"non\"");
        }
        (Some(_), Some(EmploymentStatus::Employed)) => {
            if section.normalized.job_search_reason.is_none() {
                findings.warn("The job search reason is not specified");
            }
            if section.normalized.notice_period.is_none() {
                findings.warn("The notice period is not specified");
            }
        }
        (Some(_), Some(EmploymentStatus::NotEmployed)) => {
            if section.normalized.job_end_reason.is_none() {
                findings.warn("The reason the last contract ended is not specified");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidate::processor::process;
    use crate::models::{RawAvailability, RawJobPreferences, RawQuestionnaire, RawSkills};

    fn validate(questionnaire: &RawQuestionnaire) -> ValidationResult {
        validate_record(Some(&process(questionnaire)))
    }

    #[test]
    fn test_absent_input_is_invalid() {
        let result = validate_record(None);
        assert!(!result.valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_sparse_record_is_valid_with_warnings() {
        let questionnaire = RawQuestionnaire {
            skills: Some(RawSkills {
                technical_skills: vec!["Rust".into()],
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = validate(&questionnaire);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result
            .warnings
            .contains(&"The preferred role is not specified".to_string()));
        assert!(result
            .warnings
            .contains(&"The employment status is not specified".to_string()));
        assert!(!result
            .warnings
            .contains(&"No technical skills are specified".to_string()));
    }

    #[test]
    fn test_salary_format() {
        let with_salary = |salary: &str| RawQuestionnaire {
            job_preferences: Some(RawJobPreferences {
                salary_expectation: Some(salary.into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let bad = "The salary expectation format is incorrect".to_string();

        assert!(!validate(&with_salary("40-50K€")).warnings.contains(&bad));
        assert!(!validate(&with_salary("45 000")).warnings.contains(&bad));

        let result = validate(&with_salary("environ 45k par an"));
        assert!(result.warnings.contains(&bad));
        assert!(result.suggestions.iter().any(|s| s.contains("40-50K€")));
    }

    #[test]
    fn test_employed_without_reason_or_notice() {
        let questionnaire = RawQuestionnaire {
            availability: Some(RawAvailability {
                currently_employed: Some("oui".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let warnings = validate(&questionnaire).warnings;
        assert!(warnings.contains(&"The job search reason is not specified".to_string()));
        assert!(warnings.contains(&"The notice period is not specified".to_string()));
        assert!(!warnings.iter().any(|w| w.contains("last contract")));
    }

    #[test]
    fn test_not_employed_without_end_reason() {
        let questionnaire = RawQuestionnaire {
            availability: Some(RawAvailability {
                currently_employed: Some("Sans emploi".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let warnings = validate(&questionnaire).warnings;
        assert!(warnings
            .contains(&"The reason the last contract ended is not specified".to_string()));
        assert!(!warnings.iter().any(|w| w.contains("notice period")));
    }

    #[test]
    fn test_unrecognized_status() {
        let questionnaire = RawQuestionnaire {
            availability: Some(RawAvailability {
                currently_employed: Some("freelance".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let result = validate(&questionnaire);
        assert!(result.valid);
        assert!(result
            .warnings
            .contains(&"The employment status is not recognized".to_string()));
        assert!(!result.suggestions.is_empty());
    }
}
