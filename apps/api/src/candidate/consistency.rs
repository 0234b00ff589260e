use serde::Serialize;

use crate::candidate::record::ParsedSections;
use crate::models::questionnaire::filled;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InconsistencyType {
    SkillMismatch,
    SalaryExperienceMismatch,
}

/// A plausible contradiction between declared answers. Advisory only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Inconsistency {
    #[serde(rename = "type")]
    pub kind: InconsistencyType,
    pub message: String,
}

struct RoleRule {
    role: &'static str,
    role_markers: &'static [&'static str],
    expected_skills: &'static [&'static str],
}

const ROLE_RULES: &[RoleRule] = &[
    RoleRule {
        role: "Frontend",
        role_markers: &["frontend", "front-end"],
        expected_skills: &["html", "css", "javascript", "react", "vue", "angular"],
    },
    RoleRule {
        role: "Backend",
        role_markers: &["backend", "back-end"],
        expected_skills: &["python", "java", "c#", "nodejs", "php", "sql", "mongo"],
    },
];

/// Mean skill level at or below which a candidate is treated as a beginner.
const BEGINNER_LEVEL_CEILING: f64 = 1.5;
/// Yearly minimum above which a beginner's expectation is flagged.
const BEGINNER_SALARY_CEILING: f64 = 50_000.0;

/// Runs every cross-field rule. Rules whose inputs are missing emit nothing.
pub fn check_consistency(sections: &ParsedSections) -> Vec<Inconsistency> {
    let mut inconsistencies = check_role_skills(sections);
    inconsistencies.extend(check_salary_experience(sections));
    inconsistencies
}

/// Preferred role vs. declared technical skills. Skills are matched by substring
/// against the joined, lowercased list.
fn check_role_skills(sections: &ParsedSections) -> Vec<Inconsistency> {
    let role = match filled(sections.job_preferences.raw.preferred_role.as_deref()) {
        Some(role) => role.to_lowercase(),
        None => return Vec::new(),
    };
    let declared = &sections.skills.raw.technical_skills;
    if declared.is_empty() {
        return Vec::new();
    }
    let skills_text = declared.join(" ").to_lowercase();

    ROLE_RULES
        .iter()
        .filter(|rule| rule.role_markers.iter().any(|m| role.contains(m)))
        .filter(|rule| !rule.expected_skills.iter().any(|s| skills_text.contains(s)))
        .map(|rule| Inconsistency {
            kind: InconsistencyType::SkillMismatch,
            message: format!(
                "The preferred role ({}) does not match the declared technical skills",
                rule.role
            ),
        })
        .collect()
}

fn check_salary_experience(sections: &ParsedSections) -> Option<Inconsistency> {
    let mean_level = sections.skills.normalized.mean_level()?;
    let min_salary = sections
        .job_preferences
        .normalized
        .salary_expectation
        .min
        .filter(|m| *m > 0.0)?;

    (mean_level <= BEGINNER_LEVEL_CEILING && min_salary > BEGINNER_SALARY_CEILING).then(|| {
        Inconsistency {
            kind: InconsistencyType::SalaryExperienceMismatch,
            message: format!(
                "A beginner skill level (mean {mean_level:.1}) looks inconsistent with a {min_salary:.0} salary expectation"
            ),
        }
    })
}
