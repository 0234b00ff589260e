use serde::Serialize;

use crate::candidate::record::ParsedSections;
use crate::models::questionnaire::filled;

/// Completeness of each section in [0, 1] and their unweighted mean.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityScore {
    pub job_preferences: f64,
    pub skills: f64,
    pub availability: f64,
    pub additional: f64,
    pub overall: f64,
}

pub fn compute_quality_score(sections: &ParsedSections) -> QualityScore {
    let prefs = &sections.job_preferences.raw;
    let job_preferences = filled_ratio(&[
        filled(prefs.preferred_role.as_deref()).is_some(),
        filled(prefs.contract_type.as_deref()).is_some(),
        filled(prefs.location.as_deref()).is_some(),
        filled(prefs.remote_preference.as_deref()).is_some(),
        filled(prefs.salary_expectation.as_deref()).is_some(),
    ]);

    let skills = &sections.skills.raw;
    let skills = filled_ratio(&[
        any_filled(&skills.technical_skills),
        any_filled(&skills.soft_skills),
        any_filled(&skills.languages),
    ]);

    // Reasons are only kept when they apply to the employment status.
    let avail = &sections.availability;
    let availability = filled_ratio(&[
        filled(avail.currently_employed.as_deref()).is_some(),
        filled(avail.interview_availability.as_deref()).is_some(),
        filled(avail.job_search_reason.as_deref()).is_some()
            || filled(avail.job_end_reason.as_deref()).is_some(),
    ]);

    let extra = &sections.additional.raw;
    let additional = filled_ratio(&[
        filled(extra.motivation.as_deref()).is_some(),
        filled(extra.strengths.as_deref()).is_some(),
    ]);

    let overall = (job_preferences + skills + availability + additional) / 4.0;

    QualityScore {
        job_preferences,
        skills,
        availability,
        additional,
        overall,
    }
}

fn any_filled(items: &[String]) -> bool {
    items.iter().any(|item| filled(Some(item.as_str())).is_some())
}

fn filled_ratio(fields: &[bool]) -> f64 {
    if fields.is_empty() {
        return 0.0;
    }
    let count = fields.iter().filter(|f| **f).count();
    (count as f64 / fields.len() as f64).clamp(0.0, 1.0)
}
