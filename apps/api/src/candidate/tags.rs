use crate::candidate::record::ParsedSections;
use crate::models::questionnaire::filled;

/// Projects the submitted answers onto `dimension:value` matching tags.
///
/// Order is fixed: job preferences, technical skills, languages, employment,
/// relocation. Duplicates are kept; consumers treat the list as a set.
pub fn generate_tags(sections: &ParsedSections) -> Vec<String> {
    let mut tags = Vec::new();

    let prefs = &sections.job_preferences.raw;
    for (dimension, value) in [
        ("role", &prefs.preferred_role),
        ("contract", &prefs.contract_type),
        ("remote", &prefs.remote_preference),
    ] {
        if let Some(value) = filled(value.as_deref()) {
            tags.push(tag(dimension, value));
        }
    }

    let skills = &sections.skills.raw;
    tags.extend(
        skills
            .technical_skills
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| tag("skill", s)),
    );
    tags.extend(
        skills
            .languages
            .iter()
            .filter(|l| !l.trim().is_empty())
            .map(|l| tag("language", l)),
    );

    let availability = &sections.availability;
    if let Some(status) = filled(availability.currently_employed.as_deref()) {
        tags.push(tag("employed", status));
    }
    // An explicit `false` still produces a tag.
    if let Some(relocate) = &availability.relocate_willing {
        tags.push(tag("relocate", &relocate.to_string()));
    }

    tags
}

fn tag(dimension: &str, value: &str) -> String {
    format!("{dimension}:{}", value.to_lowercase())
}
