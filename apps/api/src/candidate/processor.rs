use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::candidate::consistency::check_consistency;
use crate::candidate::quality::compute_quality_score;
use crate::candidate::record::{ParsedRecord, ParsedSections, RecordMetadata};
use crate::candidate::sections::{
    parse_additional, parse_availability, parse_job_preferences, parse_skills,
};
use crate::candidate::tags::generate_tags;
use crate::candidate::validation::{validate_record, ValidationResult};
use crate::errors::AppError;
use crate::models::RawQuestionnaire;

/// Response envelope for one processed candidate.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedCandidate {
    pub original_data: Value,
    pub parsed_data: ParsedRecord,
    pub validation: ValidationResult,
}

/// Runs the four section parsers one after the other.
pub fn parse_sections(questionnaire: &RawQuestionnaire) -> ParsedSections {
    ParsedSections {
        job_preferences: parse_job_preferences(questionnaire.job_preferences.as_ref()),
        skills: parse_skills(questionnaire.skills.as_ref()),
        availability: parse_availability(questionnaire.availability.as_ref()),
        additional: parse_additional(questionnaire.additional.as_ref()),
    }
}

/// Runs the four section parsers on the blocking pool and waits for all of them.
/// Produces the same sections as [`parse_sections`].
pub async fn parse_sections_concurrent(
    questionnaire: RawQuestionnaire,
) -> Result<ParsedSections, AppError> {
    let RawQuestionnaire {
        job_preferences,
        skills,
        availability,
        additional,
    } = questionnaire;

    let (job_preferences, skills, availability, additional) = tokio::join!(
        tokio::task::spawn_blocking(move || parse_job_preferences(job_preferences.as_ref())),
        tokio::task::spawn_blocking(move || parse_skills(skills.as_ref())),
        tokio::task::spawn_blocking(move || parse_availability(availability.as_ref())),
        tokio::task::spawn_blocking(move || parse_additional(additional.as_ref())),
    );

    Ok(ParsedSections {
        job_preferences: job_preferences?,
        skills: skills?,
        availability: availability?,
        additional: additional?,
    })
}

/// Scores, cross-checks and tags a set of parsed sections.
pub fn assemble_record(sections: ParsedSections, parsed_at: DateTime<Utc>) -> ParsedRecord {
    debug!(
        role = %sections.job_preferences.normalized.preferred_role,
        technical_skills = sections.skills.normalized.technical_skills.len(),
        languages = sections.skills.normalized.languages.len(),
        employed = ?sections.availability.normalized.currently_employed,
        priorities = sections.additional.normalized.priorities.len(),
        "Sections parsed"
    );

    let data_quality = compute_quality_score(&sections);

    let inconsistencies = check_consistency(&sections);
    for inconsistency in &inconsistencies {
        warn!(kind = ?inconsistency.kind, "{}", inconsistency.message);
    }

    let tags = generate_tags(&sections);

    info!(
        overall = data_quality.overall,
        inconsistencies = inconsistencies.len(),
        tags = tags.len(),
        "Questionnaire processed"
    );

    ParsedRecord {
        sections,
        metadata: RecordMetadata {
            parsed_at,
            data_quality,
            inconsistencies,
        },
        tags,
    }
}

/// Normalizes, scores and tags a questionnaire. Never fails on domain data.
pub fn process(questionnaire: &RawQuestionnaire) -> ParsedRecord {
    assemble_record(parse_sections(questionnaire), Utc::now())
}

pub async fn process_concurrent(
    questionnaire: RawQuestionnaire,
) -> Result<ParsedRecord, AppError> {
    let sections = parse_sections_concurrent(questionnaire).await?;
    Ok(assemble_record(sections, Utc::now()))
}

/// Decodes a candidate payload (`{"questionnaire": {...}}`), processes it and
/// validates the result.
///
/// `null` and `{}` are rejected as empty. A missing or `null` questionnaire is
/// processed as an empty one and fails validation.
pub async fn process_candidate(
    payload: Value,
    parallel: bool,
) -> Result<ProcessedCandidate, AppError> {
    let questionnaire = match &payload {
        Value::Null => return Err(AppError::EmptyPayload),
        Value::Object(fields) if fields.is_empty() => return Err(AppError::EmptyPayload),
        Value::Object(fields) => match fields.get("questionnaire") {
            None | Some(Value::Null) => RawQuestionnaire::default(),
            Some(value) => serde_json::from_value::<RawQuestionnaire>(value.clone())
                .map_err(|e| AppError::InvalidPayload(format!("questionnaire: {e}")))?,
        },
        _ => {
            return Err(AppError::InvalidPayload(
                "expected a JSON object".to_string(),
            ))
        }
    };

    let submitted = !questionnaire.is_empty();
    let parsed_data = if parallel {
        process_concurrent(questionnaire).await?
    } else {
        process(&questionnaire)
    };
    let validation = validate_record(submitted.then_some(&parsed_data));

    Ok(ProcessedCandidate {
        original_data: payload,
        parsed_data,
        validation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn example_payload() -> Value {
        json!({
            "questionnaire": {
                "jobPreferences": {
                    "preferredRole": "Développeur Frontend",
                    "contractType": "CDI",
                    "location": "Paris",
                    "remotePreference": "Hybride",
                    "salaryExpectation": "45-50k",
                    "startDate": "2025-04-01"
                },
                "skills": {
                    "technicalSkills": ["JavaScript", "React", "TypeScript", "HTML", "CSS"],
                    "technicalSkillLevels": {
                        "JavaScript": "avancé",
                        "React": "intermédiaire",
                        "TypeScript": "débutant"
                    },
                    "softSkills": ["Communication", "Travail d'équipe", "Autonomie"],
                    "languages": ["Français (natif)", "Anglais (B2)"],
                    "certifications": ["AWS Certified Developer"]
                },
                "availability": {
                    "currentlyEmployed": "oui",
                    "jobSearchReason": "Manque de perspectives d'évolutions",
                    "noticePeriod": "2_mois",
                    "noticeNegotiable": "oui",
                    "recruitmentStatus": "entretiens",
                    "interviewAvailability": "Soirs et weekends",
                    "relocateWilling": false
                },
                "additional": {
                    "motivation": "Je cherche un environnement plus stimulant où je pourrai développer mes compétences.",
                    "strengths": "Grande capacité d'apprentissage et autonomie dans la résolution de problèmes.",
                    "challenges": "J'ai dû reprendre un projet complexe avec peu de documentation.",
                    "priorities": {
                        "Salaire et avantages": 2,
                        "Ambiance de travail": 1,
                        "Perspectives d'évolution": 3
                    }
                }
            }
        })
    }

    fn example_questionnaire() -> RawQuestionnaire {
        serde_json::from_value(example_payload()["questionnaire"].clone()).unwrap()
    }

    #[test]
    fn test_example_candidate_is_complete_and_consistent() {
        let record = process(&example_questionnaire());
        assert_eq!(record.metadata.data_quality.overall, 1.0);
        assert!(record.metadata.inconsistencies.is_empty());
        assert!(record.tags.contains(&"role:développeur frontend".to_string()));
        assert!(record.tags.contains(&"relocate:false".to_string()));

        let json = serde_json::to_value(&record).unwrap();
        assert!(json["metadata"].get("inconsistencies").is_none());
        assert_eq!(json["jobPreferences"]["normalized"]["salaryExpectation"]["min"], 45000.0);
        assert_eq!(json["jobPreferences"]["preferredRole"], "Développeur Frontend");
    }

    #[test]
    fn test_empty_questionnaire_scores_zero() {
        let record = process(&RawQuestionnaire::default());
        assert_eq!(record.metadata.data_quality.overall, 0.0);
        assert_eq!(record.sections, ParsedSections::default());
        assert!(record.tags.is_empty());

        let json = serde_json::to_value(&record).unwrap();
        for section in ["jobPreferences", "skills", "availability", "additional"] {
            assert!(json[section].is_object(), "{section} should be present");
        }
    }

    #[tokio::test]
    async fn test_concurrent_matches_sequential() {
        let questionnaire = example_questionnaire();
        let sequential = parse_sections(&questionnaire);
        let concurrent = parse_sections_concurrent(questionnaire).await.unwrap();
        assert_eq!(sequential, concurrent);
    }

    #[tokio::test]
    async fn test_process_candidate_envelope() {
        let payload = example_payload();
        let processed = process_candidate(payload.clone(), true).await.unwrap();
        assert_eq!(processed.original_data, payload);
        assert!(processed.validation.valid);
        assert!(processed.validation.errors.is_empty());

        let json = serde_json::to_value(&processed).unwrap();
        assert!(json.get("originalData").is_some());
        assert!(json.get("parsedData").is_some());
        assert_eq!(json["validation"]["valid"], true);
    }

    #[tokio::test]
    async fn test_process_candidate_rejects_empty_payload() {
        assert!(matches!(
            process_candidate(Value::Null, false).await,
            Err(AppError::EmptyPayload)
        ));
        assert!(matches!(
            process_candidate(json!({}), false).await,
            Err(AppError::EmptyPayload)
        ));
    }

    #[tokio::test]
    async fn test_process_candidate_rejects_bad_shapes() {
        assert!(matches!(
            process_candidate(json!([1, 2]), false).await,
            Err(AppError::InvalidPayload(_))
        ));
        assert!(matches!(
            process_candidate(json!({"questionnaire": {"skills": "Rust"}}), false).await,
            Err(AppError::InvalidPayload(_))
        ));
    }

    #[tokio::test]
    async fn test_missing_questionnaire_fails_validation() {
        let processed = process_candidate(json!({"candidateId": 7}), false)
            .await
            .unwrap();
        assert!(!processed.validation.valid);
        assert_eq!(processed.validation.errors.len(), 1);
        assert_eq!(processed.parsed_data.metadata.data_quality.overall, 0.0);
    }
}
