use serde::Serialize;

use crate::models::questionnaire::filled;
use crate::models::{Answer, RawAvailability};
use crate::normalization::correct;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EmploymentStatus {
    #[serde(rename = "oui")]
    Employed,
    #[serde(rename = "non")]
    NotEmployed,
}

impl EmploymentStatus {
    /// Reads a status answer after correction ("actuellement en poste" → "oui").
    /// Anything other than a plain yes/no is unknown.
    pub fn from_answer(text: &str) -> Option<Self> {
        match correct(text).as_str() {
            "oui" => Some(Self::Employed),
            "non" => Some(Self::NotEmployed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAvailability {
    pub currently_employed: Option<EmploymentStatus>,
    pub job_search_reason: Option<String>,
    pub job_end_reason: Option<String>,
    pub notice_period: Option<String>,
    pub notice_negotiable: Option<Answer>,
    pub relocate_willing: Option<Answer>,
}

/// Raw availability answers, keeping the status-dependent ones only when they apply:
/// search reason and notice for employed candidates, end reason for the others.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySection {
    pub currently_employed: Option<String>,
    pub interview_availability: Option<String>,
    pub recruitment_status: Option<String>,
    pub relocate_willing: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_search_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_negotiable: Option<Answer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_end_reason: Option<String>,
    pub normalized: NormalizedAvailability,
}

pub fn parse_availability(raw: Option<&RawAvailability>) -> AvailabilitySection {
    let raw = raw.cloned().unwrap_or_default();

    let status = raw
        .currently_employed
        .as_deref()
        .and_then(EmploymentStatus::from_answer);
    let employed = status == Some(EmploymentStatus::Employed);
    let not_employed = status == Some(EmploymentStatus::NotEmployed);

    let normalized = NormalizedAvailability {
        currently_employed: status,
        job_search_reason: normalized_answer(raw.job_search_reason.as_deref())
            .filter(|_| employed),
        job_end_reason: normalized_answer(raw.job_end_reason.as_deref()).filter(|_| not_employed),
        notice_period: normalized_answer(raw.notice_period.as_deref()),
        notice_negotiable: raw.notice_negotiable.clone(),
        relocate_willing: raw.relocate_willing.clone(),
    };

    AvailabilitySection {
        currently_employed: raw.currently_employed,
        interview_availability: raw.interview_availability,
        recruitment_status: raw.recruitment_status,
        relocate_willing: raw.relocate_willing,
        job_search_reason: raw.job_search_reason.filter(|_| employed),
        notice_period: raw.notice_period.filter(|_| employed),
        notice_negotiable: raw.notice_negotiable.filter(|_| employed),
        job_end_reason: raw.job_end_reason.filter(|_| not_employed),
        normalized,
    }
}

fn normalized_answer(value: Option<&str>) -> Option<String> {
    filled(value).map(correct)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(status: &str) -> RawAvailability {
        RawAvailability {
            currently_employed: Some(status.to_string()),
            job_search_reason: Some("pas assez payé".to_string()),
            job_end_reason: Some("fin de contrat".to_string()),
            notice_period: Some("2 mois".to_string()),
            notice_negotiable: Some(Answer::Text("oui".to_string())),
            interview_availability: Some("Soirs".to_string()),
            relocate_willing: Some(Answer::Flag(false)),
            ..Default::default()
        }
    }

    #[test]
    fn test_employed_keeps_search_reason_only() {
        let section = parse_availability(Some(&raw("Oui")));
        assert_eq!(
            section.normalized.currently_employed,
            Some(EmploymentStatus::Employed)
        );
        assert_eq!(
            section.normalized.job_search_reason.as_deref(),
            Some("Rémunération trop faible")
        );
        assert!(section.normalized.job_end_reason.is_none());
        assert_eq!(section.job_search_reason.as_deref(), Some("pas assez payé"));
        assert_eq!(section.notice_period.as_deref(), Some("2 mois"));
        assert!(section.job_end_reason.is_none());
    }

    #[test]
    fn test_not_employed_keeps_end_reason_only() {
        let section = parse_availability(Some(&raw("non")));
        assert_eq!(
            section.normalized.currently_employed,
            Some(EmploymentStatus::NotEmployed)
        );
        assert!(section.normalized.job_search_reason.is_none());
        assert_eq!(
            section.normalized.job_end_reason.as_deref(),
            Some("fin de contrat")
        );
        assert!(section.job_search_reason.is_none());
        assert!(section.notice_period.is_none());
        assert_eq!(section.job_end_reason.as_deref(), Some("fin de contrat"));
    }

    #[test]
    fn test_unknown_status_drops_both_reasons() {
        let section = parse_availability(Some(&raw("peut-être")));
        assert!(section.normalized.currently_employed.is_none());
        assert!(section.normalized.job_search_reason.is_none());
        assert!(section.normalized.job_end_reason.is_none());
        assert!(section.job_search_reason.is_none());
        assert!(section.job_end_reason.is_none());
    }

    #[test]
    fn test_status_phrases_are_corrected() {
        assert_eq!(
            EmploymentStatus::from_answer("Actuellement en poste"),
            Some(EmploymentStatus::Employed)
        );
        assert_eq!(
            EmploymentStatus::from_answer("sans emploi"),
            Some(EmploymentStatus::NotEmployed)
        );
        assert_eq!(EmploymentStatus::from_answer(""), None);
    }

    #[test]
    fn test_absent_section_is_defaulted() {
        let section = parse_availability(None);
        assert_eq!(section, AvailabilitySection::default());
        let json = serde_json::to_value(&section).unwrap();
        assert!(json.get("jobSearchReason").is_none());
        assert_eq!(json["currentlyEmployed"], serde_json::Value::Null);
    }

    #[test]
    fn test_relocate_false_is_kept() {
        let section = parse_availability(Some(&raw("oui")));
        assert_eq!(section.relocate_willing, Some(Answer::Flag(false)));
        assert_eq!(
            section.normalized.relocate_willing,
            Some(Answer::Flag(false))
        );
    }
}
