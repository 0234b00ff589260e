use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use serde_json::Value;

use crate::models::RawAdditional;
use crate::normalization::{classify, clean, extract_key_terms, Category};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeyTerms {
    pub motivation: Vec<String>,
    pub strengths: Vec<String>,
    pub challenges: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerCategories {
    pub motivation: BTreeSet<Category>,
    pub strengths: BTreeSet<Category>,
    pub challenges: BTreeSet<Category>,
    pub additional_info: BTreeSet<Category>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAdditional {
    pub key_terms: KeyTerms,
    pub categories: AnswerCategories,
    /// Cleaned priority label → integer rank (0 when the rank is not a number).
    pub priorities: BTreeMap<String, i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AdditionalSection {
    #[serde(flatten)]
    pub raw: RawAdditional,
    pub normalized: NormalizedAdditional,
}

pub fn parse_additional(raw: Option<&RawAdditional>) -> AdditionalSection {
    let raw = raw.cloned().unwrap_or_default();

    let terms = |v: &Option<String>| v.as_deref().map(extract_key_terms).unwrap_or_default();
    let categories = |v: &Option<String>| v.as_deref().map(classify).unwrap_or_default();

    let normalized = NormalizedAdditional {
        key_terms: KeyTerms {
            motivation: terms(&raw.motivation),
            strengths: terms(&raw.strengths),
            challenges: terms(&raw.challenges),
        },
        categories: AnswerCategories {
            motivation: categories(&raw.motivation),
            strengths: categories(&raw.strengths),
            challenges: categories(&raw.challenges),
            additional_info: categories(&raw.additional_info),
        },
        priorities: normalize_priorities(&raw.priorities),
    };

    AdditionalSection { raw, normalized }
}

fn normalize_priorities(priorities: &BTreeMap<String, Value>) -> BTreeMap<String, i64> {
    priorities
        .iter()
        .map(|(label, rank)| (clean(label), priority_rank(rank)))
        .collect()
}

fn priority_rank(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        Value::Bool(b) => i64::from(*b),
        Value::Null | Value::Array(_) | Value::Object(_) => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_section_is_defaulted() {
        assert_eq!(parse_additional(None), AdditionalSection::default());
    }

    #[test]
    fn test_key_terms_and_categories() {
        let raw = RawAdditional {
            motivation: Some("Je cherche une meilleure rémunération".to_string()),
            strengths: Some("Autonomie et communication".to_string()),
            additional_info: Some("Disponible immédiatement".to_string()),
            ..Default::default()
        };
        let section = parse_additional(Some(&raw));
        assert_eq!(
            section.normalized.key_terms.motivation,
            vec!["cherche", "meilleure", "rémunération"]
        );
        assert!(section.normalized.key_terms.challenges.is_empty());
        assert!(section
            .normalized
            .categories
            .motivation
            .contains(&Category::Salary));
        assert!(section
            .normalized
            .categories
            .strengths
            .contains(&Category::SoftSkills));
        assert!(section
            .normalized
            .categories
            .additional_info
            .contains(&Category::Availability));
    }

    #[test]
    fn test_priorities_are_coerced_to_integers() {
        let raw = RawAdditional {
            priorities: BTreeMap::from([
                ("Salaire et avantages".to_string(), json!(2)),
                ("Ambiance".to_string(), json!("1")),
                ("Télétravail".to_string(), json!(3.7)),
                ("Localisation".to_string(), json!("haute")),
                ("Équipe".to_string(), json!(null)),
            ]),
            ..Default::default()
        };
        let priorities = parse_additional(Some(&raw)).normalized.priorities;
        assert_eq!(priorities["salaire et avantages"], 2);
        assert_eq!(priorities["ambiance"], 1);
        assert_eq!(priorities["télétravail"], 3);
        assert_eq!(priorities["localisation"], 0);
        assert_eq!(priorities["équipe"], 0);
    }
}
