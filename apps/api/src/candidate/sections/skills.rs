use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::RawSkills;
use crate::normalization::{
    clean, correct, normalize_skill_level, parse_language, LanguageProficiency, SkillLevel,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSkills {
    pub technical_skills: Vec<String>,
    /// Corrected skill name → ordinal level.
    pub technical_skill_levels: BTreeMap<String, SkillLevel>,
    pub soft_skills: Vec<String>,
    pub languages: Vec<LanguageProficiency>,
}

impl NormalizedSkills {
    /// Mean of the declared technical skill levels, `None` when no level was declared.
    pub fn mean_level(&self) -> Option<f64> {
        if self.technical_skill_levels.is_empty() {
            return None;
        }
        let total: u32 = self
            .technical_skill_levels
            .values()
            .map(|l| u32::from(l.value))
            .sum();
        Some(f64::from(total) / self.technical_skill_levels.len() as f64)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillsSection {
    #[serde(flatten)]
    pub raw: RawSkills,
    pub normalized: NormalizedSkills,
}

pub fn parse_skills(raw: Option<&RawSkills>) -> SkillsSection {
    let raw = raw.cloned().unwrap_or_default();

    let technical_skills = raw
        .technical_skills
        .iter()
        .map(|s| correct(s))
        .filter(|s| !s.is_empty())
        .collect();

    let technical_skill_levels = raw
        .technical_skill_levels
        .iter()
        .filter_map(|(skill, level)| {
            let skill = correct(skill);
            (!skill.is_empty()).then(|| (skill, normalize_skill_level(level)))
        })
        .collect();

    let soft_skills = raw
        .soft_skills
        .iter()
        .map(|s| clean(s))
        .filter(|s| !s.is_empty())
        .collect();

    let languages = raw
        .languages
        .iter()
        .filter_map(|l| parse_language(l))
        .collect();

    SkillsSection {
        normalized: NormalizedSkills {
            technical_skills,
            technical_skill_levels,
            soft_skills,
            languages,
        },
        raw,
    }
}
