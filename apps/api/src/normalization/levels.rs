//! Proficiency scales for technical skills (0–4) and spoken languages (0–7, CEFR).

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::normalization::text::clean;

/// Label used when no level was provided.
pub const UNSPECIFIED: &str = "Unspecified";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillLevel {
    pub label: String,
    pub value: u8,
}

impl SkillLevel {
    pub fn unspecified() -> Self {
        Self {
            label: UNSPECIFIED.to_string(),
            value: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cefr {
    A1,
    A2,
    B1,
    B2,
    C1,
    C2,
    Native,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageLevel {
    pub label: String,
    pub value: u8,
    pub cefr: Option<Cefr>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageProficiency {
    pub language: String,
    pub label: String,
    pub value: u8,
    pub cefr: Option<Cefr>,
}

/// Substring → (label, value). First match in declaration order wins.
const SKILL_LEVELS: &[(&str, &str, u8)] = &[
    ("débutant", "Débutant", 1),
    ("notions", "Débutant", 1),
    ("basique", "Débutant", 1),
    ("basic", "Débutant", 1),
    ("intermédiaire", "Intermédiaire", 2),
    ("intermediaire", "Intermédiaire", 2),
    ("avancé", "Avancé", 3),
    ("avance", "Avancé", 3),
    ("confirmé", "Avancé", 3),
    ("confirme", "Avancé", 3),
    ("expert", "Expert", 4),
    ("maître", "Expert", 4),
    ("maitre", "Expert", 4),
];

/// Substring → (label, value, CEFR). First match in declaration order wins, so the
/// CEFR codes shadow any word that happens to contain them.
const LANGUAGE_LEVELS: &[(&str, &str, u8, Cefr)] = &[
    ("a1", "Débutant", 1, Cefr::A1),
    ("a2", "Élémentaire", 2, Cefr::A2),
    ("b1", "Intermédiaire", 3, Cefr::B1),
    ("b2", "Avancé", 4, Cefr::B2),
    ("c1", "Autonome", 5, Cefr::C1),
    ("c2", "Maîtrise", 6, Cefr::C2),
    ("débutant", "Débutant", 1, Cefr::A1),
    ("elementaire", "Élémentaire", 2, Cefr::A2),
    ("élémentaire", "Élémentaire", 2, Cefr::A2),
    ("intermédiaire", "Intermédiaire", 3, Cefr::B1),
    ("intermediaire", "Intermédiaire", 3, Cefr::B1),
    ("avancé", "Avancé", 4, Cefr::B2),
    ("avance", "Avancé", 4, Cefr::B2),
    ("courant", "Autonome", 5, Cefr::C1),
    ("bilingue", "Maîtrise", 6, Cefr::C2),
    ("natif", "Langue maternelle", 7, Cefr::Native),
];

/// `<language>` followed by spaces/dashes and a level token, optionally parenthesized.
static LANGUAGE_WITH_LEVEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^(.*?)[\s-]+\(?([a-c][1-2]|débutant|élémentaire|elementaire|intermédiaire|intermediaire|avancé|avance|courant|bilingue|natif)\)?",
    )
    .expect("language level pattern is valid")
});

/// Maps a free-text skill level ("avancé", "notions", "Expert React") to the 0–4 scale.
pub fn normalize_skill_level(text: &str) -> SkillLevel {
    let level = clean(text);
    if level.is_empty() {
        return SkillLevel::unspecified();
    }

    SKILL_LEVELS
        .iter()
        .find(|(key, _, _)| level.contains(key))
        .map(|&(_, label, value)| SkillLevel {
            label: label.to_string(),
            value,
        })
        .unwrap_or_else(|| SkillLevel {
            label: capitalize(&level),
            value: 0,
        })
}

/// Maps a free-text language level ("B2", "courant", "natif") to the 0–7 scale.
pub fn normalize_language_level(text: &str) -> LanguageLevel {
    let level = clean(text);
    if level.is_empty() {
        return LanguageLevel {
            label: UNSPECIFIED.to_string(),
            value: 0,
            cefr: None,
        };
    }

    LANGUAGE_LEVELS
        .iter()
        .find(|(key, _, _, _)| level.contains(key))
        .map(|&(_, label, value, cefr)| LanguageLevel {
            label: label.to_string(),
            value,
            cefr: Some(cefr),
        })
        .unwrap_or_else(|| LanguageLevel {
            label: capitalize(&level),
            value: 0,
            cefr: None,
        })
}

/// Splits `"Anglais (B2)"` / `"Espagnol - courant"` into a language and its level.
/// Text without a recognizable level is taken whole as the language name.
pub fn parse_language(text: &str) -> Option<LanguageProficiency> {
    let cleaned = clean(text);
    if cleaned.is_empty() {
        return None;
    }

    let parsed = LANGUAGE_WITH_LEVEL.captures(&cleaned).and_then(|caps| {
        let name = caps.get(1)?.as_str().trim();
        let level = caps.get(2)?.as_str();
        Some((capitalize(name), normalize_language_level(level)))
    });

    let proficiency = match parsed {
        Some((language, level)) => LanguageProficiency {
            language,
            label: level.label,
            value: level.value,
            cefr: level.cefr,
        },
        None => LanguageProficiency {
            language: capitalize(&cleaned),
            label: UNSPECIFIED.to_string(),
            value: 0,
            cefr: None,
        },
    };
    Some(proficiency)
}

/// First character uppercased, the rest lowercased.
fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
