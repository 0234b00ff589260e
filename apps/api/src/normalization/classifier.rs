//! Keyword-set classification of free-text answers into semantic categories.
//!
//! Membership is plain substring containment on the cleaned text, unlike
//! [`correct`](super::text::correct) which matches whole words only.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::normalization::text::clean;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Experience,
    Availability,
    Location,
    Salary,
    HardSkills,
    SoftSkills,
}

const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Experience,
        &[
            "ans",
            "experience",
            "expérience",
            "senior",
            "junior",
            "débutant",
            "confirmé",
            "expert",
            "intermédiaire",
            "avancé",
            "niveau",
        ],
    ),
    (
        Category::Availability,
        &[
            "disponible",
            "disponibilité",
            "immédiatement",
            "immédiate",
            "préavis",
            "preavis",
            "délai",
            "attente",
            "commencer",
            "débuter",
        ],
    ),
    (
        Category::Location,
        &[
            "ville",
            "région",
            "département",
            "adresse",
            "localité",
            "zone",
            "domicile",
            "habite",
            "distance",
            "kilomètres",
            "km",
        ],
    ),
    (
        Category::Salary,
        &[
            "salaire",
            "rémunération",
            "remuneration",
            "package",
            "brut",
            "net",
            "annuel",
            "mensuel",
            "k€",
            "keur",
            "ke",
            "euros",
            "€",
            "prétention",
        ],
    ),
    (
        Category::HardSkills,
        &[
            "compétence",
            "competence",
            "technique",
            "langage",
            "framework",
            "outil",
            "technologie",
            "logiciel",
            "maîtrise",
            "maitrise",
            "niveau",
        ],
    ),
    (
        Category::SoftSkills,
        &[
            "soft skill",
            "softskill",
            "qualité",
            "qualite",
            "humaine",
            "communication",
            "équipe",
            "equipe",
            "collaboration",
            "autonomie",
            "adaptabilité",
        ],
    ),
];

/// Every category with at least one keyword contained in the cleaned text.
pub fn classify(text: &str) -> BTreeSet<Category> {
    let cleaned = clean(text);
    if cleaned.is_empty() {
        return BTreeSet::new();
    }

    CATEGORY_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| cleaned.contains(k)))
        .map(|(category, _)| *category)
        .collect()
}

/// Per-category confidence: `min(matches / max(keywords × 0.3, 1), 1.0)`.
pub fn confidence(text: &str) -> BTreeMap<Category, f64> {
    let cleaned = clean(text);

    CATEGORY_KEYWORDS
        .iter()
        .map(|(category, keywords)| {
            let matches = keywords.iter().filter(|k| cleaned.contains(*k)).count();
            let denominator = (keywords.len() as f64 * 0.3).max(1.0);
            let score = if cleaned.is_empty() {
                0.0
            } else {
                (matches as f64 / denominator).min(1.0)
            };
            (*category, score)
        })
        .collect()
}
