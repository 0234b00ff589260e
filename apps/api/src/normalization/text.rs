//! Text cleanup, fixed-vocabulary correction and key-term extraction.

use std::collections::{HashMap, HashSet};

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Source phrase → canonical form. Declaration order is the tie-break between sources
/// of equal length; a longer source always wins over a shorter one at the same position.
const CORRECTIONS: &[(&str, &str)] = &[
    // Tech stack
    ("js", "JavaScript"),
    ("react", "React"),
    ("react.js", "React"),
    ("reactjs", "React"),
    ("node", "Node.js"),
    ("nodejs", "Node.js"),
    ("node.js", "Node.js"),
    ("typescript", "TypeScript"),
    ("ts", "TypeScript"),
    ("python", "Python"),
    ("php", "PHP"),
    ("css", "CSS"),
    ("css3", "CSS"),
    ("html", "HTML"),
    ("html5", "HTML"),
    ("postgresql", "PostgreSQL"),
    ("postgre", "PostgreSQL"),
    ("mysql", "MySQL"),
    ("mongodb", "MongoDB"),
    ("mongo", "MongoDB"),
    ("nosql", "NoSQL"),
    // Contract types and work mode
    ("cdi", "CDI"),
    ("cdd", "CDD"),
    ("freelance", "Freelance"),
    ("remote", "Télétravail"),
    ("teletravail", "Télétravail"),
    ("télétravail", "Télétravail"),
    ("onsite", "Sur site"),
    ("sur site", "Sur site"),
    // Employment status
    ("en poste", "oui"),
    ("actuellement en poste", "oui"),
    ("sans emploi", "non"),
    ("au chômage", "non"),
    ("chomage", "non"),
    // Job search reasons
    ("salaire", "Rémunération trop faible"),
    ("pas assez payé", "Rémunération trop faible"),
    ("trop peu payé", "Rémunération trop faible"),
    ("evolution", "Manque de perspectives d'évolutions"),
    ("évolution", "Manque de perspectives d'évolutions"),
    ("pas d'évolution", "Manque de perspectives d'évolutions"),
    ("loin de chez moi", "Poste trop loin de mon domicile"),
    ("trop de trajet", "Poste trop loin de mon domicile"),
    ("temps de trajet", "Poste trop loin de mon domicile"),
    ("trop de transport", "Poste trop loin de mon domicile"),
    // Notice period
    ("pas de préavis", "Je n'en ai pas, encore en période d'essai"),
    ("période d'essai", "Je n'en ai pas, encore en période d'essai"),
    ("periode essai", "Je n'en ai pas, encore en période d'essai"),
    ("1 mois", "1 mois"),
    ("2 mois", "2 mois"),
    ("3 mois", "3 mois"),
];

const STOP_WORDS: &[&str] = &[
    "le", "la", "les", "un", "une", "des", "et", "ou", "mais", "donc", "car", "à", "au", "aux",
    "ce", "ces", "cette", "cet", "de", "du", "en", "par", "pour", "sur", "je", "tu", "il", "elle",
    "nous", "vous", "ils", "elles", "mon", "ton", "son", "ma", "ta", "sa", "mes", "tes", "ses",
    "notre", "votre", "leur", "nos", "vos", "leurs",
];

/// Upper bound on rewrite passes while converging to a fixed point.
const MAX_REWRITE_PASSES: usize = 4;

struct CorrectionRules {
    pattern: Regex,
    canonical_by_source: HashMap<String, &'static str>,
}

impl CorrectionRules {
    fn build() -> Self {
        let mut ordered: Vec<(String, &'static str)> = Vec::new();
        let mut seen = HashSet::new();

        // Canonical forms map to themselves so corrected text is a fixed point.
        let identities = CORRECTIONS.iter().map(|&(_, canonical)| (canonical, canonical));
        for (source, canonical) in CORRECTIONS.iter().copied().chain(identities) {
            let key = source.to_lowercase();
            if seen.insert(key.clone()) {
                ordered.push((key, canonical));
            }
        }

        // Stable: equal-length sources keep declaration order.
        ordered.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

        let alternatives: Vec<String> = ordered.iter().map(|(s, _)| regex::escape(s)).collect();
        let pattern = Regex::new(&format!(r"(?i)\b(?:{})\b", alternatives.join("|")))
            .expect("correction table compiles to a valid regex");

        Self {
            pattern,
            canonical_by_source: ordered.into_iter().collect(),
        }
    }

    fn rewrite(&self, cleaned: &str) -> String {
        self.pattern
            .replace_all(cleaned, |caps: &Captures| {
                let matched = &caps[0];
                self.canonical_by_source
                    .get(&matched.to_lowercase())
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned()
    }
}

static RULES: Lazy<CorrectionRules> = Lazy::new(CorrectionRules::build);

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Lowercases, trims and collapses whitespace runs. Empty input yields an empty string.
pub fn clean(text: &str) -> String {
    text.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Cleans the text, then rewrites whole-word occurrences of known misspellings and
/// synonyms to their canonical form.
///
/// At each position the longest table entry wins, ties go to the earlier entry.
/// The output is stable: `correct(&correct(x)) == correct(x)`.
pub fn correct(text: &str) -> String {
    let mut current = RULES.rewrite(&clean(text));
    for _ in 0..MAX_REWRITE_PASSES {
        let next = RULES.rewrite(&clean(&current));
        if next == current {
            break;
        }
        current = next;
    }
    current
}

/// Word tokens of the cleaned text, minus short tokens (≤ 2 chars) and French stop words.
/// Order and duplicates are preserved.
pub fn extract_key_terms(text: &str) -> Vec<String> {
    let cleaned = clean(text);
    WORD.find_iter(&cleaned)
        .map(|m| m.as_str())
        .filter(|term| term.chars().count() > 2 && !STOP_WORDS.contains(term))
        .map(String::from)
        .collect()
}
