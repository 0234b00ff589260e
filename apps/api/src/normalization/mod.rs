// Deterministic, table-driven normalizers for free-text questionnaire answers.
// Every function here is total: malformed input degrades to a default, never an error.

pub mod classifier;
pub mod levels;
pub mod salary;
pub mod text;

pub use classifier::{classify, confidence, Category};
pub use levels::{
    normalize_language_level, normalize_skill_level, parse_language, Cefr, LanguageProficiency,
    SkillLevel,
};
pub use salary::{parse_salary, Currency, PayPeriod, SalaryRange};
pub use text::{clean, correct, extract_key_terms};
