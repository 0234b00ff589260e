//! Per-section parsers. Each one is a pure function of its own raw section and
//! returns the raw answers next to their `normalized` form. An absent section
//! produces the same output as an empty one.

pub mod additional;
pub mod availability;
pub mod job_preferences;
pub mod skills;

pub use additional::{parse_additional, AdditionalSection};
pub use availability::{parse_availability, AvailabilitySection, EmploymentStatus};
pub use job_preferences::{parse_job_preferences, JobPreferencesSection};
pub use skills::{parse_skills, SkillsSection};
