pub mod consistency;
pub mod handlers;
pub mod processor;
pub mod quality;
pub mod record;
pub mod sections;
pub mod tags;
pub mod validation;

pub use processor::{process, process_candidate, ProcessedCandidate};
pub use record::{ParsedRecord, ParsedSections};
pub use validation::{validate_record, ValidationResult};
