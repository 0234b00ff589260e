pub mod lenient;
pub mod questionnaire;

pub use lenient::Answer;
pub use questionnaire::{
    RawAdditional, RawAvailability, RawJobPreferences, RawQuestionnaire, RawSkills,
};
