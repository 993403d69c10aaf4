pub mod fields;
pub mod resume;

pub use fields::{EducationField, ExperienceField, PersonalField, Section};
pub use resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};
