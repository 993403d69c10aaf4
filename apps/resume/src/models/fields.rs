//! Typed field keys for the editable sections of a resume.
//!
//! The wire names match the form keys (`startDate`, `graduationDate`, ...), so
//! an edit event names a field exactly the way the form does.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DocumentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Personal,
    Summary,
    Experience,
    Education,
    Skills,
}

impl Section {
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    Name,
    Email,
    Phone,
    Location,
    Linkedin,
}

impl PersonalField {
    pub const ALL: [PersonalField; 5] = [
        PersonalField::Name,
        PersonalField::Email,
        PersonalField::Phone,
        PersonalField::Location,
        PersonalField::Linkedin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PersonalField::Name => "name",
            PersonalField::Email => "email",
            PersonalField::Phone => "phone",
            PersonalField::Location => "location",
            PersonalField::Linkedin => "linkedin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExperienceField {
    Title,
    Company,
    Location,
    StartDate,
    EndDate,
    Description,
}

impl ExperienceField {
    pub const ALL: [ExperienceField; 6] = [
        ExperienceField::Title,
        ExperienceField::Company,
        ExperienceField::Location,
        ExperienceField::StartDate,
        ExperienceField::EndDate,
        ExperienceField::Description,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceField::Title => "title",
            ExperienceField::Company => "company",
            ExperienceField::Location => "location",
            ExperienceField::StartDate => "startDate",
            ExperienceField::EndDate => "endDate",
            ExperienceField::Description => "description",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Degree,
    School,
    Location,
    GraduationDate,
    Gpa,
}

impl EducationField {
    pub const ALL: [EducationField; 5] = [
        EducationField::Degree,
        EducationField::School,
        EducationField::Location,
        EducationField::GraduationDate,
        EducationField::Gpa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EducationField::Degree => "degree",
            EducationField::School => "school",
            EducationField::Location => "location",
            EducationField::GraduationDate => "graduationDate",
            EducationField::Gpa => "gpa",
        }
    }
}

// FromStr goes through the same wire names as serde.
macro_rules! impl_field_from_str {
    ($ty:ty, $section:expr) => {
        impl FromStr for $ty {
            type Err = DocumentError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <$ty>::ALL
                    .into_iter()
                    .find(|f| f.as_str() == s)
                    .ok_or_else(|| DocumentError::UnknownField {
                        section: $section,
                        field: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_field_from_str!(PersonalField, Section::Personal);
impl_field_from_str!(ExperienceField, Section::Experience);
impl_field_from_str!(EducationField, Section::Education);
