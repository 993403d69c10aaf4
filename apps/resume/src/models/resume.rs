use serde::{Deserialize, Serialize};

use crate::errors::DocumentError;
use crate::models::fields::{EducationField, ExperienceField, PersonalField, Section};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    /// Profile link. Rendered as a "LinkedIn" hyperlink with the raw URL as target.
    pub linkedin: String,
}

impl PersonalInfo {
    pub fn get(&self, field: PersonalField) -> &str {
        match field {
            PersonalField::Name => &self.name,
            PersonalField::Email => &self.email,
            PersonalField::Phone => &self.phone,
            PersonalField::Location => &self.location,
            PersonalField::Linkedin => &self.linkedin,
        }
    }

    fn slot(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::Name => &mut self.name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Location => &mut self.location,
            PersonalField::Linkedin => &mut self.linkedin,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ExperienceEntry {
    pub fn get(&self, field: ExperienceField) -> &str {
        match field {
            ExperienceField::Title => &self.title,
            ExperienceField::Company => &self.company,
            ExperienceField::Location => &self.location,
            ExperienceField::StartDate => &self.start_date,
            ExperienceField::EndDate => &self.end_date,
            ExperienceField::Description => &self.description,
        }
    }

    fn slot(&mut self, field: ExperienceField) -> &mut String {
        match field {
            ExperienceField::Title => &mut self.title,
            ExperienceField::Company => &mut self.company,
            ExperienceField::Location => &mut self.location,
            ExperienceField::StartDate => &mut self.start_date,
            ExperienceField::EndDate => &mut self.end_date,
            ExperienceField::Description => &mut self.description,
        }
    }

    /// An entry shows up in the preview once it has a title or a company.
    pub fn is_presentable(&self) -> bool {
        !self.title.is_empty() || !self.company.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub location: String,
    pub graduation_date: String,
    pub gpa: String,
}

impl EducationEntry {
    pub fn get(&self, field: EducationField) -> &str {
        match field {
            EducationField::Degree => &self.degree,
            EducationField::School => &self.school,
            EducationField::Location => &self.location,
            EducationField::GraduationDate => &self.graduation_date,
            EducationField::Gpa => &self.gpa,
        }
    }

    fn slot(&mut self, field: EducationField) -> &mut String {
        match field {
            EducationField::Degree => &mut self.degree,
            EducationField::School => &mut self.school,
            EducationField::Location => &mut self.location,
            EducationField::GraduationDate => &mut self.graduation_date,
            EducationField::Gpa => &mut self.gpa,
        }
    }

    pub fn is_presentable(&self) -> bool {
        !self.degree.is_empty() || !self.school.is_empty()
    }
}

/// Aggregate root of the resume being edited.
///
/// Every collection starts with one blank row so the form always has
/// something to edit. Rows are only ever appended, never removed, and their
/// order is presentation order.
///
/// The `with_*` methods never touch `self`; they return the edited copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<String>,
}

impl Default for ResumeDocument {
    fn default() -> Self {
        Self {
            personal_info: PersonalInfo::default(),
            summary: String::new(),
            experience: vec![ExperienceEntry::default()],
            education: vec![EducationEntry::default()],
            skills: vec![String::new()],
        }
    }
}

impl ResumeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_personal_field(&self, field: PersonalField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        *next.personal_info.slot(field) = value.into();
        next
    }

    pub fn with_summary(&self, text: impl Into<String>) -> Self {
        Self {
            summary: text.into(),
            ..self.clone()
        }
    }

    pub fn with_experience_field(
        &self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<Self, DocumentError> {
        check_bounds(Section::Experience, index, self.experience.len())?;
        let mut next = self.clone();
        *next.experience[index].slot(field) = value.into();
        Ok(next)
    }

    pub fn with_appended_experience(&self) -> Self {
        let mut next = self.clone();
        next.experience.push(ExperienceEntry::default());
        next
    }

    pub fn with_education_field(
        &self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<Self, DocumentError> {
        check_bounds(Section::Education, index, self.education.len())?;
        let mut next = self.clone();
        *next.education[index].slot(field) = value.into();
        Ok(next)
    }

    pub fn with_appended_education(&self) -> Self {
        let mut next = self.clone();
        next.education.push(EducationEntry::default());
        next
    }

    pub fn with_skill(&self, index: usize, value: impl Into<String>) -> Result<Self, DocumentError> {
        check_bounds(Section::Skills, index, self.skills.len())?;
        let mut next = self.clone();
        next.skills[index] = value.into();
        Ok(next)
    }

    pub fn with_appended_skill(&self) -> Self {
        let mut next = self.clone();
        next.skills.push(String::new());
        next
    }
}

fn check_bounds(section: Section, index: usize, len: usize) -> Result<(), DocumentError> {
    if index < len {
        Ok(())
    } else {
        Err(DocumentError::IndexOutOfBounds {
            section,
            index,
            len,
        })
    }
}
