//! Document Model Controller: the single owner of the resume being edited.
//!
//! Every edit derives a new `ResumeDocument` from the current one and swaps it
//! in. Snapshots handed out earlier keep pointing at the value they were taken
//! from, so a preview computed from a snapshot can never observe a half-applied
//! edit.

use std::sync::Arc;

use tracing::debug;

use crate::document::events::EditEvent;
use crate::errors::DocumentError;
use crate::models::fields::{EducationField, ExperienceField, PersonalField};
use crate::models::resume::ResumeDocument;
use crate::preview::{build_preview, Preview};

#[derive(Debug, Clone, Default)]
pub struct DocumentController {
    document: Arc<ResumeDocument>,
}

impl DocumentController {
    /// Starts a session with a blank document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self) -> &ResumeDocument {
        &self.document
    }

    /// Returns a handle to the current document value. Later edits do not affect it.
    pub fn snapshot(&self) -> Arc<ResumeDocument> {
        Arc::clone(&self.document)
    }

    /// Recomputes the Rendered Preview from current state.
    pub fn preview(&self) -> Preview {
        build_preview(&self.document)
    }

    fn replace(&mut self, next: ResumeDocument) {
        self.document = Arc::new(next);
    }

    pub fn set_personal_field(&mut self, field: PersonalField, value: impl Into<String>) {
        debug!(section = "personal", %field, "edit");
        let next = self.document.with_personal_field(field, value);
        self.replace(next);
    }

    pub fn set_summary(&mut self, text: impl Into<String>) {
        debug!(section = "summary", "edit");
        let next = self.document.with_summary(text);
        self.replace(next);
    }

    pub fn set_experience_field(
        &mut self,
        index: usize,
        field: ExperienceField,
        value: impl Into<String>,
    ) -> Result<(), DocumentError> {
        debug!(section = "experience", index, %field, "edit");
        let next = self.document.with_experience_field(index, field, value)?;
        self.replace(next);
        Ok(())
    }

    pub fn append_experience(&mut self) {
        let next = self.document.with_appended_experience();
        debug!(section = "experience", len = next.experience.len(), "append");
        self.replace(next);
    }

    pub fn set_education_field(
        &mut self,
        index: usize,
        field: EducationField,
        value: impl Into<String>,
    ) -> Result<(), DocumentError> {
        debug!(section = "education", index, %field, "edit");
        let next = self.document.with_education_field(index, field, value)?;
        self.replace(next);
        Ok(())
    }

    pub fn append_education(&mut self) {
        let next = self.document.with_appended_education();
        debug!(section = "education", len = next.education.len(), "append");
        self.replace(next);
    }

    pub fn set_skill(&mut self, index: usize, value: impl Into<String>) -> Result<(), DocumentError> {
        debug!(section = "skills", index, "edit");
        let next = self.document.with_skill(index, value)?;
        self.replace(next);
        Ok(())
    }

    pub fn append_skill(&mut self) {
        let next = self.document.with_appended_skill();
        debug!(section = "skills", len = next.skills.len(), "append");
        self.replace(next);
    }

    /// Dispatches one input event to the matching operation.
    pub fn apply(&mut self, event: EditEvent) -> Result<(), DocumentError> {
        match event {
            EditEvent::SetPersonal { field, value } => self.set_personal_field(field, value),
            EditEvent::SetSummary { value } => self.set_summary(value),
            EditEvent::SetExperience {
                index,
                field,
                value,
            } => self.set_experience_field(index, field, value)?,
            EditEvent::AppendExperience => self.append_experience(),
            EditEvent::SetEducation {
                index,
                field,
                value,
            } => self.set_education_field(index, field, value)?,
            EditEvent::AppendEducation => self.append_education(),
            EditEvent::SetSkill { index, value } => self.set_skill(index, value)?,
            EditEvent::AppendSkill => self.append_skill(),
        }
        Ok(())
    }
}
