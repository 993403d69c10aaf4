//! Rendered Preview: the display-ready projection of a `ResumeDocument`.
//!
//! `build_preview` is a pure function of the document. Nothing here is stored;
//! callers recompute it whenever they need to show or print the resume.

pub mod html;

use serde::{Deserialize, Serialize};

use crate::models::resume::{EducationEntry, ExperienceEntry, PersonalInfo, ResumeDocument};

/// Stable identifier of the printable region. Print targets select exactly
/// this element and nothing else.
pub const PREVIEW_HANDLE: &str = "resume-preview";

const CONTACT_SEPARATOR: &str = " | ";
const PROFILE_LINK_LABEL: &str = "LinkedIn";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preview {
    pub handle: String,
    pub header: HeaderBlock,
    pub summary: Option<String>,
    pub experience: Option<Vec<ExperienceItem>>,
    pub education: Option<Vec<EducationItem>>,
    pub skills: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderBlock {
    pub name: String,
    /// Email and phone, joined with " | " when both are present.
    pub contact_line: String,
    pub location_line: LocationLine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationLine {
    pub location: String,
    /// Raw profile URL, used verbatim as the link target.
    pub profile_url: Option<String>,
}

impl LocationLine {
    pub fn profile_label(&self) -> Option<&'static str> {
        self.profile_url.as_ref().map(|_| PROFILE_LINK_LABEL)
    }

    /// Goes between location and profile link; empty unless both are present.
    pub fn separator(&self) -> &'static str {
        if self.location.is_empty() || self.profile_url.is_none() {
            ""
        } else {
            CONTACT_SEPARATOR
        }
    }

    pub fn is_empty(&self) -> bool {
        self.location.is_empty() && self.profile_url.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub title: String,
    pub date_range: String,
    pub company_line: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub graduation_date: String,
    pub school_line: String,
    pub gpa_line: Option<String>,
}

/// Builds the preview for `doc`.
pub fn build_preview(doc: &ResumeDocument) -> Preview {
    Preview {
        handle: PREVIEW_HANDLE.to_string(),
        header: build_header(&doc.personal_info),
        summary: non_empty(&doc.summary).map(str::to_string),
        experience: presentable(&doc.experience, ExperienceEntry::is_presentable, experience_item),
        education: presentable(&doc.education, EducationEntry::is_presentable, education_item),
        skills: build_skills(&doc.skills),
    }
}

fn build_header(info: &PersonalInfo) -> HeaderBlock {
    HeaderBlock {
        name: info.name.clone(),
        contact_line: join_present(&[info.email.as_str(), info.phone.as_str()], CONTACT_SEPARATOR),
        location_line: LocationLine {
            location: info.location.clone(),
            profile_url: non_empty(&info.linkedin).map(str::to_string),
        },
    }
}

/// Maps the presentable entries, or `None` when there are none so the
/// section is left out entirely.
fn presentable<E, T>(
    entries: &[E],
    keep: impl Fn(&E) -> bool,
    render: impl Fn(&E) -> T,
) -> Option<Vec<T>> {
    let items: Vec<T> = entries.iter().filter(|e| keep(*e)).map(render).collect();
    (!items.is_empty()).then_some(items)
}

fn experience_item(entry: &ExperienceEntry) -> ExperienceItem {
    ExperienceItem {
        title: entry.title.clone(),
        date_range: date_range(&entry.start_date, &entry.end_date),
        company_line: join_present(&[entry.company.as_str(), entry.location.as_str()], ", "),
        description: entry.description.clone(),
    }
}

fn education_item(entry: &EducationEntry) -> EducationItem {
    EducationItem {
        degree: entry.degree.clone(),
        graduation_date: entry.graduation_date.clone(),
        school_line: join_present(&[entry.school.as_str(), entry.location.as_str()], ", "),
        gpa_line: non_empty(&entry.gpa).map(|gpa| format!("GPA: {gpa}")),
    }
}

fn build_skills(skills: &[String]) -> Option<Vec<String>> {
    let tags: Vec<String> = skills.iter().filter(|s| !s.is_empty()).cloned().collect();
    (!tags.is_empty()).then_some(tags)
}

/// Dates are shown exactly as typed. The dash is dropped only when both ends are blank.
fn date_range(start: &str, end: &str) -> String {
    if start.is_empty() && end.is_empty() {
        String::new()
    } else {
        format!("{start} – {end}")
    }
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .copied()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DocumentController;
    use crate::models::fields::{EducationField, ExperienceField, PersonalField};

    fn doc_with_contact(email: &str, phone: &str) -> ResumeDocument {
        ResumeDocument::new()
            .with_personal_field(PersonalField::Email, email)
            .with_personal_field(PersonalField::Phone, phone)
    }

    #[test]
    fn test_contact_line_email_only() {
        let preview = build_preview(&doc_with_contact("a@x.com", ""));
        assert_eq!(preview.header.contact_line, "a@x.com");
    }

    #[test]
    fn test_contact_line_both() {
        let preview = build_preview(&doc_with_contact("a@x.com", "555-1234"));
        assert_eq!(preview.header.contact_line, "a@x.com | 555-1234");
    }

    #[test]
    fn test_contact_line_phone_only_has_no_leading_separator() {
        let preview = build_preview(&doc_with_contact("", "555-1234"));
        assert_eq!(preview.header.contact_line, "555-1234");
    }

    #[test]
    fn test_location_line_keeps_raw_profile_url() {
        let doc = ResumeDocument::new()
            .with_personal_field(PersonalField::Location, "London")
            .with_personal_field(PersonalField::Linkedin, "https://linkedin.com/in/ada");
        let line = build_preview(&doc).header.location_line;
        assert_eq!(line.profile_url.as_deref(), Some("https://linkedin.com/in/ada"));
        assert_eq!(line.profile_label(), Some("LinkedIn"));
        assert_eq!(line.separator(), " | ");
    }

    #[test]
    fn test_location_line_separator_needs_both_parts() {
        let location_only =
            ResumeDocument::new().with_personal_field(PersonalField::Location, "London");
        let line = build_preview(&location_only).header.location_line;
        assert_eq!(line.profile_label(), None);
        assert_eq!(line.separator(), "");

        let link_only = ResumeDocument::new()
            .with_personal_field(PersonalField::Linkedin, "https://linkedin.com/in/ada");
        assert_eq!(build_preview(&link_only).header.location_line.separator(), "");
    }

    #[test]
    fn test_experience_block_visibility() {
        let blank = ResumeDocument::new();
        assert_eq!(build_preview(&blank).experience, None);

        let titled = blank
            .with_experience_field(0, ExperienceField::Title, "Engineer")
            .unwrap();
        let items = build_preview(&titled).experience.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Engineer");
    }

    #[test]
    fn test_blank_experience_entries_are_skipped_individually() {
        let doc = ResumeDocument::new()
            .with_appended_experience()
            .with_appended_experience()
            .with_experience_field(1, ExperienceField::Company, "Acme")
            .unwrap()
            .with_experience_field(1, ExperienceField::Location, "Berlin")
            .unwrap()
            .with_experience_field(1, ExperienceField::StartDate, "Jan 2020")
            .unwrap()
            .with_experience_field(1, ExperienceField::EndDate, "Present")
            .unwrap()
            .with_experience_field(2, ExperienceField::Description, "orphan")
            .unwrap();

        let items = build_preview(&doc).experience.unwrap();
        assert_eq!(
            items,
            vec![ExperienceItem {
                title: String::new(),
                date_range: "Jan 2020 – Present".to_string(),
                company_line: "Acme, Berlin".to_string(),
                description: String::new(),
            }]
        );
    }

    #[test]
    fn test_date_range_is_verbatim() {
        assert_eq!(date_range("2019", ""), "2019 – ");
        assert_eq!(date_range("", ""), "");
        assert_eq!(date_range("sometime", "later"), "sometime – later");
    }

    #[test]
    fn test_education_gpa_line_only_when_present() {
        let doc = ResumeDocument::new()
            .with_education_field(0, EducationField::Degree, "BSc")
            .unwrap()
            .with_education_field(0, EducationField::School, "MIT")
            .unwrap()
            .with_appended_education()
            .with_education_field(1, EducationField::School, "ETH")
            .unwrap()
            .with_education_field(1, EducationField::Gpa, "5.8")
            .unwrap();

        let items = build_preview(&doc).education.unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].school_line, "MIT");
        assert_eq!(items[0].gpa_line, None);
        assert_eq!(items[1].gpa_line.as_deref(), Some("GPA: 5.8"));
    }

    #[test]
    fn test_education_hidden_when_only_gpa_set() {
        let doc = ResumeDocument::new()
            .with_education_field(0, EducationField::Gpa, "4.0")
            .unwrap();
        assert_eq!(build_preview(&doc).education, None);
    }

    #[test]
    fn test_skills_filter_blanks_and_keep_order() {
        let mut doc = ResumeDocument::new();
        doc.skills = vec![
            String::new(),
            "Go".to_string(),
            String::new(),
            "Rust".to_string(),
        ];
        let preview = build_preview(&doc);
        assert_eq!(preview.skills, Some(vec!["Go".to_string(), "Rust".to_string()]));
        assert_eq!(doc.skills.len(), 4);
    }

    #[test]
    fn test_skills_hidden_when_all_blank() {
        let doc = ResumeDocument::new().with_appended_skill();
        assert_eq!(build_preview(&doc).skills, None);
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let doc = doc_with_contact("a@x.com", "555")
            .with_summary("Hi")
            .with_skill(0, "Rust")
            .unwrap();
        assert_eq!(build_preview(&doc), build_preview(&doc));
        assert_eq!(
            html::render_fragment(&build_preview(&doc)),
            html::render_fragment(&build_preview(&doc))
        );
    }

    #[test]
    fn test_end_to_end_name_then_summary() {
        let mut c = DocumentController::new();
        c.set_personal_field(PersonalField::Name, "Ada Lovelace");

        let preview = c.preview();
        assert_eq!(preview.header.name, "Ada Lovelace");
        assert_eq!(preview.summary, None);
        assert_eq!(preview.handle, PREVIEW_HANDLE);

        c.set_summary("");
        assert_eq!(c.preview().summary, None);

        c.set_summary("First programmer.");
        assert_eq!(c.preview().summary.as_deref(), Some("First programmer."));
    }
}
