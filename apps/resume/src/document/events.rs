use serde::{Deserialize, Serialize};

use crate::models::fields::{EducationField, ExperienceField, PersonalField};

/// One user edit, as produced by the form.
///
/// Decoded from JSON tagged by `op`, e.g.
/// `{"op":"set_experience","index":0,"field":"startDate","value":"2020"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditEvent {
    SetPersonal {
        field: PersonalField,
        value: String,
    },
    SetSummary {
        value: String,
    },
    SetExperience {
        index: usize,
        field: ExperienceField,
        value: String,
    },
    AppendExperience,
    SetEducation {
        index: usize,
        field: EducationField,
        value: String,
    },
    AppendEducation,
    SetSkill {
        index: usize,
        value: String,
    },
    AppendSkill,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_set_experience() {
        let event: EditEvent = serde_json::from_str(
            r#"{"op":"set_experience","index":2,"field":"endDate","value":"Present"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            EditEvent::SetExperience {
                index: 2,
                field: ExperienceField::EndDate,
                value: "Present".to_string(),
            }
        );
    }

    #[test]
    fn test_decode_append() {
        let event: EditEvent = serde_json::from_str(r#"{"op":"append_skill"}"#).unwrap();
        assert_eq!(event, EditEvent::AppendSkill);
    }

    #[test]
    fn test_rejects_unknown_personal_field() {
        let result = serde_json::from_str::<EditEvent>(
            r#"{"op":"set_personal","field":"twitter","value":"@ada"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_unknown_op() {
        assert!(serde_json::from_str::<EditEvent>(r#"{"op":"remove_skill","index":0}"#).is_err());
    }
}
