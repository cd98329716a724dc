use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Roster status of an enrolled person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PersonStatus {
    Allowed,
    Banned,
}

impl PersonStatus {
    pub const ALL: &[PersonStatus] = &[PersonStatus::Allowed, PersonStatus::Banned];
}

impl std::fmt::Display for PersonStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonStatus::Allowed => write!(f, "allowed"),
            PersonStatus::Banned => write!(f, "banned"),
        }
    }
}

impl std::str::FromStr for PersonStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "allowed" => Ok(PersonStatus::Allowed),
            "banned" => Ok(PersonStatus::Banned),
            other => Err(format!(
                "status must be 'allowed' or 'banned', got '{other}'"
            )),
        }
    }
}

/// An enrolled person as the store holds it.
///
/// `id` is store-assigned and immutable. `last_seen` is also
/// store-assigned: it is set on creation and refreshed through
/// `PersonStore::mark_seen`, never through a client update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: String,
    pub name: String,
    pub status: PersonStatus,
    #[serde(default)]
    pub image: String,
    pub last_seen: DateTime<Utc>,
}

/// Creation payload: a person without the system-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonDraft {
    pub name: String,
    pub status: PersonStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Partial update: unspecified fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PersonStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl PersonUpdate {
    /// Shallow merge: overwrites each field that is present.
    pub fn apply_to(&self, person: &mut Person) {
        if let Some(name) = &self.name {
            person.name = name.clone();
        }
        if let Some(status) = self.status {
            person.status = status;
        }
        if let Some(image) = &self.image {
            person.image = image.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn person() -> Person {
        Person {
            id: "p-1".into(),
            name: "Alice Johnson".into(),
            status: PersonStatus::Allowed,
            image: "https://example.com/alice.jpg".into(),
            last_seen: Utc::now(),
        }
    }

    #[rstest]
    #[case::allowed("allowed", PersonStatus::Allowed)]
    #[case::banned("banned", PersonStatus::Banned)]
    fn test_status_parses_wire_strings(#[case] input: &str, #[case] expected: PersonStatus) {
        assert_eq!(input.parse::<PersonStatus>().unwrap(), expected);
    }

    #[test]
    fn test_status_rejects_unknown_value() {
        assert!("vip".parse::<PersonStatus>().is_err());
    }

    #[test]
    fn test_status_display_matches_wire_format() {
        assert_eq!(PersonStatus::Allowed.to_string(), "allowed");
        assert_eq!(PersonStatus::Banned.to_string(), "banned");
    }

    #[test]
    fn test_person_serializes_camel_case() {
        let json = serde_json::to_value(person()).unwrap();
        assert!(json.get("lastSeen").is_some());
        assert_eq!(json["status"], "allowed");
    }

    #[test]
    fn test_person_deserializes_without_image() {
        let json = r#"{
            "id": "p-2",
            "name": "Marcus Webb",
            "status": "banned",
            "lastSeen": "2025-03-14T09:26:00Z"
        }"#;
        let p: Person = serde_json::from_str(json).unwrap();
        assert_eq!(p.status, PersonStatus::Banned);
        assert!(p.image.is_empty());
    }

    #[test]
    fn test_update_overwrites_present_fields() {
        let mut p = person();
        let update = PersonUpdate {
            name: Some("Alice J. Smith".into()),
            status: Some(PersonStatus::Banned),
            image: None,
        };
        update.apply_to(&mut p);
        assert_eq!(p.name, "Alice J. Smith");
        assert_eq!(p.status, PersonStatus::Banned);
        assert_eq!(p.image, "https://example.com/alice.jpg");
    }

    #[test]
    fn test_empty_update_preserves_everything() {
        let mut p = person();
        let before = p.clone();
        PersonUpdate::default().apply_to(&mut p);
        assert_eq!(p, before);
    }

    #[test]
    fn test_update_serializes_only_present_fields() {
        let update = PersonUpdate {
            status: Some(PersonStatus::Banned),
            ..PersonUpdate::default()
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json.as_object().unwrap().len(), 1);
        assert_eq!(json["status"], "banned");
    }
}
