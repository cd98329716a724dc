use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::person::{Person, PersonStatus};

/// One detection event as recorded by the log store.
///
/// `name` and `status` are copies taken from the matched person at
/// detection time, not live references; editing the person later does
/// not rewrite history. The log is append-only and ordered
/// most-recent-first by insertion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionLog {
    pub id: u64,
    pub name: String,
    pub timestamp: DateTime<Utc>,
    pub status: PersonStatus,
    pub location: String,
}

/// Detection event payload; the store assigns `id` and `timestamp`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionLogDraft {
    pub name: String,
    pub status: PersonStatus,
    pub location: String,
}

impl DetectionLogDraft {
    /// Denormalizes the matched person into a draft for `location`.
    pub fn for_person(person: &Person, location: impl Into<String>) -> Self {
        Self {
            name: person.name.clone(),
            status: person.status,
            location: location.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_copies_person_fields() {
        let person = Person {
            id: "p-1".into(),
            name: "Priya Sharma".into(),
            status: PersonStatus::Banned,
            image: String::new(),
            last_seen: Utc::now(),
        };
        let draft = DetectionLogDraft::for_person(&person, "Loading Dock");
        assert_eq!(draft.name, "Priya Sharma");
        assert_eq!(draft.status, PersonStatus::Banned);
        assert_eq!(draft.location, "Loading Dock");
    }

    #[test]
    fn test_log_round_trips_through_json() {
        let log = DetectionLog {
            id: 7,
            name: "Alice Johnson".into(),
            timestamp: "2025-03-14T09:26:00Z".parse().unwrap(),
            status: PersonStatus::Allowed,
            location: "Lobby".into(),
        };
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"timestamp\""));
        let back: DetectionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(back, log);
    }
}
