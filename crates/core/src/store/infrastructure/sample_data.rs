use chrono::{Duration, Utc};

use crate::shared::detection_log::DetectionLog;
use crate::shared::person::{Person, PersonStatus};

/// Seed roster for local operation and demos.
pub fn sample_persons() -> Vec<Person> {
    let now = Utc::now();
    vec![
        Person {
            id: "5f7c2b1e-8c44-4b1a-9a10-3d2f6c8e4a01".into(),
            name: "Alice Johnson".into(),
            status: PersonStatus::Allowed,
            image: "https://randomuser.me/api/portraits/women/44.jpg".into(),
            last_seen: now - Duration::minutes(12),
        },
        Person {
            id: "9d41a6f3-0b72-4c88-bb1d-7e5a2c9f8b02".into(),
            name: "Marcus Webb".into(),
            status: PersonStatus::Banned,
            image: "https://randomuser.me/api/portraits/men/32.jpg".into(),
            last_seen: now - Duration::hours(3),
        },
        Person {
            id: "1c8e5d2a-6f90-4e37-8c44-b0a37d1e6c03".into(),
            name: "Priya Sharma".into(),
            status: PersonStatus::Allowed,
            image: "https://randomuser.me/api/portraits/women/68.jpg".into(),
            last_seen: now - Duration::days(1),
        },
        Person {
            id: "7b3f9c4d-2e81-4a56-9f02-c6d48e0a5b04".into(),
            name: "Tom Okafor".into(),
            status: PersonStatus::Allowed,
            image: String::new(),
            last_seen: now - Duration::days(4),
        },
    ]
}

/// Seed detection log, most-recent-first with descending ids so the
/// head is the newest insertion.
pub fn sample_logs() -> Vec<DetectionLog> {
    let now = Utc::now();
    vec![
        DetectionLog {
            id: 4,
            name: "Marcus Webb".into(),
            timestamp: now - Duration::minutes(9),
            status: PersonStatus::Banned,
            location: "Loading Dock".into(),
        },
        DetectionLog {
            id: 3,
            name: "Alice Johnson".into(),
            timestamp: now - Duration::minutes(12),
            status: PersonStatus::Allowed,
            location: "Main Entrance".into(),
        },
        DetectionLog {
            id: 2,
            name: "Priya Sharma".into(),
            timestamp: now - Duration::hours(26),
            status: PersonStatus::Allowed,
            location: "Lobby".into(),
        },
        DetectionLog {
            id: 1,
            name: "Alice Johnson".into(),
            timestamp: now - Duration::days(2),
            status: PersonStatus::Allowed,
            location: "Main Entrance".into(),
        },
    ]
}
