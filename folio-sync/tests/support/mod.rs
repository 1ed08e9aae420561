//! Shared row builders and mock-store helpers for the sync tests.

#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, Utc};
use folio_types::{Certificate, Project, Skill, WorkExperience};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn stamp() -> DateTime<Utc> {
    "2024-01-01T00:00:00Z".parse().unwrap()
}

pub fn project(title: &str) -> Project {
    Project {
        id: Uuid::new_v4(),
        user_id: None,
        title: title.into(),
        description: "built for testing".into(),
        technologies: vec![],
        image_url: None,
        github_url: None,
        demo_url: None,
        featured: false,
        display_order: 0,
        created_at: stamp(),
        updated_at: stamp(),
    }
}

pub fn skill(name: &str, category: &str) -> Skill {
    Skill {
        id: Uuid::new_v4(),
        user_id: None,
        name: name.into(),
        category: category.into(),
        proficiency_level: 3,
        display_order: 0,
        created_at: stamp(),
        updated_at: stamp(),
    }
}

pub fn experience(start: &str, end: Option<&str>, current: bool) -> WorkExperience {
    WorkExperience {
        id: Uuid::new_v4(),
        user_id: None,
        company: "Acme".into(),
        title: "Engineer".into(),
        location: None,
        start_date: date(start),
        end_date: end.map(date),
        current,
        display_order: 0,
        created_at: stamp(),
        updated_at: stamp(),
    }
}

pub fn certificate(title: &str) -> Certificate {
    Certificate {
        id: Uuid::new_v4(),
        user_id: None,
        title: title.into(),
        issuer: "Cert Authority".into(),
        issue_date: None,
        expiry_date: None,
        credential_id: None,
        credential_url: None,
        image_url: None,
        display_order: 0,
        created_at: stamp(),
        updated_at: stamp(),
    }
}

/// Mounts every watched collection as empty, the state of a freshly
/// provisioned site.
pub async fn mount_empty_collections(server: &MockServer) {
    for table in folio_sync::WATCHED_TABLES {
        Mock::given(method("GET"))
            .and(path(format!("/{table}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(server)
            .await;
    }
}

/// Counts GET requests the mock store has seen for one table.
pub async fn fetch_count(server: &MockServer, table: &str) -> usize {
    server
        .received_requests()
        .await
        .unwrap()
        .iter()
        .filter(|req| req.url.path() == format!("/{table}"))
        .count()
}
