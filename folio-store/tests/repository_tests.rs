use folio_store::{ChangeFeed, ChangeHub, Repository, StoreConfig, StoreError, TableClient};
use folio_types::coerce::split_list;
use folio_types::{ChangeOp, ContactDraft, Profile, Project, ProjectDraft};
use pretty_assertions::assert_eq;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> TableClient {
    TableClient::new(StoreConfig::new(server.uri(), "anon-key"))
}

fn project_row(title: &str, technologies: &[&str]) -> serde_json::Value {
    json!({
        "id": Uuid::new_v4(),
        "user_id": Uuid::new_v4(),
        "title": title,
        "description": "built for testing",
        "technologies": technologies,
        "image_url": null,
        "github_url": null,
        "demo_url": null,
        "featured": false,
        "display_order": 0,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z",
    })
}

fn valid_draft() -> ProjectDraft {
    ProjectDraft {
        title: "Portfolio".into(),
        description: "Personal site".into(),
        ..ProjectDraft::default()
    }
}

// ── Reads ────────────────────────────────────────────────────────

#[tokio::test]
async fn list_on_empty_table_returns_empty_vec() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(query_param("order", "display_order.asc,created_at.asc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let repo: Repository<Project> = Repository::new(client(&server));
    let rows = repo.list().await.unwrap();
    assert!(rows.is_empty());
}

#[tokio::test]
async fn list_sends_the_anonymous_key_as_bearer() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/projects"))
        .and(header("authorization", "Bearer anon-key"))
        .and(header("apikey", "anon-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let repo: Repository<Project> = Repository::new(client(&server));
    repo.list().await.unwrap();
}

#[tokio::test]
async fn get_one_on_empty_table_is_none_not_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let repo: Repository<Profile> = Repository::new(client(&server));
    assert!(repo.get_one().await.unwrap().is_none());
}

#[tokio::test]
async fn get_one_picks_the_first_row_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles"))
        .and(query_param("order", "display_order.asc,created_at.asc"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": Uuid::new_v4(),
            "user_id": null,
            "full_name": "Ada",
            "title": null,
            "bio": null,
            "location": null,
            "email": null,
            "phone": null,
            "linkedin_url": null,
            "github_url": null,
            "profile_image_url": null,
            "display_order": 0,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z",
        }])))
        .mount(&server)
        .await;

    let repo: Repository<Profile> = Repository::new(client(&server));
    let profile = repo.get_one().await.unwrap().unwrap();
    assert_eq!(profile.full_name.as_deref(), Some("Ada"));
}

#[tokio::test]
async fn store_failure_on_read_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/profiles"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let repo: Repository<Profile> = Repository::new(client(&server));
    let err = repo.get_one().await.unwrap_err();
    assert!(matches!(err, StoreError::Api { status: 500, .. }));
}

// ── Writes ───────────────────────────────────────────────────────

#[tokio::test]
async fn create_with_missing_fields_issues_no_request() {
    let server = MockServer::start().await;

    let repo: Repository<Project> = Repository::new(client(&server));
    let err = repo
        .create("owner-token", Uuid::new_v4(), &ProjectDraft::default())
        .await
        .unwrap_err();

    match err {
        StoreError::Validation(v) => assert_eq!(v.fields, vec!["title", "description"]),
        other => panic!("expected validation error, got {other:?}"),
    }
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_stamps_owner_id_and_timestamp() {
    let server = MockServer::start().await;
    let owner = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(header("authorization", "Bearer owner-token"))
        .and(header("Prefer", "return=representation"))
        .and(body_partial_json(json!({
            "title": "Portfolio",
            "user_id": owner,
        })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!([project_row("Portfolio", &[])])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repo: Repository<Project> = Repository::new(client(&server));
    repo.create("owner-token", owner, &valid_draft()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("updated_at").is_some());
}

#[tokio::test]
async fn technologies_round_trip_as_an_ordered_list() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .and(body_partial_json(json!({
            "technologies": ["React", "Node.js"],
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!([project_row(
            "Portfolio",
            &["React", "Node.js"],
        )])))
        .expect(1)
        .mount(&server)
        .await;

    let draft = ProjectDraft {
        technologies: split_list("React, Node.js"),
        ..valid_draft()
    };
    let repo: Repository<Project> = Repository::new(client(&server));
    let project = repo.create("owner-token", Uuid::new_v4(), &draft).await.unwrap();
    assert_eq!(project.technologies, vec!["React", "Node.js"]);
}

#[tokio::test]
async fn rls_rejection_maps_to_denied() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .respond_with(
            ResponseTemplate::new(403).set_body_string("new row violates row-level security"),
        )
        .mount(&server)
        .await;

    let repo: Repository<Project> = Repository::new(client(&server));
    let err = repo
        .create("stranger-token", Uuid::new_v4(), &valid_draft())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Denied(_)));
}

#[tokio::test]
async fn update_restamps_timestamp_but_not_owner() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("PATCH"))
        .and(path("/projects"))
        .and(query_param("id", format!("eq.{id}")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([project_row("Portfolio", &[])])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let repo: Repository<Project> = Repository::new(client(&server));
    repo.update("owner-token", id, &valid_draft()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert!(body.get("updated_at").is_some());
    assert!(body.get("user_id").is_none());
}

#[tokio::test]
async fn update_matching_no_row_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let repo: Repository<Project> = Repository::new(client(&server));
    let err = repo
        .update("owner-token", Uuid::new_v4(), &valid_draft())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::NotFound));
}

#[tokio::test]
async fn delete_targets_the_row_by_id() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("DELETE"))
        .and(path("/projects"))
        .and(query_param("id", format!("eq.{id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let repo: Repository<Project> = Repository::new(client(&server));
    repo.delete("owner-token", id).await.unwrap();
}

// ── Change publication ───────────────────────────────────────────

#[tokio::test]
async fn mutations_publish_change_events() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!([project_row("Portfolio", &[])])),
        )
        .mount(&server)
        .await;

    let hub = ChangeHub::default();
    let mut events = hub.subscribe();
    let repo: Repository<Project> = Repository::with_hub(client(&server), hub);
    repo.create("owner-token", Uuid::new_v4(), &valid_draft())
        .await
        .unwrap();

    let event = events.recv().await.unwrap();
    assert_eq!(event.table, "projects");
    assert_eq!(event.op, ChangeOp::Insert);
}

#[tokio::test]
async fn failed_mutations_publish_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/projects"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let hub = ChangeHub::default();
    let mut events = hub.subscribe();
    let repo: Repository<Project> = Repository::with_hub(client(&server), hub);
    let _ = repo
        .create("owner-token", Uuid::new_v4(), &valid_draft())
        .await;

    assert!(matches!(
        events.try_recv(),
        Err(tokio::sync::broadcast::error::TryRecvError::Empty)
    ));
}

// ── Contact surface ──────────────────────────────────────────────

#[tokio::test]
async fn contact_submit_is_anonymous_with_no_read_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact_messages"))
        .and(header("authorization", "Bearer anon-key"))
        .and(header("Prefer", "return=minimal"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;

    let draft = ContactDraft {
        name: "Visitor".into(),
        email: "v@example.com".into(),
        subject: Some("Hi".into()),
        message: "Hello there".into(),
    };
    folio_store::contact::submit_contact(&client(&server), &draft)
        .await
        .unwrap();
}

#[tokio::test]
async fn contact_submission_can_notify_an_open_console() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/contact_messages"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let hub = ChangeHub::default();
    let mut events = hub.subscribe();
    let draft = ContactDraft {
        name: "Visitor".into(),
        email: "v@example.com".into(),
        subject: None,
        message: "Hello there".into(),
    };
    folio_store::contact::submit_contact_notifying(&client(&server), &hub, &draft)
        .await
        .unwrap();

    let event = events.recv().await.unwrap();
    assert_eq!(event.table, "contact_messages");
    assert_eq!(event.op, ChangeOp::Insert);
}

#[tokio::test]
async fn empty_contact_submission_is_rejected_before_any_request() {
    let server = MockServer::start().await;

    let err = folio_store::contact::submit_contact(&client(&server), &ContactDraft::default())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
