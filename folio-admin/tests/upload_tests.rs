use folio_admin::{StorageClient, StorageConfig, UploadError, UploadRelay};
use folio_auth::Session;
use uuid::Uuid;
use wiremock::matchers::{header, method, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn relay(server: &MockServer) -> UploadRelay {
    UploadRelay::new(StorageClient::new(StorageConfig {
        storage_url: server.uri(),
        api_key: "anon-key".into(),
        bucket: "portfolio".into(),
    }))
}

fn owner_session() -> Session {
    Session {
        user_id: Uuid::new_v4(),
        email: "owner@example.com".into(),
        access_token: "owner-token".into(),
    }
}

#[tokio::test]
async fn upload_requires_a_session() {
    let server = MockServer::start().await;

    let err = relay(&server)
        .upload(None, "avatar.png", vec![1, 2, 3], "image/png")
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::AuthRequired));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn upload_returns_the_public_url_of_the_stored_object() {
    let server = MockServer::start().await;
    let session = owner_session();
    Mock::given(method("POST"))
        .and(path_regex(r"^/object/portfolio/[0-9a-f-]+/\d+\.png$"))
        .and(header("authorization", "Bearer owner-token"))
        .and(header("content-type", "image/png"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let url = relay(&server)
        .upload(Some(&session), "avatar.png", vec![1, 2, 3], "image/png")
        .await
        .unwrap();

    let prefix = format!(
        "{}/object/public/portfolio/{}/",
        server.uri(),
        session.user_id
    );
    assert!(url.starts_with(&prefix), "unexpected url: {url}");
    assert!(url.ends_with(".png"));
}

#[tokio::test]
async fn storage_failure_yields_no_url() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/object/portfolio/.*$"))
        .respond_with(ResponseTemplate::new(507).set_body_string("quota exceeded"))
        .mount(&server)
        .await;

    let err = relay(&server)
        .upload(Some(&owner_session()), "avatar.png", vec![1, 2, 3], "image/png")
        .await
        .unwrap_err();
    assert!(matches!(err, UploadError::Storage { status: 507, .. }));
}
