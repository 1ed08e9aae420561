use folio_auth::{Session, SessionState};
use pretty_assertions::assert_eq;
use uuid::Uuid;

fn session() -> Session {
    Session {
        user_id: Uuid::new_v4(),
        email: "owner@example.com".into(),
        access_token: "jwt".into(),
    }
}

#[tokio::test]
async fn starts_signed_out() {
    assert!(SessionState::new().current().is_none());
}

#[tokio::test]
async fn set_replaces_the_current_session() {
    let state = SessionState::new();
    let s = session();
    state.set(Some(s.clone()));
    assert_eq!(state.current(), Some(s));
}

#[tokio::test]
async fn clear_signs_out() {
    let state = SessionState::new();
    state.set(Some(session()));
    state.clear();
    assert!(state.current().is_none());
}

#[tokio::test]
async fn subscribers_observe_every_transition() {
    let state = SessionState::new();
    // Subscribe before restoring, the way the app shell does, so the
    // sign-in transition cannot be missed.
    let mut feed = state.subscribe();

    state.set(Some(session()));
    feed.changed().await.unwrap();
    assert!(feed.borrow_and_update().is_some());

    state.clear();
    feed.changed().await.unwrap();
    assert!(feed.borrow_and_update().is_none());
}
