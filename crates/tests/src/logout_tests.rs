use session::manager::{AuthPhase, SessionManager};
use session::store::SessionStore;

use crate::common::{self, ScriptedApi};

#[tokio::test]
async fn test_logout_ends_the_session_and_empties_storage() {
    let (backend, mut manager) = common::manager();
    manager.init();

    let token = common::forge_session_token("ana@example.com", 42, &["ORGANIZADOR"]);
    let api = ScriptedApi::succeeding_with(&token);
    manager
        .login(&api, &common::login_request("ana@example.com", "secret1"))
        .await
        .unwrap();

    manager.logout();

    assert_eq!(*manager.phase(), AuthPhase::Unauthenticated);
    assert_eq!(manager.current_token(), None);
    assert!(backend.is_empty());
}

#[test]
fn test_signing_out_twice_is_harmless() {
    let (backend, mut manager) = common::manager();
    manager.init();
    assert!(backend.is_empty());

    // A double click on the sign-out button fires this twice.
    manager.logout();
    assert_eq!(*manager.phase(), AuthPhase::Unauthenticated);
    assert!(backend.is_empty());

    manager.logout();
    assert_eq!(*manager.phase(), AuthPhase::Unauthenticated);
    assert!(backend.is_empty());
}

#[tokio::test]
async fn test_a_reload_after_logout_stays_signed_out() {
    let (backend, mut manager) = common::manager();
    manager.init();

    let token = common::forge_session_token("ana@example.com", 42, &["ORGANIZADOR"]);
    let api = ScriptedApi::succeeding_with(&token);
    manager
        .login(&api, &common::login_request("ana@example.com", "secret1"))
        .await
        .unwrap();
    manager.logout();

    let mut reloaded = SessionManager::new(SessionStore::new(Box::new(backend.clone())));
    reloaded.init();

    assert_eq!(*reloaded.phase(), AuthPhase::Unauthenticated);
}

#[tokio::test]
async fn test_backend_rejection_invalidates_like_a_logout() {
    let (backend, mut manager) = common::manager();
    manager.init();

    let token = common::forge_session_token("ana@example.com", 42, &["ORGANIZADOR"]);
    let api = ScriptedApi::succeeding_with(&token);
    manager
        .login(&api, &common::login_request("ana@example.com", "secret1"))
        .await
        .unwrap();

    manager.invalidate();

    assert_eq!(*manager.phase(), AuthPhase::Unauthenticated);
    assert!(backend.is_empty());

    // A login after invalidation starts clean.
    let again = ScriptedApi::succeeding_with(&token);
    manager
        .login(&again, &common::login_request("ana@example.com", "secret1"))
        .await
        .unwrap();
    assert!(manager.is_authenticated());
}
