//! Integration tests for expiry-driven reclamation.

mod helpers;

use std::time::Duration;

use helpers::{token, token_expiring_in, verifier};
use sessiongate::{SessionVerifier, spawn_sweeper};
use tokio::sync::watch;

#[test]
fn test_expired_tokens_are_not_counted() {
    let verifier = verifier(&["admin"], &["tom", "guest"], 3, 3);

    for user in ["tom", "admin"] {
        verifier.verify_session_for_user(user, &token(user)).unwrap();
        assert_eq!(verifier.user_concurrent_session_count(user).unwrap(), Some(1));
        verifier
            .verify_session_for_user(user, &token_expiring_in(user, 2))
            .unwrap();
        assert_eq!(verifier.user_concurrent_session_count(user).unwrap(), Some(2));
        verifier
            .verify_session_for_user(user, &token_expiring_in(user, 2))
            .unwrap();
        assert_eq!(verifier.user_concurrent_session_count(user).unwrap(), Some(3));
    }

    std::thread::sleep(Duration::from_secs(3));

    for user in ["tom", "admin"] {
        assert_eq!(verifier.user_concurrent_session_count(user).unwrap(), Some(1));
    }
}

#[test]
fn test_expired_capacity_is_reclaimed_on_verify() {
    let verifier = verifier(&[], &["tom"], 3, 1);

    assert!(
        verifier
            .verify_session_for_user("tom", &token_expiring_in("tom", 2))
            .unwrap()
    );
    assert!(!verifier.verify_session_for_user("tom", &token("tom")).unwrap());

    std::thread::sleep(Duration::from_secs(3));

    assert!(verifier.verify_session_for_user("tom", &token("tom")).unwrap());
    assert_eq!(verifier.user_concurrent_session_count("tom").unwrap(), Some(1));
}

#[test]
fn test_already_expired_token_is_never_counted() {
    let verifier = verifier(&[], &["tom"], 3, 2);

    verifier
        .verify_session_for_user("tom", &token_expiring_in("tom", -10))
        .unwrap();
    assert_eq!(verifier.user_concurrent_session_count("tom").unwrap(), None);
}

#[tokio::test]
async fn test_sweeper_releases_idle_users() {
    let mut session = helpers::session_config(&[], &["tom"], 3, 3);
    session.cleanup_interval_seconds = 1;
    let verifier = sessiongate::build_verifier(&helpers::app_config(session.clone())).unwrap();

    verifier
        .verify_session_for_user("tom", &token_expiring_in("tom", 1))
        .unwrap();
    verifier
        .verify_session_for_user("guest", &token_expiring_in("guest", 1))
        .unwrap();
    verifier.verify_session_for_user("admin", &token("admin")).unwrap();

    let ledger = verifier.ledger().unwrap();
    assert_eq!(ledger.stats().users, 3);

    let (cancel_tx, cancel_rx) = watch::channel(false);
    let handle = spawn_sweeper(&verifier, &session, cancel_rx).unwrap();

    tokio::time::sleep(Duration::from_millis(3500)).await;
    let stats = ledger.stats();
    assert_eq!(stats.users, 1);
    assert_eq!(stats.sessions, 1);

    cancel_tx.send(true).unwrap();
    handle.await.unwrap();
}
