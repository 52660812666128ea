//! Integration tests for per-user session admission.

mod helpers;

use helpers::{token, verifier};
use sessiongate::{SessionVerifier, build_verifier};

#[test]
fn test_user_in_neither_group_is_unlimited() {
    let verifier = verifier(&["admin"], &["guest"], 3, 2);

    for _ in 0..4 {
        assert!(verifier.verify_session_for_user("tom", &token("tom")).unwrap());
    }
}

#[test]
fn test_user_in_both_groups_gets_stricter_limit() {
    let verifier = verifier(&["admin", "tom"], &["tom", "guest"], 3, 2);

    assert!(verifier.verify_session_for_user("tom", &token("tom")).unwrap());
    assert!(verifier.verify_session_for_user("tom", &token("tom")).unwrap());
    assert!(!verifier.verify_session_for_user("tom", &token("tom")).unwrap());
}

#[test]
fn test_privileged_user_limit_and_release() {
    let verifier = verifier(&["admin"], &["tom", "guest"], 3, 2);
    let first = token("admin");

    assert!(verifier.verify_session_for_user("admin", &first).unwrap());
    assert!(verifier.verify_session_for_user("admin", &token("admin")).unwrap());
    assert!(verifier.verify_session_for_user("admin", &token("admin")).unwrap());
    assert!(!verifier.verify_session_for_user("admin", &token("admin")).unwrap());

    verifier.session_ended_for_user("admin", &first);
    assert!(verifier.verify_session_for_user("admin", &token("admin")).unwrap());
    assert!(!verifier.verify_session_for_user("admin", &token("admin")).unwrap());
}

#[test]
fn test_non_privileged_user_limit_and_release() {
    let verifier = verifier(&["admin"], &["tom", "guest"], 3, 2);
    let first = token("tom");

    assert!(verifier.verify_session_for_user("tom", &first).unwrap());
    assert!(verifier.verify_session_for_user("tom", &token("tom")).unwrap());
    assert!(!verifier.verify_session_for_user("tom", &token("tom")).unwrap());
    assert!(!verifier.verify_session_for_user("tom", &token("tom")).unwrap());

    verifier.session_ended_for_user("tom", &first);
    assert!(verifier.verify_session_for_user("tom", &token("tom")).unwrap());
    assert!(!verifier.verify_session_for_user("tom", &token("tom")).unwrap());
}

#[test]
fn test_zero_limits_admit_nothing() {
    let verifier = verifier(&["admin"], &["tom", "guest"], 0, 2);
    assert!(!verifier.verify_session_for_user("admin", &token("admin")).unwrap());
    assert_eq!(verifier.user_concurrent_session_count("admin").unwrap(), None);

    let verifier = helpers::verifier(&["admin"], &["tom", "guest"], 3, 0);
    assert!(!verifier.verify_session_for_user("tom", &token("tom")).unwrap());
}

#[test]
fn test_session_count_never_goes_negative() {
    let verifier = verifier(&["admin"], &["tom", "guest"], 2, 2);

    for user in ["admin", "tom"] {
        let first = token(user);
        assert_eq!(verifier.user_concurrent_session_count(user).unwrap(), None);
        verifier.verify_session_for_user(user, &first).unwrap();
        assert_eq!(verifier.user_concurrent_session_count(user).unwrap(), Some(1));
        verifier.session_ended_for_user(user, &first);
        assert_eq!(verifier.user_concurrent_session_count(user).unwrap(), None);
        verifier.session_ended_for_user(user, &first);
        assert_eq!(verifier.user_concurrent_session_count(user).unwrap(), None);
        verifier.verify_session_for_user(user, &token(user)).unwrap();
        assert_eq!(verifier.user_concurrent_session_count(user).unwrap(), Some(1));
    }
}

#[test]
fn test_negative_limit_means_unlimited() {
    let verifier = verifier(&["admin"], &["tom", "guest"], -2, -2);

    for _ in 0..10 {
        assert!(verifier.verify_session_for_user("admin", &token("admin")).unwrap());
        assert!(verifier.verify_session_for_user("tom", &token("tom")).unwrap());
    }
    assert_eq!(verifier.user_concurrent_session_count("admin").unwrap(), Some(10));
}

#[test]
fn test_same_token_twice_takes_two_slots() {
    let verifier = verifier(&[], &["tom"], 3, 2);
    let reused = token("tom");

    assert!(verifier.verify_session_for_user("tom", &reused).unwrap());
    assert!(verifier.verify_session_for_user("tom", &reused).unwrap());
    assert!(!verifier.verify_session_for_user("tom", &token("tom")).unwrap());
}

#[test]
fn test_malformed_token_is_an_error_not_a_rejection() {
    let verifier = verifier(&[], &["tom"], 3, 2);

    let err = verifier
        .verify_session_for_user("tom", "definitely.not.a-jwt")
        .unwrap_err();
    assert!(err.is_malformed_token());
    assert_eq!(verifier.user_concurrent_session_count("tom").unwrap(), None);
}

#[test]
fn test_token_signed_with_other_key_is_malformed() {
    let mut config = helpers::app_config(helpers::session_config(&[], &["tom"], 3, 2));
    config.auth.jwt_secret = "a-different-secret".to_string();
    let verifier = build_verifier(&config).unwrap();

    let err = verifier
        .verify_session_for_user("tom", &token("tom"))
        .unwrap_err();
    assert!(err.is_malformed_token());
}

#[test]
fn test_disabled_limits_admit_everything() {
    let mut session = helpers::session_config(&["admin"], &[], 0, 0);
    session.enabled = false;
    let verifier = build_verifier(&helpers::app_config(session)).unwrap();

    assert!(verifier.verify_session_for_user("admin", &token("admin")).unwrap());
    assert_eq!(verifier.user_concurrent_session_count("admin").unwrap(), None);
}

#[test]
fn test_configuration_from_toml() {
    let mut config = sessiongate::AppConfig::from_toml_str(
        r#"
        [session_control]
        privileged_users = ["admin"]
        non_privileged_users = ["tom"]
        privileged_users_limit = 1
        non_privileged_users_limit = 1
        "#,
    )
    .unwrap();
    config.auth.jwt_secret = helpers::SECRET.to_string();
    let verifier = build_verifier(&config).unwrap();

    assert!(verifier.verify_session_for_user("admin", &token("admin")).unwrap());
    assert!(!verifier.verify_session_for_user("admin", &token("admin")).unwrap());
}
