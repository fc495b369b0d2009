use super::*;
use crate::state::session::{ProbeOutcome, Session};

#[test]
fn protected_redirects_anonymous_to_sign_in() {
    assert_eq!(GuardKind::Protected.decide(None), GuardDecision::Redirect("/signin"));
}

#[test]
fn protected_renders_for_identity() {
    let user = Identity::new("u1");
    assert_eq!(GuardKind::Protected.decide(Some(&user)), GuardDecision::Render);
}

#[test]
fn public_redirects_identity_home() {
    let user = Identity::new("u1");
    assert_eq!(GuardKind::Public.decide(Some(&user)), GuardDecision::Redirect("/"));
}

#[test]
fn public_renders_for_anonymous() {
    assert_eq!(GuardKind::Public.decide(None), GuardDecision::Render);
}

#[test]
fn redirects_replace_history() {
    assert!(redirect_options().replace);
}

#[test]
fn guards_follow_sign_in_and_sign_out() {
    let mut session = Session::new();
    session.apply_probe(ProbeOutcome::Anonymous);
    assert_eq!(GuardKind::Protected.decide(session.user()), GuardDecision::Redirect(routes::SIGN_IN));
    assert_eq!(GuardKind::Public.decide(session.user()), GuardDecision::Render);

    session.set_identity(Some(Identity::new("u1")));
    assert_eq!(GuardKind::Protected.decide(session.user()), GuardDecision::Render);
    assert_eq!(GuardKind::Public.decide(session.user()), GuardDecision::Redirect(routes::HOME));

    session.set_identity(None);
    assert_eq!(GuardKind::Protected.decide(session.user()), GuardDecision::Redirect(routes::SIGN_IN));
}
