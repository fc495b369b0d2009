use super::*;
use crate::state::session::{Identity, ProbeOutcome};

#[test]
fn children_wait_for_probe() {
    assert!(!should_render_children(&Session::new()));
}

#[test]
fn children_render_after_anonymous_probe() {
    let mut session = Session::new();
    session.apply_probe(ProbeOutcome::Anonymous);
    assert!(should_render_children(&session));
}

#[test]
fn children_render_after_authenticated_probe() {
    let mut session = Session::new();
    session.apply_probe(ProbeOutcome::Authenticated(Identity::new("u1")));
    assert!(should_render_children(&session));
    assert!(session.is_authenticated());
}
