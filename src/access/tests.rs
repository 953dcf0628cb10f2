use super::*;

const TEACHING_STAFF: &[Role] = &[Role::Teacher, Role::Student];
const NOBODY: &[Role] = &[];

/// All requirement shapes used across the matrix tests.
fn all_requirements() -> Vec<AccessRequirement> {
    vec![
        AccessRequirement::Unrestricted,
        AccessRequirement::SingleRole(Role::Teacher),
        AccessRequirement::SingleRole(Role::Admin),
        AccessRequirement::AnyOf(TEACHING_STAFF),
        AccessRequirement::AnyOf(NOBODY),
    ]
}

#[test]
fn loading_identity_is_always_pending() {
    // While the session is unresolved no requirement may redirect or render.
    for requirement in all_requirements() {
        let outcome = evaluate(&IdentitySignal::loading(), &requirement, "/lessons");
        assert_eq!(outcome, NavigationOutcome::Pending, "req = {:?}", requirement);
    }
}

#[test]
fn unauthenticated_identity_redirects_to_login_with_origin() {
    for requirement in all_requirements() {
        let outcome = evaluate(&IdentitySignal::anonymous(), &requirement, "/quiz/alphabet-1");
        assert_eq!(
            outcome,
            NavigationOutcome::RedirectToLogin {
                from: "/quiz/alphabet-1"
            },
            "req = {:?}",
            requirement
        );
    }
}

#[test]
fn admin_passes_every_requirement() {
    let admin = IdentitySignal::resolved(Some(Role::Admin));
    for requirement in all_requirements() {
        let outcome = evaluate(&admin, &requirement, ());
        assert_eq!(outcome, NavigationOutcome::Render, "req = {:?}", requirement);
    }
}

#[test]
fn single_role_mismatch_redirects_to_default() {
    let student = IdentitySignal::resolved(Some(Role::Student));
    let outcome = evaluate(&student, &AccessRequirement::SingleRole(Role::Teacher), ());
    assert_eq!(outcome, NavigationOutcome::RedirectToDefault);
}

#[test]
fn single_role_match_renders() {
    let teacher = IdentitySignal::resolved(Some(Role::Teacher));
    let outcome = evaluate(&teacher, &AccessRequirement::SingleRole(Role::Teacher), ());
    assert_eq!(outcome, NavigationOutcome::Render);
}

#[test]
fn any_of_membership_renders() {
    let student = IdentitySignal::resolved(Some(Role::Student));
    let outcome = evaluate(&student, &AccessRequirement::AnyOf(TEACHING_STAFF), ());
    assert_eq!(outcome, NavigationOutcome::Render);
}

#[test]
fn any_of_without_role_redirects_to_default() {
    // Authenticated but roleless accounts fail non-empty role sets.
    let roleless = IdentitySignal::resolved(None);
    let outcome = evaluate(&roleless, &AccessRequirement::AnyOf(TEACHING_STAFF), ());
    assert_eq!(outcome, NavigationOutcome::RedirectToDefault);
}

#[test]
fn any_of_non_member_redirects_to_default() {
    let student = IdentitySignal::resolved(Some(Role::Student));
    let outcome = evaluate(&student, &AccessRequirement::AnyOf(&[Role::Teacher]), ());
    assert_eq!(outcome, NavigationOutcome::RedirectToDefault);
}

#[test]
fn unrestricted_allows_any_authenticated_identity() {
    for role in [None, Some(Role::Student), Some(Role::Teacher), Some(Role::Admin)] {
        let identity = IdentitySignal::resolved(role);
        let outcome = evaluate(&identity, &AccessRequirement::Unrestricted, ());
        assert_eq!(outcome, NavigationOutcome::Render, "role = {:?}", role);
    }
}

#[test]
fn empty_any_of_enforces_nothing() {
    // An empty set degrades to "no restriction", callers must not rely on it
    // to deny access.
    let roleless = IdentitySignal::resolved(None);
    let outcome = evaluate(&roleless, &AccessRequirement::AnyOf(NOBODY), ());
    assert_eq!(outcome, NavigationOutcome::Render);
}

#[test]
fn roleless_identity_fails_single_role() {
    let roleless = IdentitySignal::resolved(None);
    let outcome = evaluate(&roleless, &AccessRequirement::SingleRole(Role::Student), ());
    assert_eq!(outcome, NavigationOutcome::RedirectToDefault);
}
