use super::*;

#[test]
fn parses_static_paths() {
    assert_eq!(AppRoute::from_path("/"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/login"), AppRoute::Login);
    assert_eq!(AppRoute::from_path("/dashboard"), AppRoute::Dashboard);
    assert_eq!(AppRoute::from_path("/lessons"), AppRoute::Lessons);
    assert_eq!(AppRoute::from_path("/teacher"), AppRoute::TeacherPanel);
    assert_eq!(AppRoute::from_path("/admin"), AppRoute::AdminPanel);
}

#[test]
fn parses_dynamic_segments() {
    assert_eq!(
        AppRoute::from_path("/lessons/alphabet-1"),
        AppRoute::Lesson("alphabet-1".to_string())
    );
    assert_eq!(
        AppRoute::from_path("/quiz/greetings"),
        AppRoute::Quiz("greetings".to_string())
    );
}

#[test]
fn unknown_paths_fall_back_to_not_found() {
    assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
    // Empty or nested ids are not valid dynamic segments.
    assert_eq!(AppRoute::from_path("/lessons/a/b"), AppRoute::NotFound);
    assert_eq!(AppRoute::from_path("/quiz//"), AppRoute::NotFound);
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(AppRoute::from_path("/dashboard/"), AppRoute::Dashboard);
    assert_eq!(
        AppRoute::from_path("/lessons/alphabet-1/"),
        AppRoute::Lesson("alphabet-1".to_string())
    );
}

#[test]
fn path_round_trip() {
    for route in [
        AppRoute::Dashboard,
        AppRoute::Lessons,
        AppRoute::Lesson("alphabet-1".to_string()),
        AppRoute::Quiz("greetings".to_string()),
        AppRoute::TeacherPanel,
        AppRoute::AdminPanel,
    ] {
        assert_eq!(AppRoute::from_path(&route.to_path()), route);
    }
}

#[test]
fn boundary_declarations() {
    use crate::access::{AccessRequirement, Role};

    assert_eq!(
        AppRoute::TeacherPanel.access_requirement(),
        AccessRequirement::SingleRole(Role::Teacher)
    );
    assert_eq!(
        AppRoute::AdminPanel.access_requirement(),
        AccessRequirement::SingleRole(Role::Admin)
    );
    assert_eq!(
        AppRoute::Quiz("greetings".to_string()).access_requirement(),
        AccessRequirement::AnyOf(&[Role::Teacher, Role::Student])
    );
    // Authenticated-only routes carry no role restriction.
    assert_eq!(
        AppRoute::Dashboard.access_requirement(),
        AccessRequirement::Unrestricted
    );
    assert_eq!(
        AppRoute::Lessons.access_requirement(),
        AccessRequirement::Unrestricted
    );
}

#[test]
fn public_routes_bypass_the_guard() {
    assert!(AppRoute::Login.is_public());
    assert!(AppRoute::NotFound.is_public());
    assert!(!AppRoute::Dashboard.is_public());
    assert!(!AppRoute::AdminPanel.is_public());
}

#[test]
fn login_redirects_away_when_authenticated() {
    assert!(AppRoute::Login.should_redirect_when_authenticated());
    assert!(!AppRoute::Dashboard.should_redirect_when_authenticated());
}
