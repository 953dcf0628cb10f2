use super::*;
use crate::access::Role;

#[test]
fn public_routes_render_even_while_loading() {
    let outcome = resolve(&IdentitySignal::loading(), &AppRoute::Login);
    assert_eq!(outcome, NavigationOutcome::Render);
    let outcome = resolve(&IdentitySignal::anonymous(), &AppRoute::NotFound);
    assert_eq!(outcome, NavigationOutcome::Render);
}

#[test]
fn authenticated_user_is_sent_away_from_login() {
    let identity = IdentitySignal::resolved(Some(Role::Student));
    let outcome = resolve(&identity, &AppRoute::Login);
    assert_eq!(outcome, NavigationOutcome::RedirectToDefault);
}

#[test]
fn loading_user_stays_on_login() {
    // Until the session resolves the login page must not bounce.
    let outcome = resolve(&IdentitySignal::loading(), &AppRoute::Login);
    assert_eq!(outcome, NavigationOutcome::Render);
}

#[test]
fn protected_route_carries_origin_for_login_redirect() {
    let target = AppRoute::Lesson("alphabet-1".to_string());
    let outcome = resolve(&IdentitySignal::anonymous(), &target);
    assert_eq!(
        outcome,
        NavigationOutcome::RedirectToLogin {
            from: AppRoute::Lesson("alphabet-1".to_string())
        }
    );
}

#[test]
fn protected_route_pending_while_loading() {
    let outcome = resolve(&IdentitySignal::loading(), &AppRoute::Dashboard);
    assert_eq!(outcome, NavigationOutcome::Pending);
}

#[test]
fn role_checks_flow_through_resolution() {
    let student = IdentitySignal::resolved(Some(Role::Student));
    assert_eq!(
        resolve(&student, &AppRoute::TeacherPanel),
        NavigationOutcome::RedirectToDefault
    );
    assert_eq!(
        resolve(&student, &AppRoute::Quiz("greetings".to_string())),
        NavigationOutcome::Render
    );

    let admin = IdentitySignal::resolved(Some(Role::Admin));
    assert_eq!(resolve(&admin, &AppRoute::TeacherPanel), NavigationOutcome::Render);
}

#[test]
fn redirect_outcomes_always_replace_history() {
    // A "back" press after a redirect must not restore the blocked page,
    // so redirects replace the current entry even on pushed navigations.
    let to_login = NavigationOutcome::RedirectToLogin {
        from: AppRoute::Dashboard,
    };
    assert_eq!(history_mode(&to_login, HistoryMode::Push), HistoryMode::Replace);
    assert_eq!(
        history_mode::<AppRoute>(&NavigationOutcome::RedirectToDefault, HistoryMode::Push),
        HistoryMode::Replace
    );
}

#[test]
fn allowed_navigation_keeps_requested_history_mode() {
    assert_eq!(
        history_mode::<AppRoute>(&NavigationOutcome::Render, HistoryMode::Push),
        HistoryMode::Push
    );
    assert_eq!(
        history_mode::<AppRoute>(&NavigationOutcome::Render, HistoryMode::Replace),
        HistoryMode::Replace
    );
    assert_eq!(
        history_mode::<AppRoute>(&NavigationOutcome::Pending, HistoryMode::Push),
        HistoryMode::Push
    );
}
