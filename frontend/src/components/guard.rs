use std::cell::Cell;
use std::rc::Rc;

use leptos::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::{
    api::{ApiClient, ApiError},
    components::layout::LoadingSpinner,
    state::session::use_session,
    utils::nav,
};

const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'#')
    .add(b'&')
    .add(b'=')
    .add(b'+')
    .add(b'?')
    .add(b'/')
    .add(b'%');

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LookupStep {
    Wait,
    SettleWithoutLookup,
    StartLookup,
}

/// One step of the authorization machine. The session must settle before any
/// lookup, a missing user settles without touching the network, and the
/// `started` flag keeps the lookup at exactly one per mount.
fn next_lookup_step(session_loading: bool, has_user: bool, started: bool) -> LookupStep {
    if session_loading {
        LookupStep::Wait
    } else if !has_user {
        LookupStep::SettleWithoutLookup
    } else if started {
        LookupStep::Wait
    } else {
        LookupStep::StartLookup
    }
}

/// Fail-closed: only a successful lookup reporting the admin role grants
/// access. Not-found and transport failures all deny.
async fn determine_admin(api: &ApiClient, email: &str) -> bool {
    match api.get_user_by_email(email).await {
        Ok(record) => record.role == "admin",
        Err(ApiError::NotFound) => false,
        Err(error) => {
            log::error!("admin check failed: {error}");
            false
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GuardView {
    Loading,
    RedirectLogin,
    RedirectHome,
    Content,
}

fn guard_view(
    session_loading: bool,
    has_user: bool,
    admin_loading: bool,
    is_admin: bool,
) -> GuardView {
    if session_loading || admin_loading {
        GuardView::Loading
    } else if !has_user {
        GuardView::RedirectLogin
    } else if is_admin {
        GuardView::Content
    } else {
        GuardView::RedirectHome
    }
}

/// Login destination carrying the originally requested location, so the
/// login flow can send the user back afterwards.
fn login_redirect_target(origin: &str) -> String {
    if origin.is_empty() || origin == "/login" {
        return "/login".to_string();
    }
    format!("/login?from={}", utf8_percent_encode(origin, QUERY_VALUE))
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (session, _) = use_session();
    let (is_admin, set_is_admin) = create_signal(false);
    let (admin_loading, set_admin_loading) = create_signal(true);

    let api = use_context::<ApiClient>().unwrap_or_default();
    let started = Rc::new(Cell::new(false));
    let cancelled = Rc::new(Cell::new(false));
    {
        let cancelled = Rc::clone(&cancelled);
        on_cleanup(move || cancelled.set(true));
    }

    create_effect(move |_| {
        let state = session.get();
        match next_lookup_step(state.loading, state.user.is_some(), started.get()) {
            LookupStep::Wait => {}
            LookupStep::SettleWithoutLookup => set_admin_loading.set(false),
            LookupStep::StartLookup => {
                started.set(true);
                let email = state
                    .user
                    .as_ref()
                    .and_then(|user| user.email.clone())
                    .unwrap_or_default();
                let api = api.clone();
                let cancelled = Rc::clone(&cancelled);
                spawn_local(async move {
                    let admin = determine_admin(&api, &email).await;
                    // The guard may be gone by the time the lookup lands.
                    if cancelled.get() {
                        return;
                    }
                    set_is_admin.set(admin);
                    set_admin_loading.set(false);
                });
            }
        }
    });

    let view_state = create_memo(move |_| {
        let state = session.get();
        guard_view(
            state.loading,
            state.user.is_some(),
            admin_loading.get(),
            is_admin.get(),
        )
    });

    create_effect(move |_| {
        let target = match view_state.get() {
            GuardView::RedirectLogin => login_redirect_target(&nav::current_path()),
            GuardView::RedirectHome => "/".to_string(),
            GuardView::Loading | GuardView::Content => return,
        };
        nav::redirect_to(&target);
    });

    view! {
        <Show
            when=move || view_state.get() == GuardView::Content
            fallback=move || {
                if view_state.get() == GuardView::Loading {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::{guard_view, login_redirect_target, next_lookup_step, GuardView, LookupStep};

    #[test]
    fn no_lookup_while_the_session_is_resolving() {
        assert_eq!(next_lookup_step(true, false, false), LookupStep::Wait);
        assert_eq!(next_lookup_step(true, true, false), LookupStep::Wait);
    }

    #[test]
    fn a_settled_empty_session_never_touches_the_network() {
        assert_eq!(
            next_lookup_step(false, false, false),
            LookupStep::SettleWithoutLookup
        );
        // Re-entrancy after sign-out: still no lookup.
        assert_eq!(
            next_lookup_step(false, false, true),
            LookupStep::SettleWithoutLookup
        );
    }

    #[test]
    fn the_lookup_runs_exactly_once_per_mount() {
        assert_eq!(next_lookup_step(false, true, false), LookupStep::StartLookup);
        assert_eq!(next_lookup_step(false, true, true), LookupStep::Wait);
    }

    #[test]
    fn loading_wins_over_every_terminal_outcome() {
        assert_eq!(guard_view(true, false, true, false), GuardView::Loading);
        assert_eq!(guard_view(true, true, false, true), GuardView::Loading);
        assert_eq!(guard_view(false, true, true, false), GuardView::Loading);
    }

    #[test]
    fn unauthenticated_users_go_to_login() {
        assert_eq!(guard_view(false, false, false, false), GuardView::RedirectLogin);
    }

    #[test]
    fn authenticated_non_admins_go_home_not_to_login() {
        assert_eq!(guard_view(false, true, false, false), GuardView::RedirectHome);
    }

    #[test]
    fn admins_see_the_content() {
        assert_eq!(guard_view(false, true, false, true), GuardView::Content);
    }

    #[test]
    fn login_redirect_preserves_the_origin() {
        assert_eq!(
            login_redirect_target("/admin-dashboard"),
            "/login?from=%2Fadmin-dashboard"
        );
        assert_eq!(
            login_redirect_target("/admin-dashboard/manage-books"),
            "/login?from=%2Fadmin-dashboard%2Fmanage-books"
        );
    }

    #[test]
    fn login_redirect_skips_degenerate_origins() {
        assert_eq!(login_redirect_target(""), "/login");
        assert_eq!(login_redirect_target("/login"), "/login");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireAdmin;
    use crate::test_support::helpers::{admin_session_user, provide_session};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    #[test]
    fn shows_the_spinner_while_the_session_resolves() {
        let html = render_to_string(move || {
            provide_session(None, true);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("admin-protected"));
    }

    #[test]
    fn shows_the_spinner_while_the_role_check_is_pending() {
        let html = render_to_string(move || {
            provide_session(Some(admin_session_user()), false);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        // The lookup has not resolved yet, so neither content nor redirect.
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("admin-protected"));
    }

    #[test]
    fn hides_the_content_for_a_settled_empty_session() {
        let html = render_to_string(move || {
            provide_session(None, false);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }
}
