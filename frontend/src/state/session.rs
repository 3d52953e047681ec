use crate::api::{ApiClient, ApiError, LoginRequest, SessionUser};
use leptos::*;

type SessionContext = (ReadSignal<SessionState>, WriteSignal<SessionState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub user: Option<SessionUser>,
    pub loading: bool,
}

fn create_session_context() -> SessionContext {
    let (session, set_session) = create_signal(SessionState {
        user: None,
        loading: true,
    });

    let api = use_context::<ApiClient>().unwrap_or_default();
    spawn_local(async move {
        match api.me().await {
            Ok(user) => set_session.update(|state| {
                state.user = Some(user);
                state.loading = false;
            }),
            Err(_) => set_session.update(|state| {
                state.user = None;
                state.loading = false;
            }),
        }
    });

    (session, set_session)
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let ctx = create_session_context();
    provide_context::<SessionContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().unwrap_or_else(|| create_signal(SessionState::default()))
}

pub async fn sign_in(
    api: &ApiClient,
    request: LoginRequest,
    set_session: WriteSignal<SessionState>,
) -> Result<(), ApiError> {
    set_session.update(|state| state.loading = true);

    match api.login(&request).await {
        Ok(response) => {
            set_session.update(|state| {
                state.user = Some(response.user);
                state.loading = false;
            });
            Ok(())
        }
        Err(error) => {
            set_session.update(|state| state.loading = false);
            Err(error)
        }
    }
}

/// Clears the session only when the collaborator confirms the sign-out; a
/// failure leaves the state untouched for the caller to report.
pub async fn sign_out(
    api: &ApiClient,
    set_session: WriteSignal<SessionState>,
) -> Result<(), ApiError> {
    api.logout().await?;
    set_session.update(|state| {
        state.user = None;
        state.loading = false;
    });
    Ok(())
}

pub fn use_sign_in_action() -> Action<LoginRequest, Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let api = api.clone();
        async move { sign_in(&api, payload, set_session).await }
    })
}

pub fn use_sign_out_action() -> Action<(), Result<(), ApiError>> {
    let (_session, set_session) = use_session();
    let api = use_context::<ApiClient>().unwrap_or_default();

    create_action(move |_: &()| {
        let api = api.clone();
        async move { sign_out(&api, set_session).await }
    })
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn use_session_returns_default_without_context() {
        with_runtime(|| {
            let (session, _set_session) = use_session();
            let snapshot = session.get();
            assert!(snapshot.user.is_none());
            assert!(!snapshot.loading);
        });
    }
}
