#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::SessionUser;
    use crate::state::session::SessionState;
    use leptos::*;

    pub fn admin_session_user() -> SessionUser {
        SessionUser {
            email: Some("admin@shelfy.app".into()),
            display_name: Some("Shelfy Admin".into()),
            photo_url: None,
        }
    }

    pub fn provide_session(
        user: Option<SessionUser>,
        loading: bool,
    ) -> (ReadSignal<SessionState>, WriteSignal<SessionState>) {
        let (session, set_session) = create_signal(SessionState { user, loading });
        provide_context((session, set_session));
        (session, set_session)
    }
}
