use leptos::{ev::SubmitEvent, *};
use percent_encoding::percent_decode_str;

use crate::{
    api::LoginRequest,
    components::layout::ErrorMessage,
    state::session,
    utils::nav,
};

pub(crate) fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    if email.trim().is_empty() || password.is_empty() {
        return Err("Email and password are required".to_string());
    }
    if !email.contains('@') {
        return Err("Enter a valid email address".to_string());
    }
    Ok(())
}

/// Destination after a successful sign-in. Only same-app absolute paths from
/// the `from` query parameter are honored; anything else falls back to the
/// admin landing page.
pub(crate) fn return_path_from_query(search: &str) -> String {
    const DEFAULT: &str = "/admin-dashboard";
    let raw = search.trim_start_matches('?');
    let value = raw
        .split('&')
        .find_map(|pair| pair.strip_prefix("from="))
        .and_then(|encoded| percent_decode_str(encoded).decode_utf8().ok())
        .map(|decoded| decoded.into_owned());
    match value {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path,
        _ => DEFAULT.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let return_path = store_value(return_path_from_query(&nav::current_search()));

    let sign_in_action = session::use_sign_in_action();
    let pending = sign_in_action.pending();

    create_effect(move |_| {
        if let Some(result) = sign_in_action.value().get() {
            match result {
                Ok(()) => {
                    set_error.set(None);
                    nav::redirect_to(&return_path.get_value());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        }
    });

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let email_value = email.get_untracked();
        let password_value = password.get_untracked();

        if let Err(message) = validate_credentials(&email_value, &password_value) {
            set_error.set(Some(message));
            return;
        }
        set_error.set(None);
        sign_in_action.dispatch(LoginRequest {
            email: email_value,
            password: password_value,
        });
    };

    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-white rounded-lg shadow p-8">
                <h1 class="text-2xl font-bold text-gray-900 text-center">"Sign in to Shelfy"</h1>
                <Show when=move || error.get().is_some()>
                    <div class="mt-4">
                        <ErrorMessage message=error.get().unwrap_or_default() />
                    </div>
                </Show>
                <form class="mt-6 space-y-4" on:submit=handle_submit>
                    <div>
                        <label class="block text-sm font-medium text-gray-700" for="email">
                            "Email"
                        </label>
                        <input
                            id="email"
                            type="email"
                            class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 shadow-sm focus:border-orange-500 focus:outline-none"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-gray-700" for="password">
                            "Password"
                        </label>
                        <input
                            id="password"
                            type="password"
                            class="mt-1 block w-full rounded-md border border-gray-300 px-3 py-2 shadow-sm focus:border-orange-500 focus:outline-none"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || pending.get()
                        class="w-full flex justify-center px-4 py-2 border border-transparent text-sm font-medium rounded-md text-white bg-orange-600 hover:bg-orange-700 disabled:opacity-50"
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
