use leptos::*;

use crate::{
    components::layout::{avatar_initial, user_display_name, user_email},
    state::session::use_session,
};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (session, _set_session) = use_session();

    let display_name = move || session.with(|state| user_display_name(state.user.as_ref()));
    let email = move || session.with(|state| user_email(state.user.as_ref()));
    let initial = move || session.with(|state| avatar_initial(state.user.as_ref()));

    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Profile"</h1>
            <div class="mt-4 bg-white rounded-lg shadow p-6 flex items-center space-x-4">
                <div class="w-16 h-16 rounded-full bg-orange-600 flex items-center justify-center text-white text-2xl">
                    {initial}
                </div>
                <div>
                    <p class="text-lg font-medium text-gray-900">{display_name}</p>
                    <p class="text-sm text-gray-500">{email}</p>
                </div>
            </div>
        </div>
    }
}
