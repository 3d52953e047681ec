use leptos::*;

use crate::{
    api::{ApiClient, UserRecord},
    components::layout::{ErrorMessage, LoadingSpinner},
};

fn role_badge_class(role: &str) -> &'static str {
    if role == "admin" {
        "inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-orange-100 text-orange-800"
    } else {
        "inline-flex px-2 py-1 text-xs font-semibold rounded-full bg-gray-100 text-gray-800"
    }
}

fn record_display_name(record: &UserRecord) -> String {
    record
        .display_name
        .clone()
        .unwrap_or_else(|| record.email.clone())
}

#[component]
pub fn ManageUsersPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let users = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_users().await }
        },
    );

    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Manage Users"</h1>
            {move || match users.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(error)) => {
                    view! { <div class="mt-4"><ErrorMessage message=error.to_string() /></div> }
                        .into_view()
                }
                Some(Ok(records)) => {
                    view! {
                        <div class="mt-4 bg-white rounded-lg shadow overflow-hidden">
                            <table class="min-w-full divide-y divide-gray-200">
                                <thead class="bg-gray-50">
                                    <tr>
                                        <th class="px-4 py-3 text-left text-xs font-semibold text-gray-500 uppercase">"Name"</th>
                                        <th class="px-4 py-3 text-left text-xs font-semibold text-gray-500 uppercase">"Email"</th>
                                        <th class="px-4 py-3 text-left text-xs font-semibold text-gray-500 uppercase">"Role"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-200">
                                    {records
                                        .iter()
                                        .map(|record| {
                                            view! {
                                                <tr>
                                                    <td class="px-4 py-3 text-sm text-gray-900">{record_display_name(record)}</td>
                                                    <td class="px-4 py-3 text-sm text-gray-500">{record.email.clone()}</td>
                                                    <td class="px-4 py-3 text-sm">
                                                        <span class=role_badge_class(&record.role)>
                                                            {record.role.clone()}
                                                        </span>
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_view()
                }
            }}
        </div>
    }
}
