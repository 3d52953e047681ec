use leptos::*;

use crate::components::layout::NAV_ITEMS;

#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Dashboard"</h1>
            <p class="mt-1 text-sm text-gray-500">
                "Manage the Shelfy catalog and its readers from one place."
            </p>
            <div class="mt-6 grid grid-cols-1 gap-4 sm:grid-cols-2 lg:grid-cols-4">
                {NAV_ITEMS
                    .iter()
                    .filter(|item| item.path != "/admin-dashboard")
                    .map(|item| {
                        view! {
                            <a
                                href=item.path
                                class="block bg-white rounded-lg shadow p-6 hover:shadow-md transition-shadow duration-200"
                            >
                                <i class=format!("fas {} text-orange-600 text-xl", item.icon)></i>
                                <p class="mt-3 text-sm font-medium text-gray-900">{item.label}</p>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
