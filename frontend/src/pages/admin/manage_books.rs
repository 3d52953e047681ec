use leptos::*;

use crate::{
    api::{ApiClient, BookRecord},
    components::layout::{ErrorMessage, LoadingSpinner},
};

fn added_on(book: &BookRecord) -> String {
    book.created_at.format("%Y-%m-%d").to_string()
}

#[component]
pub fn ManageBooksPage() -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_default();
    let books = create_local_resource(
        || (),
        move |_| {
            let api = api.clone();
            async move { api.list_books().await }
        },
    );

    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Manage Books"</h1>
            {move || match books.get() {
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
                                        <th class="px-4 py-3 text-left text-xs font-semibold text-gray-500 uppercase">"Title"</th>
                                        <th class="px-4 py-3 text-left text-xs font-semibold text-gray-500 uppercase">"Author"</th>
                                        <th class="px-4 py-3 text-left text-xs font-semibold text-gray-500 uppercase">"Added"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-gray-200">
                                    {records
                                        .iter()
                                        .map(|book| {
                                            view! {
                                                <tr>
                                                    <td class="px-4 py-3 text-sm text-gray-900">{book.title.clone()}</td>
                                                    <td class="px-4 py-3 text-sm text-gray-500">{book.author.clone()}</td>
                                                    <td class="px-4 py-3 text-sm text-gray-500">{added_on(book)}</td>
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

#[cfg(test)]
mod tests {
    use super::added_on;
    use crate::api::BookRecord;
    use chrono::{TimeZone, Utc};

    #[test]
    fn added_on_formats_the_date_only() {
        let book = BookRecord {
            id: "b1".into(),
            title: "Dune".into(),
            author: "Frank Herbert".into(),
            cover_url: None,
            created_at: Utc.with_ymd_and_hms(2025, 11, 2, 9, 30, 0).unwrap(),
        };
        assert_eq!(added_on(&book), "2025-11-02");
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn manage_books_shows_the_loading_state_first() {
        let html = render_to_string(|| view! { <ManageBooksPage /> });
        assert!(html.contains("Manage Books"));
        assert!(html.contains("animate-spin"));
    }
}
