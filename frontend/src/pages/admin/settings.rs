use leptos::*;

use crate::state::sidebar::{save_position, use_sidebar_bus, SidebarBus, SidebarPosition};

/// The settings page is the only writer of the sidebar preference: it
/// persists the choice and publishes it on the bus for the live shell.
fn apply_position(bus: &SidebarBus, position: SidebarPosition) {
    save_position(position);
    bus.publish(position);
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let bus = use_sidebar_bus();
    let position = bus.subscribe();

    let option_class = move |candidate: SidebarPosition| {
        if position.get() == candidate {
            "flex-1 px-4 py-3 rounded-md border-2 border-orange-600 bg-orange-50 text-sm font-medium text-gray-900"
        } else {
            "flex-1 px-4 py-3 rounded-md border border-gray-300 bg-white text-sm font-medium text-gray-700 hover:border-gray-400"
        }
    };

    view! {
        <div>
            <h1 class="text-2xl font-bold text-gray-900">"Settings"</h1>
            <div class="mt-4 bg-white rounded-lg shadow p-6">
                <h2 class="text-sm font-semibold text-gray-900 uppercase tracking-wider">
                    "Sidebar position"
                </h2>
                <p class="mt-1 text-sm text-gray-500">
                    "Choose which side of the screen the navigation panel is anchored to."
                </p>
                <div class="mt-4 flex space-x-3">
                    <button
                        class=move || option_class(SidebarPosition::Left)
                        on:click=move |_| apply_position(&bus, SidebarPosition::Left)
                    >
                        "Left"
                    </button>
                    <button
                        class=move || option_class(SidebarPosition::Right)
                        on:click=move |_| apply_position(&bus, SidebarPosition::Right)
                    >
                        "Right"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::apply_position;
    use leptos::SignalGetUntracked;
    use crate::state::sidebar::{SidebarBus, SidebarPosition};
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn applying_a_position_publishes_it() {
        with_runtime(|| {
            let bus = SidebarBus::new();
            apply_position(&bus, SidebarPosition::Right);
            assert_eq!(
                bus.subscribe().get_untracked(),
                SidebarPosition::Right
            );
        });
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn settings_offers_both_anchors() {
        let html = render_to_string(|| view! { <SettingsPage /> });
        assert!(html.contains("Sidebar position"));
        assert!(html.contains("Left"));
        assert!(html.contains("Right"));
    }
}
