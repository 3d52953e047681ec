use leptos::*;

use crate::{
    api::SessionUser,
    state::{
        session::{self, use_session},
        sidebar::{use_sidebar_bus, SidebarPosition},
    },
    utils::nav,
};

pub struct NavItem {
    pub label: &'static str,
    pub icon: &'static str,
    pub path: &'static str,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem {
        label: "Dashboard",
        icon: "fa-tachometer-alt",
        path: "/admin-dashboard",
    },
    NavItem {
        label: "Manage Books",
        icon: "fa-book",
        path: "/admin-dashboard/manage-books",
    },
    NavItem {
        label: "Manage Users",
        icon: "fa-users",
        path: "/admin-dashboard/manage-users",
    },
    NavItem {
        label: "Profile",
        icon: "fa-user",
        path: "/admin-dashboard/profile",
    },
    NavItem {
        label: "Settings",
        icon: "fa-cog",
        path: "/admin-dashboard/settings",
    },
];

fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

pub fn user_display_name(user: Option<&SessionUser>) -> String {
    user.and_then(|u| u.display_name.clone().or_else(|| u.email.clone()))
        .unwrap_or_else(|| "Admin".to_string())
}

pub fn user_email(user: Option<&SessionUser>) -> String {
    user.and_then(|u| u.email.clone())
        .unwrap_or_else(|| "admin@example.com".to_string())
}

pub fn avatar_initial(user: Option<&SessionUser>) -> String {
    let first_char = |value: &Option<String>| value.as_deref().and_then(|v| v.chars().next());
    user.and_then(|u| first_char(&u.display_name).or_else(|| first_char(&u.email)))
        .map(|c| c.to_string())
        .unwrap_or_else(|| "U".to_string())
}

#[component]
pub fn AdminDashboardLayout(children: Children) -> impl IntoView {
    let (session, _set_session) = use_session();
    let bus = use_sidebar_bus();
    let position = bus.subscribe();

    let (sidebar_open, set_sidebar_open) = create_signal(false);
    let (collapsed, set_collapsed) = create_signal(false);

    let current_path = nav::current_path();

    let sign_out_action = session::use_sign_out_action();
    let sign_out_pending = sign_out_action.pending();
    create_effect(move |_| {
        if let Some(result) = sign_out_action.value().get() {
            match result {
                Ok(()) => nav::redirect_to("/login"),
                Err(error) => log::error!("sign out failed: {error}"),
            }
        }
    });
    let on_sign_out = move |_| {
        if sign_out_pending.get_untracked() {
            return;
        }
        set_sidebar_open.set(false);
        sign_out_action.dispatch(());
    };

    let container_class = move || {
        if position.get() == SidebarPosition::Right {
            "flex h-screen bg-gray-100 flex-row-reverse"
        } else {
            "flex h-screen bg-gray-100"
        }
    };

    let aside_class = move || {
        let anchor = match position.get() {
            SidebarPosition::Left => "left-0",
            SidebarPosition::Right => "right-0",
        };
        let slide = if sidebar_open.get() {
            "translate-x-0"
        } else {
            match position.get() {
                SidebarPosition::Left => "-translate-x-full",
                SidebarPosition::Right => "translate-x-full",
            }
        };
        format!(
            "fixed inset-y-0 {anchor} z-50 bg-gray-900 text-white transform \
             transition-all duration-300 ease-in-out lg:translate-x-0 lg:static lg:inset-0 {slide}"
        )
    };

    let aside_style = move || {
        format!(
            "width: {}px; overflow: hidden;",
            if collapsed.get() { 80 } else { 256 }
        )
    };

    let display_name = move || session.with(|state| user_display_name(state.user.as_ref()));
    let email = move || session.with(|state| user_email(state.user.as_ref()));
    let initial = move || session.with(|state| avatar_initial(state.user.as_ref()));
    let photo_url = move || session.with(|state| state.user.as_ref().and_then(|u| u.photo_url.clone()));

    view! {
        <div class=container_class>
            <Show when=move || sidebar_open.get()>
                <div
                    class="fixed inset-0 z-40 bg-black bg-opacity-50 lg:hidden"
                    on:click=move |_| set_sidebar_open.set(false)
                ></div>
            </Show>

            <aside class=aside_class style=aside_style>
                <div class=move || {
                    if collapsed.get() {
                        "flex items-center p-4 border-b border-gray-700 justify-center"
                    } else {
                        "flex items-center p-4 border-b border-gray-700"
                    }
                }>
                    <a href="/" class="flex items-center">
                        <img src="/logo.png" alt="Logo" class="w-8 h-8"/>
                        <Show when=move || !collapsed.get()>
                            <div class="ml-2">
                                <span class="text-xl font-bold block">"SHELFY"</span>
                                <span class="text-xs block">"ADMIN PANEL"</span>
                            </div>
                        </Show>
                    </a>
                </div>

                <Show when=move || !collapsed.get()>
                    <div class="px-4 py-2 text-xs font-semibold text-gray-400 uppercase tracking-wider">
                        "Navigation"
                    </div>
                </Show>

                <nav class="mt-2">
                    <ul>
                        {NAV_ITEMS
                            .iter()
                            .map(|item| {
                                let active = is_active(&current_path, item.path);
                                let link_class = move || {
                                    let alignment = if collapsed.get() {
                                        "justify-center"
                                    } else {
                                        "justify-start"
                                    };
                                    let tone = if active {
                                        "bg-orange-600 text-white"
                                    } else {
                                        "text-gray-300 hover:bg-orange-600 hover:text-white"
                                    };
                                    format!(
                                        "flex items-center w-full px-4 py-3 text-sm font-medium \
                                         transition-all duration-200 {alignment} {tone}"
                                    )
                                };
                                view! {
                                    <li class="mb-1">
                                        <a
                                            href=item.path
                                            class=link_class
                                            on:click=move |_| set_sidebar_open.set(false)
                                        >
                                            <span class=move || {
                                                if collapsed.get() {
                                                    "text-lg flex-shrink-0"
                                                } else {
                                                    "text-lg flex-shrink-0 mr-3"
                                                }
                                            }>
                                                <i class=format!("fas {}", item.icon)></i>
                                            </span>
                                            <Show when=move || !collapsed.get()>
                                                <span class="flex-grow text-left truncate">
                                                    {item.label}
                                                </span>
                                            </Show>
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                </nav>

                <div class="absolute bottom-0 w-full p-4 border-t border-gray-700">
                    <button
                        on:click=on_sign_out
                        disabled=move || sign_out_pending.get()
                        class=move || {
                            let alignment = if collapsed.get() {
                                "justify-center"
                            } else {
                                "justify-start"
                            };
                            format!(
                                "flex items-center w-full px-4 py-3 text-sm font-medium \
                                 transition-colors duration-200 text-white hover:bg-red-600 \
                                 disabled:opacity-50 {alignment}"
                            )
                        }
                    >
                        <i class=move || {
                            if collapsed.get() {
                                "fas fa-sign-out-alt text-lg flex-shrink-0"
                            } else {
                                "fas fa-sign-out-alt text-lg flex-shrink-0 mr-3"
                            }
                        }></i>
                        <Show when=move || !collapsed.get()>
                            <span class="flex-grow text-left">"Sign Out"</span>
                        </Show>
                    </button>
                </div>
            </aside>

            <div class="flex flex-col flex-1 overflow-hidden">
                <header class="bg-white shadow-sm">
                    <div class="flex items-center justify-between px-4 py-3">
                        <div class="flex items-center space-x-2">
                            <button
                                class="rounded-full bg-white p-2 text-gray-700 shadow hover:bg-gray-200 transition-all duration-200 lg:hidden"
                                on:click=move |_| set_sidebar_open.update(|open| *open = !*open)
                                aria-label="Open navigation"
                            >
                                <i class="fas fa-bars"></i>
                            </button>
                            <button
                                class="rounded-full bg-white p-2 text-gray-700 shadow hover:bg-gray-200 transition-all duration-200"
                                on:click=move |_| set_collapsed.update(|value| *value = !*value)
                                aria-label="Toggle sidebar width"
                            >
                                <Show
                                    when=move || collapsed.get()
                                    fallback=|| view! { <i class="fas fa-chevron-left"></i> }
                                >
                                    <i class="fas fa-chevron-right"></i>
                                </Show>
                            </button>
                        </div>

                        <div class="flex items-center space-x-4">
                            <div class="flex items-center space-x-2">
                                <Show
                                    when=move || photo_url().is_some()
                                    fallback=move || {
                                        view! {
                                            <div class="w-8 h-8 rounded-full bg-orange-600 flex items-center justify-center text-white">
                                                {initial}
                                            </div>
                                        }
                                    }
                                >
                                    <img
                                        src=move || photo_url().unwrap_or_default()
                                        alt="User"
                                        class="w-8 h-8 rounded-full"
                                    />
                                </Show>
                                <div class="hidden md:block">
                                    <p class="text-sm font-medium text-gray-900">{display_name}</p>
                                    <p class="text-xs text-gray-500">{email}</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </header>

                <main class="flex-1 overflow-y-auto p-4 md:p-6 bg-gray-50">
                    {children()}
                </main>
            </div>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-orange-600"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(message: String) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 text-red-700 px-4 py-3 rounded mb-4">
            <div class="flex">
                <div class="flex-shrink-0">
                    <i class="fas fa-exclamation-circle"></i>
                </div>
                <div class="ml-3">
                    <p class="text-sm">{message}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(
        email: Option<&str>,
        display_name: Option<&str>,
        photo_url: Option<&str>,
    ) -> SessionUser {
        SessionUser {
            email: email.map(str::to_string),
            display_name: display_name.map(str::to_string),
            photo_url: photo_url.map(str::to_string),
        }
    }

    #[test]
    fn display_name_falls_back_to_email_then_default() {
        let full = user(Some("admin@shelfy.app"), Some("Shelfy Admin"), None);
        assert_eq!(user_display_name(Some(&full)), "Shelfy Admin");

        let no_name = user(Some("admin@shelfy.app"), None, None);
        assert_eq!(user_display_name(Some(&no_name)), "admin@shelfy.app");

        let empty = user(None, None, None);
        assert_eq!(user_display_name(Some(&empty)), "Admin");
        assert_eq!(user_display_name(None), "Admin");
    }

    #[test]
    fn email_falls_back_to_default_address() {
        let known = user(Some("admin@shelfy.app"), None, None);
        assert_eq!(user_email(Some(&known)), "admin@shelfy.app");

        let missing = user(None, Some("Shelfy Admin"), None);
        assert_eq!(user_email(Some(&missing)), "admin@example.com");
        assert_eq!(user_email(None), "admin@example.com");
    }

    #[test]
    fn avatar_initial_walks_the_fallback_chain() {
        let named = user(Some("zoe@shelfy.app"), Some("Ada Admin"), None);
        assert_eq!(avatar_initial(Some(&named)), "A");

        let email_only = user(Some("zoe@shelfy.app"), None, None);
        assert_eq!(avatar_initial(Some(&email_only)), "z");

        // An empty display name behaves like a missing one.
        let blank_name = user(Some("zoe@shelfy.app"), Some(""), None);
        assert_eq!(avatar_initial(Some(&blank_name)), "z");

        assert_eq!(avatar_initial(Some(&user(None, None, None))), "U");
        assert_eq!(avatar_initial(None), "U");
    }

    #[test]
    fn active_entry_requires_an_exact_path_match() {
        assert!(is_active("/admin-dashboard", "/admin-dashboard"));
        assert!(!is_active("/admin-dashboard/manage-books", "/admin-dashboard"));
        assert!(!is_active("", "/admin-dashboard"));
    }

    #[test]
    fn nav_items_keep_their_order() {
        let labels: Vec<&str> = NAV_ITEMS.iter().map(|item| item.label).collect();
        assert_eq!(
            labels,
            ["Dashboard", "Manage Books", "Manage Users", "Profile", "Settings"]
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::sidebar::{provide_sidebar_bus, SidebarPosition};
    use crate::test_support::helpers::{admin_session_user, provide_session};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn layout_renders_children_and_nav() {
        let html = render_to_string(move || {
            provide_session(Some(admin_session_user()), false);
            view! {
                <AdminDashboardLayout>
                    <div>"page-content"</div>
                </AdminDashboardLayout>
            }
        });
        assert!(html.contains("page-content"));
        assert!(html.contains("Manage Books"));
        assert!(html.contains("SHELFY"));
        assert!(!html.contains("flex-row-reverse"));
    }

    #[test]
    fn layout_shows_identity_with_fallbacks_applied() {
        let html = render_to_string(move || {
            provide_session(Some(admin_session_user()), false);
            view! {
                <AdminDashboardLayout>
                    <div>"page-content"</div>
                </AdminDashboardLayout>
            }
        });
        assert!(html.contains("Shelfy Admin"));
        assert!(html.contains("admin@shelfy.app"));
    }

    #[test]
    fn published_right_position_flips_the_layout() {
        let html = render_to_string(move || {
            provide_session(Some(admin_session_user()), false);
            let bus = provide_sidebar_bus();
            bus.publish(SidebarPosition::Right);
            view! {
                <AdminDashboardLayout>
                    <div>"page-content"</div>
                </AdminDashboardLayout>
            }
        });
        assert!(html.contains("flex-row-reverse"));
        assert!(html.contains("right-0"));
    }

    #[test]
    fn renders_feedback_components() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <LoadingSpinner />
                    <ErrorMessage message="something broke".into() />
                </div>
            }
        });
        assert!(html.contains("animate-spin"));
        assert!(html.contains("something broke"));
    }
}
