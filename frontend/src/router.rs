use leptos::*;
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::{guard::RequireAdmin, layout::AdminDashboardLayout},
    pages::{
        AdminOverviewPage, HomePage, LoginPage, ManageBooksPage, ManageUsersPage, ProfilePage,
        SettingsPage,
    },
    state::{session::SessionProvider, sidebar::provide_sidebar_bus},
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/admin-dashboard",
    "/admin-dashboard/manage-books",
    "/admin-dashboard/manage-users",
    "/admin-dashboard/profile",
    "/admin-dashboard/settings",
];

pub const ADMIN_ROUTE_PATHS: &[&str] = &[
    "/admin-dashboard",
    "/admin-dashboard/manage-books",
    "/admin-dashboard/manage-users",
    "/admin-dashboard/profile",
    "/admin-dashboard/settings",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", "/login"];

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_sidebar_bus();
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/admin-dashboard" view=AdminArea>
                        <Route path="" view=AdminOverviewPage/>
                        <Route path="manage-books" view=ManageBooksPage/>
                        <Route path="manage-users" view=ManageUsersPage/>
                        <Route path="profile" view=ProfilePage/>
                        <Route path="settings" view=SettingsPage/>
                    </Route>
                </Routes>
            </Router>
        </SessionProvider>
    }
}

// Every admin destination goes through the guard before the shell; the shell
// hosts the matched child page.
#[component]
fn AdminArea() -> impl IntoView {
    view! {
        <RequireAdmin>
            <AdminDashboardLayout>
                <Outlet/>
            </AdminDashboardLayout>
        </RequireAdmin>
    }
}
