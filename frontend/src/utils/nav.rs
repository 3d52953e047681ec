use crate::utils::storage;

pub fn current_path() -> String {
    storage::window()
        .ok()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

pub fn current_search() -> String {
    storage::window()
        .ok()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn origin() -> Option<String> {
    storage::window().ok().and_then(|w| w.location().origin().ok())
}

/// Full-page navigation, matching the anchor-based routing used everywhere
/// else in the shell.
pub fn redirect_to(path: &str) {
    if let Ok(window) = storage::window() {
        if window.location().set_href(path).is_err() {
            log::error!("failed to navigate to {path}");
        }
    }
}
