use web_sys::{Storage, Window};

#[cfg(target_arch = "wasm32")]
pub fn window() -> Result<Window, String> {
    web_sys::window().ok_or_else(|| "no window object".to_string())
}

// Browser globals are only callable on wasm; host builds (tests) see the
// same fallible surface instead of a panicking import.
#[cfg(not(target_arch = "wasm32"))]
pub fn window() -> Result<Window, String> {
    Err("window is only available in the browser".to_string())
}

pub fn local_storage() -> Result<Storage, String> {
    window()?
        .local_storage()
        .map_err(|_| "localStorage is unavailable".to_string())?
        .ok_or_else(|| "localStorage is unavailable".to_string())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn storage_is_unavailable_on_the_host() {
        assert!(window().is_err());
        assert!(local_storage().is_err());
    }
}
