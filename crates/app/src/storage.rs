//! Bearer-token persistence.
//!
//! On the web the token lives in `localStorage` so a reload can restore
//! the session. Off wasm (native shells, unit tests) an in-process slot
//! stands in; those sessions simply do not survive a restart.

const TOKEN_KEY: &str = "token";

#[cfg(target_arch = "wasm32")]
mod backend {
    use gloo_storage::{LocalStorage, Storage};

    pub fn read() -> Option<String> {
        LocalStorage::get(super::TOKEN_KEY).ok()
    }

    pub fn write(token: &str) {
        let _ = LocalStorage::set(super::TOKEN_KEY, token);
    }

    pub fn clear() {
        LocalStorage::delete(super::TOKEN_KEY);
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod backend {
    use std::sync::RwLock;

    static TOKEN: RwLock<Option<String>> = RwLock::new(None);

    pub fn read() -> Option<String> {
        TOKEN.read().ok().and_then(|guard| guard.clone())
    }

    pub fn write(token: &str) {
        if let Ok(mut guard) = TOKEN.write() {
            *guard = Some(token.to_string());
        }
    }

    pub fn clear() {
        if let Ok(mut guard) = TOKEN.write() {
            *guard = None;
        }
    }
}

pub fn token() -> Option<String> {
    backend::read()
}

pub fn store_token(token: &str) {
    backend::write(token);
}

pub fn clear_token() {
    backend::clear();
}
