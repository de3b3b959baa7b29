//! Runtime host detection and host-bound storage access.
//!
//! SYSTEM CONTEXT
//! ==============
//! The same crate is compiled for the browser (`hydrate`) and for server-side
//! rendering. On the server there is no persistent store, so writes vanish and
//! reads come back empty.

#[cfg(test)]
#[path = "platform_test.rs"]
mod tests;

use crate::storage::host_store;

/// Execution environment of the current process.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Host {
    Browser,
    Server,
}

/// Detect whether a browser `window` is available.
#[must_use]
pub fn detect_host() -> Host {
    #[cfg(feature = "hydrate")]
    {
        if web_sys::window().is_some() { Host::Browser } else { Host::Server }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Host::Server
    }
}

/// Alias of [`detect_host`].
#[must_use]
pub fn get_platform() -> Host {
    detect_host()
}

/// Write `value` under `key` in the host's persistent store. No-op on the server.
pub fn save_it(key: &str, value: &str) {
    host_store().write(key, value);
}

/// Raw stored string for `key` from the host's persistent store. Always
/// `None` on the server.
#[must_use]
pub fn get_store(key: &str) -> Option<String> {
    host_store().read(key)
}
