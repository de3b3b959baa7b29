//! Client-side persistence for the signed-in user record.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages read the current user and login flag once at startup via
//! [`init_auth_state`] and keep them in their own state container. Storage is
//! injected through [`KeyValueStore`] so the same loaders run against browser
//! `localStorage` (with the `hydrate` feature), a no-op server store, or an
//! in-memory map.
//!
//! LOGGING
//! =======
//! Diagnostics go through `tracing`. In `hydrate` builds `tracing` forwards
//! to the `log` facade when no subscriber is set, so the host only needs to
//! install a console logger (e.g. `console_log::init_with_level`) at startup
//! for parse fallbacks to reach the browser console.

pub mod error;
pub mod platform;
pub mod session;
pub mod storage;
pub mod user;

pub use error::StoreError;
pub use platform::{Host, detect_host, get_platform, get_store, save_it};
pub use session::{AuthState, DEFAULT_STORAGE_KEY, init_auth_state, load_login_flag, load_record, parse_json, persist, save_store};
pub use storage::{KeyValueStore, MemoryStore, NoopStore, host_store};
pub use user::{UserRecord, sign_out};
