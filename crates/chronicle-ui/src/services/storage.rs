//! Session persistence in browser local storage.

use chronicle_api_models::Session;
use gloo::storage::{LocalStorage, Storage};

use crate::features::auth::state::parse_stored_session;

/// Local-storage key holding the serialized session.
pub(crate) const SESSION_KEY: &str = "chronicle.session";

/// Read the raw persisted blob, if any.
pub(crate) fn load_raw_session() -> Option<String> {
    LocalStorage::raw().get_item(SESSION_KEY).ok()?
}

/// Load the persisted session, tolerating absent or malformed data.
pub(crate) fn load_session() -> Option<Session> {
    parse_stored_session(&load_raw_session()?)
}

/// Persist the session for the next page load.
pub(crate) fn store_session(session: &Session) {
    match serde_json::to_string(session) {
        Ok(raw) => {
            if let Err(err) = LocalStorage::raw().set_item(SESSION_KEY, &raw) {
                gloo::console::error!(format!("failed to persist session: {err:?}"));
            }
        }
        Err(err) => gloo::console::error!(format!("failed to encode session: {err}")),
    }
}

/// Forget the persisted session.
pub(crate) fn clear_session() {
    LocalStorage::delete(SESSION_KEY);
}
