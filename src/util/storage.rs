//! Browser `localStorage` helpers for typed key/value persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only read/write behavior so callers can persist
//! preferences and drafts without repeating web-sys glue. Outside a browser
//! the helpers degrade to defaults/no-ops.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load the value stored under `key`, falling back to `default`.
///
/// Returns `default` when storage is unavailable, the key is absent, or the
/// stored text fails to decode. A decode failure is logged and the stale
/// entry is left in place for the next `save` to overwrite.
pub fn load<T: DeserializeOwned>(key: &str, default: T) -> T {
    #[cfg(feature = "hydrate")]
    {
        let Some(raw) = read_raw(key) else {
            return default;
        };
        match decode(&raw) {
            Some(value) => value,
            None => {
                leptos::logging::warn!("storage: malformed entry under {key:?}, using default");
                default
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        default
    }
}

/// Serialize `value` and store it under `key`.
///
/// No-ops when storage is unavailable or the value fails to serialize.
pub fn save<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        let Some(raw) = encode(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Encode a value into the stored text representation (JSON).
#[must_use]
pub fn encode<T: Serialize>(value: &T) -> Option<String> {
    serde_json::to_string(value).ok()
}

/// Decode the stored text representation, `None` on malformed content.
#[must_use]
pub fn decode<T: DeserializeOwned>(raw: &str) -> Option<T> {
    serde_json::from_str(raw).ok()
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

#[cfg(feature = "hydrate")]
fn read_raw(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}
