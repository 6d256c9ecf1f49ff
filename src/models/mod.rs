pub mod menu;
pub mod menu_item;
pub mod order;
pub mod restaurant;
pub mod staff;
pub mod user;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Encode a value stored in a JSON text column.
pub(crate) fn to_json_column<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|err| {
        log::error!("Failed to encode JSON column: {err}");
        String::from("null")
    })
}

/// Decode a JSON text column, falling back to the default on malformed data.
pub(crate) fn from_json_column<T: DeserializeOwned + Default>(raw: &str) -> T {
    serde_json::from_str(raw).unwrap_or_else(|err| {
        log::warn!("Malformed JSON column `{raw}`: {err}");
        T::default()
    })
}
