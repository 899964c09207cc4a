//! Recursive option merge shared by every widget.
//!
//! Options are handled as `toml::Value` trees: an override table is laid
//! over the serialized defaults, key by key. Where both sides hold a
//! table the merge recurses, anything else is replaced outright. Keys the
//! defaults do not know about are carried through untouched.

use serde::Serialize;
use serde::de::DeserializeOwned;
use toml::Value;

use super::SettingsError;

/// Merge `overrides` into `base` in place.
pub fn merge_values(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Table(base), Value::Table(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_values(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

/// Build a `T` from its defaults with `overrides` merged on top.
pub fn with_defaults<T>(overrides: Value) -> Result<T, SettingsError>
where
    T: Default + Serialize + DeserializeOwned,
{
    let mut merged = Value::try_from(T::default())?;
    merge_values(&mut merged, overrides);
    Ok(merged.try_into()?)
}
