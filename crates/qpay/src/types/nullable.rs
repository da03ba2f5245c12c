//! Deserialization helpers for loosely typed response bodies.

use serde::{Deserialize, Deserializer};

/// Deserialize a field, mapping JSON `null` to the type's default.
///
/// Pair with `#[serde(default)]` so a missing key behaves the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
