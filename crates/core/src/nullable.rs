//! Serde support for "absent vs. explicit null" in partial updates.
//!
//! A plain `Option<Option<T>>` collapses `null` into the outer `None`, so a
//! client could never clear a nullable column. Fields annotated with
//! `#[serde(default, deserialize_with = "glocation_core::nullable::deserialize")]`
//! decode as:
//!
//! | JSON            | Value              |
//! |-----------------|--------------------|
//! | field missing   | `None`             |
//! | `"field": null` | `Some(None)`       |
//! | `"field": v`    | `Some(Some(v))`    |

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(..)`, keeping `null` as `Some(None)`.
///
/// Must be paired with `#[serde(default)]` so a missing field yields `None`.
pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
