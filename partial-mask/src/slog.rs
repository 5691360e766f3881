//! Adapters for emitting field snapshots through `slog`.
//!
//! This module connects [`FieldSnapshot`] with `slog` by providing a
//! `slog::Value` implementation that serializes the snapshot as structured
//! JSON via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation is the snapshot's masked projection,
//!   never the engine's actual value.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog`.

use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::engine::FieldSnapshot;

/// Placeholder logged when a snapshot cannot be converted to JSON.
const SERIALIZE_FAILED: &str = "Failed to serialize field snapshot";

/// A `slog::Value` that emits an owned snapshot as structured JSON.
///
/// ## Example
/// ```ignore
/// use partial_mask::slog::MaskedJson;
///
/// info!(logger, "ssn edited"; "field" => MaskedJson::from(engine.snapshot()));
/// ```
#[derive(Clone, Debug)]
pub struct MaskedJson {
    value: JsonValue,
}

impl From<FieldSnapshot> for MaskedJson {
    fn from(snapshot: FieldSnapshot) -> Self {
        let value = serde_json::to_value(snapshot)
            .unwrap_or_else(|_| JsonValue::String(SERIALIZE_FAILED.to_string()));
        Self { value }
    }
}

impl SlogValue for MaskedJson {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.value.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

impl SlogValue for FieldSnapshot {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        SlogValue::serialize(&MaskedJson::from(self.clone()), record, key, serializer)
    }
}
