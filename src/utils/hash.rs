//! Configuration fingerprints using blake3.
//!
//! The fingerprint is a cache key for the downstream generator: two
//! configs that resolve to the same tokens, globs and plugins hash the same.
//!
//! Canonical form before hashing:
//! - object keys sorted (authored map order does not matter)
//! - `content` sorted and de-duplicated (set semantics)
//! - every other array kept in order (font stacks, plugins)

use crate::theme::ResolvedConfig;
use anyhow::Result;

/// A 256-bit config hash (blake3 output).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConfigHash([u8; 32]);

impl ConfigHash {
    /// Convert to hex string.
    pub fn to_hex(self) -> String {
        hex::encode(self.0)
    }

    /// Short form for display (first 8 hex chars).
    pub fn short(self) -> String {
        self.to_hex()[..8].to_string()
    }
}

/// Hash the canonical JSON form of a resolved config.
pub fn fingerprint(config: &ResolvedConfig) -> Result<ConfigHash> {
    let mut value = serde_json::to_value(config)?;

    if let Some(serde_json::Value::Array(content)) = value.get_mut("content") {
        content.sort_by(|a, b| a.as_str().cmp(&b.as_str()));
        content.dedup();
    }

    let canonical = canonicalize(value);
    let bytes = serde_json::to_vec(&canonical)?;
    Ok(ConfigHash(*blake3::hash(&bytes).as_bytes()))
}

/// Rebuild every object with its keys in sorted order.
fn canonicalize(value: serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => {
            let mut entries: Vec<_> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, canonicalize(v)))
                    .collect(),
            )
        }
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.into_iter().map(canonicalize).collect())
        }
        other => other,
    }
}
