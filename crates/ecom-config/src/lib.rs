//! ecom-config
//!
//! Layered YAML configuration for a pipeline run.
//!
//! Documents merge in order (later layers override earlier ones, objects
//! deep-merge). The merged document is rendered as canonical JSON (sorted
//! keys, compact) and hashed with SHA-256, so a run can be tied to the exact
//! configuration that produced it.

mod consumption;

pub use consumption::{
    consumed_pointers, report_unused_keys, UnusedKeyPolicy, UnusedKeyReport, CONSUMED_POINTERS,
};

use anyhow::{Context, Result};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::fs;

#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config_hash: String,
    pub canonical_json: String,
    pub config_json: Value,
}

impl LoadedConfig {
    /// Wrap an already-merged JSON document.
    pub fn from_value(config_json: Value) -> Result<Self> {
        let canonical_json = canonicalize_json(&config_json)?;
        let config_hash = sha256_hex(canonical_json.as_bytes());
        Ok(LoadedConfig {
            config_hash,
            canonical_json,
            config_json,
        })
    }

    /// Configuration of a run without any `--config` layers.
    pub fn empty() -> Result<Self> {
        Self::from_value(serde_json::json!({}))
    }
}

pub fn load_layered_yaml(paths: &[&str]) -> Result<LoadedConfig> {
    let mut docs: Vec<String> = Vec::new();
    for p in paths {
        let raw =
            fs::read_to_string(p).with_context(|| format!("failed to read yaml path: {p}"))?;
        docs.push(raw);
    }

    let doc_refs: Vec<&str> = docs.iter().map(|s| s.as_str()).collect();
    load_layered_yaml_from_strings(&doc_refs)
}

pub fn load_layered_yaml_from_strings(yaml_docs: &[&str]) -> Result<LoadedConfig> {
    let mut merged = serde_json::json!({});
    for (i, raw) in yaml_docs.iter().enumerate() {
        let v_yaml: serde_yaml::Value =
            serde_yaml::from_str(raw).with_context(|| format!("invalid yaml in layer {i}"))?;
        let v_json = serde_json::to_value(v_yaml)
            .with_context(|| format!("yaml->json conversion failed in layer {i}"))?;
        merged = deep_merge(merged, v_json);
    }

    LoadedConfig::from_value(merged)
}

fn deep_merge(a: Value, b: Value) -> Value {
    match (a, b) {
        (Value::Object(mut a_map), Value::Object(b_map)) => {
            for (k, b_val) in b_map {
                let a_val = a_map.remove(&k).unwrap_or(Value::Null);
                a_map.insert(k, deep_merge(a_val, b_val));
            }
            Value::Object(a_map)
        }
        // An empty YAML document parses to null; it overrides nothing.
        (a_other, Value::Null) if a_other.is_object() => a_other,
        (_, b_other) => b_other,
    }
}

/// Compact JSON with object keys in sorted order (serde_json's default map
/// is ordered).
fn canonicalize_json(v: &Value) -> Result<String> {
    serde_json::to_string(v).context("canonical json serialize failed")
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}
