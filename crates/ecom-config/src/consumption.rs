//! Unused-key lint.
//!
//! "Consumed pointers" are JSON Pointer prefixes that some code actually
//! reads. A leaf is consumed when it sits under one of them; every other
//! leaf is reported as unused, which usually means a typo
//! (`generator/n_record`) silently falling back to a default.

use anyhow::{bail, Result};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;
use tracing::warn;

/// Pointers read by `PipelineConfig::from_config_json`.
pub const CONSUMED_POINTERS: &[&str] = &["/generator/n_records", "/generator/seed"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnusedKeyPolicy {
    Warn,
    Fail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnusedKeyReport {
    /// Consumed prefixes used for this analysis (sorted, unique).
    pub consumed_prefixes: Vec<String>,
    /// Unused leaf pointers (sorted).
    pub unused_leaf_pointers: Vec<String>,
}

impl UnusedKeyReport {
    pub fn is_clean(&self) -> bool {
        self.unused_leaf_pointers.is_empty()
    }
}

pub fn consumed_pointers() -> &'static [&'static str] {
    CONSUMED_POINTERS
}

/// Produce an unused-key report against [`CONSUMED_POINTERS`].
///
/// `Warn` logs each unused leaf and returns the report. `Fail` returns an
/// error when any leaf is unused.
pub fn report_unused_keys(config_json: &Value, policy: UnusedKeyPolicy) -> Result<UnusedKeyReport> {
    let consumed: BTreeSet<String> = consumed_pointers()
        .iter()
        .map(|p| normalize_pointer(p))
        .collect();
    let consumed_prefixes: Vec<String> = consumed.into_iter().collect();

    let mut leaves: Vec<String> = Vec::new();
    collect_leaf_pointers(config_json, "", &mut leaves);

    let mut unused: Vec<String> = leaves
        .into_iter()
        .filter(|leaf| !consumed_prefixes.iter().any(|cp| is_prefix_pointer(cp, leaf)))
        .collect();
    unused.sort();
    unused.dedup();

    let report = UnusedKeyReport {
        consumed_prefixes,
        unused_leaf_pointers: unused,
    };

    if report.is_clean() {
        return Ok(report);
    }

    match policy {
        UnusedKeyPolicy::Fail => bail!(
            "CONFIG_UNUSED_KEYS: {} unused config leaf key(s) detected. First few: {:?}",
            report.unused_leaf_pointers.len(),
            report.unused_leaf_pointers.iter().take(12).collect::<Vec<_>>()
        ),
        UnusedKeyPolicy::Warn => {
            for leaf in &report.unused_leaf_pointers {
                warn!(pointer = %leaf, "unused config key");
            }
            Ok(report)
        }
    }
}

/// Leading `/`, no trailing `/` (except the root pointer itself).
fn normalize_pointer(p: &str) -> String {
    let mut s = p.trim().to_string();
    if !s.starts_with('/') {
        s.insert(0, '/');
    }
    while s.ends_with('/') && s.len() > 1 {
        s.pop();
    }
    s
}

/// `"/a/b"` covers `"/a/b"` and `"/a/b/c"` but not `"/a/bc"`. `"/"` covers all.
fn is_prefix_pointer(prefix: &str, leaf: &str) -> bool {
    if prefix == "/" || leaf == prefix {
        return true;
    }
    leaf.strip_prefix(prefix)
        .is_some_and(|rest| rest.starts_with('/'))
}

fn collect_leaf_pointers(v: &Value, prefix: &str, out: &mut Vec<String>) {
    match v {
        Value::Object(map) => {
            for (k, vv) in map {
                let next = format!("{}/{}", prefix, escape_pointer_token(k));
                collect_leaf_pointers(vv, &next, out);
            }
        }
        Value::Array(arr) => {
            for (i, vv) in arr.iter().enumerate() {
                collect_leaf_pointers(vv, &format!("{prefix}/{i}"), out);
            }
        }
        _ => out.push(if prefix.is_empty() {
            "/".to_string()
        } else {
            prefix.to_string()
        }),
    }
}

fn escape_pointer_token(s: &str) -> String {
    s.replace('~', "~0").replace('/', "~1")
}
