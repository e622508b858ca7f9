//! Command handler modules for the `ecom` binary.
//!
//! Shared config resolution lives here; command-specific logic lives in the
//! submodules.

pub mod generate;
pub mod run;

use anyhow::{bail, Context, Result};
use ecom_config::{report_unused_keys, LoadedConfig, UnusedKeyPolicy};
use ecom_pipeline::PipelineConfig;
use tracing::info;

use crate::GenArgs;

/// Resolve the effective run parameters from config layers and flags.
///
/// The returned [`LoadedConfig`] describes the effective parameters (after
/// flag overrides), so its hash identifies what actually ran.
pub fn resolve_config(args: &GenArgs) -> Result<(PipelineConfig, LoadedConfig)> {
    let mut cfg = if args.config_paths.is_empty() {
        PipelineConfig::default()
    } else {
        let path_refs: Vec<&str> = args.config_paths.iter().map(|s| s.as_str()).collect();
        let loaded = ecom_config::load_layered_yaml(&path_refs)?;
        let policy = if args.strict_config {
            UnusedKeyPolicy::Fail
        } else {
            UnusedKeyPolicy::Warn
        };
        report_unused_keys(&loaded.config_json, policy)?;
        PipelineConfig::from_config_json(&loaded.config_json)
            .context("invalid generator config")?
    };

    if let Some(n) = args.records {
        cfg.n_records = n;
    }
    if let Some(s) = args.seed {
        cfg.seed = s;
    }

    if cfg.n_records == 0 {
        bail!("n_records must be >= 1 (use --records N or generator.n_records)");
    }

    let effective = LoadedConfig::from_value(cfg.to_config_json())?;
    info!(
        n_records = cfg.n_records,
        seed = cfg.seed,
        config_hash = %effective.config_hash,
        "resolved run config"
    );
    Ok((cfg, effective))
}
