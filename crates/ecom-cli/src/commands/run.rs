use anyhow::{Context, Result};
use serde_json::json;

use crate::RunArgs;

pub fn run(args: &RunArgs) -> Result<()> {
    let (cfg, effective) = super::resolve_config(&args.gen)?;
    let out = ecom_pipeline::run_pipeline(&cfg)?;

    if args.json {
        let doc = json!({
            "config_hash": effective.config_hash,
            "clean_report": out.clean_report,
            "insights": out.insights,
            "aggregation": out.aggregation,
            "dashboard": out.dashboard,
        });
        let s = serde_json::to_string_pretty(&doc).context("serialize run output failed")?;
        println!("{s}");
    } else {
        println!();
        println!("{}", out.insights);
    }

    Ok(())
}
