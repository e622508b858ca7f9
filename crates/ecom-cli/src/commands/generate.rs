use std::io;

use anyhow::{Context, Result};

use crate::GenerateArgs;

pub fn run(args: &GenerateArgs) -> Result<()> {
    let (cfg, _) = super::resolve_config(&args.gen)?;
    let raw = ecom_gen::generate(cfg.n_records, cfg.seed).context("generate failed")?;

    let stdout = io::stdout().lock();
    if args.cleaned {
        let orders = ecom_clean::clean(&raw).context("clean failed")?;
        ecom_clean::write_cleaned_csv(&orders, stdout)
    } else {
        ecom_gen::write_csv(&raw, stdout)
    }
}
