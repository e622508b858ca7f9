mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ecom")]
#[command(about = "Synthetic e-commerce sales analysis", long_about = None)]
struct Cli {
    /// Defaults to `run` with default parameters.
    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, clean and aggregate; print key insights
    Run(RunArgs),

    /// Print the generated dataset as CSV
    Generate(GenerateArgs),

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base first)
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

/// Generation parameters shared by `run` and `generate`.
/// Precedence: flag > config file > built-in default.
#[derive(Args, Clone, Debug, Default)]
pub struct GenArgs {
    /// Number of orders to generate
    #[arg(long)]
    pub records: Option<usize>,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Layered config paths in merge order
    #[arg(long = "config")]
    pub config_paths: Vec<String>,

    /// Treat unused config keys as an error instead of a warning
    #[arg(long, default_value_t = false)]
    pub strict_config: bool,
}

#[derive(Args, Clone, Debug, Default)]
pub struct RunArgs {
    #[command(flatten)]
    pub gen: GenArgs,

    /// Print a JSON document instead of the insights block
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub gen: GenArgs,

    /// Print the cleaned dataset (derived columns, date order) instead
    #[arg(long, default_value_t = false)]
    pub cleaned: bool,
}

fn init_tracing() {
    // stdout carries results; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.cmd.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => commands::run::run(&args)?,
        Commands::Generate(args) => commands::generate::run(&args)?,
        Commands::ConfigHash { paths } => {
            let path_refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let loaded = ecom_config::load_layered_yaml(&path_refs)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }
    }

    Ok(())
}
