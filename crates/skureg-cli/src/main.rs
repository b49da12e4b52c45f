mod prepare;
mod sku;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use skureg_core::{AppConfig, ConfigError, Sleeve};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "skureg")]
#[command(about = "Decode product codes and prepare storefront registration fields")]
struct Cli {
    /// Print JSON instead of aligned text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse and validate an 8-character product code
    Parse { code: String },
    /// Split a folder name into product code and color
    Split { token: String },
    /// Show the category path and merchandise group for an item code
    Category {
        item: String,
        /// Sleeve length, only used by the top item code
        #[arg(long, default_value = "long")]
        sleeve: Sleeve,
    },
    /// Compose the storefront display name
    Compose {
        #[arg(long)]
        code: String,
        #[arg(long, default_value = "")]
        color: String,
        /// Title from the description record
        #[arg(long, default_value = "")]
        title: String,
    },
    /// Normalize a manufacturing year/month to YYYY.MM.01
    Date { raw: String },
    /// List product codes that have a description record
    Records {
        /// Collector output folder (defaults to SKUREG_OUT_ROOT, then kv_mvp/out)
        #[arg(long)]
        out_root: Option<PathBuf>,
    },
    /// Derive every registration field for one product
    Prepare {
        /// Folder name holding code and color, e.g. DMU2680105
        #[arg(long, conflicts_with_all = ["code", "color"])]
        token: Option<String>,
        #[arg(long, required_unless_present = "token")]
        code: Option<String>,
        #[arg(long)]
        color: Option<String>,
        #[arg(long, default_value = "long")]
        sleeve: Sleeve,
        /// Collector output folder (defaults to SKUREG_OUT_ROOT, then kv_mvp/out)
        #[arg(long)]
        out_root: Option<PathBuf>,
    },
}

/// Log level from the environment config, `info` when the config is invalid.
fn log_level(config: &Result<AppConfig, ConfigError>) -> &str {
    config.as_ref().map_or("info", |c| c.log_level.as_str())
}

/// The output folder flag, else `SKUREG_OUT_ROOT`. The environment config is
/// only required when no flag is given.
fn out_root_or_config(
    flag: Option<PathBuf>,
    config: Result<AppConfig, ConfigError>,
) -> anyhow::Result<Option<PathBuf>> {
    match flag {
        Some(path) => Ok(Some(path)),
        None => Ok(config?.out_root),
    }
}

fn main() -> anyhow::Result<()> {
    // Only `records` and `prepare` require a valid config.
    let config = skureg_core::load_app_config();
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level(&config)))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;
    match cli.command {
        Commands::Parse { code } => sku::run_parse(&code, json),
        Commands::Split { token } => sku::run_split(&token, json),
        Commands::Category { item, sleeve } => sku::run_category(&item, sleeve, json),
        Commands::Compose { code, color, title } => sku::run_compose(&code, &color, &title, json),
        Commands::Date { raw } => sku::run_date(&raw, json),
        Commands::Records { out_root } => {
            let out_root = out_root_or_config(out_root, config)?;
            prepare::run_records(out_root.as_deref(), json)
        }
        Commands::Prepare {
            token,
            code,
            color,
            sleeve,
            out_root,
        } => {
            let out_root = out_root_or_config(out_root, config)?;
            prepare::run_prepare(
                &prepare::IdentityArgs {
                    token,
                    code,
                    color,
                },
                sleeve,
                out_root.as_deref(),
                json,
            )
        }
    }
}

/// Prints a serializable value as pretty JSON on stdout.
fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
