mod commands;
mod output;
mod xml_output;

use std::path::PathBuf;

use anyhow::Result;
use breakdowns_lib::config::ConfigFlags;
use breakdowns_lib::CatalogConfig;
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "breakdowns")]
#[command(about = "Browse company breakdowns and valuation write-ups")]
struct Cli {
    /// Output format: table, json, csv, markdown, xml
    #[arg(long, global = true)]
    output: Option<String>,

    /// URL of the posts document, or a path to a local copy
    #[arg(long, global = true)]
    source: Option<String>,

    /// YAML config file (source, timeout_secs, output)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List posts matching the given filters
    Posts(commands::posts::PostsArgs),
    /// List the sector filter options
    Sectors,
    /// List the valuation method filter options
    Methods,
    /// Open a post in the reader
    Read(commands::read::ReadArgs),
    /// Interactive session reading commands from stdin
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("breakdowns_cli=info".parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CatalogConfig::resolve(&ConfigFlags {
        config: cli.config.as_deref(),
        source: cli.source.as_deref(),
        output: cli.output.as_deref(),
    })?;

    let format = OutputFormat::parse(&config.output);

    match &cli.command {
        Commands::Posts(args) => commands::posts::run(args, &config, &format).await?,
        Commands::Sectors => commands::options::run_sectors(&config, &format).await?,
        Commands::Methods => commands::options::run_methods(&format)?,
        Commands::Read(args) => commands::read::run(args, &config, &format).await?,
        Commands::Browse => commands::browse::run(&config, &format).await?,
    }

    Ok(())
}
