mod commands;
mod config;
mod progress;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "graphid",
    version,
    about = "Manage Microsoft Entra identity settings through Microsoft Graph"
)]
struct Cli {
    #[command(subcommand)]
    command: commands::Command,

    /// Path to the config file
    #[arg(long, global = true, env = "GRAPHID_CONFIG")]
    config: Option<PathBuf>,

    /// Tenant to run against (defaults to the configured default tenant)
    #[arg(short, long, global = true)]
    tenant: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let ctx = commands::Context::new(cli.config, cli.tenant);
    match cli.command {
        commands::Command::Tenant(args) => commands::tenant::run(&ctx, args).await,
        commands::Command::Policies(args) => commands::policies::run(&ctx, args).await,
        commands::Command::Locations(args) => commands::locations::run(&ctx, args).await,
        commands::Command::Providers(args) => commands::providers::run(&ctx, args).await,
        commands::Command::UserFlows(args) => commands::user_flows::run(&ctx, args).await,
        commands::Command::Attributes(args) => commands::attributes::run(&ctx, args).await,
        commands::Command::Raw(args) => commands::raw::run(&ctx, args).await,
    }
}
