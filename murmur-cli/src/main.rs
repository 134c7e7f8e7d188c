use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::ConfigLoader;

#[derive(Parser)]
#[command(name = "murmur", about = "A local message feed for coding agents")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Install murmur hooks into Claude Code
    Install(commands::install::InstallArgs),
    /// Remove murmur hooks from Claude Code
    Uninstall(commands::uninstall::UninstallArgs),
    /// Show hook installation status
    Status(commands::status::StatusArgs),
    /// Post a message to the feed
    Post(commands::post::PostArgs),
    /// Read messages from the feed
    Read(commands::read::ReadArgs),
    /// Print the name this agent posts under
    Whoami(commands::whoami::WhoamiArgs),
    /// Diagnose the murmur setup
    Doctor(commands::doctor::DoctorArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ConfigLoader::load()?;

    match cli.command {
        Commands::Install(args) => commands::install::run(args, &config),
        Commands::Uninstall(args) => commands::uninstall::run(args, &config),
        Commands::Status(args) => commands::status::run(args, &config),
        Commands::Post(args) => commands::post::run(args, &config),
        Commands::Read(args) => commands::read::run(args, &config),
        Commands::Whoami(args) => commands::whoami::run(args, &config),
        Commands::Doctor(args) => commands::doctor::run(args, &config),
        Commands::Config(args) => commands::config::run(args, &config),
    }
}
