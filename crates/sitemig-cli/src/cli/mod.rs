//! CLI for the Sitemig migration verifier.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sitemig_core::config;

use commands::{run_check, ResolveMode};

/// Top-level CLI for the Sitemig migration verifier.
#[derive(Debug, Parser)]
#[command(name = "sitemig")]
#[command(about = "Sitemig: verify a site's URL inventory on a new host", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Arguments shared by both check variants.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Root sitemap URL on the existing host.
    pub sitemap_url: String,

    /// Base URL of the new host (scheme + authority, no trailing slash),
    /// e.g. https://new.example
    #[arg(long, value_name = "URL")]
    pub new_base: String,

    /// Skip original URLs containing this substring (repeatable).
    /// When given, replaces the skip patterns from the config file.
    #[arg(long = "skip", value_name = "PATTERN")]
    pub skip: Vec<String>,

    /// Overall probe timeout in seconds (overrides the config file).
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Check a single sitemap (a <urlset> document).
    Check(CheckArgs),

    /// Check a sitemap index (a <sitemapindex> document) and all of its
    /// child sitemaps.
    CheckIndex(CheckArgs),
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Check(args) => run_check(&cfg, &args, ResolveMode::Direct),
            CliCommand::CheckIndex(args) => run_check(&cfg, &args, ResolveMode::Index),
        }
    }
}

#[cfg(test)]
mod tests;
