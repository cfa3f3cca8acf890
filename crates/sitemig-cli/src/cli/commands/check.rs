//! `sitemig check` / `sitemig check-index` – resolve, rewrite, and probe.

use anyhow::Result;
use colored::Colorize;
use std::time::Duration;

use sitemig_core::config::SitemigConfig;
use sitemig_core::fetch::HttpFetcher;
use sitemig_core::probe::HttpProbe;
use sitemig_core::report::{CheckOutcome, RunSummary};
use sitemig_core::resolve::{DirectResolver, IndexResolver, ResolveSitemap};
use sitemig_core::runner::{self, RunEvent, RunPlan};
use sitemig_core::transform::SkipPatterns;

use crate::cli::CheckArgs;

/// Which root shape the run expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMode {
    /// A single `<urlset>` sitemap.
    Direct,
    /// A `<sitemapindex>` referencing child sitemaps.
    Index,
}

pub fn run_check(cfg: &SitemigConfig, args: &CheckArgs, mode: ResolveMode) -> Result<()> {
    // CLI patterns replace (not extend) the config defaults.
    let patterns = if args.skip.is_empty() {
        cfg.skip_patterns.clone()
    } else {
        args.skip.clone()
    };
    let plan = RunPlan {
        sitemap_url: args.sitemap_url.clone(),
        new_base_url: args.new_base.trim_end_matches('/').to_string(),
        skip_patterns: SkipPatterns::new(patterns),
    };

    let connect_timeout = Duration::from_secs(cfg.connect_timeout_secs);
    let probe_timeout = Duration::from_secs(args.timeout.unwrap_or(cfg.probe_timeout_secs));
    let fetcher = HttpFetcher::new(connect_timeout);
    let probe = HttpProbe::new(probe_timeout, connect_timeout);

    let resolver: Box<dyn ResolveSitemap + '_> = match mode {
        ResolveMode::Direct => Box::new(DirectResolver::new(&fetcher)),
        ResolveMode::Index => Box::new(IndexResolver::new(&fetcher)),
    };

    println!("{}", "Fetching sitemap URLs...".blue());
    let report = runner::run(&plan, resolver.as_ref(), &probe, |event| match event {
        RunEvent::Resolved { count } => {
            println!("{}", format!("Found {} URLs.", count).green());
        }
        RunEvent::Result(result) => match result.outcome {
            CheckOutcome::Skipped => {
                println!("{}", format!("[Skipped] {}", result.url).yellow());
            }
            CheckOutcome::Ok => {
                println!("{}", format!("[OK] {}", result.url).green());
            }
            CheckOutcome::Missing => {
                println!("{}", format!("[Missing] {}", result.url).red());
            }
        },
    })?;

    print_summary(&report.summary);
    Ok(())
}

fn print_summary(summary: &RunSummary) {
    println!();
    println!("{}", "===== REPORT =====".bold());
    println!("{}", format!("Working URLs: {}", summary.ok).green());
    println!(
        "{}",
        format!("Missing URLs: {}", summary.missing_count()).red()
    );
    println!("{}", format!("Skipped URLs: {}", summary.skipped).yellow());

    if !summary.missing.is_empty() {
        println!();
        println!("Missing URLs:");
        for url in &summary.missing {
            println!("{}", url.red());
        }
    }
}
