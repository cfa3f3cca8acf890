//! End-to-end check run: resolve, filter, rewrite, probe, summarize.
//!
//! Strictly sequential: each URL reaches a terminal state
//! (`Skipped | Ok | Missing`) before the next is considered. The skip check
//! runs before any rewrite or network call.

use crate::probe::UrlProbe;
use crate::report::{CheckOutcome, CheckResult, RunSummary};
use crate::resolve::{ResolveError, ResolveSitemap};
use crate::transform::{convert_to_new_url, SkipPatterns, TransformError};

/// Inputs for one check run, assembled by the CLI from flags and config.
#[derive(Debug, Clone)]
pub struct RunPlan {
    /// Root sitemap (or sitemap index) URL on the existing host.
    pub sitemap_url: String,
    /// Base URL of the new host, e.g. "https://new.example".
    pub new_base_url: String,
    /// Original-URL substring patterns excluded from checking.
    pub skip_patterns: SkipPatterns,
}

/// Fatal run failure. Per-URL probe failures are not errors; they surface as
/// `Missing` results.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Transform(#[from] TransformError),
}

/// Progress notification delivered while the run advances.
#[derive(Debug)]
pub enum RunEvent<'a> {
    /// Resolution finished; `count` URLs will be processed.
    Resolved { count: usize },
    /// One URL reached a terminal state.
    Result(&'a CheckResult),
}

/// Outcome of a completed run. Every resolved URL yields exactly one entry
/// in `results`, in resolution order.
#[derive(Debug)]
pub struct RunReport {
    pub results: Vec<CheckResult>,
    pub summary: RunSummary,
}

/// Drives one full check run.
///
/// Resolution failure aborts before any probe. Skipped URLs are recorded
/// under their original URL and never probed; all others are rewritten onto
/// the new base and probed once.
pub fn run<F>(
    plan: &RunPlan,
    resolver: &dyn ResolveSitemap,
    probe: &dyn UrlProbe,
    mut on_event: F,
) -> Result<RunReport, RunError>
where
    F: FnMut(RunEvent<'_>),
{
    let originals = resolver.resolve(&plan.sitemap_url)?;
    on_event(RunEvent::Resolved {
        count: originals.len(),
    });

    let mut results = Vec::with_capacity(originals.len());
    for original in &originals {
        let result = if plan.skip_patterns.matches(original) {
            CheckResult {
                url: original.clone(),
                outcome: CheckOutcome::Skipped,
            }
        } else {
            let new_url = convert_to_new_url(original, &plan.new_base_url)?;
            let outcome = if probe.check(&new_url) {
                CheckOutcome::Ok
            } else {
                CheckOutcome::Missing
            };
            CheckResult {
                url: new_url,
                outcome,
            }
        };
        on_event(RunEvent::Result(&result));
        results.push(result);
    }

    let summary = RunSummary::from_results(&results);
    Ok(RunReport { results, summary })
}
