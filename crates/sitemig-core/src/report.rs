//! Per-URL outcomes and the end-of-run summary.

/// Terminal state of one URL check. Skip and check are mutually exclusive:
/// a skipped URL is never probed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    Skipped,
    Ok,
    Missing,
}

/// One URL's result: the outcome plus the URL that was tested (the rewritten
/// URL, or the original when skipped).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub url: String,
    pub outcome: CheckOutcome,
}

/// Aggregate of one run.
///
/// Built from the ordered result list rather than live counters, so a
/// bounded-concurrency runner collecting results out of order can reuse it
/// after sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub ok: usize,
    pub skipped: usize,
    /// Missing URLs in the order they were discovered.
    pub missing: Vec<String>,
}

impl RunSummary {
    pub fn from_results(results: &[CheckResult]) -> Self {
        let mut summary = RunSummary::default();
        for result in results {
            match result.outcome {
                CheckOutcome::Ok => summary.ok += 1,
                CheckOutcome::Skipped => summary.skipped += 1,
                CheckOutcome::Missing => summary.missing.push(result.url.clone()),
            }
        }
        summary
    }

    pub fn missing_count(&self) -> usize {
        self.missing.len()
    }

    /// Total URLs processed; equals the number of results.
    pub fn total(&self) -> usize {
        self.ok + self.skipped + self.missing.len()
    }
}
