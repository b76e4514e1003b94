// src/runner.rs
//! Drives a run: resolve terms → fetch + extract (worker pool) → render → write.

use std::{
    io::Write,
    sync::{atomic::{AtomicUsize, Ordering}, mpsc},
    thread,
    time::Duration,
};

use crate::{
    config::{consts::JITTER_MS, Options, TermSelector},
    core::Fetch,
    error::ScrapeError,
    model::TermRecord,
    progress::Progress,
    render, specs,
};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Identifiers printed by a `list_terms` run.
    pub listed: usize,
    pub rendered: usize,
    /// (term, error message) for every term that could not be rendered.
    pub failed: Vec<(String, String)>,
}

/// Fetch the index page and read its term list.
pub fn list_terms(opts: &Options, fetcher: &dyn Fetch) -> Result<Vec<String>, ScrapeError> {
    let url = opts.source.index_url();
    logf!("Fetching term index {url}");
    let raw = fetcher.fetch(&url)?;
    specs::extract_term_list_with(raw, &opts.markers)
}

pub fn resolve_terms(opts: &Options, fetcher: &dyn Fetch) -> Result<Vec<String>, ScrapeError> {
    match &opts.terms {
        TermSelector::All => list_terms(opts, fetcher),
        TermSelector::Named(v) => Ok(v.clone()),
    }
}

/// Fetch and extract one term page.
pub fn fetch_record(opts: &Options, fetcher: &dyn Fetch, term: &str) -> Result<TermRecord, ScrapeError> {
    let url = opts.source.term_url(term);
    logf!("Fetching {term} from {url}");
    let raw = fetcher.fetch(&url)?;
    specs::extract_term_record_with(term, raw, &opts.markers)
}

/// Fetch + extract every term, spread over `opts.workers` threads.
/// Results come back in the order of `terms`, one per term.
pub fn collect_records<F>(
    opts: &Options,
    fetcher: &F,
    terms: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Vec<(String, Result<TermRecord, ScrapeError>)>
where
    F: Fetch + Sync,
{
    if let Some(p) = progress.as_deref_mut() {
        p.begin(terms.len());
    }

    let counter = AtomicUsize::new(0);
    let (res_tx, res_rx) = mpsc::channel::<(usize, Result<TermRecord, ScrapeError>)>();
    let workers = opts.workers.min(terms.len()).max(1);
    let mut slots: Vec<Option<Result<TermRecord, ScrapeError>>> =
        std::iter::repeat_with(|| None).take(terms.len()).collect();

    thread::scope(|scope| {
        for _ in 0..workers {
            let tx = res_tx.clone();
            let counter = &counter;
            scope.spawn(move || {
                loop {
                    let i = counter.fetch_add(1, Ordering::Relaxed);
                    if i >= terms.len() {
                        break;
                    }
                    let result = fetch_record(opts, fetcher, &terms[i]);
                    if tx.send((i, result)).is_err() {
                        break;
                    }
                    if opts.request_pause_ms > 0 && counter.load(Ordering::Relaxed) < terms.len() {
                        let jitter = (i as u64) % JITTER_MS;
                        thread::sleep(Duration::from_millis(opts.request_pause_ms + jitter)); // be polite
                    }
                }
            });
        }
        drop(res_tx); // this thread is sole receiver now

        // Aggregate results
        for (i, result) in res_rx {
            if let Some(p) = progress.as_deref_mut() {
                match &result {
                    Ok(_) => p.item_done(&terms[i]),
                    Err(e) => p.item_failed(&terms[i], &e.to_string()),
                }
            }
            slots[i] = Some(result);
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    terms
        .iter()
        .cloned()
        .zip(slots)
        .map(|(term, slot)| {
            let result = slot.unwrap_or_else(|| {
                Err(ScrapeError::fetch(&term, "worker ended before fetching this term"))
            });
            (term, result)
        })
        .collect()
}

/// One full run as configured by `opts`, writing to `out`.
///
/// A failing term is logged, reported and skipped; the others still render.
/// Failing to fetch or read the index aborts the run.
pub fn run<F, W>(
    opts: &Options,
    fetcher: &F,
    out: &mut W,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, ScrapeError>
where
    F: Fetch + Sync,
    W: Write,
{
    let mut summary = RunSummary::default();

    if opts.list_terms {
        let terms = list_terms(opts, fetcher)?;
        for term in &terms {
            writeln!(out, "{term}")?;
        }
        summary.listed = terms.len();
        return Ok(summary);
    }

    let terms = resolve_terms(opts, fetcher)?;
    logf!("Scraping {} term(s), mode {}", terms.len(), opts.mode);

    for (term, result) in collect_records(opts, fetcher, &terms, progress) {
        match result.and_then(|rec| render::render(&rec, opts.mode)) {
            Ok(text) => {
                writeln!(out, "{text}")?;
                summary.rendered += 1;
            }
            Err(e) => {
                loge!("{term}: {e}");
                summary.failed.push((term, e.to_string()));
            }
        }
    }

    out.flush()?;
    Ok(summary)
}
