// src/cli.rs
use std::io::{self, BufWriter};

use clap::Parser;
use color_eyre::eyre::{bail, Result};

use crate::config::{consts::WORKERS, Options, OutputMode, SourceOptions, TermSelector};
use crate::core::net::HttpFetcher;
use crate::progress::Progress;

/// Scrape schema.org term pages and print them as a dump, SQL-ish tables or JSON.
#[derive(Parser, Debug)]
#[command(name = "schema_scrape", version, about)]
pub struct Args {
    /// Output notation: pp, sql or json.
    #[arg(short, long, default_value_t = OutputMode::Pp)]
    pub mode: OutputMode,

    /// Log each fetch and per-term progress to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print the term index and exit.
    #[arg(short, long)]
    pub list_terms: bool,

    /// Concurrent fetches.
    #[arg(short, long, default_value_t = WORKERS)]
    pub workers: usize,

    /// Site root the index and term pages are fetched from.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Terms to scrape (e.g. Person PostalAddress). Empty means every indexed term.
    pub terms: Vec<String>,
}

impl Args {
    pub fn into_options(self) -> Result<Options> {
        if self.workers == 0 {
            bail!("--workers must be at least 1");
        }
        let mut source = SourceOptions::default();
        if let Some(url) = self.base_url {
            source.base_url = url;
        }
        Ok(Options {
            mode: self.mode,
            verbose: self.verbose,
            terms: TermSelector::from_list(self.terms),
            list_terms: self.list_terms,
            workers: self.workers,
            source,
            ..Options::default()
        })
    }
}

/// Per-term status lines on stderr.
struct StderrProgress {
    total: usize,
    done: usize,
}

impl Progress for StderrProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }

    fn item_done(&mut self, term: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {term}", self.done, self.total);
    }

    fn item_failed(&mut self, term: &str, err: &str) {
        self.done += 1;
        eprintln!("[{}/{}] {term} FAILED: {err}", self.done, self.total);
    }
}

pub fn run() -> Result<()> {
    let opts = Args::parse().into_options()?;
    crate::log::init(opts.verbose);

    let fetcher = HttpFetcher::new()?;
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut progress = StderrProgress { total: 0, done: 0 };
    let progress: Option<&mut dyn Progress> = if opts.verbose { Some(&mut progress) } else { None };

    let summary = crate::runner::run(&opts, &fetcher, &mut out, progress)?;

    if !summary.failed.is_empty() {
        bail!(
            "{} of {} term(s) failed: {}",
            summary.failed.len(),
            summary.failed.len() + summary.rendered,
            summary.failed.iter().map(|(t, _)| t.as_str()).collect::<Vec<_>>().join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_map_onto_options() {
        let args = Args::parse_from(["schema_scrape", "-m", "sql", "-v", "Person", "Place"]);
        let opts = args.into_options().unwrap();
        assert_eq!(opts.mode, OutputMode::Sql);
        assert!(opts.verbose);
        assert_eq!(opts.terms, TermSelector::Named(vec![s!("Person"), s!("Place")]));
        assert_eq!(opts.source, SourceOptions::default());
    }

    #[test]
    fn no_terms_means_all() {
        let opts = Args::parse_from(["schema_scrape", "--base-url", "http://localhost:8080"])
            .into_options()
            .unwrap();
        assert_eq!(opts.terms, TermSelector::All);
        assert_eq!(opts.mode, OutputMode::Pp);
        assert_eq!(opts.source.base_url, "http://localhost:8080");
    }

    #[test]
    fn bad_mode_and_zero_workers_are_rejected() {
        assert!(Args::try_parse_from(["schema_scrape", "-m", "yaml"]).is_err());
        let args = Args::parse_from(["schema_scrape", "-w", "0"]);
        assert!(args.into_options().is_err());
    }
}
