// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use docsift::{
    category_counts, filter_results, load_corpus, normalize_query, wildcard_query, DocStore,
    MemoryIndex, ResultEntry, SearchOutcome, Searcher, SiteConfig,
};

mod cli;
use cli::display::{self, themed, BOLD, CYAN, DIM, GRAY};
use cli::{Cli, Commands};

/// `DOCSIFT_LOG` wins; otherwise warnings only, or debug with `--verbose`.
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "docsift=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env("DOCSIFT_LOG").unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Search {
            corpus,
            query,
            config,
            categories,
            limit,
            json,
        } => run_search(&corpus, &query, config.as_deref(), &categories, limit, json),
        Commands::Normalize { query } => {
            run_normalize(&query);
            Ok(())
        }
        Commands::Categories { config } => run_categories(config.as_deref()),
    }
}

fn run_search(
    corpus_path: &Path,
    query: &str,
    config_path: Option<&Path>,
    categories: &[String],
    limit: usize,
    json: bool,
) -> Result<()> {
    let docs = load_corpus(corpus_path)
        .with_context(|| format!("failed to load corpus {}", corpus_path.display()))?;
    let taxonomy = SiteConfig::load_or_default(config_path)
        .context("failed to load site config")?
        .taxonomy()
        .context("invalid category taxonomy")?;

    let index = MemoryIndex::build(&docs);
    let store = DocStore::from_documents(&docs);

    let mut selection = taxonomy.selection();
    for key in categories {
        selection
            .set(key, true)
            .with_context(|| format!("cannot filter by category '{}'", key))?;
    }

    let outcome = Searcher::new(&index, &store)
        .search_detailed(query)
        .with_context(|| format!("search for '{}' failed", query))?;
    let displayed = filter_results(&outcome.entries, &selection, &taxonomy)?;

    if json {
        let shown: Vec<&ResultEntry> = displayed.iter().take(limit).collect();
        println!("{}", serde_json::to_string_pretty(&shown)?);
        return Ok(());
    }

    print_outcome(query, &outcome, &displayed, limit);

    display::section_mid("CATEGORIES");
    for count in category_counts(&outcome.entries, &taxonomy) {
        let label = display::category_label(&count.label, selection.is_active(&count.key));
        display::row(&format!(
            " {} {} {}",
            display::pad_right(&label, 20),
            themed(GRAY, &[], &format!("({})", count.key)),
            count.count
        ));
    }
    display::section_bot();
    Ok(())
}

fn print_outcome(raw: &str, outcome: &SearchOutcome, displayed: &[ResultEntry], limit: usize) {
    display::section_top("SEARCH");
    display::row(&format!(
        " {} {}",
        themed(GRAY, &[], "query:"),
        themed(CYAN, &[BOLD], raw)
    ));
    display::row(&format!(
        " {} {} {}",
        themed(GRAY, &[], "stage:"),
        display::stage_badge(outcome.stage),
        themed(GRAY, &[DIM], &outcome.query)
    ));
    display::row(&format!(
        " {} {} of {} shown",
        themed(GRAY, &[], "results:"),
        displayed.len().min(limit),
        outcome.entries.len()
    ));
    if outcome.skipped > 0 {
        display::row(&format!(
            " {} {} hits missing from the store",
            themed(GRAY, &[], "skipped:"),
            outcome.skipped
        ));
    }

    display::section_mid("RESULTS");
    if displayed.is_empty() {
        display::row(&themed(GRAY, &[DIM], " nothing matched"));
    }
    for (rank, entry) in displayed.iter().take(limit).enumerate() {
        display::row(&format!(
            " {:>2}. {} {}",
            rank + 1,
            display::score_value(entry.score),
            themed(CYAN, &[BOLD], &display::truncate(entry.title(), 60))
        ));
        display::row(&format!(
            "            {}",
            themed(GRAY, &[], &display::truncate(entry.reference.as_str(), 66))
        ));
    }
}

fn run_normalize(query: &str) {
    display::section_top("NORMALIZE");
    display::row(&format!(" {:<10}{:?}", "raw", query));
    display::row(&format!(" {:<10}{:?}", "strict", normalize_query(query)));
    display::row(&format!(" {:<10}{:?}", "wildcard", wildcard_query(query)));
    display::section_bot();
}

fn run_categories(config_path: Option<&Path>) -> Result<()> {
    let taxonomy = SiteConfig::load_or_default(config_path)
        .context("failed to load site config")?
        .taxonomy()
        .context("invalid category taxonomy")?;

    display::section_top("CATEGORIES");
    for category in taxonomy.iter() {
        display::row(&format!(
            " {} {} {}",
            display::pad_right(&themed(CYAN, &[BOLD], &category.label), 20),
            display::pad_right(&themed(GRAY, &[], &category.key), 10),
            category.fragments.join(", ")
        ));
    }
    display::section_bot();
    Ok(())
}
