// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsift command-line interface.
//!
//! Three subcommands: `search` to run a query against a corpus file the way
//! the site's search box would, `normalize` to show what a query is rewritten
//! to, and `categories` to list the section toggles a config defines.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "docsift",
    about = "Query normalization, fallback search and section filtering for docs sites",
    version
)]
pub struct Cli {
    /// Log search stages to stderr (same as DOCSIFT_LOG=debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus JSON file and display results
    Search {
        /// Path to the corpus (JSON array of documents)
        corpus: PathBuf,

        /// Search query, as typed into the search box
        query: String,

        /// Site config with the category taxonomy (defaults to Docs/Tutorials/Reference)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Only show results in this category. Repeat to combine.
        #[arg(long = "category", value_name = "KEY")]
        categories: Vec<String>,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the displayed results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the strict and fallback forms of a query
    Normalize {
        /// Search query
        query: String,
    },

    /// List the categories a site config defines
    Categories {
        /// Site config (defaults to Docs/Tutorials/Reference)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
