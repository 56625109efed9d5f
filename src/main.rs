//! # verifier-doc
//!
//! `verifier-doc` prints the DocBook `<itemizedlist>` of verification code
//! descriptions for one category, for inclusion in the manual.  It mines the
//! verification library's source directly so the manual cannot drift from the
//! code.
//!
//! ## Quick Start
//! ```sh
//! verifier-doc /path/to/library-source-tree ERROR
//! ```
//!
//! The fragment goes to stdout; diagnostics go to stderr.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::process::exit;
use tracing_subscriber::EnvFilter;
use verifier_doc::{format_list_item, resolve, scan_codes, Cli, Entry};

fn main() {
    // Logging must stay off stdout, which carries the document fragment.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage problems exit with status 1.
            let _ = err.print();
            exit(1);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("verifier-doc: {err:#}");
        exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let header = cli.tree.join("src/verify.h");
    let contents = fs::read_to_string(&header)
        .with_context(|| format!("failed to read {}", header.display()))?;

    println!("<itemizedlist>");
    for entry in scan_codes(&contents) {
        let code = match entry {
            // Section comments have no category; never listed.
            Entry::Section(_) => continue,
            Entry::Code(code) => code,
        };
        // Every code must classify, even when it carries no description.
        if resolve(&cli.tree, &code.name)? == cli.category {
            println!("{}", format_list_item(&code.description));
        }
    }
    println!("</itemizedlist>");
    Ok(())
}
