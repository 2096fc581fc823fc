//! Aiveil - classify feed posts as AI-related or not.
//!
//! Takes post text as arguments, or one post per line on stdin, and prints
//! one JSON record per post:
//!
//! ```text
//! $ aiveil "Excited to share my new AI-powered app!"
//! {"text":"Excited to share my new AI-powered app!","verdict":{"matched":true,"confidence":"high","matchedPattern":"AI-powered"},"notice":{...}}
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use aiveil_core::{Classifier, OverlayNotice, RuleSet, RuleSetConfig, Verdict};
use anyhow::Context;
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

/// Aiveil - detect AI-related content in feed posts
#[derive(Parser, Debug)]
#[command(name = "aiveil", version, about)]
struct Args {
    /// Post text to classify (reads one post per line from stdin if omitted)
    text: Vec<String>,

    /// JSON rule file; tables it omits keep their builtin values
    #[arg(long, value_name = "FILE")]
    rules: Option<PathBuf>,

    /// Print the builtin rule tables as JSON and exit
    #[arg(long)]
    dump_rules: bool,

    /// Only print records for matched posts
    #[arg(long)]
    only_matched: bool,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,

    /// Set log level (error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

/// One output line.
#[derive(Serialize)]
struct Record<'a> {
    text: &'a str,
    verdict: &'a Verdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<OverlayNotice>,
}

/// Counts reported once all input is processed.
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    scanned: usize,
    matched: usize,
}

/// Initialize console logging on stderr, keeping stdout for records.
fn init_logging(args: &Args) {
    let log_level = if args.debug { "debug" } else { &args.log_level };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("aiveil={},warn", log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}

fn load_rules(path: Option<&PathBuf>) -> anyhow::Result<RuleSet> {
    match path {
        Some(path) => RuleSet::from_file(path)
            .with_context(|| format!("Failed to load rule file {:?}", path)),
        None => Ok(RuleSet::builtin()),
    }
}

fn write_record(
    out: &mut impl Write,
    classifier: &Classifier,
    text: &str,
    only_matched: bool,
    summary: &mut Summary,
) -> anyhow::Result<()> {
    let verdict = classifier.classify(text);
    summary.scanned += 1;

    if verdict.matched {
        summary.matched += 1;
        tracing::debug!(
            "Matched {:?} ({}): {}",
            verdict.matched_pattern.as_deref().unwrap_or_default(),
            verdict.confidence.map(|c| c.name()).unwrap_or_default(),
            text
        );
    } else if only_matched {
        return Ok(());
    }

    let record = Record {
        text,
        verdict: &verdict,
        notice: OverlayNotice::for_verdict(&verdict),
    };
    serde_json::to_writer(&mut *out, &record)?;
    writeln!(out)?;
    Ok(())
}

/// Classifies every input post and writes one record per post.
fn run(
    args: &Args,
    classifier: &Classifier,
    input: impl BufRead,
    out: &mut impl Write,
) -> anyhow::Result<Summary> {
    let mut summary = Summary::default();

    if args.text.is_empty() {
        for line in input.lines() {
            let line = line.context("Failed to read stdin")?;
            write_record(out, classifier, &line, args.only_matched, &mut summary)?;
        }
    } else {
        for text in &args.text {
            write_record(out, classifier, text, args.only_matched, &mut summary)?;
        }
    }

    out.flush()?;
    Ok(summary)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(&args);

    if args.dump_rules {
        let json = serde_json::to_string_pretty(&RuleSetConfig::builtin())?;
        println!("{}", json);
        return Ok(());
    }

    let classifier = Classifier::new(load_rules(args.rules.as_ref())?);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let summary = run(&args, &classifier, stdin.lock(), &mut stdout.lock())?;

    tracing::info!(
        "Scanned {} posts, {} matched",
        summary.scanned,
        summary.matched
    );
    Ok(())
}
