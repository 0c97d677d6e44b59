use clap::Parser;
use std::path::{Path, PathBuf};
use term_stats::config::CliArgs;
use term_stats::{Analysis, Analyzer, Document, Report};
use text_io::try_read;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = CliArgs::parse();
    let analyzer = args.analysis.analyzer();

    if !args.files.is_empty() {
        for path in &args.files {
            report(&analyzer, path, args.json)?;
        }
        return Ok(());
    }

    loop {
        // read until a newline (but not including it)
        println!("------------------- Enter file path -------------------");
        let line: Result<String, _> = try_read!("{}\n");
        let path = match line {
            Ok(line) if !line.trim().is_empty() => PathBuf::from(line.trim()),
            _ => break,
        };
        if let Err(e) = report(&analyzer, &path, args.json) {
            eprintln!("error: {:#}", e);
        }
    }
    Ok(())
}

fn report(analyzer: &Analyzer, path: &Path, json: bool) -> anyhow::Result<()> {
    let document = Document::from_path(path)?;
    let report = Report {
        analysis: analyzer.analyze(&document.raw_contents)?,
        filename: document.filename,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_table(&report.filename, &report.analysis);
    }
    Ok(())
}

fn print_table(filename: &str, analysis: &Analysis) {
    println!(
        "{}: {} tokens, {} distinct terms",
        filename, analysis.total_tokens, analysis.distinct_terms
    );
    println!("{:<32} {:>8} {:>10}", "term", "tf", "idf");
    for stat in &analysis.terms {
        println!("{:<32} {:>8} {:>10.4}", stat.term, stat.frequency, stat.score);
    }
}
