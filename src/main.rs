mod crawler;
mod error;
mod export;
mod fetch;
mod parser;
mod prompt;
mod record;
mod settings;
mod sources;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use crawler::Crawler;
use fetch::HttpFetcher;
use record::Field;
use settings::Settings;
use sources::UrlList;

const DEFAULT_INPUT: &str = "urls.txt";

#[derive(Parser)]
#[command(name = "masothue_crawler", about = "Company details scraper for masothue.com")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load URLs, confirm, crawl every page and save an .xlsx file
    Run {
        /// Newline-delimited URL list
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
        /// Output file (default: masothue_companies_<timestamp>.xlsx)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
        /// Seconds to wait between requests (overrides config)
        #[arg(long)]
        delay: Option<u64>,
    },
    /// Report duplicate and skipped lines in a URL list
    Check {
        #[arg(short, long, default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
    /// Run the extractor on a saved HTML page
    Extract {
        file: PathBuf,
        /// URL to record for the page
        #[arg(long, default_value = "")]
        url: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;
    info!(settings = ?settings, "Starting masothue crawler");

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            yes,
            delay,
        } => run(&settings, &input, output, yes, delay),
        Commands::Check { input } => {
            let list = sources::load(&input, &settings.url_prefix);
            print_check_report(&input, &list);
            Ok(())
        }
        Commands::Extract { file, url } => {
            let html = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let url = if url.is_empty() {
                file.display().to_string()
            } else {
                url
            };
            match parser::extract(&html, &url) {
                Some(record) => {
                    for field in Field::COLUMNS {
                        println!("{:<18} {}", field.header(), record.get(field));
                    }
                }
                None => println!("No info table in {}", file.display()),
            }
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn run(
    settings: &Settings,
    input: &Path,
    output: Option<PathBuf>,
    yes: bool,
    delay: Option<u64>,
) -> Result<()> {
    let list = sources::load(input, &settings.url_prefix);
    print_check_report(input, &list);

    if list.is_empty() {
        println!("No URLs to crawl. Add masothue.com URLs to {}.", input.display());
        return Ok(());
    }

    println!("\nUnique URLs to crawl: {}", list.urls.len());
    for (i, url) in list.urls.iter().enumerate() {
        println!("  {}. {}", i + 1, url);
    }

    if !yes {
        let question = format!("\nContinue crawling {} URLs?", list.urls.len());
        let confirmed = prompt::confirm(
            &mut std::io::stdin().lock(),
            &mut std::io::stdout(),
            &question,
        )?;
        if !confirmed {
            println!("Cancelled.");
            return Ok(());
        }
    }

    let delay = delay.map(Duration::from_secs).unwrap_or(settings.delay());
    let fetcher = HttpFetcher::new(settings).context("Failed to build HTTP client")?;
    let mut crawler = Crawler::new(fetcher, delay);
    let stats = crawler.crawl_all(&list.urls);
    println!(
        "\nCrawled {}/{} companies ({} failed).",
        stats.ok, stats.attempted, stats.failed
    );

    let records = crawler.records();
    if records.is_empty() {
        println!("No data to save.");
        return Ok(());
    }
    let path = output.unwrap_or_else(|| export::default_output_path(&chrono::Local::now()));
    export::save(records, &path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Saved {} companies to {}", records.len(), path.display());
    Ok(())
}

fn print_check_report(input: &Path, list: &UrlList) {
    println!("URL list {}:", input.display());
    println!("  - Total URLs:     {}", list.total());
    println!("  - Unique URLs:    {}", list.urls.len());
    println!("  - Duplicate URLs: {}", list.duplicates.len());
    if !list.skipped.is_empty() {
        println!("  - Skipped lines:  {}", list.skipped.len());
    }

    for skipped in &list.skipped {
        println!("  - line {} skipped: {}", skipped.line, skipped.text);
    }

    if list.duplicates.is_empty() {
        println!("No duplicate URLs.");
    } else {
        println!("\nDuplicates:");
        for dup in &list.duplicates {
            println!("  - line {} duplicates line {}", dup.line, dup.first_line);
            println!("    {}", dup.url);
        }
    }
}

fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(Duration::from_millis(2500)), "2.5s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
        assert_eq!(format_duration(Duration::from_secs(3725)), "1h 2m 5s");
    }

    #[test]
    fn cli_parses_run_flags() {
        let cli = Cli::try_parse_from([
            "masothue_crawler",
            "run",
            "-i",
            "list.txt",
            "--yes",
            "--delay",
            "0",
        ])
        .unwrap();
        match cli.command {
            Commands::Run {
                input,
                output,
                yes,
                delay,
            } => {
                assert_eq!(input, PathBuf::from("list.txt"));
                assert!(output.is_none());
                assert!(yes);
                assert_eq!(delay, Some(0));
            }
            _ => panic!("expected run"),
        }
    }
}
