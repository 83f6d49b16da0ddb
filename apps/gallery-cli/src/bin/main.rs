use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gallery_core::config::Config;
use gallery_core::traits::CatalogSource;
use gallery_core::types::{NormalizedResult, Platform};
use gallery_service::{similarity_weights, GalleryService};

#[derive(Parser)]
#[command(name = "gallery", about = "Search and rank the wallpaper catalog")]
struct Cli {
    /// Read the catalog from this JSON file instead of the configured source
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Case-insensitive substring search over names and metadata
    Search {
        query: String,
        /// Only `desktop` or `mobile` wallpapers
        #[arg(long)]
        platform: Option<Platform>,
    },
    /// Wallpapers most similar to the given one
    Similar {
        id: String,
        /// Page to show (wraps to 0 past the end)
        #[arg(long, default_value_t = 0)]
        page: usize,
        /// Items per page; defaults to paging.page_size
        #[arg(long)]
        page_size: Option<usize>,
        /// Include scores in the output
        #[arg(long)]
        scores: bool,
    },
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn spinner(location: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(format!("Loading catalog from {}", location));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn print_results(results: &[NormalizedResult], scores: Option<&[f64]>, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(results)?);
        return Ok(());
    }
    if results.is_empty() {
        println!("No results.");
        return Ok(());
    }
    for (i, r) in results.iter().enumerate() {
        let score = scores.and_then(|s| s.get(i)).map(|s| format!("  score={:.2}", s)).unwrap_or_default();
        println!("{:>3}. {}  [{} {}]{}", i + 1, r.id, r.platform, r.resolution, score);
        println!("     {}", r.download_url);
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = Config::load()?;
    let mut settings = config.settings()?;
    if let Some(path) = &cli.catalog {
        settings.catalog.path = Some(path.to_string_lossy().to_string());
    }
    let weights = similarity_weights(&config)?;
    let service = GalleryService::from_settings(&settings, weights)?;
    debug!(catalog = service.source().location(), ?weights, "service ready");
    let pb = spinner(service.source().location());
    let start = Instant::now();

    match cli.command {
        Command::Search { query, platform } => {
            let results = service.search(&query, platform).await;
            pb.finish_and_clear();
            let results = results?;
            info!(query = %query, hits = results.len(), elapsed_ms = start.elapsed().as_millis() as u64, "search finished");
            if !cli.json { println!("Found {} results for \"{}\"", results.len(), query); }
            print_results(&results, None, cli.json)?;
        }
        Command::Similar { id, page, page_size, scores } => {
            let page_size = page_size.unwrap_or(settings.paging.page_size);
            let scored = service.rank_similar_scored(&id).await;
            pb.finish_and_clear();
            let (results, values): (Vec<NormalizedResult>, Vec<f64>) = scored?.into_iter().unzip();
            info!(reference = %id, ranked = results.len(), elapsed_ms = start.elapsed().as_millis() as u64, "similarity finished");
            let offset = page_start(results.len(), page, page_size);
            let shown = gallery_similar::page(&results, page, page_size);
            let shown_scores = values.get(offset..offset + shown.len());
            if !cli.json {
                println!(
                    "{} similar to \"{}\", page {}/{}",
                    results.len(),
                    id,
                    if shown.is_empty() { 0 } else { offset / page_size.max(1) + 1 },
                    gallery_similar::page_count(results.len(), page_size)
                );
            }
            print_results(shown, if scores { shown_scores } else { None }, cli.json)?;
        }
    }
    Ok(())
}

/// Offset of the page actually returned, after wraparound.
fn page_start(len: usize, page: usize, page_size: usize) -> usize {
    if page < gallery_similar::page_count(len, page_size) { page * page_size } else { 0 }
}
