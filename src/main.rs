use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::warn;

use reviewmood::config::Config;
use reviewmood::dataset::ReviewDataset;
use reviewmood::pipeline::ReviewAnalyzer;

/// The demo invocations: two comparisons and one single review.
const EXAMPLE_RUNS: &[(usize, Option<usize>)] = &[(125, Some(1025)), (200, Some(1500)), (0, None)];

/// reviewmood: sentiment and similarity for product reviews.
///
/// Cleans review text, buckets each review's polarity into a mood, and
/// compares pairs of reviews for similarity.
#[derive(Parser)]
#[command(name = "reviewmood", version, about)]
struct Cli {
    /// Review CSV file (overrides REVIEWMOOD_CSV)
    #[arg(long, global = true)]
    csv: Option<PathBuf>,

    /// Column holding the review text (overrides REVIEWMOOD_TEXT_FIELD)
    #[arg(long, global = true)]
    field: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the sentiment of one review
    Sentiment {
        /// Row identifier of the review
        id: usize,
    },

    /// Compare two reviews: similarity plus each one's sentiment
    Compare {
        /// Row identifier of the first review
        first: usize,
        /// Row identifier of the second review
        second: usize,
    },

    /// Score every review and summarize the moods
    Batch {
        /// Only print the first N rows of the table (summary covers all)
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Run the demo analyses (125 vs 1025, 200 vs 1500, review 0)
    Examples,

    /// Download the ONNX sentence embedding model (~90 MB)
    DownloadModel,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("reviewmood=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(csv) = cli.csv {
        config.csv_path = csv;
    }
    if let Some(field) = cli.field {
        config.text_field = field;
    }

    match cli.command {
        Commands::Sentiment { id } => {
            let (dataset, analyzer) = load_context(&config)?;
            analyzer.process_and_report(&dataset, &config.text_field, id, None);
        }

        Commands::Compare { first, second } => {
            let (dataset, analyzer) = load_context(&config)?;
            analyzer.process_and_report(&dataset, &config.text_field, first, Some(second));
        }

        Commands::Batch { limit } => {
            let (dataset, analyzer) = load_context(&config)?;
            println!("Analyzing {} reviews...", dataset.len());
            let outcomes = analyzer.analyze_all(&dataset, &config.text_field);
            reviewmood::output::terminal::display_batch(&dataset, &outcomes, limit);
        }

        Commands::Examples => {
            let (dataset, analyzer) = load_context(&config)?;
            for &(id, other) in EXAMPLE_RUNS {
                analyzer.process_and_report(&dataset, &config.text_field, id, other);
            }
        }

        Commands::DownloadModel => {
            let model_dir = &config.model_dir;

            println!("Downloading ONNX embedding model...");
            println!("  Destination: {}", model_dir.display());

            reviewmood::nlp::download::download_model(model_dir).await?;

            println!("\n{}", "Model downloaded successfully.".bold());
            println!("Set REVIEWMOOD_SIMILARITY=onnx to use embedding-based similarity.");
        }
    }

    Ok(())
}

/// Load the dataset and build the analyzer, checking prerequisites first.
fn load_context(config: &Config) -> Result<(ReviewDataset, ReviewAnalyzer)> {
    config.require_dataset()?;
    config.require_model()?;

    let dataset = ReviewDataset::from_path(&config.csv_path, &config.text_field)?;
    if dataset.is_empty() {
        warn!(path = %config.csv_path.display(), "Dataset has no reviews with text");
    }

    let analyzer = ReviewAnalyzer::from_config(config)?;
    Ok((dataset, analyzer))
}
