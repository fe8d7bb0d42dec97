use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use comment_sentiment::config::Config;
use comment_sentiment::{AnalysisOutcome, Pipeline};

/// Analyze the comments of one YouTube video from the terminal.
#[derive(Parser, Debug)]
#[command(name = "analyze", version, about = "YouTube comment sentiment and keywords")]
struct Cli {
    /// Full video URL (must contain `v=<id>`)
    url: String,

    /// Stop after this many comment pages (overrides MAX_COMMENT_PAGES)
    #[arg(long)]
    max_pages: Option<usize>,

    /// Print the outcome as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(pages) = cli.max_pages.filter(|p| *p > 0) {
        config.max_pages = pages;
    }

    let pipeline = Pipeline::new(&config)?;

    match pipeline.run(&cli.url).await {
        Ok(outcome) => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
            } else {
                match &outcome {
                    AnalysisOutcome::Report { report } => print!("{}", report.render_text()),
                    other => println!("{}", other.message()),
                }
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("❌ An error occurred: {}", e);
            std::process::exit(1);
        }
    }
}
