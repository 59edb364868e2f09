use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tag_scraper::config::{Config, DEFAULT_TAG};
use tracing::error;
use tracing_error::ErrorLayer;
use tracing_subscriber::prelude::*;

#[derive(Parser)]
#[command(name = "scraper")]
#[command(about = "Scraper CLI is a simple tool to scrape HTML content from a website")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape content from one or multiple websites
    ///
    /// Progress lines ("Scraping: <url> (tag: <tag>)") are logged to stderr at
    /// info level; set LOG_LEVEL=warn to silence them.
    Scrape {
        /// URL to scrape, ignored when --file is given
        url: Option<String>,

        /// HTML tag to scrape (e.g. h1, p, a)
        #[arg(short, long, default_value = DEFAULT_TAG)]
        tag: String,

        /// Output file (.txt or .json)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// File containing list of URLs to scrape (1 per line)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| {
                "info,html5ever=error,selectors=error,hyper=warn,reqwest=info".into()
            }),
        )
        .with(ErrorLayer::default())
        .init();

    match cli.command {
        Commands::Scrape {
            url,
            tag,
            output,
            file,
        } => {
            let config = Config::new(url, tag, output, file);
            if let Err(e) = tag_scraper::run(&config).await {
                error!("{}", e);
            }
        }
    }

    Ok(())
}
