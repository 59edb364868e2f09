use tracing::{debug, info, warn};

pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod input;
pub mod output;

mod data;
mod error;

pub use config::Config;
pub use data::ScrapeResult;
pub use error::ScraperError;
pub use extractor::TagExtractor;
pub use fetcher::{Fetcher, HttpFetcher};
pub use input::InputSource;
pub use output::OutputTarget;

pub const USAGE_HINT: &str = "Please provide a URL or use --file flag.";

/// Fetches and extracts every URL in order. A URL that fails is logged and
/// left out of the result.
///
/// The `Scraping: <url> (tag: <tag>)` progress line is an `info` event on
/// stderr, so it is hidden when `LOG_LEVEL` is set above `info`.
pub async fn run_scraper<F>(fetcher: &F, extractor: &TagExtractor, urls: &[String]) -> ScrapeResult
where
    F: Fetcher + Sync + ?Sized,
{
    let mut result = ScrapeResult::new();

    for url in urls {
        info!("Scraping: {} (tag: {})", url, extractor.tag());

        let html = match fetcher.fetch(url).await {
            Ok(html) => html,
            Err(e) => {
                warn!("{}", e);
                continue;
            }
        };

        let texts = extractor.extract_str(&html);
        debug!("Extracted {} item(s) from {}", texts.len(), url);
        if result.contains(url) {
            debug!("Replacing earlier result for duplicate URL {}", url);
        }
        result.insert(url.as_str(), texts);
    }

    info!("Scraped {} of {} URL(s)", result.len(), urls.len());
    result
}

/// Resolves input, scrapes and writes output using the given fetcher.
pub async fn run_with<F>(config: &Config, fetcher: &F) -> Result<Option<ScrapeResult>, ScraperError>
where
    F: Fetcher + Sync + ?Sized,
{
    let urls = match config.input.resolve()? {
        Some(urls) => urls,
        None => {
            println!("{}", USAGE_HINT);
            return Ok(None);
        }
    };
    info!("Resolved {} URL(s)", urls.len());

    let extractor = TagExtractor::new(&config.tag)?;
    let result = run_scraper(fetcher, &extractor, &urls).await;

    config.output.write(&result)?;
    Ok(Some(result))
}

pub async fn run(config: &Config) -> Result<(), ScraperError> {
    let fetcher = HttpFetcher::new()?;
    run_with(config, &fetcher).await?;
    Ok(())
}
