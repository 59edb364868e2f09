use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ScraperError {
    #[error("Error opening file {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid selector {0:?}: {1}")]
    Selector(String, String),

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("Request error for {url}: {source}")]
    InvalidUrl {
        url: String,
        source: reqwest::Error,
    },

    #[error("Failed to GET {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    #[error("Non-200 response from {url}: {status}")]
    Status { url: String, status: u16 },

    #[error("Error reading body from {url}: {source}")]
    Body {
        url: String,
        source: reqwest::Error,
    },

    #[error("Error writing {}: {source}", .path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}
