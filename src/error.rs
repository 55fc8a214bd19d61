use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ScrapeError {
    pub fn config(message: impl Into<String>) -> Self {
        ScrapeError::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Returns an actionable hint for the recurring failure texts carried inside
/// `ScrapeResult::error`, if one applies.
pub fn remediation_for(error: &str) -> Option<&'static str> {
    let lower = error.to_ascii_lowercase();
    if lower.contains("cannot find module 'playwright'")
        || lower.contains("playwright npm package is missing")
    {
        Some("Install Playwright (`npm install playwright` and `npx playwright install chromium`).")
    } else if lower.contains("chromium executable") {
        Some("Run `npx playwright install chromium` to download the browser.")
    } else if lower.contains("not found on path") || lower.contains("node command") {
        Some("Install Node.js and ensure the node binary is on PATH.")
    } else if lower.contains("timeout") {
        Some("Try increasing --timeout/--process-timeout, and ensure the page finishes loading.")
    } else {
        None
    }
}
