//! Headless page scraper library.
//!
//! Navigates to a URL with a headless browser (Playwright, driven through a
//! Node.js helper process), optionally waits for a CSS selector, and returns
//! the page title, visible body text, and raw HTML as a [`ScrapeResult`].
//! Failures never propagate from the scrape itself: they are classified as
//! timeout or generic and carried in the result's `error` field.
//!
//! # Module Overview
//!
//! - [`browser`] - Headless browser automation and scrape orchestration
//! - [`result`] - The `ScrapeResult` record and saved projection
//! - [`statcan`] - Sample runner for one Statistics Canada Daily release
//! - [`config`] - TOML configuration support
//! - [`error`] - Error types and remediation hints
//!
//! # Example
//!
//! ```no_run
//! use pagescrape_lib::{scrape_page, ScrapeOptions};
//! use std::time::Duration;
//!
//! # async fn example() {
//! let options = ScrapeOptions {
//!     wait_for_selector: Some("main".to_string()),
//!     timeout: Duration::from_secs(20),
//!     ..ScrapeOptions::default()
//! };
//! let result = scrape_page("https://example.com", &options).await;
//! if result.success {
//!     println!("{}: {} chars", result.title, result.content.chars().count());
//! } else {
//!     eprintln!("{}", result.error);
//! }
//! # }
//! ```

pub mod browser;
pub mod config;
pub mod error;
pub mod result;
pub mod statcan;

pub use browser::{
    scrape_page, ProgressCallback, ScrapeOptions, DEFAULT_NAVIGATION_TIMEOUT,
    DEFAULT_PROCESS_TIMEOUT,
};
pub use config::Config;
pub use error::{remediation_for, Result, ScrapeError};
pub use result::{save_page_summary, PageSummary, ScrapeResult};
pub use statcan::{
    scrape_statcan_daily, scrape_statcan_daily_with_options, DEFAULT_OUTPUT_PATH,
    STATCAN_DAILY_URL,
};
