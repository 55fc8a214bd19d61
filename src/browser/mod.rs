//! Browser automation module for headless page scraping.
//!
//! This module drives Playwright through a Node.js helper process to
//! navigate to a URL, optionally wait for a selector, and capture the page
//! title, visible text, and raw HTML.
//!
//! # Module Structure
//!
//! - [`scrape`] - Scrape orchestration and options
//! - [`playwright`] - Playwright helper script, classification, availability checks
//!
//! # Example
//!
//! ```no_run
//! use pagescrape_lib::{scrape_page, ScrapeOptions};
//!
//! # async fn example() {
//! let result = scrape_page("https://example.com", &ScrapeOptions::default()).await;
//! if result.success {
//!     println!("{}", result.title);
//! } else {
//!     eprintln!("{}", result.error);
//! }
//! # }
//! ```

mod playwright;
mod scrape;

pub use scrape::{
    scrape_page, ProgressCallback, ScrapeOptions, DEFAULT_NAVIGATION_TIMEOUT,
    DEFAULT_PROCESS_TIMEOUT,
};
