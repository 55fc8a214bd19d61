//! Sample runner: scrape one Statistics Canada Daily release.

use std::path::Path;

use crate::result::save_page_summary;
use crate::{scrape_page, Result, ScrapeOptions, ScrapeResult};

/// The Daily release used by the sample runner.
pub const STATCAN_DAILY_URL: &str =
    "https://www150.statcan.gc.ca/n1/daily-quotidien/260216/dq260216a-eng.htm";

/// Default output path used when the binary runs the sample.
pub const DEFAULT_OUTPUT_PATH: &str = "output/statcan_daily.json";

/// Scrapes the Statistics Canada Daily release and optionally saves the
/// `url`/`title`/`content` projection to `output_file`.
///
/// Progress is printed to stdout. The scrape itself never fails this
/// function: its outcome is carried in the returned `ScrapeResult`. Only the
/// file write, which runs after a successful scrape, can return an error.
/// Nothing is written when the scrape failed.
pub async fn scrape_statcan_daily(output_file: Option<&Path>) -> Result<ScrapeResult> {
    scrape_statcan_daily_with_options(output_file, ScrapeOptions::default()).await
}

/// Same as [`scrape_statcan_daily`], with caller-supplied options. The
/// selector wait is always `main` so the release body is rendered before
/// extraction.
pub async fn scrape_statcan_daily_with_options(
    output_file: Option<&Path>,
    mut options: ScrapeOptions,
) -> Result<ScrapeResult> {
    options.wait_for_selector = Some("main".to_string());

    println!("Scraping Statistics Canada Daily: {STATCAN_DAILY_URL}");
    let result = scrape_page(STATCAN_DAILY_URL, &options).await;

    if result.success {
        println!("✓ Successfully scraped: {}", result.title);
        println!(
            "✓ Content length: {} characters",
            result.content.chars().count()
        );

        if let Some(path) = output_file {
            save_page_summary(&result, path)?;
            println!("✓ Saved to: {}", path.display());
        }
    } else {
        println!("✗ Error: {}", result.error);
    }

    Ok(result)
}
