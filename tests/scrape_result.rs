use std::fs;

use pagescrape_lib::{
    save_page_summary, scrape_page, PageSummary, ScrapeOptions, STATCAN_DAILY_URL,
};

#[tokio::test]
async fn result_invariant_holds_for_unreachable_engine() {
    let options = ScrapeOptions {
        node_command: "definitely-not-a-binary".to_string(),
        ..ScrapeOptions::default()
    };

    let result = scrape_page("not even a url", &options).await;

    // Exactly one of the two shapes holds.
    assert!(!result.success);
    assert!(!result.error.is_empty());
    assert!(result.title.is_empty() && result.content.is_empty() && result.html.is_empty());
    assert_eq!(result.url, "not even a url");
}

#[tokio::test]
async fn selector_option_does_not_change_failure_shape() {
    let options = ScrapeOptions {
        node_command: "definitely-not-a-binary".to_string(),
        wait_for_selector: Some("main".to_string()),
        ..ScrapeOptions::default()
    };

    let result = scrape_page(STATCAN_DAILY_URL, &options).await;

    assert!(!result.success);
    assert!(result.error.starts_with("Error scraping page: "));
}

#[tokio::test]
async fn saved_summary_round_trips_through_disk() {
    let options = ScrapeOptions {
        node_command: "definitely-not-a-binary".to_string(),
        ..ScrapeOptions::default()
    };
    // A failure result still has a well-formed projection; use it to check
    // the on-disk format without needing a live browser.
    let result = scrape_page("https://example.com", &options).await;

    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("out").join("page.json");
    save_page_summary(&result, &path).expect("save summary");

    let body = fs::read_to_string(&path).expect("read saved file");
    let parsed: PageSummary = serde_json::from_str(&body).expect("valid JSON");
    assert_eq!(parsed, result.page_summary());
    assert!(
        !body.contains("\"html\""),
        "html must never be written to disk"
    );
    assert!(
        !body.contains("\"error\""),
        "saved projection carries url/title/content only"
    );
}
