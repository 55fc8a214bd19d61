use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::Result;

/// Outcome of a single scrape attempt.
///
/// Exactly one of two shapes holds: `success` is true and `title`/`content`/
/// `html` are populated with `error` empty, or `success` is false and `error`
/// carries a description with the text fields empty. The constructors below
/// are the only way the library builds one, so the invariant holds for every
/// value it returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeResult {
    pub success: bool,
    pub url: String,
    pub title: String,
    pub content: String,
    pub html: String,
    pub error: String,
}

impl ScrapeResult {
    pub(crate) fn captured(
        url: impl Into<String>,
        title: String,
        content: String,
        html: String,
    ) -> Self {
        Self {
            success: true,
            url: url.into(),
            title,
            content,
            html,
            error: String::new(),
        }
    }

    pub(crate) fn failed(url: impl Into<String>, error: String) -> Self {
        debug_assert!(!error.is_empty(), "failure must carry an error message");
        Self {
            success: false,
            url: url.into(),
            title: String::new(),
            content: String::new(),
            html: String::new(),
            error,
        }
    }

    /// The trimmed projection persisted by the sample runner: everything
    /// except `html`, which is kept out of saved files to keep them small.
    pub fn page_summary(&self) -> PageSummary {
        PageSummary {
            url: self.url.clone(),
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// On-disk projection of a successful scrape (`url`, `title`, `content`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSummary {
    pub url: String,
    pub title: String,
    pub content: String,
}

/// Writes the `url`/`title`/`content` projection of `result` to `path` as
/// UTF-8 JSON with two-space indentation, creating parent directories as
/// needed and overwriting any existing file. Non-ASCII characters are written
/// verbatim.
pub fn save_page_summary(result: &ScrapeResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let body = serde_json::to_string_pretty(&result.page_summary())?;
    fs::write(path, body)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_success() -> ScrapeResult {
        ScrapeResult::captured(
            "https://example.com",
            "Example Domain".to_string(),
            "Example body text — données".to_string(),
            "<html><body>Example</body></html>".to_string(),
        )
    }

    #[test]
    fn captured_result_has_empty_error() {
        let result = sample_success();

        assert!(result.success);
        assert!(result.error.is_empty());
        assert!(!result.title.is_empty());
        assert!(!result.content.is_empty());
        assert!(!result.html.is_empty());
    }

    #[test]
    fn failed_result_has_only_error_populated() {
        let result = ScrapeResult::failed(
            "https://example.com",
            "Error scraping page: connection refused".to_string(),
        );

        assert!(!result.success);
        assert!(!result.error.is_empty());
        assert!(result.title.is_empty());
        assert!(result.content.is_empty());
        assert!(result.html.is_empty());
    }

    #[test]
    fn result_serializes_with_expected_field_names() {
        let json = serde_json::to_string(&sample_success()).expect("serialize result");

        for field in ["success", "url", "title", "content", "html", "error"] {
            assert!(
                json.contains(&format!("\"{field}\"")),
                "missing field {field} in {json}"
            );
        }
    }

    #[test]
    fn page_summary_excludes_html() {
        let json =
            serde_json::to_string(&sample_success().page_summary()).expect("serialize summary");

        assert!(!json.contains("html"));
        assert!(json.contains("\"url\""));
        assert!(json.contains("\"title\""));
        assert!(json.contains("\"content\""));
    }

    #[test]
    fn save_page_summary_creates_parent_dirs_and_pretty_prints() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("out.json");

        save_page_summary(&sample_success(), &path).expect("save summary");

        let body = fs::read_to_string(&path).expect("read saved file");
        assert!(body.contains("  \"url\""), "expected two-space indent");
        assert!(
            body.contains("données"),
            "non-ASCII must be written verbatim, got: {body}"
        );
        assert!(!body.contains("\\u"), "no unicode escapes expected");
    }

    #[test]
    fn saved_summary_round_trips() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.json");
        let result = sample_success();

        save_page_summary(&result, &path).expect("save summary");

        let body = fs::read_to_string(&path).expect("read saved file");
        let parsed: PageSummary = serde_json::from_str(&body).expect("parse saved file");
        assert_eq!(parsed, result.page_summary());
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("out.json");
        fs::write(&path, "stale").expect("seed file");

        save_page_summary(&sample_success(), &path).expect("save summary");

        let body = fs::read_to_string(&path).expect("read saved file");
        assert!(!body.contains("stale"));
        assert!(body.contains("Example Domain"));
    }
}
