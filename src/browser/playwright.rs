//! Playwright integration for headless page scraping.
//!
//! This module contains the inline Playwright helper script, the JSON
//! handshake types, failure classification, and availability checks for
//! Node.js and Playwright.

use std::io;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Playwright script that navigates to a URL, optionally waits for a
/// selector, and prints the page title, visible body text, and raw HTML as a
/// single JSON object on stdout. Failures are reported on stderr with a
/// `timeout` or `error` status; the browser is closed on every path.
pub(crate) const SCRAPE_SCRIPT: &str = r#"
const [, url, timeoutArg, selector, headlessFlag] = process.argv;

async function run() {
  let browser;
  try {
    const { chromium } = require('playwright');
    browser = await chromium.launch({ headless: headlessFlag !== '0' });
    const page = await browser.newPage();
    const timeoutMs = parseInt(timeoutArg, 10);

    await page.goto(url, { waitUntil: 'networkidle', timeout: timeoutMs });

    if (selector) {
      await page.waitForSelector(selector, { timeout: timeoutMs });
    }

    const title = await page.title();
    const content = await page.innerText('body');
    const html = await page.content();

    console.log(JSON.stringify({ status: 'ok', title, content, html }));
  } catch (err) {
    const status = err && err.name === 'TimeoutError' ? 'timeout' : 'error';
    const message = err && err.message ? err.message : String(err);
    console.error(JSON.stringify({ status, message }));
    process.exitCode = 1;
  } finally {
    if (browser) {
      await browser.close();
    }
  }
}

run();
"#;

/// Timeout for checking node/playwright availability.
pub(crate) const NODE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// Script to check if Playwright is installed.
const PLAYWRIGHT_CHECK_SCRIPT: &str = "require('playwright'); process.stdout.write('ok');";

/// Handshake payload printed by the helper script.
#[derive(Debug, serde::Deserialize)]
pub(crate) struct ScriptPayload {
    pub status: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Classified scrape failure. The two kinds are the only failure shapes the
/// public operation reports: a timeout during navigation or selector wait, or
/// anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ScrapeFailure {
    Timeout(String),
    Generic(String),
}

impl ScrapeFailure {
    /// Renders the failure as the error string carried in `ScrapeResult`.
    pub(crate) fn into_message(self) -> String {
        match self {
            ScrapeFailure::Timeout(detail) => format!("Timeout error: {detail}"),
            ScrapeFailure::Generic(detail) => format!("Error scraping page: {detail}"),
        }
    }
}

/// Maps a spawn error to a scrape failure.
pub(crate) fn map_spawn_failure(err: io::Error, command: &str) -> ScrapeFailure {
    if err.kind() == io::ErrorKind::NotFound {
        ScrapeFailure::Generic(format!(
            "unable to spawn Playwright helper; '{}' was not found on PATH",
            command
        ))
    } else {
        ScrapeFailure::Generic(err.to_string())
    }
}

/// Classifies helper stderr into a scrape failure. The helper reports JSON
/// with a `timeout`/`error` status; plain stderr (crashes before the handler
/// runs, missing modules) is classified by content.
pub(crate) fn classify_stderr(status_text: impl Into<String>, stderr: &str) -> ScrapeFailure {
    if let Ok(payload) = serde_json::from_str::<ScriptPayload>(stderr.trim()) {
        let detail = payload
            .message
            .unwrap_or_else(|| "no additional details".to_string());
        if payload.status == "timeout" {
            return ScrapeFailure::Timeout(detail);
        }
        return ScrapeFailure::Generic(detail);
    }

    let lower = stderr.to_ascii_lowercase();

    if lower.contains("cannot find module 'playwright'") {
        return ScrapeFailure::Generic(
            "Playwright npm package is missing; install with `npm install playwright`".to_string(),
        );
    }

    if lower.contains("timeout") {
        return ScrapeFailure::Timeout(stderr.trim().to_string());
    }

    ScrapeFailure::Generic(format!(
        "Playwright helper exited with status {}: {}",
        status_text.into(),
        stderr.trim()
    ))
}

/// Ensures Node.js is available on the system.
pub(crate) async fn ensure_node_available(node_command: &str) -> Result<(), ScrapeFailure> {
    let mut cmd = Command::new(node_command);
    cmd.arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null());

    let status = tokio::time::timeout(NODE_CHECK_TIMEOUT, cmd.status())
        .await
        .map_err(|_| {
            ScrapeFailure::Generic(format!(
                "timed out checking node availability after {:?}",
                NODE_CHECK_TIMEOUT
            ))
        })?
        .map_err(|err| map_spawn_failure(err, node_command))?;

    if !status.success() {
        return Err(ScrapeFailure::Generic(format!(
            "node command {:?} is not available (exit {})",
            node_command, status
        )));
    }

    Ok(())
}

/// Ensures the Playwright npm package is installed.
pub(crate) async fn ensure_playwright_available(node_command: &str) -> Result<(), ScrapeFailure> {
    let mut cmd = Command::new(node_command);
    cmd.arg("-e")
        .arg(PLAYWRIGHT_CHECK_SCRIPT)
        .stdout(Stdio::null())
        .stderr(Stdio::piped());

    let output = tokio::time::timeout(NODE_CHECK_TIMEOUT, cmd.output())
        .await
        .map_err(|_| {
            ScrapeFailure::Generic(format!(
                "timed out checking Playwright availability after {:?}",
                NODE_CHECK_TIMEOUT
            ))
        })?
        .map_err(|err| map_spawn_failure(err, node_command))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(classify_stderr(format!("{:?}", output.status), &stderr));
    }

    Ok(())
}
