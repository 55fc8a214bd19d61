//! Scrape orchestration for headless page capture.
//!
//! This module owns a single scrape attempt end to end: spawn the Playwright
//! helper, bound it with a watchdog timeout, parse the handshake, and fold
//! every failure into the returned [`ScrapeResult`].

use std::process::Stdio;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::AsyncReadExt;
use tokio::process::Command;
use tokio::time::timeout;

use crate::ScrapeResult;

use super::playwright::{
    classify_stderr, ensure_node_available, ensure_playwright_available, map_spawn_failure,
    ScrapeFailure, ScriptPayload, SCRAPE_SCRIPT,
};

/// Default timeout for page navigation and selector waits.
pub const DEFAULT_NAVIGATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Default timeout for the entire Playwright helper process. Should exceed
/// the navigation timeout so the helper can report its own timeout first.
pub const DEFAULT_PROCESS_TIMEOUT: Duration = Duration::from_secs(45);

/// Optional progress callback for logging.
pub type ProgressCallback = Arc<dyn Fn(&str) + Send + Sync>;

/// Configuration options for a scrape attempt.
#[derive(Clone)]
pub struct ScrapeOptions {
    /// The Node.js command used to run the Playwright helper (default: "node").
    pub node_command: String,
    /// Whether to run the browser in headless mode.
    pub headless: bool,
    /// Timeout for page navigation and the optional selector wait.
    pub timeout: Duration,
    /// Watchdog timeout for the entire helper process.
    pub process_timeout: Duration,
    /// Optional CSS selector to wait for before extracting content.
    pub wait_for_selector: Option<String>,
    /// Optional progress callback for logging.
    pub progress: Option<ProgressCallback>,
}

impl Default for ScrapeOptions {
    fn default() -> Self {
        Self {
            node_command: "node".to_string(),
            headless: true,
            timeout: DEFAULT_NAVIGATION_TIMEOUT,
            process_timeout: DEFAULT_PROCESS_TIMEOUT,
            wait_for_selector: None,
            progress: None,
        }
    }
}

/// Page content captured by a successful helper run.
struct PageCapture {
    title: String,
    content: String,
    html: String,
}

fn log_progress(progress: &Option<ProgressCallback>, message: &str) {
    if let Some(cb) = progress {
        cb(message);
    }
}

/// Scrapes a single page with a headless browser.
///
/// Navigates to `url` waiting for network idle, optionally waits for
/// `options.wait_for_selector`, and extracts the page title, visible body
/// text, and raw HTML. The browser lives in a helper process that closes it
/// on every path, so it never outlives the call.
///
/// Never returns an error: any failure, including a missing Node.js or
/// Playwright installation, is recorded in the result's `error` field with
/// `success` false. Timeouts are prefixed `"Timeout error: "`, everything
/// else `"Error scraping page: "`. The URL is not validated locally;
/// malformed URLs surface as a failure from the browser engine.
pub async fn scrape_page(url: &str, options: &ScrapeOptions) -> ScrapeResult {
    match run_helper(url, options).await {
        Ok(capture) => ScrapeResult::captured(url, capture.title, capture.content, capture.html),
        Err(failure) => ScrapeResult::failed(url, failure.into_message()),
    }
}

async fn run_helper(url: &str, options: &ScrapeOptions) -> Result<PageCapture, ScrapeFailure> {
    // Fail fast if Node or Playwright is missing to avoid spawning the
    // helper unnecessarily.
    ensure_node_available(&options.node_command).await?;
    ensure_playwright_available(&options.node_command).await?;

    log_progress(
        &options.progress,
        &format!(
            "Launching headless browser for {} (timeout {}s)…",
            url,
            options.timeout.as_secs()
        ),
    );

    let mut cmd = Command::new(&options.node_command);
    cmd.arg("-e")
        .arg(SCRAPE_SCRIPT)
        .arg(url)
        .arg(options.timeout.as_millis().to_string())
        .arg(options.wait_for_selector.as_deref().unwrap_or(""))
        .arg(if options.headless { "1" } else { "0" })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let start = Instant::now();
    let mut child = cmd
        .spawn()
        .map_err(|err| map_spawn_failure(err, &options.node_command))?;

    let stdout_pipe = child.stdout.take();
    let stderr_pipe = child.stderr.take();

    let stdout_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut out) = stdout_pipe {
            let _ = out.read_to_end(&mut buf).await;
        }
        buf
    });

    let stderr_task = tokio::spawn(async move {
        let mut buf = Vec::new();
        if let Some(mut err) = stderr_pipe {
            let _ = err.read_to_end(&mut buf).await;
        }
        buf
    });

    let status = match timeout(options.process_timeout, child.wait()).await {
        Ok(Ok(status)) => status,
        Ok(Err(err)) => return Err(ScrapeFailure::Generic(err.to_string())),
        Err(_) => {
            let _ = child.kill().await;
            let _ = child.wait().await;
            log_progress(
                &options.progress,
                "Playwright helper killed after exceeding the process timeout.",
            );
            return Err(ScrapeFailure::Timeout(format!(
                "scrape did not finish within {:?}",
                options.process_timeout
            )));
        }
    };

    let stdout = stdout_task.await.unwrap_or_else(|_| Vec::new());
    let stderr = stderr_task.await.unwrap_or_else(|_| Vec::new());

    if !status.success() {
        let stderr = String::from_utf8_lossy(&stderr);
        return Err(classify_stderr(status.to_string(), &stderr));
    }

    let stdout = String::from_utf8_lossy(&stdout);
    let payload: ScriptPayload = serde_json::from_str(stdout.trim()).map_err(|_| {
        ScrapeFailure::Generic(format!("unexpected Playwright output: {}", stdout.trim()))
    })?;

    if payload.status != "ok" {
        let detail = payload
            .message
            .unwrap_or_else(|| "no additional details".to_string());
        if payload.status == "timeout" {
            return Err(ScrapeFailure::Timeout(detail));
        }
        return Err(ScrapeFailure::Generic(detail));
    }

    let capture = match (payload.title, payload.content, payload.html) {
        (Some(title), Some(content), Some(html)) => PageCapture {
            title,
            content,
            html,
        },
        _ => {
            return Err(ScrapeFailure::Generic(
                "Playwright returned ok status but no page content".to_string(),
            ))
        }
    };

    log_progress(
        &options.progress,
        &format!("Scrape finished in {:.1}s", start.elapsed().as_secs_f32()),
    );

    Ok(capture)
}
