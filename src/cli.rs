use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pagescrape")]
#[command(
    version,
    about = "Scrape a page with a headless browser: title, visible text, and raw HTML",
    long_about = "pagescrape\n\nScrapes a single page with a headless Chromium (Playwright via Node.js) and reports the page title, visible body text, and raw HTML.\n\nWithout --url the Statistics Canada Daily sample is scraped and its url/title/content are written to output/statcan_daily.json.\n\nExit codes: 0 scrape succeeded, 1 scrape failed, 2 fatal error (config or file write)."
)]
pub struct Cli {
    #[arg(
        long,
        help = "URL to scrape; omit to run the Statistics Canada Daily sample"
    )]
    pub url: Option<String>,

    #[arg(long, help = "CSS selector to wait for before extracting content")]
    pub selector: Option<String>,

    #[arg(
        long,
        short,
        value_name = "PATH",
        help = "Write url/title/content JSON here on success (sample mode default: output/statcan_daily.json)"
    )]
    pub output: Option<PathBuf>,

    #[arg(
        long,
        default_value = "30",
        help = "Navigation and selector-wait timeout (seconds)"
    )]
    pub timeout: u64,

    #[arg(
        long,
        default_value = "45",
        help = "Watchdog timeout for the Playwright helper process (seconds)"
    )]
    pub process_timeout: u64,

    #[arg(long, help = "Run the browser with a visible window")]
    pub headed: bool,

    #[arg(
        long,
        default_value = "node",
        help = "Node.js command used to run the Playwright helper"
    )]
    pub node_command: String,

    #[arg(
        long,
        value_name = "PATH",
        help = "Optional config file (TOML) to set defaults for node command/headless/timeouts; CLI flags override config"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose progress output")]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
