mod cli;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use pagescrape_lib::{
    remediation_for, save_page_summary, scrape_page, scrape_statcan_daily_with_options, Config,
    ProgressCallback, ScrapeOptions, ScrapeResult, DEFAULT_OUTPUT_PATH,
};

#[tokio::main]
async fn main() -> ExitCode {
    run().await
}

async fn run() -> ExitCode {
    let raw_args: Vec<String> = std::env::args().collect();
    let args = cli::parse();

    let config = match Config::load(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(2);
        }
    };

    let flags = settings::FlagSources::from_args(&raw_args);
    let resolved = settings::resolve_settings(&args, &config, &flags);

    if args.verbose {
        eprintln!(
            "Effective settings: node-command={}, headless={}, timeout={}s, process-timeout={}s",
            resolved.node_command,
            resolved.headless,
            resolved.timeout.as_secs(),
            resolved.process_timeout.as_secs()
        );
    }

    let progress: Option<ProgressCallback> = if args.verbose {
        Some(Arc::new(|msg: &str| eprintln!("{msg}")))
    } else {
        None
    };

    let options = ScrapeOptions {
        node_command: resolved.node_command,
        headless: resolved.headless,
        timeout: resolved.timeout,
        process_timeout: resolved.process_timeout,
        wait_for_selector: args.selector.clone(),
        progress,
    };

    let result = match &args.url {
        None => {
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_PATH));
            match scrape_statcan_daily_with_options(Some(&output), options).await {
                Ok(result) => result,
                Err(err) => {
                    eprintln!("{err}");
                    return ExitCode::from(2);
                }
            }
        }
        Some(url) => match scrape_url(url, &options, args.output.as_deref()).await {
            Ok(result) => result,
            Err(code) => return code,
        },
    };

    if result.success {
        ExitCode::SUCCESS
    } else {
        if let Some(hint) = remediation_for(&result.error) {
            eprintln!("Hint: {hint}");
        }
        ExitCode::from(1)
    }
}

async fn scrape_url(
    url: &str,
    options: &ScrapeOptions,
    output: Option<&std::path::Path>,
) -> Result<ScrapeResult, ExitCode> {
    println!("Scraping: {url}");
    let result = scrape_page(url, options).await;

    if result.success {
        println!("✓ Successfully scraped: {}", result.title);
        println!(
            "✓ Content length: {} characters",
            result.content.chars().count()
        );
        if let Some(path) = output {
            if let Err(err) = save_page_summary(&result, path) {
                eprintln!("{err}");
                return Err(ExitCode::from(2));
            }
            println!("✓ Saved to: {}", path.display());
        }
    } else {
        println!("✗ Error: {}", result.error);
    }

    Ok(result)
}
