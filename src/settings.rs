use std::time::Duration;

use pagescrape_lib::Config;

use crate::cli::Cli;

/// Tracks which CLI flags were explicitly provided vs. defaulted.
#[derive(Debug, Default)]
pub struct FlagSources {
    pub timeout: bool,
    pub process_timeout: bool,
    pub headed: bool,
    pub node_command: bool,
}

impl FlagSources {
    pub fn from_args(args: &[String]) -> Self {
        Self {
            timeout: flag_present(args, "--timeout"),
            process_timeout: flag_present(args, "--process-timeout"),
            headed: flag_present(args, "--headed"),
            node_command: flag_present(args, "--node-command"),
        }
    }
}

/// Checks if a flag was present in the command-line arguments.
pub fn flag_present(args: &[String], flag: &str) -> bool {
    args.iter()
        .any(|arg| arg == flag || arg.starts_with(&format!("{flag}=")))
}

/// Resolved settings after merging CLI args and config file.
#[derive(Debug, Clone)]
pub struct ResolvedSettings {
    pub node_command: String,
    pub headless: bool,
    pub timeout: Duration,
    pub process_timeout: Duration,
}

/// Merge CLI arguments with config, preferring CLI when flags are present.
pub fn resolve_settings(cli: &Cli, config: &Config, flags: &FlagSources) -> ResolvedSettings {
    ResolvedSettings {
        node_command: if flags.node_command {
            cli.node_command.clone()
        } else {
            config.node_command.clone()
        },
        headless: if flags.headed {
            false
        } else {
            config.headless
        },
        timeout: if flags.timeout {
            Duration::from_secs(cli.timeout)
        } else {
            config.navigation_timeout()
        },
        process_timeout: if flags.process_timeout {
            Duration::from_secs(cli.process_timeout)
        } else {
            config.process_timeout()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse_cli(args: &[&str]) -> (Cli, Vec<String>) {
        let raw: Vec<String> = std::iter::once("pagescrape")
            .chain(args.iter().copied())
            .map(str::to_string)
            .collect();
        (Cli::parse_from(&raw), raw)
    }

    #[test]
    fn flag_present_matches_plain_and_equals_forms() {
        let args = vec![
            "pagescrape".to_string(),
            "--timeout=10".to_string(),
            "--headed".to_string(),
        ];

        assert!(flag_present(&args, "--timeout"));
        assert!(flag_present(&args, "--headed"));
        assert!(!flag_present(&args, "--process-timeout"));
    }

    #[test]
    fn resolve_prefers_config_when_flags_absent() {
        let (cli, raw) = parse_cli(&["--url", "https://example.com"]);
        let config: Config = toml::from_str(
            r#"
            node_command = "nodejs"
            headless = false

            [timeouts]
            navigation = 60
            process = 90
            "#,
        )
        .expect("parse config");
        let flags = FlagSources::from_args(&raw);

        let resolved = resolve_settings(&cli, &config, &flags);

        assert_eq!(resolved.node_command, "nodejs");
        assert!(!resolved.headless);
        assert_eq!(resolved.timeout, Duration::from_secs(60));
        assert_eq!(resolved.process_timeout, Duration::from_secs(90));
    }

    #[test]
    fn resolve_prefers_cli_when_flags_present() {
        let (cli, raw) = parse_cli(&[
            "--url",
            "https://example.com",
            "--timeout",
            "5",
            "--process-timeout",
            "8",
            "--node-command",
            "node22",
            "--headed",
        ]);
        let config: Config = toml::from_str("[timeouts]\nnavigation = 60\n").expect("parse config");
        let flags = FlagSources::from_args(&raw);

        let resolved = resolve_settings(&cli, &config, &flags);

        assert_eq!(resolved.node_command, "node22");
        assert!(!resolved.headless);
        assert_eq!(resolved.timeout, Duration::from_secs(5));
        assert_eq!(resolved.process_timeout, Duration::from_secs(8));
    }

    #[test]
    fn resolve_defaults_without_config_or_flags() {
        let (cli, raw) = parse_cli(&[]);
        let flags = FlagSources::from_args(&raw);

        let resolved = resolve_settings(&cli, &Config::default(), &flags);

        assert_eq!(resolved.node_command, "node");
        assert!(resolved.headless);
        assert_eq!(resolved.timeout, Duration::from_secs(30));
        assert_eq!(resolved.process_timeout, Duration::from_secs(45));
    }
}
