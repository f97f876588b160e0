// CLI flag parsing and config overrides

use clap::Parser;
use pulsecheck::cli::Cli;
use pulsecheck::config::AppConfig;

#[test]
fn test_no_flags_keeps_config() {
    let cli = Cli::try_parse_from(["pulsecheck"]).unwrap();
    let config = cli.apply(AppConfig::default());
    assert_eq!(config.greeting.messages.len(), 2);
    assert!(config.report.system);
    assert!(config.report.network);
}

#[test]
fn test_messages_replace_configured_greeting() {
    let cli = Cli::try_parse_from(["pulsecheck", "-m", "A", "--message", "B"]).unwrap();
    let config = cli.apply(AppConfig::default());
    assert_eq!(config.greeting.messages, vec!["A", "B"]);
}

#[test]
fn test_skip_flags_disable_sections() {
    let cli = Cli::try_parse_from(["pulsecheck", "--skip-system", "--skip-network"]).unwrap();
    let config = cli.apply(AppConfig::default());
    assert!(!config.report.system);
    assert!(!config.report.network);
}

#[test]
fn test_endpoint_override_is_validated() {
    let cli = Cli::try_parse_from(["pulsecheck", "--endpoint", "ftp://example.com"]).unwrap();
    let config = cli.apply(AppConfig::default());
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("network.endpoint"));
}

#[test]
fn test_config_path_flag() {
    let cli = Cli::try_parse_from(["pulsecheck", "--config", "/tmp/p.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/p.toml")));
}
