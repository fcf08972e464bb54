use std::collections::HashMap;
use std::path::PathBuf;

use bodycomp_bot::config::{BotConfig, LogFormat, DEFAULT_USERS_FILE};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect();
    move |key: &str| vars.get(key).cloned()
}

#[test]
fn test_minimal_config_uses_defaults() {
    let config = BotConfig::from_lookup(lookup_from(&[
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("CONSULTATION_URL", "https://forms.example.com/start"),
    ]))
    .unwrap();

    assert_eq!(config.token, "123:abc");
    assert_eq!(config.consultation_url.as_str(), "https://forms.example.com/start");
    assert_eq!(config.users_file, PathBuf::from(DEFAULT_USERS_FILE));
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn test_full_config() {
    let config = BotConfig::from_lookup(lookup_from(&[
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("CONSULTATION_URL", "https://forms.example.com/start"),
        ("USERS_FILE", "/var/lib/bot/users.json"),
        ("LOG_FORMAT", "JSON"),
    ]))
    .unwrap();

    assert_eq!(config.users_file, PathBuf::from("/var/lib/bot/users.json"));
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn test_required_values() {
    let missing_token = BotConfig::from_lookup(lookup_from(&[(
        "CONSULTATION_URL",
        "https://forms.example.com/start",
    )]));
    assert!(missing_token.unwrap_err().to_string().contains("TELEGRAM_BOT_TOKEN"));

    let missing_url = BotConfig::from_lookup(lookup_from(&[("TELEGRAM_BOT_TOKEN", "123:abc")]));
    assert!(missing_url.unwrap_err().to_string().contains("CONSULTATION_URL"));

    let bad_url = BotConfig::from_lookup(lookup_from(&[
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("CONSULTATION_URL", "not a url"),
    ]));
    assert!(bad_url.is_err());

    let bad_format = BotConfig::from_lookup(lookup_from(&[
        ("TELEGRAM_BOT_TOKEN", "123:abc"),
        ("CONSULTATION_URL", "https://forms.example.com/start"),
        ("LOG_FORMAT", "xml"),
    ]));
    assert!(bad_format.is_err());
}

#[test]
fn test_debug_output_redacts_token() {
    let config = BotConfig::from_lookup(lookup_from(&[
        ("TELEGRAM_BOT_TOKEN", "123:secret"),
        ("CONSULTATION_URL", "https://forms.example.com/start"),
    ]))
    .unwrap();

    let debug = format!("{config:?}");
    assert!(!debug.contains("secret"));
    assert!(debug.contains("<redacted>"));
}
