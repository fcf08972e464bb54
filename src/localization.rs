use anyhow::{anyhow, Result};
use fluent_bundle::concurrent::FluentBundle;
use fluent_bundle::{FluentArgs, FluentResource, FluentValue};
use std::sync::LazyLock;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

/// Message catalog compiled into the binary
const MAIN_RESOURCE: &str = include_str!("../locales/en/main.ftl");

pub const DEFAULT_LANGUAGE: &str = "en";

/// Localization manager for the bot's message catalog
pub struct LocalizationManager {
    bundle: FluentBundle<FluentResource>,
}

impl LocalizationManager {
    /// Create a manager over the embedded catalog
    pub fn new() -> Result<Self> {
        Self::from_source(MAIN_RESOURCE)
    }

    /// Create a manager over an arbitrary Fluent source, rejecting syntax errors
    pub fn from_source(source: &str) -> Result<Self> {
        let locale: LanguageIdentifier = DEFAULT_LANGUAGE.parse()?;

        let resource = FluentResource::try_new(source.to_string())
            .map_err(|(_, errors)| anyhow!("Failed to parse message catalog: {errors:?}"))?;

        let mut bundle = FluentBundle::new_concurrent(vec![locale]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| anyhow!("Duplicate messages in catalog: {errors:?}"))?;

        debug!(language = DEFAULT_LANGUAGE, "Message catalog loaded");
        Ok(Self { bundle })
    }

    /// A manager with no messages; every lookup reports a missing translation
    fn empty() -> Self {
        let mut bundle = FluentBundle::new_concurrent(vec![LanguageIdentifier::default()]);
        bundle.set_use_isolating(false);
        Self { bundle }
    }

    pub fn has_message(&self, key: &str) -> bool {
        self.bundle.has_message(key)
    }

    /// Get a localized message
    pub fn get_message(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let msg = match self.bundle.get_message(key) {
            Some(msg) => msg,
            None => return format!("Missing translation: {key}"),
        };

        let pattern = match msg.value() {
            Some(pattern) => pattern,
            None => return format!("Missing value for key: {key}"),
        };

        let mut errors = vec![];
        let value = self.bundle.format_pattern(pattern, args, &mut errors);
        if !errors.is_empty() {
            warn!(key, ?errors, "Message formatted with errors");
        }

        value.into_owned()
    }

    /// Get a localized message with simple string arguments
    pub fn get_message_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.get_message(key, Some(&fluent_args))
    }
}

/// Global localization instance
static LOCALIZATION_MANAGER: LazyLock<LocalizationManager> = LazyLock::new(|| {
    LocalizationManager::new().unwrap_or_else(|e| {
        warn!(error = %e, "Message catalog unavailable");
        LocalizationManager::empty()
    })
});

/// Validate the embedded catalog and initialize the global manager
pub fn init_localization() -> Result<()> {
    LocalizationManager::new()?;
    LazyLock::force(&LOCALIZATION_MANAGER);
    Ok(())
}

/// Get the global localization manager
pub fn get_localization_manager() -> &'static LocalizationManager {
    &LOCALIZATION_MANAGER
}

/// Convenience function to get a localized message
pub fn t(key: &str) -> String {
    get_localization_manager().get_message(key, None)
}

/// Convenience function to get a localized message with arguments
pub fn t_args(key: &str, args: &[(&str, &str)]) -> String {
    get_localization_manager().get_message_with_args(key, args)
}
