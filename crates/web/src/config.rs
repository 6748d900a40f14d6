// =============================================================================
// Mapea Web - Site Configuration
// =============================================================================
// Table of Contents:
// 1. Environment
// 2. Router Options
// 3. Site Config
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Environment
// -----------------------------------------------------------------------------

/// Build environment, selected at compile time through `ENVIRONMENT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    /// Parse an environment name. Anything unrecognised is production.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("development") | Some("dev") => Environment::Development,
            _ => Environment::Production,
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Router Options
// -----------------------------------------------------------------------------

/// Scroll detection and initial-load settings for the section router.
#[derive(Clone, Debug, PartialEq)]
pub struct RouterOptions {
    /// IntersectionObserver root margin. The band covers the upper third of
    /// the viewport.
    pub root_margin: &'static str,

    /// IntersectionObserver threshold.
    pub threshold: f64,

    /// Delay before the initial scroll so layout can settle.
    pub settle_delay_ms: u32,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            root_margin: "-20% 0px -70% 0px",
            threshold: 0.0,
            settle_delay_ms: 100,
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Site Config
// -----------------------------------------------------------------------------

/// localStorage key holding the last chosen language.
pub const LANGUAGE_STORAGE_KEY: &str = "mapea-language";

const DEFAULT_SITE_URL: &str = "https://mapea.cr";

/// Static site configuration provided through app state.
#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub environment: Environment,

    /// Public base URL of the site.
    pub site_url: String,

    /// Storage key for the persisted language preference.
    pub language_storage_key: &'static str,

    pub router: RouterOptions,
}

impl SiteConfig {
    /// Build the config from compile-time environment variables.
    pub fn from_env() -> Self {
        let environment = Environment::from_name(option_env!("ENVIRONMENT"));
        let site_url = option_env!("SITE_URL")
            .unwrap_or(DEFAULT_SITE_URL)
            .trim_end_matches('/')
            .to_string();

        Self {
            environment,
            site_url,
            language_storage_key: LANGUAGE_STORAGE_KEY,
            router: RouterOptions::default(),
        }
    }

    /// Console log level for this environment.
    pub fn log_level(&self) -> log::Level {
        match self.environment {
            Environment::Development => log::Level::Debug,
            Environment::Production => log::Level::Info,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_name() {
        assert_eq!(Environment::from_name(Some("development")), Environment::Development);
        assert_eq!(Environment::from_name(Some("staging")), Environment::Production);
        assert_eq!(Environment::from_name(None), Environment::Production);
    }

    #[test]
    fn test_router_defaults_bias_upper_third() {
        let options = RouterOptions::default();
        assert_eq!(options.root_margin, "-20% 0px -70% 0px");
        assert_eq!(options.threshold, 0.0);
        assert_eq!(options.settle_delay_ms, 100);
    }

    #[test]
    fn test_log_level_follows_environment() {
        let mut config = SiteConfig::from_env();
        config.environment = Environment::Development;
        assert_eq!(config.log_level(), log::Level::Debug);
        config.environment = Environment::Production;
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.language_storage_key, "mapea-language");
    }
}
