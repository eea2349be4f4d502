//! Runtime configuration read from the environment.

/// Environment variable holding the tracing filter directive.
pub const LOG_ENV: &str = "IDIOMS_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";
const VERBOSE_LOG_FILTER: &str = "debug";

/// Settings that affect diagnostics only, never command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Tracing filter directive, e.g. `warn` or `idioms=debug`.
    pub log_filter: String,
}

impl Config {
    /// Loads configuration from the process environment.
    ///
    /// A `.env` file in the working directory is read first when present.
    #[must_use]
    pub fn from_env() -> Self {
        // Missing .env is the normal case.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_filter = lookup(LOG_ENV)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        Self { log_filter }
    }

    /// Raises the filter to debug when `verbose` is set.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            self.log_filter = VERBOSE_LOG_FILTER.to_string();
        }
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_warn() {
        assert_eq!(Config::default().log_filter, "warn");
    }

    #[test]
    fn reads_filter_from_lookup() {
        let config = Config::from_lookup(|key| (key == LOG_ENV).then(|| "idioms=info".to_string()));
        assert_eq!(config.log_filter, "idioms=info");
    }

    #[test]
    fn blank_filter_falls_back() {
        let config = Config::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn verbose_overrides_env() {
        let config = Config::from_lookup(|_| Some("error".to_string())).with_verbose(true);
        assert_eq!(config.log_filter, "debug");
    }
}
