use std::env;

/// Deployment URL of the spreadsheet scripting endpoint. Baked in so the
/// binary runs without any environment, overridable via `SCRIPT_URL`.
const DEFAULT_SCRIPT_URL: &str =
    "https://script.google.com/macros/s/AKfycbyIXkuYnbGeYBwfdzcu2MNHSfcysR5QY3TihI4nbxeHe5UBT_nMpOYpwh4qIMwUPwPDXw/exec";

#[derive(Clone)]
pub struct Config {
    pub script_url: String,
    pub refresh_delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            script_url: env::var("SCRIPT_URL").unwrap_or_else(|_| DEFAULT_SCRIPT_URL.to_string()),
            refresh_delay_ms: env::var("REFRESH_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
        }
    }

    /// Self-reported configuration check: the URL points at the expected
    /// host. Says nothing about whether the endpoint is reachable.
    pub fn is_configured(&self) -> bool {
        self.script_url.contains("script.google.com")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_counts_as_configured() {
        let config = Config {
            script_url: DEFAULT_SCRIPT_URL.to_string(),
            refresh_delay_ms: 1000,
        };
        assert!(config.is_configured());
    }

    #[test]
    fn foreign_url_is_not_configured() {
        let config = Config {
            script_url: "http://127.0.0.1:9999/exec".to_string(),
            refresh_delay_ms: 1000,
        };
        assert!(!config.is_configured());
    }
}
