//! Configuration for the Q&A board server.

use std::time::Duration;

/// GitHub endpoint constants.
pub mod github {
    use std::time::Duration;

    /// Base URL for the OAuth authorize/token endpoints.
    pub const OAUTH_URL: &str = "https://github.com";

    /// Base URL for the REST API (profile fetch).
    pub const API_URL: &str = "https://api.github.com";

    /// Request timeout for outbound provider calls.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

    /// Connection timeout for outbound provider calls.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
}

/// Server configuration.
///
/// Secrets carry no defaults; the binary fails fast when they are
/// missing from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// GitHub OAuth application client id.
    pub github_client_id: String,

    /// GitHub OAuth application client secret.
    pub github_client_secret: String,

    /// Callback URL registered with the OAuth application.
    pub github_callback_url: String,

    /// Frontend base URL; the final redirect carries the token as a
    /// path segment under it.
    pub client_url: String,

    /// Secret used to sign session tokens.
    pub token_secret: String,

    /// Base URL for OAuth authorize/token endpoints (overridable for
    /// tests with mock servers).
    pub github_oauth_url: String,

    /// Base URL for the GitHub REST API (overridable for tests).
    pub github_api_url: String,

    /// Request timeout for provider calls.
    pub request_timeout: Duration,

    /// Connection timeout for provider calls.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration against the real GitHub endpoints.
    #[must_use]
    pub fn new(
        github_client_id: String,
        github_client_secret: String,
        github_callback_url: String,
        client_url: String,
        token_secret: String,
    ) -> Self {
        Self {
            github_client_id,
            github_client_secret,
            github_callback_url,
            client_url,
            token_secret,
            github_oauth_url: github::OAUTH_URL.to_string(),
            github_api_url: github::API_URL.to_string(),
            request_timeout: github::REQUEST_TIMEOUT,
            connect_timeout: github::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointed at a mock provider.
    #[must_use]
    pub fn for_testing(provider_url: &str) -> Self {
        Self {
            github_client_id: "test-client-id".to_string(),
            github_client_secret: "test-client-secret".to_string(),
            github_callback_url: "http://localhost:3000/auth/github/callback".to_string(),
            client_url: "http://localhost:54321".to_string(),
            token_secret: "test-token-secret".to_string(),
            github_oauth_url: provider_url.to_string(),
            github_api_url: provider_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first missing variable.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::new(
            require_var("GITHUB_CLIENT")?,
            require_var("GITHUB_SECRET")?,
            require_var("GITHUB_CALLBACK")?,
            require_var("CLIENT_URL")?,
            require_var("JWT_SECRET")?,
        ))
    }
}

fn require_var(key: &str) -> anyhow::Result<String> {
    std::env::var(key).map_err(|_| anyhow::anyhow!("environment variable {key} is not set"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_to_real_endpoints() {
        let config = Config::new(
            "id".into(),
            "secret".into(),
            "http://localhost/cb".into(),
            "http://localhost:54321".into(),
            "signing-secret".into(),
        );
        assert_eq!(config.github_oauth_url, "https://github.com");
        assert_eq!(config.github_api_url, "https://api.github.com");
    }

    #[test]
    fn test_config_for_testing_overrides_provider() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.github_oauth_url, "http://127.0.0.1:9999");
        assert_eq!(config.github_api_url, "http://127.0.0.1:9999");
    }
}
