// Backend configuration. The base URL of the scoring service comes from
// the environment and is looked up again for every request, so a change
// to `SAFERIDE_BACKEND_URL` is picked up without restarting the menu.

/// Environment variable holding the scoring backend base URL.
pub const BACKEND_URL_ENV: &str = "SAFERIDE_BACKEND_URL";

/// Used when neither the CLI flag nor the environment provide a URL.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:3001";

/// Path of the scoring endpoint, relative to the backend base URL.
pub const SCORE_PATH: &str = "/api/score";

/// Where the backend base URL comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BackendUrl {
    /// Fixed URL, e.g. from `--backend-url`.
    Fixed(String),
    /// Read `SAFERIDE_BACKEND_URL` at request time.
    FromEnv,
}

impl BackendUrl {
    /// Current base URL, without a trailing slash.
    pub fn resolve(&self) -> String {
        let raw = match self {
            BackendUrl::Fixed(url) => url.clone(),
            BackendUrl::FromEnv => {
                std::env::var(BACKEND_URL_ENV).unwrap_or_else(|_| DEFAULT_BACKEND_URL.into())
            }
        };
        raw.trim_end_matches('/').to_string()
    }

    /// Full URL of the scoring endpoint.
    pub fn score_url(&self) -> String {
        format!("{}{}", self.resolve(), SCORE_PATH)
    }
}
