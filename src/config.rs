//! Configuration
//!
//! Backend location and credentials, fixed at build time through
//! `TODO_API_BASE_URL` / `TODO_API_KEY`.

/// Public todolist backend used when no URL is configured
pub const DEFAULT_BASE_URL: &str = "https://social-network.samuraijs.com/api/1.1/";

/// How long the error banner stays up before dismissing itself
pub const ERROR_BANNER_TIMEOUT_MS: u32 = 6_000;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Sent as the `API-KEY` header when non-empty
    pub api_key: String,
    /// Send the session cookie with every request
    pub with_credentials: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: String::new(),
            with_credentials: true,
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_values(option_env!("TODO_API_BASE_URL"), option_env!("TODO_API_KEY"))
    }

    fn from_values(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            base_url: base_url.filter(|u| !u.trim().is_empty()).map(str::to_string).unwrap_or(defaults.base_url),
            api_key: api_key.map(str::to_string).unwrap_or(defaults.api_key),
            with_credentials: defaults.with_credentials,
        }
    }

    /// Join a relative endpoint onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = ApiConfig::default();
        assert_eq!(
            config.endpoint("/todo-lists"),
            "https://social-network.samuraijs.com/api/1.1/todo-lists"
        );

        let bare = ApiConfig { base_url: "http://localhost:8080".into(), ..ApiConfig::default() };
        assert_eq!(bare.endpoint("todo-lists/tl1/tasks"), "http://localhost:8080/todo-lists/tl1/tasks");
    }

    #[test]
    fn test_blank_url_falls_back_to_default() {
        let config = ApiConfig::from_values(Some("  "), Some("key-123"));
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "key-123");
        assert!(config.with_credentials);
    }
}
