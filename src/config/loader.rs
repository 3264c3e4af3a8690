//! Configuration structures and loading logic.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::config::template::{escape_query, expand};
use crate::error::{Error, Result};

/// Main configuration structure, read from `config.yaml`.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// API key sent as `X-Apikey` on every request.
    pub api_key: String,

    /// Search endpoint template: escaped query, then result limit.
    pub search_api: String,

    /// Download endpoint template: item identifier.
    pub download_api: String,

    /// Maximum number of results requested from the search endpoint.
    pub limit: u32,

    /// HTTP proxy all requests are routed through.
    #[serde(default)]
    pub proxy: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("search_api", &self.search_api)
            .field("download_api", &self.download_api)
            .field("limit", &self.limit)
            .field("proxy", &self.proxy)
            .finish()
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!("Can not find file: {}", path.display()))
            } else {
                Error::Io(e)
            }
        })?;

        Self::parse(&content)
    }

    /// Parse configuration from YAML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// The configured proxy, treating an empty string as none.
    pub fn proxy(&self) -> Option<&str> {
        self.proxy
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }

    /// Build the search URL for `query`.
    pub fn search_url(&self, query: &str) -> Result<String> {
        let escaped = escape_query(query);
        let limit = self.limit.to_string();
        expand("search_api", &self.search_api, &[&escaped, &limit])
    }

    /// Build the download URL for an item identifier.
    pub fn download_url(&self, id: &str) -> Result<String> {
        expand("download_api", &self.download_api, &[id])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
api_key: secret-key
search_api: "https://api.example/search?q=%s&limit=%d"
download_api: "https://api.example/files/%s/download"
limit: 5
proxy: "http://127.0.0.1:8080"
"#;

    #[test]
    fn test_load_config() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.api_key, "secret-key");
        assert_eq!(config.limit, 5);
        assert_eq!(config.proxy(), Some("http://127.0.0.1:8080"));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.yaml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_parse_error_is_fatal() {
        assert!(matches!(
            Config::parse("api_key: [unterminated"),
            Err(Error::YamlParse(_))
        ));
        // Required keys must be present.
        assert!(Config::parse("api_key: k\nlimit: 5\n").is_err());
    }

    #[test]
    fn test_empty_proxy_is_direct() {
        let mut config = Config::parse(SAMPLE).unwrap();
        config.proxy = Some("  ".to_string());
        assert_eq!(config.proxy(), None);
        config.proxy = None;
        assert_eq!(config.proxy(), None);
    }

    #[test]
    fn test_search_url() {
        let config = Config::parse(SAMPLE).unwrap();
        assert_eq!(
            config.search_url("foo").unwrap(),
            "https://api.example/search?q=foo&limit=5"
        );
        assert_eq!(
            config.search_url("a b").unwrap(),
            "https://api.example/search?q=a%20b&limit=5"
        );
    }

    #[test]
    fn test_download_url() {
        let config = Config::parse(SAMPLE).unwrap();
        assert_eq!(
            config.download_url("abc").unwrap(),
            "https://api.example/files/abc/download"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::parse(SAMPLE).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
