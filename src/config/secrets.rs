//! Store credentials
//!
//! The hosted store needs an endpoint URL and an access key. Each value is
//! taken from its environment variable when set, otherwise from
//! `secrets.json` in the config directory:
//!
//! ```json
//! { "store": { "url": "https://xyz.example.co", "key": "..." } }
//! ```

use serde::Deserialize;
use std::fmt;

use super::paths::TrackerPaths;
use crate::error::TrackerError;

/// Environment variable holding the store endpoint URL
pub const URL_ENV: &str = "FINTRACK_STORE_URL";

/// Environment variable holding the store access key
pub const KEY_ENV: &str = "FINTRACK_STORE_KEY";

#[derive(Debug, Default, Deserialize)]
struct SecretsFile {
    #[serde(default)]
    store: StoreSection,
}

#[derive(Debug, Default, Deserialize)]
struct StoreSection {
    url: Option<String>,
    key: Option<String>,
}

/// Endpoint and access key for the hosted store
#[derive(Clone, PartialEq, Eq)]
pub struct StoreSecrets {
    pub url: String,
    pub key: String,
}

// Keep the key out of debug output and logs.
impl fmt::Debug for StoreSecrets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSecrets")
            .field("url", &self.url)
            .field("key", &"<redacted>")
            .finish()
    }
}

impl StoreSecrets {
    /// Resolve the secrets from the environment and `secrets.json`
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Config` if either value is missing or blank,
    /// or if `secrets.json` exists but cannot be parsed.
    pub fn load(paths: &TrackerPaths) -> Result<Self, TrackerError> {
        let file = read_secrets_file(paths)?;
        Self::resolve(
            std::env::var(URL_ENV).ok(),
            std::env::var(KEY_ENV).ok(),
            file,
        )
    }

    fn resolve(
        env_url: Option<String>,
        env_key: Option<String>,
        file: SecretsFile,
    ) -> Result<Self, TrackerError> {
        let url = pick(env_url, file.store.url).ok_or_else(|| {
            TrackerError::Config(format!(
                "Store URL is not configured (set {} or store.url in secrets.json)",
                URL_ENV
            ))
        })?;
        let key = pick(env_key, file.store.key).ok_or_else(|| {
            TrackerError::Config(format!(
                "Store access key is not configured (set {} or store.key in secrets.json)",
                KEY_ENV
            ))
        })?;

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            key,
        })
    }
}

/// First non-blank value wins
fn pick(primary: Option<String>, fallback: Option<String>) -> Option<String> {
    primary
        .into_iter()
        .chain(fallback)
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

fn read_secrets_file(paths: &TrackerPaths) -> Result<SecretsFile, TrackerError> {
    let path = paths.secrets_file();
    if !path.exists() {
        return Ok(SecretsFile::default());
    }

    let contents = std::fs::read_to_string(&path)
        .map_err(|e| TrackerError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| TrackerError::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn file(url: Option<&str>, key: Option<&str>) -> SecretsFile {
        SecretsFile {
            store: StoreSection {
                url: url.map(String::from),
                key: key.map(String::from),
            },
        }
    }

    #[test]
    fn test_env_takes_precedence() {
        let secrets = StoreSecrets::resolve(
            Some("https://env.example".into()),
            Some("env-key".into()),
            file(Some("https://file.example"), Some("file-key")),
        )
        .unwrap();

        assert_eq!(secrets.url, "https://env.example");
        assert_eq!(secrets.key, "env-key");
    }

    #[test]
    fn test_file_fallback_and_trailing_slash() {
        let secrets = StoreSecrets::resolve(
            None,
            Some("  ".into()),
            file(Some("https://file.example/"), Some("file-key")),
        )
        .unwrap();

        assert_eq!(secrets.url, "https://file.example");
        assert_eq!(secrets.key, "file-key");
    }

    #[test]
    fn test_missing_url_is_config_error() {
        let err = StoreSecrets::resolve(None, Some("k".into()), SecretsFile::default())
            .unwrap_err();
        assert!(matches!(err, TrackerError::Config(_)));
        assert!(err.to_string().contains(URL_ENV));
    }

    #[test]
    fn test_missing_key_is_config_error() {
        let err = StoreSecrets::resolve(None, None, file(Some("https://x.example"), None))
            .unwrap_err();
        assert!(err.to_string().contains(KEY_ENV));
    }

    #[test]
    fn test_secrets_file_parsing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TrackerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(
            paths.secrets_file(),
            r#"{"store": {"url": "https://db.example", "key": "abc"}}"#,
        )
        .unwrap();

        let parsed = read_secrets_file(&paths).unwrap();
        assert_eq!(parsed.store.url.as_deref(), Some("https://db.example"));
        assert_eq!(parsed.store.key.as_deref(), Some("abc"));
    }

    #[test]
    fn test_debug_redacts_key() {
        let secrets = StoreSecrets {
            url: "https://db.example".into(),
            key: "super-secret".into(),
        };
        let debug = format!("{:?}", secrets);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("redacted"));
    }
}
