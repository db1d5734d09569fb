use std::{fs, path::Path};

use crate::error::ConfigError;

/// Environment variable holding the OpenWeather API key.
pub const API_KEY_VAR: &str = "OPENWEATHER_KEY";

/// Env file looked up in the working directory.
pub const ENV_FILE: &str = ".env";

/// Resolved runtime configuration: just the API key.
#[derive(Clone)]
pub struct Config {
    api_key: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config").field("api_key", &"<redacted>").finish()
    }
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into() }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Load the key from an explicit env file.
    ///
    /// The file must exist and parse. A non-empty `OPENWEATHER_KEY` already set
    /// in the process environment wins over the file, the way dotenv loaders
    /// never override existing variables.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::resolve(path.as_ref(), std::env::var(API_KEY_VAR).ok())
    }

    fn resolve(path: &Path, process_value: Option<String>) -> Result<Self, ConfigError> {
        let from_file = read_env_file(path)?
            .into_iter()
            .find(|(key, _)| key == API_KEY_VAR)
            .map(|(_, value)| value);

        process_value
            .filter(|v| !v.trim().is_empty())
            .or(from_file)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(Self::new)
            .ok_or(ConfigError::MissingApiKey(API_KEY_VAR))
    }

    /// Write or replace the `OPENWEATHER_KEY` line of an env file, keeping every other line.
    pub fn save_api_key(path: impl AsRef<Path>, api_key: &str) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ConfigError::MissingApiKey(API_KEY_VAR));
        }

        let existing = if path.exists() {
            fs::read_to_string(path).map_err(|source| io_error(path, source))?
        } else {
            String::new()
        };

        if api_key.contains('\'') {
            return Err(ConfigError::Malformed {
                path: path.to_path_buf(),
                reason: "API key must not contain single quotes".to_string(),
            });
        }

        let entry = format!("{API_KEY_VAR}={}", quote_value(api_key));
        let mut replaced = false;
        let mut lines: Vec<String> = Vec::new();

        for line in existing.lines() {
            if defines_api_key(line) {
                if !replaced {
                    lines.push(entry.clone());
                    replaced = true;
                }
            } else {
                lines.push(line.to_string());
            }
        }

        if !replaced {
            lines.push(entry);
        }

        let mut contents = lines.join("\n");
        contents.push('\n');

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| io_error(parent, source))?;
        }

        fs::write(path, contents).map_err(|source| io_error(path, source))
    }
}

fn read_env_file(path: &Path) -> Result<Vec<(String, String)>, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingEnvFile(path.to_path_buf()));
    }

    let iter = dotenvy::from_path_iter(path).map_err(|e| match e {
        dotenvy::Error::Io(source) => io_error(path, source),
        other => malformed(path, other),
    })?;

    iter.map(|item| item.map_err(|e| malformed(path, e))).collect()
}

fn defines_api_key(line: &str) -> bool {
    let line = line.trim_start();
    let line = line.strip_prefix("export ").unwrap_or(line).trim_start();
    line.strip_prefix(API_KEY_VAR)
        .is_some_and(|rest| rest.trim_start().starts_with('='))
}

fn quote_value(value: &str) -> String {
    if value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        value.to_string()
    } else {
        format!("'{value}'")
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io { path: path.to_path_buf(), source }
}

fn malformed(path: &Path, e: dotenvy::Error) -> ConfigError {
    ConfigError::Malformed { path: path.to_path_buf(), reason: e.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn env_file(dir: &TempDir, contents: &str) -> PathBuf {
        let path = dir.path().join(".env");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn missing_env_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let err = Config::resolve(&dir.path().join(".env"), Some("FROM_ENV".into())).unwrap_err();

        assert!(matches!(err, ConfigError::MissingEnvFile(_)));
        assert!(err.to_string().contains("Env file not found"));
    }

    #[test]
    fn reads_key_from_env_file() {
        let dir = TempDir::new().unwrap();
        let path = env_file(&dir, "# forecast\nOTHER=1\nOPENWEATHER_KEY=abc123\n");

        let cfg = Config::resolve(&path, None).expect("key must resolve");
        assert_eq!(cfg.api_key(), "abc123");
    }

    #[test]
    fn empty_env_file_has_no_key() {
        let dir = TempDir::new().unwrap();
        let path = env_file(&dir, "");

        let err = Config::resolve(&path, None).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(API_KEY_VAR)));
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let dir = TempDir::new().unwrap();
        let path = env_file(&dir, "OPENWEATHER_KEY=\n");

        let err = Config::resolve(&path, Some("   ".into())).unwrap_err();
        assert!(matches!(err, ConfigError::MissingApiKey(_)));
    }

    #[test]
    fn process_environment_wins_over_file() {
        let dir = TempDir::new().unwrap();
        let path = env_file(&dir, "OPENWEATHER_KEY=from_file\n");

        let cfg = Config::resolve(&path, Some("from_env".into())).unwrap();
        assert_eq!(cfg.api_key(), "from_env");
    }

    #[test]
    fn malformed_env_file_is_fatal() {
        let dir = TempDir::new().unwrap();
        let path = env_file(&dir, "OPENWEATHER_KEY=abc\nnot a valid line\n");

        let err = Config::resolve(&path, None).unwrap_err();
        assert!(matches!(err, ConfigError::Malformed { .. }));
    }

    #[test]
    fn save_api_key_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(".env");

        Config::save_api_key(&path, "  NEWKEY  ").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "OPENWEATHER_KEY=NEWKEY\n");
        assert_eq!(Config::resolve(&path, None).unwrap().api_key(), "NEWKEY");
    }

    #[test]
    fn save_api_key_replaces_existing_line_and_keeps_others() {
        let dir = TempDir::new().unwrap();
        let path = env_file(&dir, "# keys\nOPENWEATHER_KEY=old\nOTHER=1\nOPENWEATHER_KEY_BACKUP=x\n");

        Config::save_api_key(&path, "new").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "# keys\nOPENWEATHER_KEY=new\nOTHER=1\nOPENWEATHER_KEY_BACKUP=x\n"
        );
    }

    #[test]
    fn save_api_key_rejects_empty_key() {
        let dir = TempDir::new().unwrap();
        let err = Config::save_api_key(dir.path().join(".env"), " ").unwrap_err();

        assert!(matches!(err, ConfigError::MissingApiKey(_)));
        assert!(!dir.path().join(".env").exists());
    }

    #[test]
    fn debug_redacts_api_key() {
        let cfg = Config::new("top-secret");
        assert!(!format!("{cfg:?}").contains("top-secret"));
    }
}
