//! Configuration for the hot-search feed, analysis and report output
//!
//! Loads configuration from config.yml file

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::analysis::DEFAULT_TOPIC_LIMIT;
use crate::report::DEFAULT_TOP_N;
use crate::{Error, Result};

/// Default constants (fallback if config.yml not found)
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_OUTPUT_DIR: &str = ".";
pub const DEFAULT_OUTPUT_PREFIX: &str = "weibo_analysis";

/// YAML config structures
#[derive(Debug, Default, Deserialize)]
struct YamlConfig {
    tianapi: Option<TianApiConfig>,
    analysis: Option<AnalysisSection>,
    output: Option<OutputSection>,
}

#[derive(Debug, Default, Deserialize)]
struct TianApiConfig {
    api_key: Option<String>,
    api_url: Option<String>,
    timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct AnalysisSection {
    topics: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    dir: Option<String>,
    prefix: Option<String>,
    top_n: Option<usize>,
    html_template: Option<String>,
}

/// Main configuration struct
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// TianAPI key; there is no built-in fallback
    pub api_key: Option<String>,
    /// Full feed URL override (proxy or mock feed)
    pub api_url: Option<String>,
    pub timeout_secs: u64,
    /// Number of leading topics analyzed per run
    pub topics: usize,
    pub output_dir: PathBuf,
    pub output_prefix: String,
    /// Ideas detailed in the Markdown summary
    pub top_n: usize,
    pub html_template: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Load configuration from config.yml or use defaults
    /// Environment variables take precedence over config.yml values
    pub fn new() -> Self {
        Self::load_from_file("config.yml")
            .or_else(|_| Self::load_from_file("../config.yml"))
            .unwrap_or_else(|_| Self::defaults())
    }

    /// Load from an explicit path, or fall back to [`Config::new`].
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from_file(path),
            None => Ok(Self::new()),
        }
    }

    /// Resolve a value: prefer env var if config value looks like ${VAR}
    ///
    /// Unresolved placeholders and empty strings count as unset.
    fn resolve_env_string(value: Option<String>, env_key: &str) -> Option<String> {
        if let Some(ref v) = value {
            if v.starts_with("${") && v.ends_with('}') {
                let var_name = &v[2..v.len() - 1];
                if let Ok(env_val) = std::env::var(var_name) {
                    return Some(env_val).filter(|s| !s.is_empty());
                }
            }
        }
        // Explicit env_key overrides literal YAML values
        if let Ok(env_val) = std::env::var(env_key) {
            if !env_val.is_empty() {
                return Some(env_val);
            }
        }
        value.filter(|v| !v.is_empty() && !(v.starts_with("${") && v.ends_with('}')))
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            Error::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let yaml: YamlConfig = serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

        Ok(Self::from_yaml(yaml))
    }

    fn from_yaml(yaml: YamlConfig) -> Self {
        let tianapi = yaml.tianapi.unwrap_or_default();
        let analysis = yaml.analysis.unwrap_or_default();
        let output = yaml.output.unwrap_or_default();

        let output_dir = Self::resolve_env_string(output.dir, "HOTSEARCH_OUTPUT_DIR")
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string());

        Self {
            api_key: Self::resolve_env_string(tianapi.api_key, "TIANAPI_KEY"),
            api_url: Self::resolve_env_string(tianapi.api_url, "HOTSEARCH_API_URL"),
            timeout_secs: tianapi.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            topics: analysis.topics.unwrap_or(DEFAULT_TOPIC_LIMIT),
            output_dir: PathBuf::from(output_dir),
            output_prefix: output
                .prefix
                .unwrap_or_else(|| DEFAULT_OUTPUT_PREFIX.to_string()),
            top_n: output.top_n.unwrap_or(DEFAULT_TOP_N),
            html_template: output.html_template.map(PathBuf::from),
        }
    }

    /// Create config without a file; environment variables still apply
    fn defaults() -> Self {
        Self::from_yaml(YamlConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{LazyLock, Mutex};

    static ENV_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

    const ENV_KEYS: [&str; 3] = ["TIANAPI_KEY", "HOTSEARCH_API_URL", "HOTSEARCH_OUTPUT_DIR"];

    struct EnvGuard {
        key: String,
        original: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let original = std::env::var(key).ok();
            std::env::set_var(key, value);
            Self {
                key: key.to_string(),
                original,
            }
        }

        fn unset(key: &str) -> Self {
            let original = std::env::var(key).ok();
            std::env::remove_var(key);
            Self {
                key: key.to_string(),
                original,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.original {
                Some(value) => std::env::set_var(&self.key, value),
                None => std::env::remove_var(&self.key),
            }
        }
    }

    fn set_envs(vars: &[(&str, &str)]) -> Vec<EnvGuard> {
        vars.iter().map(|(k, v)| EnvGuard::set(k, v)).collect()
    }

    fn clear_envs() -> Vec<EnvGuard> {
        ENV_KEYS.iter().map(|k| EnvGuard::unset(k)).collect()
    }

    fn write_yaml(yaml: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), yaml).unwrap();
        file
    }

    #[test]
    fn defaults_without_file() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guards = clear_envs();

        let config = Config::from_yaml(YamlConfig::default());
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_url, None);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.topics, 20);
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.output_prefix, "weibo_analysis");
        assert_eq!(config.top_n, 5);
        assert_eq!(config.html_template, None);
    }

    #[test]
    fn test_load_from_yaml() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _guards = clear_envs();
        let file = write_yaml(
            r#"
tianapi:
  api_key: "literal_key"
  timeout_secs: 30
analysis:
  topics: 10
output:
  dir: "reports"
  prefix: "daily"
  top_n: 3
  html_template: "custom.html"
"#,
        );

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("literal_key"));
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.topics, 10);
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.output_prefix, "daily");
        assert_eq!(config.top_n, 3);
        assert_eq!(config.html_template, Some(PathBuf::from("custom.html")));
    }

    #[test]
    fn env_placeholders_are_resolved_from_environment() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _cleared = clear_envs();
        let _guards = set_envs(&[
            ("MY_TIANAPI_KEY", "key_from_env"),
            ("HOTSEARCH_API_URL", "http://localhost:8080/feed"),
        ]);
        let file = write_yaml(
            r#"
tianapi:
  api_key: "${MY_TIANAPI_KEY}"
"#,
        );

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("key_from_env"));
        assert_eq!(config.api_url.as_deref(), Some("http://localhost:8080/feed"));
    }

    #[test]
    fn unresolved_placeholder_is_unset() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _cleared = clear_envs();
        let file = write_yaml(
            r#"
tianapi:
  api_key: "${TIANAPI_KEY}"
"#,
        );

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.api_key, None);
    }

    #[test]
    fn env_overrides_literal_yaml_strings() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _cleared = clear_envs();
        let _guards = set_envs(&[("TIANAPI_KEY", "env_key"), ("HOTSEARCH_OUTPUT_DIR", "/tmp/out")]);
        let file = write_yaml(
            r#"
tianapi:
  api_key: "yaml_key"
output:
  dir: "yaml_dir"
"#,
        );

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("env_key"));
        assert_eq!(config.output_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn empty_sections_fall_back_to_defaults() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _cleared = clear_envs();
        let file = write_yaml("tianapi:\noutput:\n");

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.topics, DEFAULT_TOPIC_LIMIT);
        assert_eq!(config.output_prefix, DEFAULT_OUTPUT_PREFIX);
    }

    #[test]
    fn loading_does_not_read_dotenv() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _cleared = clear_envs();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "TIANAPI_KEY=from_dotenv\n").unwrap();
        let file = write_yaml("tianapi:\n  api_key: ${TIANAPI_KEY}\n");

        let original_dir = std::env::current_dir().unwrap();
        std::env::set_current_dir(dir.path()).unwrap();
        let loaded = Config::load_from_file(file.path());
        let defaults = Config::defaults();
        std::env::set_current_dir(original_dir).unwrap();

        assert_eq!(loaded.unwrap().api_key, None);
        assert_eq!(defaults.api_key, None);
        assert!(std::env::var("TIANAPI_KEY").is_err());
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let _lock = ENV_LOCK.lock().unwrap();
        let result = Config::load(Some(Path::new("/nonexistent/path/config.yml")));
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn load_from_file_fails_on_invalid_yaml() {
        let _lock = ENV_LOCK.lock().unwrap();
        let file = write_yaml("{ invalid yaml [");
        let result = Config::load_from_file(file.path());
        assert!(matches!(result, Err(Error::ConfigError(_))));
    }

    #[test]
    fn config_clone() {
        let _lock = ENV_LOCK.lock().unwrap();
        let _cleared = clear_envs();
        let config = Config::from_yaml(YamlConfig::default());
        assert_eq!(config.clone(), config);
    }
}
