mod api;
mod defaults;
mod validation;

use crate::cli::Args;
use crate::error::{OmniflowError, Result};
use crate::models::{Category, Temperature};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub use api::ApiConfig;
pub use defaults::{
    DEFAULT_BACKEND_URL, DEFAULT_HISTORY_LIMIT, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_ID,
};
pub use validation::expand_with;

use defaults::{default_history_limit, is_truthy};

const EXAMPLE_CONFIG: &str = r#"# omniflow configuration
api:
  # Backend origin, including the /api prefix
  backend_url: "https://agentbackendservice-dfcpcudzeah4b6ae.northeurope-01.azurewebsites.net/api"
  # Function key appended as ?code=...; ${VAR} is expanded from the environment
  function_key: "${OMNIFLOW_FUNCTION_KEY}"
  request_timeout: 30

session:
  user_id: "default_user"
  temperature: 0.7
  category: "TM"
  history_limit: 10
  debug: false
  verbose: false
"#;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub temperature: Option<f32>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub history_limit: Option<u32>,
    #[serde(default)]
    pub debug: Option<bool>,
    #[serde(default)]
    pub verbose: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FileConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub backend_url: String,
    pub function_key: Option<String>,
    pub request_timeout: u64,
    pub user_id: String,
    pub temperature: Temperature,
    pub category: Category,
    pub history_limit: u32,
    pub debug: bool,
    pub verbose: bool,
}

impl Config {
    pub fn from_env_and_args(args: &Args) -> Result<Self> {
        let file_config =
            FileConfig::load().map_err(|e| OmniflowError::Config(format!("{:#}", e)))?;

        Self::from_sources(args, &file_config, |key| env::var(key).ok())
    }

    /// Resolve every setting with CLI args > environment > config file > defaults.
    pub fn from_sources<F>(args: &Args, file: &FileConfig, env_lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend_url = args
            .backend_url
            .clone()
            .or_else(|| env_lookup("OMNIFLOW_BACKEND_URL"))
            .or_else(|| {
                file.api
                    .backend_url
                    .as_deref()
                    .map(|url| expand_with(url, &env_lookup))
            })
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        // The key is optional; an unset ${VAR} or blank value means "no key".
        let function_key = env_lookup("OMNIFLOW_FUNCTION_KEY")
            .or_else(|| env_lookup("AZURE_FUNCTION_KEY"))
            .or_else(|| {
                file.api
                    .function_key
                    .as_deref()
                    .map(|key| expand_with(key, &env_lookup))
            })
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty() && !key.starts_with("${"));

        let request_timeout = match env_lookup("OMNIFLOW_REQUEST_TIMEOUT") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                OmniflowError::Config(format!("OMNIFLOW_REQUEST_TIMEOUT '{}' is not a number", raw))
            })?,
            None => file
                .api
                .request_timeout
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        };
        if request_timeout == 0 {
            return Err(OmniflowError::Config(
                "request timeout must be at least 1 second".to_string(),
            ));
        }

        let user_id = args
            .user
            .clone()
            .or_else(|| env_lookup("OMNIFLOW_USER_ID"))
            .or_else(|| file.session.user_id.clone())
            .unwrap_or_else(|| DEFAULT_USER_ID.to_string());

        let temperature = match args.temperature {
            Some(value) => Temperature::new(value),
            None => match env_lookup("OMNIFLOW_TEMPERATURE") {
                Some(raw) => raw.parse::<Temperature>(),
                None => file
                    .session
                    .temperature
                    .map(Temperature::new)
                    .unwrap_or_else(|| Ok(Temperature::default())),
            },
        }
        .map_err(|e| OmniflowError::Config(e.to_string()))?;

        let category = args
            .category
            .clone()
            .or_else(|| env_lookup("OMNIFLOW_CATEGORY"))
            .or_else(|| file.session.category.clone())
            .map(|raw| raw.parse::<Category>())
            .transpose()
            .map_err(OmniflowError::Config)?
            .unwrap_or_default();

        let history_limit = file
            .session
            .history_limit
            .unwrap_or_else(default_history_limit);

        let debug = args.debug
            || env_lookup("OMNIFLOW_DEBUG")
                .map(|v| is_truthy(&v))
                .or(file.session.debug)
                .unwrap_or(false);

        let verbose = args.verbose
            || env_lookup("OMNIFLOW_VERBOSE")
                .map(|v| is_truthy(&v))
                .or(file.session.verbose)
                .unwrap_or(false);

        Ok(Config {
            backend_url,
            function_key,
            request_timeout,
            user_id,
            temperature,
            category,
            history_limit,
            debug,
            verbose,
        })
    }
}

impl FileConfig {
    /// Load the first config file found, or defaults when there is none.
    pub fn load() -> anyhow::Result<Self> {
        for path in Self::get_config_paths() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }

        Ok(FileConfig::default())
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );

        let config = if is_yaml {
            serde_yaml::from_str(&contents).with_context(|| {
                format!("Failed to parse YAML config file: {}", path.display())
            })?
        } else {
            serde_json::from_str(&contents).with_context(|| {
                format!("Failed to parse JSON config file: {}", path.display())
            })?
        };

        Ok(config)
    }

    pub fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".omniflow.yaml"),
            PathBuf::from(".omniflow.yml"),
            PathBuf::from(".omniflow.json"),
        ];

        if let Some(config_dir) = Self::user_config_dir() {
            paths.push(config_dir.join("omniflow.yaml"));
            paths.push(config_dir.join("omniflow.yml"));
            paths.push(config_dir.join("omniflow.json"));
        }

        paths
    }

    fn user_config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("omniflow"))
    }

    pub fn example() -> &'static str {
        EXAMPLE_CONFIG
    }

    /// Write the example config into the user config directory.
    pub fn init_user_config() -> anyhow::Result<PathBuf> {
        let dir = Self::user_config_dir().context("Could not determine home directory")?;
        let path = dir.join("omniflow.yaml");
        Self::write_example(&path)?;
        Ok(path)
    }

    pub fn write_example(path: &Path) -> anyhow::Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists: {}", path.display());
        }
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }
}
