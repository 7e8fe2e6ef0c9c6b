use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::debug;

const DEFAULT_CONFIG_FILE: &str = "conf.yaml";
const DOTENV_FILE: &str = ".env";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system_config: SystemConfig,
    #[serde(default)]
    pub llm_config: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
    /// Set when an external serverless host invokes the router.
    #[serde(default)]
    pub serverless: bool,
}

/// Settings for the upstream completion API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_model")]
    pub default_model: String,
    #[serde(default = "default_allowed_models")]
    pub allowed_models: Vec<String>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// Fail with `UnrecognizedResponseShape` instead of returning an empty translation.
    #[serde(default = "default_true")]
    pub strict_response_shape: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentMode {
    Standalone,
    Serverless,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8787
}

fn default_static_dir() -> String {
    "public".to_string()
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_allowed_models() -> Vec<String> {
    ["gpt-4.1-mini", "gpt-4.1", "gpt-4o-mini", "gpt-4o"]
        .iter()
        .map(|m| m.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from `CONFIG_PATH` (or `conf.yaml` if present), the
    /// process environment and a `.env` file in the working directory.
    pub fn load() -> Result<Self> {
        let lookup = dotenv_lookup(Path::new(DOTENV_FILE), |key| std::env::var(key).ok())?;
        let explicit = lookup("CONFIG_PATH").map(PathBuf::from);
        Self::load_from(explicit.as_deref(), lookup)
    }

    /// Layer defaults, an optional file and environment overrides.
    ///
    /// An explicitly named file must exist; the default `conf.yaml` is optional.
    /// `lookup` resolves environment variables so callers can supply their own.
    pub fn load_from<F>(config_path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file_source = match config_path {
            Some(path) => {
                if !path.exists() {
                    anyhow::bail!("Configuration file not found: {}", path.display());
                }
                config::File::from(path).required(true)
            }
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u16>()
                    .map_err(|e| anyhow::anyhow!("Invalid PORT value {:?}: {}", raw, e))?,
            ),
            None => None,
        };

        let settings = config::Config::builder()
            .add_source(file_source)
            .set_override_option("llm_config.api_key", non_empty("OPENAI_API_KEY"))?
            .set_override_option("llm_config.default_model", non_empty("OPENAI_MODEL"))?
            .set_override_option("llm_config.base_url", non_empty("OPENAI_BASE_URL"))?
            .set_override_option("system_config.port", port.map(i64::from))?
            .set_override_option("system_config.serverless", non_empty("VERCEL").map(|_| true))?
            .build()?;

        let mut config: Config = settings.try_deserialize()?;
        // A blank key in the file is as good as no key at all.
        if config
            .llm_config
            .api_key
            .as_deref()
            .is_some_and(|k| k.trim().is_empty())
        {
            config.llm_config.api_key = None;
        }
        Ok(config)
    }

    pub fn deployment_mode(&self) -> DeploymentMode {
        if self.system_config.serverless {
            DeploymentMode::Serverless
        } else {
            DeploymentMode::Standalone
        }
    }
}

/// Environment lookup backed by `KEY=value` pairs from a dotenv file.
///
/// Variables already present in `process` win over the file. A missing file
/// contributes nothing.
pub fn dotenv_lookup<F>(dotenv_path: &Path, process: F) -> Result<impl Fn(&str) -> Option<String>>
where
    F: Fn(&str) -> Option<String>,
{
    let mut file_vars = HashMap::new();
    if dotenv_path.exists() {
        for item in dotenvy::from_path_iter(dotenv_path)? {
            let (key, value) = item?;
            file_vars.insert(key, value);
        }
        debug!(
            "Loaded {} variables from {}",
            file_vars.len(),
            dotenv_path.display()
        );
    }
    Ok(move |key: &str| process(key).or_else(|| file_vars.get(key).cloned()))
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            serverless: false,
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_model: default_model(),
            allowed_models: default_allowed_models(),
            timeout_secs: None,
            strict_response_shape: default_true(),
        }
    }
}
