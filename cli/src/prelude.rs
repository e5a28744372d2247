pub(crate) use {
    crate::error::FasapayCliError,
    anyhow::{anyhow, Result as AnyResult},
    clap::{builder::ValueParser, Args, Parser, Subcommand},
    colored::Colorize,
    fasapay_sdk::{Config, FasapayClient, PROD_API_URL, SANDBOX_API_URL},
    serde::{Deserialize, Serialize},
    std::{
        path::PathBuf,
        sync::atomic::{AtomicBool, Ordering},
    },
};

/// Whether output should be machine readable JSON. Set once from `--json`.
pub(crate) static JSON_MODE: AtomicBool = AtomicBool::new(false);

// Where to find config file.
pub(crate) const CLI_CONF_PATH: &str = "~/.fasapay/conf.toml";

// Environment variables that take precedence over the config file.
pub(crate) const ENV_API_KEY: &str = "FASAPAY_API_KEY";
pub(crate) const ENV_API_SECRET_WORD: &str = "FASAPAY_API_SECRET_WORD";
pub(crate) const ENV_API_URI: &str = "FASAPAY_API_URI";

/// Struct holding the config structure.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CliConf {
    #[serde(default)]
    pub(crate) fasapay: FasapayConf,
}

impl CliConf {
    pub(crate) async fn load() -> AnyResult<Self> {
        let conf_path = expand_tilde(CLI_CONF_PATH)?;

        Self::load_from_path(&conf_path).await
    }

    pub(crate) async fn load_from_path(path: &PathBuf) -> AnyResult<Self> {
        let conf = tokio::fs::read_to_string(path).await?;

        Ok(toml::from_str(&conf)?)
    }

    pub(crate) async fn save(&self, path: &PathBuf) -> AnyResult<()> {
        let parent_folder = path
            .parent()
            .ok_or_else(|| anyhow!("Config path {} has no parent folder", path.display()))?;
        let conf = toml::to_string_pretty(&self)?;

        tokio::fs::create_dir_all(parent_folder).await?;
        tokio::fs::write(path, conf).await?;

        Ok(())
    }

    /// Replace values with the ones found in the environment.
    pub(crate) fn with_env_overrides(mut self) -> Self {
        if let Ok(api_key) = std::env::var(ENV_API_KEY) {
            self.fasapay.api_key = Some(api_key);
        }

        if let Ok(api_secret_word) = std::env::var(ENV_API_SECRET_WORD) {
            self.fasapay.api_secret_word = Some(api_secret_word);
        }

        if let Ok(api_uri) = std::env::var(ENV_API_URI) {
            self.fasapay.api_uri = api_uri;
        }

        self
    }
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct FasapayConf {
    #[serde(default = "default_api_uri")]
    pub(crate) api_uri: String,
    pub(crate) api_key: Option<String>,
    pub(crate) api_secret_word: Option<String>,
}

impl Default for FasapayConf {
    fn default() -> Self {
        Self {
            api_uri: default_api_uri(),
            api_key: None,
            api_secret_word: None,
        }
    }
}

impl FasapayConf {
    /// SDK config, failing when credentials are missing.
    pub(crate) fn to_config(&self) -> AnyResult<Config> {
        let (Some(api_key), Some(api_secret_word)) = (&self.api_key, &self.api_secret_word) else {
            return Err(anyhow!(
                "FasaPay credentials are not configured. Run {command} or set {ENV_API_KEY} and {ENV_API_SECRET_WORD}",
                command = "$ fasapay conf --api-key <KEY> --api-secret-word <SECRET>".bold()
            ));
        };

        let config = Config {
            api_uri: self.api_uri.clone(),
            api_key: api_key.clone(),
            api_secret_word: api_secret_word.clone(),
        };

        config.validate()?;

        Ok(config)
    }

    /// Copy that is safe to print.
    pub(crate) fn masked(&self) -> Self {
        Self {
            api_secret_word: self.api_secret_word.as_ref().map(|_| "********".to_string()),
            ..self.clone()
        }
    }
}

impl std::fmt::Debug for FasapayConf {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let masked = self.masked();

        f.debug_struct("FasapayConf")
            .field("api_uri", &masked.api_uri)
            .field("api_key", &masked.api_key)
            .field("api_secret_word", &masked.api_secret_word)
            .finish()
    }
}

// == Used by clap ==

/// Expands `~/` to the user's home directory in path arguments.
pub(crate) fn expand_tilde(path: &str) -> AnyResult<PathBuf> {
    if let Some(path) = path.strip_prefix("~/") {
        match home::home_dir() {
            Some(home) => return Ok(home.join(path)),
            None => return Err(anyhow!("Could not find home directory")),
        }
    }

    Ok(path.into())
}

// == Used by serde ==

fn default_api_uri() -> String {
    PROD_API_URL.to_string()
}
