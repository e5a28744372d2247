use {
    crate::ValidationError,
    serde::{Deserialize, Serialize},
    url::Url,
};

// FasaPay API endpoints.
pub const PROD_API_URL: &str = "https://www.fasapay.com/api";
pub const PROD_API_URL_SECONDARY: &str = "https://www.fasapay.co.id/api";
pub const SANDBOX_API_URL: &str = "https://sandbox.fasapay.com/api";

/// Credentials and endpoint of a FasaPay merchant account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub api_uri: String,
    pub api_key: String,
    pub api_secret_word: String,
}

impl Config {
    /// Config targeting the production API.
    pub fn new(api_key: impl Into<String>, api_secret_word: impl Into<String>) -> Self {
        Self {
            api_uri: PROD_API_URL.to_string(),
            api_key: api_key.into(),
            api_secret_word: api_secret_word.into(),
        }
    }

    /// Config targeting the sandbox API.
    pub fn sandbox(api_key: impl Into<String>, api_secret_word: impl Into<String>) -> Self {
        Self {
            api_uri: SANDBOX_API_URL.to_string(),
            ..Self::new(api_key, api_secret_word)
        }
    }

    /// Anything that is not one of the production hosts counts as sandbox.
    pub fn is_sandbox(&self) -> bool {
        self.api_uri != PROD_API_URL && self.api_uri != PROD_API_URL_SECONDARY
    }

    /// Checks that every parameter is present and that the URI parses.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.api_uri.is_empty() {
            return Err(ValidationError::EmptyParameter("api_uri"));
        }

        if self.api_key.is_empty() {
            return Err(ValidationError::EmptyParameter("api_key"));
        }

        if self.api_secret_word.is_empty() {
            return Err(ValidationError::EmptyParameter("api_secret_word"));
        }

        self.endpoint().map(|_| ())
    }

    /// The API URI parsed as a [`Url`].
    pub fn endpoint(&self) -> Result<Url, ValidationError> {
        Url::parse(&self.api_uri).map_err(|e| ValidationError::InvalidUri(e.to_string()))
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_uri", &self.api_uri)
            .field("api_key", &self.api_key)
            .field("api_secret_word", &"<redacted>")
            .finish()
    }
}
