use {
    crate::{
        resource::Resource,
        AccountsResource,
        Config,
        FasapayError,
        FormEncoding,
        Transport,
        TransfersResource,
    },
    reqwest::Client,
    url::Url,
};

/// Builder for [`FasapayClient`] configuration
pub struct FasapayClientBuilder {
    config: Config,
    client: Option<Client>,
    endpoint: Option<Url>,
    encoding: FormEncoding,
}

impl FasapayClientBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: None,
            endpoint: None,
            encoding: FormEncoding::default(),
        }
    }

    /// Set a custom HTTP client, e.g. one with timeouts or a proxy.
    pub fn with_client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Post to `endpoint` instead of the config's `api_uri`.
    pub fn with_endpoint(mut self, endpoint: Url) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn with_form_encoding(mut self, encoding: FormEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Validate the config and build the client.
    pub fn build(self) -> Result<FasapayClient, FasapayError> {
        self.config.validate().map_err(FasapayError::Config)?;

        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => self.config.endpoint().map_err(FasapayError::Config)?,
        };
        let transport = Transport::new(self.client.unwrap_or_default(), endpoint, self.encoding);

        Ok(FasapayClient {
            resource: Resource::new(self.config, transport),
        })
    }
}

/// Client for the FasaPay XML API.
///
/// Cheap to share: every call builds its own request and response buffers, so
/// one client can serve concurrent callers and stays usable after any error.
#[derive(Clone, Debug)]
pub struct FasapayClient {
    resource: Resource,
}

impl FasapayClient {
    /// Build a client with a default HTTP client and percent-encoded bodies.
    pub fn from_config(config: Config) -> Result<Self, FasapayError> {
        Self::builder(config).build()
    }

    pub fn builder(config: Config) -> FasapayClientBuilder {
        FasapayClientBuilder::new(config)
    }

    pub fn config(&self) -> &Config {
        self.resource.config()
    }

    pub fn endpoint(&self) -> &Url {
        self.resource.transport().endpoint()
    }

    pub fn form_encoding(&self) -> FormEncoding {
        self.resource.transport().encoding()
    }

    /// Balance and account lookups.
    pub fn accounts(&self) -> AccountsResource<'_> {
        AccountsResource::new(&self.resource)
    }

    /// Transfers, history and details.
    pub fn transfers(&self) -> TransfersResource<'_> {
        TransfersResource::new(&self.resource)
    }
}
