use {
    crate::{
        Auth,
        Config,
        DecodeError,
        DomainError,
        EncodeError,
        EnvelopeAttributes,
        FasapayError,
        RawResponse,
        Request,
        RequestEnvelope,
        Response,
        Transport,
    },
    log::{debug, warn},
    serde::{de::DeserializeOwned, Serialize},
};

/// A successful call: the decoded response together with the raw HTTP
/// response it was read from.
#[derive(Clone, Debug)]
pub struct Reply<R> {
    pub response: Response<R>,
    pub raw: RawResponse,
}

impl<R> Reply<R> {
    /// The endpoint specific part of the response.
    pub fn result(&self) -> &R {
        &self.response.result
    }

    pub fn into_response(self) -> Response<R> {
        self.response
    }
}

/// Shared plumbing of every endpoint: sign, wrap, send and decode.
#[derive(Clone, Debug)]
pub(crate) struct Resource {
    config: Config,
    transport: Transport,
}

impl Resource {
    pub(crate) fn new(config: Config, transport: Transport) -> Self {
        Self { config, transport }
    }

    pub(crate) fn config(&self) -> &Config {
        &self.config
    }

    pub(crate) fn transport(&self) -> &Transport {
        &self.transport
    }

    pub(crate) fn build_auth(&self, attributes: &EnvelopeAttributes) -> Auth {
        Auth::sign(
            &self.config.api_key,
            &self.config.api_secret_word,
            attributes.date_time,
        )
    }

    /// Request id and token come from `attributes`, or from the current time
    /// when none are given.
    pub(crate) fn build_envelope(&self, attributes: Option<EnvelopeAttributes>) -> RequestEnvelope {
        let attributes = attributes.unwrap_or_else(EnvelopeAttributes::now);

        RequestEnvelope {
            auth: self.build_auth(&attributes),
            id: attributes.id,
        }
    }

    /// Serialize `request` into the form body posted to the endpoint.
    pub(crate) fn marshal<P: Serialize>(&self, request: &Request<P>) -> Result<Vec<u8>, EncodeError> {
        let xml = request.to_xml()?;

        Ok(self.transport.build_body(&xml))
    }

    pub(crate) fn unmarshal<R: DeserializeOwned>(&self, raw: &RawResponse) -> Result<Response<R>, DecodeError> {
        Response::from_xml(raw.body())
    }

    pub(crate) async fn call<P: Serialize, R: DeserializeOwned>(
        &self,
        operation: &'static str,
        payload: P,
        attributes: Option<EnvelopeAttributes>,
    ) -> Result<Reply<R>, FasapayError> {
        let request = self.build_envelope(attributes).wrap(payload);
        let body = self
            .marshal(&request)
            .map_err(|source| FasapayError::Build { operation, source })?;

        debug!(
            "[{operation}] Sending request {} to {}",
            request.id(),
            self.transport.endpoint()
        );

        let raw = self.transport.send(body).await?;

        debug!(
            "[{operation}] Received {} with {} bytes",
            raw.status(),
            raw.body().len()
        );

        let response = match self.unmarshal::<R>(&raw) {
            Ok(response) => response,
            Err(source) => {
                warn!("[{operation}] Could not decode response: {source}");

                return Err(FasapayError::Decode {
                    operation,
                    source,
                    raw,
                });
            }
        };

        if let Some(errors) = response.errors() {
            warn!(
                "[{operation}] Server rejected request {} with code {}",
                response.id(),
                errors.code
            );

            return Err(FasapayError::Domain(Box::new(DomainError {
                envelope: response.envelope,
                raw,
            })));
        }

        Ok(Reply { response, raw })
    }
}
