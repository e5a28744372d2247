use {
    crate::FasapayError,
    reqwest::{
        header::{HeaderMap, CONTENT_TYPE},
        Client,
        StatusCode,
    },
    std::borrow::Cow,
    url::{form_urlencoded, Url},
};

/// Name of the single form field that carries the request XML.
pub const REQUEST_FORM_FIELD: &str = "req";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// How the XML is placed into the `req` form field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormEncoding {
    /// `application/x-www-form-urlencoded` escaping, spaces become `+`.
    #[default]
    PercentEncoded,
    /// The XML verbatim, as used by recorded fixtures.
    Raw,
}

impl FormEncoding {
    /// Build the `req=<xml>` body.
    pub fn encode(&self, xml: &[u8]) -> Vec<u8> {
        let mut body = format!("{REQUEST_FORM_FIELD}=").into_bytes();

        match self {
            Self::PercentEncoded => body.extend(form_urlencoded::byte_serialize(xml).flat_map(str::bytes)),
            Self::Raw => body.extend_from_slice(xml),
        }

        body
    }
}

/// A fully buffered HTTP response. The body stays readable after it has been
/// decoded.
#[derive(Clone, Debug)]
pub struct RawResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// Body as text, replacing invalid UTF-8.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    pub fn into_body(self) -> Vec<u8> {
        self.body
    }
}

/// Posts form bodies to the FasaPay endpoint.
#[derive(Clone, Debug)]
pub struct Transport {
    client: Client,
    endpoint: Url,
    encoding: FormEncoding,
}

impl Transport {
    pub fn new(client: Client, endpoint: Url, encoding: FormEncoding) -> Self {
        Self {
            client,
            endpoint,
            encoding,
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn encoding(&self) -> FormEncoding {
        self.encoding
    }

    /// Wrap the request XML into the form body.
    pub fn build_body(&self, xml: &[u8]) -> Vec<u8> {
        self.encoding.encode(xml)
    }

    /// POST `body` and buffer the whole response. The HTTP status is not
    /// interpreted here. A body that breaks off after the headers yields
    /// [`FasapayError::Body`] with everything received so far.
    pub async fn send(&self, body: Vec<u8>) -> Result<RawResponse, FasapayError> {
        let mut response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let headers = response.headers().clone();
        let mut body = Vec::new();

        loop {
            match response.chunk().await {
                Ok(Some(chunk)) => body.extend_from_slice(&chunk),
                Ok(None) => break,
                Err(source) => {
                    return Err(FasapayError::Body {
                        source,
                        raw: RawResponse::new(status, headers, body),
                    })
                }
            }
        }

        Ok(RawResponse::new(status, headers, body))
    }
}
