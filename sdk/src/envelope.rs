use {
    crate::{
        generate_auth_token,
        xml::{self, Document},
        DecodeError,
        EncodeError,
    },
    chrono::{DateTime, Utc},
    serde::{de::DeserializeOwned, Deserialize, Serialize},
};

pub const REQUEST_ROOT: &str = "fasa_request";
pub const RESPONSE_ROOT: &str = "fasa_response";

// == Error code table ==

/// The sent XML is not valid, broken or has the wrong format.
pub const ERROR_CODE_NOT_VALID_XML_REQUEST: u64 = 40000;
/// Authorisation failed.
pub const ERROR_CODE_UNAUTHORIZED: u64 = 40100;
/// The transfer operation was rejected.
pub const ERROR_CODE_NOT_ACCEPTABLE_TRANSFER: u64 = 40600;
/// The detail operation failed.
pub const ERROR_CODE_DETAIL_REQUEST_ERROR: u64 = 40700;
/// The history operation failed.
pub const ERROR_CODE_HISTORY_REQUEST_ERROR: u64 = 40800;
/// The balance operation failed.
pub const ERROR_CODE_BALANCE_REQUEST_ERROR: u64 = 40900;
/// The account operation failed.
pub const ERROR_CODE_ACCOUNT_REQUEST_ERROR: u64 = 41000;

pub const ERROR_MESSAGE_UNEXPECTED_ERROR: &str = "UNEXPECTED ERROR";

/// Canonical messages keyed by the coarse error code. Sub-codes such as
/// `41001` are not listed.
pub static ERROR_MESSAGES: [(u64, &str); 7] = [
    (ERROR_CODE_NOT_VALID_XML_REQUEST, "NOT VALID XML REQUEST"),
    (ERROR_CODE_UNAUTHORIZED, "UNAUTHORIZED"),
    (ERROR_CODE_NOT_ACCEPTABLE_TRANSFER, "NOT ACCEPTABLE TRANSFER"),
    (ERROR_CODE_DETAIL_REQUEST_ERROR, "DETAIL REQUEST ERROR"),
    (ERROR_CODE_HISTORY_REQUEST_ERROR, "HISTORY REQUEST ERROR"),
    (ERROR_CODE_BALANCE_REQUEST_ERROR, "BALANCE REQUEST ERROR"),
    (ERROR_CODE_ACCOUNT_REQUEST_ERROR, "ACCOUNT REQUEST ERROR"),
];

/// Map an error code to its canonical message, falling back to
/// [`ERROR_MESSAGE_UNEXPECTED_ERROR`].
pub fn error_message(code: u64) -> &'static str {
    ERROR_MESSAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, message)| *message)
        .unwrap_or(ERROR_MESSAGE_UNEXPECTED_ERROR)
}

// == Request side ==

/// The `<auth>` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Auth {
    pub api_key: String,
    pub token: String,
}

impl Auth {
    /// Sign for the hour that contains `at`.
    pub fn sign(api_key: &str, api_secret: &str, at: DateTime<Utc>) -> Self {
        Self {
            api_key: api_key.to_string(),
            token: generate_auth_token(api_key, api_secret, at),
        }
    }
}

/// Caller supplied request id and signing time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnvelopeAttributes {
    pub id: String,
    pub date_time: DateTime<Utc>,
}

impl EnvelopeAttributes {
    pub fn new(id: impl Into<String>, date_time: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            date_time,
        }
    }

    /// Current UTC time, with its Unix timestamp as the id.
    pub fn now() -> Self {
        let date_time = Utc::now();

        Self {
            id: date_time.timestamp().to_string(),
            date_time,
        }
    }
}

/// Fields shared by every request: the id attribute and the auth block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RequestEnvelope {
    #[serde(rename = "@id")]
    pub id: String,
    pub auth: Auth,
}

impl RequestEnvelope {
    pub fn wrap<P>(self, payload: P) -> Request<P> {
        Request {
            envelope: self,
            payload,
        }
    }
}

/// A complete request: the shared envelope plus exactly one payload kind.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Request<P> {
    #[serde(flatten)]
    pub envelope: RequestEnvelope,
    #[serde(flatten)]
    pub payload: P,
}

impl<P> Request<P> {
    pub fn id(&self) -> &str {
        &self.envelope.id
    }

    pub fn auth(&self) -> &Auth {
        &self.envelope.auth
    }
}

impl<P: Serialize> Request<P> {
    /// Render `<fasa_request id="..."><auth>...</auth>{payload}</fasa_request>`.
    pub fn to_xml(&self) -> Result<Vec<u8>, EncodeError> {
        xml::to_xml(REQUEST_ROOT, self)
    }
}

// == Response side ==

/// One fine-grained entry of an `<errors>` block.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// The `<errors>` block of a failed call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorBlock {
    #[serde(alias = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(alias = "@mode")]
    pub mode: String,
    #[serde(alias = "@code")]
    pub code: u64,
    pub data: Vec<ErrorDetail>,
}

/// Fields shared by every response. The presence of `errors` is the only
/// success signal.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponseEnvelope {
    #[serde(alias = "@id")]
    pub id: String,
    #[serde(alias = "@date_time")]
    pub date_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<ErrorBlock>,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        self.errors.is_none()
    }

    /// Canonical message for the error code, [`ERROR_MESSAGE_UNEXPECTED_ERROR`]
    /// when the code is unknown or there is no error block at all.
    pub fn error_message(&self) -> &'static str {
        match &self.errors {
            Some(errors) => error_message(errors.code),
            None => ERROR_MESSAGE_UNEXPECTED_ERROR,
        }
    }
}

/// A decoded response: the shared envelope plus the endpoint result. Both are
/// flattened into a single JSON object when serialized.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Response<R> {
    #[serde(flatten)]
    pub envelope: ResponseEnvelope,
    #[serde(flatten)]
    pub result: R,
}

impl<R> Response<R> {
    pub fn id(&self) -> &str {
        &self.envelope.id
    }

    pub fn date_time(&self) -> &str {
        &self.envelope.date_time
    }

    pub fn errors(&self) -> Option<&ErrorBlock> {
        self.envelope.errors.as_ref()
    }

    pub fn is_success(&self) -> bool {
        self.envelope.is_success()
    }

    pub fn error_message(&self) -> &'static str {
        self.envelope.error_message()
    }
}

impl<R: DeserializeOwned> Response<R> {
    /// Decode a `<fasa_response>` document. The envelope and the result are
    /// both read from the root element.
    pub fn from_xml(bytes: &[u8]) -> Result<Self, DecodeError> {
        let document = Document::parse(bytes)?;

        if document.root() != RESPONSE_ROOT {
            return Err(DecodeError::UnexpectedRoot {
                expected: RESPONSE_ROOT,
                found: document.root().to_string(),
            });
        }

        Ok(Self {
            envelope: document.decode()?,
            result: document.decode()?,
        })
    }
}

/// The XML a payload contributes to a request, without the envelope around it.
#[cfg(test)]
pub(crate) fn payload_to_string<P: Serialize>(payload: P) -> String {
    let envelope = RequestEnvelope {
        id: "1".to_string(),
        auth: Auth {
            api_key: "key".to_string(),
            token: "token".to_string(),
        },
    };
    let xml = String::from_utf8(envelope.wrap(payload).to_xml().unwrap()).unwrap();

    xml.strip_prefix(r#"<fasa_request id="1"><auth><api_key>key</api_key><token>token</token></auth>"#)
        .and_then(|rest| rest.strip_suffix("</fasa_request>"))
        .unwrap_or_else(|| panic!("unexpected envelope in {xml}"))
        .to_string()
}
