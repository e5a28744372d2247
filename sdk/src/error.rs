use {
    crate::{
        envelope::{ErrorBlock, ResponseEnvelope},
        transport::RawResponse,
    },
    thiserror::Error,
};

/// Pre-flight check failures. These never reach the network.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("parameter \"{0}\" is empty")]
    EmptyParameter(&'static str),
    #[error("parameter \"{0}\" is not a finite number")]
    NotFinite(&'static str),
    #[error("parameter \"api_uri\" is not a valid URL: {0}")]
    InvalidUri(String),
}

/// The XML writer refused to emit the request.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("XML encoding failed: {0}")]
pub struct EncodeError(pub String);

impl EncodeError {
    pub(crate) fn from_display<E: std::fmt::Display>(e: E) -> Self {
        Self(e.to_string())
    }
}

/// The response body is not a well-formed `<fasa_response>` envelope.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed XML: {0}")]
    Xml(String),
    #[error("response body holds no XML element")]
    Empty,
    #[error("expected root element <{expected}>, found <{found}>")]
    UnexpectedRoot {
        expected: &'static str,
        found: String,
    },
}

impl DecodeError {
    pub(crate) fn xml<E: std::fmt::Display>(e: E) -> Self {
        Self::Xml(e.to_string())
    }
}

/// A response that decoded correctly but carries an `<errors>` block. The
/// decoded envelope is kept whole next to the raw response.
#[derive(Clone, Debug)]
pub struct DomainError {
    pub envelope: ResponseEnvelope,
    pub raw: RawResponse,
}

impl DomainError {
    pub fn id(&self) -> &str {
        &self.envelope.id
    }

    pub fn date_time(&self) -> &str {
        &self.envelope.date_time
    }

    pub fn errors(&self) -> Option<&ErrorBlock> {
        self.envelope.errors.as_ref()
    }

    /// Coarse category code reported by the server, `0` without an error
    /// block.
    pub fn code(&self) -> u64 {
        self.errors().map_or(0, |errors| errors.code)
    }

    /// Always `false` for an envelope that reached this error.
    pub fn is_success(&self) -> bool {
        self.envelope.is_success()
    }

    /// Canonical client-side message for [`DomainError::code`].
    pub fn error_message(&self) -> &'static str {
        self.envelope.error_message()
    }
}

/// Error type for every FasaPay operation.
#[derive(Debug, Error)]
pub enum FasapayError {
    #[error("{0}")]
    Config(ValidationError),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("{operation} error: {source}")]
    Build {
        operation: &'static str,
        source: EncodeError,
    },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Status and headers arrived but the body could not be read. `raw`
    /// holds whatever part of the body was received.
    #[error("Transport error while reading the response body: {source}")]
    Body {
        source: reqwest::Error,
        raw: RawResponse,
    },

    #[error("{operation} error: {source}")]
    Decode {
        operation: &'static str,
        source: DecodeError,
        raw: RawResponse,
    },

    #[error("{}", .0.error_message())]
    Domain(Box<DomainError>),
}

impl FasapayError {
    /// The raw HTTP response, when one was received before the failure.
    pub fn raw_response(&self) -> Option<&RawResponse> {
        match self {
            Self::Body { raw, .. } | Self::Decode { raw, .. } => Some(raw),
            Self::Domain(domain) => Some(&domain.raw),
            _ => None,
        }
    }

    /// The server supplied error block of a domain error.
    pub fn errors(&self) -> Option<&ErrorBlock> {
        match self {
            Self::Domain(domain) => domain.errors(),
            _ => None,
        }
    }
}
