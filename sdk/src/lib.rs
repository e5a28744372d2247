//! Client SDK for the FasaPay XML API. Covers balance lookup, account
//! verification, fund transfers, transaction history and transaction detail
//! lookup.
//!
//! Every call builds a signed `<fasa_request>` envelope, posts it as the `req`
//! form field and interprets the `<fasa_response>` envelope that comes back.

/// Protocol vocabulary shared by requests and responses, such as currency
/// codes and fee modes.
mod types;
pub use types::*;

/// Credentials and endpoint selection.
mod config;
pub use config::*;

/// Error taxonomy of the SDK.
mod error;
pub use error::*;

/// Derivation of the hour-windowed authentication token.
mod signature;
pub use signature::*;

/// Serde based XML codec and the response document reader.
pub mod xml;

/// Request and response envelopes that wrap every payload, plus the
/// canonical error code table.
mod envelope;
pub use envelope::*;

/// HTTP transport and the buffered raw response.
mod transport;
pub use transport::*;

/// The call pattern every endpoint goes through.
mod resource;
pub use resource::Reply;

/// Balance and account lookups.
mod accounts;
pub use accounts::*;

/// Transfers, history and transaction details.
mod transfers;
pub use transfers::*;

/// Entry point tying configuration, transport and resources together.
mod client;
pub use client::*;
