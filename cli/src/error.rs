use {
    crate::{display::*, prelude::*},
    fasapay_sdk::FasapayError,
    thiserror::Error,
};

/// Custom error definitions for the FasaPay CLI. Takes care of displaying
/// a pretty summary in the console.
#[derive(Debug, Error)]
pub(crate) enum FasapayCliError {
    #[error("{error}{separator}\n{0}", error = "Syntax Error".red().bold(), separator = separator())]
    SyntaxError(clap::error::Error),
    #[error("{error}{separator}\n{0}", error = "FasaPay Error".red().bold(), separator = separator())]
    Fasapay(FasapayError),
    #[error("{error}{separator}\n{0}", error = "Error".red().bold(), separator = separator())]
    Any(anyhow::Error),
}
