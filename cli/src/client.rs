use {
    crate::{display::*, item, notify_error, prelude::*},
    fasapay_sdk::FasapayError,
};

/// Build a FasaPay client from the CLI configuration file and the
/// environment.
pub(crate) async fn load_client() -> AnyResult<FasapayClient, FasapayCliError> {
    let conf = match CliConf::load().await {
        Ok(conf) => conf,
        Err(e) => {
            log::debug!("Using default configuration: {e}");

            CliConf::default()
        }
    };

    build_client(&conf.with_env_overrides())
}

pub(crate) fn build_client(conf: &CliConf) -> AnyResult<FasapayClient, FasapayCliError> {
    let config = conf.fasapay.to_config().map_err(FasapayCliError::Any)?;

    log::debug!("Using FasaPay API at {}", config.api_uri);

    FasapayClient::from_config(config).map_err(FasapayCliError::Fasapay)
}

/// Print what the server said about a failed call and wrap the error.
pub(crate) fn report_api_error(error: FasapayError) -> FasapayCliError {
    match &error {
        FasapayError::Domain(domain) => {
            if let Err(e) = json_output(&domain.envelope) {
                return e;
            }

            notify_error!(
                "Request {id} rejected with code {code}",
                id = domain.id().truecolor(100, 100, 100),
                code = domain.code().to_string().bold()
            );

            for detail in domain.errors().map(|errors| errors.data.as_slice()).unwrap_or_default() {
                item!("{}", format_error_detail(detail));
            }
        }
        FasapayError::Body { raw, .. } => {
            notify_error!(
                "Response with HTTP status {} broke off after {} bytes",
                raw.status().as_u16(),
                raw.body().len()
            );
        }
        FasapayError::Decode { raw, .. } => {
            notify_error!(
                "Unreadable response with HTTP status {}",
                raw.status().as_u16()
            );

            item!("{}", raw_preview(raw));
        }
        _ => {}
    }

    FasapayCliError::Fasapay(error)
}
