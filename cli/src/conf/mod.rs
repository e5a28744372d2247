mod conf_get;
mod conf_set;

use {crate::prelude::*, conf_get::*, conf_set::*};

#[derive(Args, Clone, Debug)]
pub(crate) struct ConfCommand {
    #[arg(long = "api-key", help = "Set the FasaPay API key", value_name = "KEY")]
    api_key: Option<String>,
    #[arg(
        long = "api-secret-word",
        help = "Set the FasaPay API secret word",
        value_name = "SECRET"
    )]
    api_secret_word: Option<String>,
    #[arg(
        long = "api-uri",
        help = "Set the FasaPay API endpoint",
        value_name = "URI",
        conflicts_with = "sandbox"
    )]
    api_uri: Option<String>,
    #[arg(long = "sandbox", help = "Use the FasaPay sandbox endpoint")]
    sandbox: bool,
    /// Hidden argument used for testing to set the path of the configuration
    /// file.
    #[arg(
        long = "conf-path",
        hide = true,
        default_value = CLI_CONF_PATH,
        value_parser = ValueParser::from(expand_tilde)
    )]
    conf_path: PathBuf,
}

/// Handle the provided conf command. The [ConfCommand] instance is passed from
/// [crate::main].
pub(crate) async fn handle(
    ConfCommand {
        api_key,
        api_secret_word,
        api_uri,
        sandbox,
        conf_path,
    }: ConfCommand,
) -> AnyResult<(), FasapayCliError> {
    let api_uri = match sandbox {
        true => Some(SANDBOX_API_URL.to_string()),
        false => api_uri,
    };

    // If all fields are None, we just want to display the current configuration.
    if api_key.is_none() && api_secret_word.is_none() && api_uri.is_none() {
        get_fasapay_conf(conf_path).await?;

        return Ok(());
    }

    set_fasapay_conf(api_key, api_secret_word, api_uri, conf_path).await
}
