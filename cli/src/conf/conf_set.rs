use crate::{command_title, display::json_output, loading, prelude::*};

/// Update the FasaPay CLI configuration with the provided values. Values that
/// are `None` are left untouched.
pub(crate) async fn set_fasapay_conf(
    api_key: Option<String>,
    api_secret_word: Option<String>,
    api_uri: Option<String>,
    conf_path: PathBuf,
) -> AnyResult<(), FasapayCliError> {
    let mut conf = CliConf::load_from_path(&conf_path)
        .await
        .unwrap_or_default();

    command_title!("Updating FasaPay CLI Configuration");

    let conf_handle = loading!("Updating configuration...");

    conf.fasapay.api_key = api_key.or(conf.fasapay.api_key);
    conf.fasapay.api_secret_word = api_secret_word.or(conf.fasapay.api_secret_word);
    conf.fasapay.api_uri = api_uri.unwrap_or(conf.fasapay.api_uri);

    json_output(&CliConf {
        fasapay: conf.fasapay.masked(),
    })?;

    match conf.save(&conf_path).await {
        Ok(()) => {
            conf_handle.success();

            Ok(())
        }
        Err(e) => {
            conf_handle.error();

            Err(FasapayCliError::Any(e))
        }
    }
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches};

    #[tokio::test]
    async fn test_conf_loads_and_saves() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join(".fasapay").join("conf.toml");

        assert!(!tokio::fs::try_exists(&path).await.unwrap());

        // Command saves values.
        let result = set_fasapay_conf(
            Some("key".to_string()),
            Some("secret".to_string()),
            Some(SANDBOX_API_URL.to_string()),
            path.clone(),
        )
        .await;

        assert_matches!(result, Ok(()));

        let conf = CliConf::load_from_path(&path).await.unwrap();

        assert_eq!(conf.fasapay.api_key.as_deref(), Some("key"));
        assert_eq!(conf.fasapay.api_secret_word.as_deref(), Some("secret"));
        assert_eq!(conf.fasapay.api_uri, SANDBOX_API_URL);

        // Overriding one value will save that one value and leave other values intact.
        let result = set_fasapay_conf(Some("other".to_string()), None, None, path.clone()).await;

        assert_matches!(result, Ok(()));

        let conf = CliConf::load_from_path(&path).await.unwrap();

        assert_eq!(conf.fasapay.api_key.as_deref(), Some("other"));
        assert_eq!(conf.fasapay.api_secret_word.as_deref(), Some("secret"));
        assert_eq!(conf.fasapay.api_uri, SANDBOX_API_URL);
    }
}
