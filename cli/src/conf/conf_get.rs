use crate::{command_title, display::json_output, prelude::*};

/// Print the current FasaPay CLI configuration with the secret masked.
pub(crate) async fn get_fasapay_conf(conf_path: PathBuf) -> AnyResult<CliConf, FasapayCliError> {
    let conf = CliConf::load_from_path(&conf_path)
        .await
        .unwrap_or_default();

    command_title!("Current FasaPay CLI Configuration");

    let masked = CliConf {
        fasapay: conf.fasapay.masked(),
    };

    if !JSON_MODE.load(Ordering::Relaxed) {
        println!("{:#?}", masked);
    }

    json_output(&masked)?;

    Ok(conf)
}
