use crate::{
    client::report_api_error,
    command_title,
    display::json_output,
    item,
    loading,
    notify_success,
    prelude::*,
};

/// Look up the owner and status of every account in `accounts`.
pub(crate) async fn get_accounts(
    client: &FasapayClient,
    accounts: Vec<String>,
) -> AnyResult<(), FasapayCliError> {
    command_title!("Looking up {} FasaPay account(s)", accounts.len());

    let handle = loading!("Querying FasaPay...");

    let reply = match client.accounts().get_accounts(&accounts, None).await {
        Ok(reply) => {
            handle.success();

            reply
        }
        Err(e) => {
            handle.error();

            return Err(report_api_error(e));
        }
    };

    for account in &reply.result().accounts {
        item!(
            "{account} {fullname} ({status})",
            account = account.account.bold(),
            fullname = account.fullname,
            status = account.status.truecolor(100, 100, 100)
        );
    }

    notify_success!(
        "Found {} of {} account(s)",
        reply.result().accounts.len(),
        accounts.len()
    );

    json_output(&reply.response)?;

    Ok(())
}
