use {
    crate::{
        client::report_api_error,
        command_title,
        display::{format_amount, json_output},
        item,
        loading,
        notify_success,
        prelude::*,
    },
    fasapay_sdk::DetailQuery,
};

/// Fetch the full record of each transaction selected by `queries`.
pub(crate) async fn get_details(
    client: &FasapayClient,
    queries: Vec<DetailQuery>,
) -> AnyResult<(), FasapayCliError> {
    command_title!("Fetching details of {} transaction(s)", queries.len());

    let handle = loading!("Querying FasaPay...");

    let reply = match client.transfers().get_details(queries, None).await {
        Ok(reply) => {
            handle.success();

            reply
        }
        Err(e) => {
            handle.error();

            return Err(report_api_error(e));
        }
    };

    for record in &reply.result().details {
        notify_success!(
            "{batch} on {date} {time}",
            batch = record.batchnumber.bold(),
            date = record.date,
            time = record.time
        );
        item!("Type: {} via {}", record.transaction_type, record.method);
        item!("From: {} To: {}", record.from, record.to);
        item!("Amount: {}", format_amount(record.amount, &record.currency));
        item!("Fee ({}): {}", record.fee_mode, format_amount(record.fee, &record.currency));
        item!("Total: {}", format_amount(record.total, &record.currency));
        item!("Note: {}", record.note);
        item!("Status: {}", record.status);
    }

    json_output(&reply.response)?;

    Ok(())
}
