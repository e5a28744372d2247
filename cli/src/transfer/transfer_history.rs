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
    fasapay_sdk::HistoryFilter,
};

/// List one page of the transaction history matching `filter`.
pub(crate) async fn get_history(
    client: &FasapayClient,
    filter: HistoryFilter,
) -> AnyResult<(), FasapayCliError> {
    command_title!("Fetching transaction history");

    let handle = loading!("Querying FasaPay...");

    let reply = match client.transfers().get_history(filter, None).await {
        Ok(reply) => {
            handle.success();

            reply
        }
        Err(e) => {
            handle.error();

            return Err(report_api_error(e));
        }
    };

    if let Some(history) = &reply.result().history {
        if let Some(page) = history.page {
            notify_success!(
                "Page {current} of {count}, {total} transaction(s) in total",
                current = page.current_page,
                count = page.page_count,
                total = page.total_item
            );
        }

        for record in &history.details {
            item!(
                "{batch} {datetime} {kind} {from} -> {to} {amount} {status}",
                batch = record.batchnumber.bold(),
                datetime = record.datetime,
                kind = record.transaction_type,
                from = record.from,
                to = record.to,
                amount = format_amount(record.amount, &record.currency),
                status = record.status.truecolor(100, 100, 100)
            );
        }
    }

    json_output(&reply.response)?;

    Ok(())
}
