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
    fasapay_sdk::TransferLineItem,
};

/// Send a single transfer. The line item is validated by the SDK before any
/// request is made.
pub(crate) async fn create_transfer(
    client: &FasapayClient,
    transfer: TransferLineItem,
) -> AnyResult<(), FasapayCliError> {
    let currency = transfer.currency.map(|c| c.to_string()).unwrap_or_default();

    command_title!(
        "Sending {amount} to {to}",
        amount = format_amount(transfer.amount, &currency),
        to = transfer.to
    );

    let handle = loading!("Submitting transfer...");

    let reply = match client
        .transfers()
        .create_transfer(vec![transfer], None)
        .await
    {
        Ok(reply) => {
            handle.success();

            reply
        }
        Err(e) => {
            handle.error();

            return Err(report_api_error(e));
        }
    };

    for record in &reply.result().transfers {
        notify_success!(
            "Transfer {batch} is {status}",
            batch = record.batchnumber.bold(),
            status = record.status
        );
        item!("From: {} To: {}", record.from, record.to);
        item!("Amount: {}", format_amount(record.amount, &record.currency));
        item!("Fee ({}): {}", record.fee_mode, format_amount(record.fee, &record.currency));
        item!("Total: {}", format_amount(record.total, &record.currency));
        item!("Balance: {}", format_amount(record.balance, &record.currency));
    }

    json_output(&reply.response)?;

    Ok(())
}
