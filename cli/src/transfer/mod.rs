mod transfer_create;
mod transfer_details;
mod transfer_history;

use {
    crate::{client::load_client, prelude::*},
    fasapay_sdk::{
        CurrencyCode,
        DetailQuery,
        FeeMode,
        HistoryFilter,
        SortOrder,
        TransactionType,
        TransferLineItem,
    },
    transfer_create::*,
    transfer_details::*,
    transfer_history::*,
};

#[derive(Args, Clone, Debug)]
pub(crate) struct TransferArgs {
    #[arg(long = "to", help = "Recipient FasaPay account", value_name = "ACCOUNT")]
    to: String,
    #[arg(long = "amount", help = "Amount to send", value_name = "AMOUNT")]
    amount: f64,
    #[arg(long = "currency", help = "Currency of the amount", value_name = "CURRENCY")]
    currency: CurrencyCode,
    #[arg(
        long = "fee-mode",
        help = "Who pays the fee, FiS (sender) or FiR (recipient)",
        value_name = "MODE"
    )]
    fee_mode: Option<FeeMode>,
    #[arg(long = "note", help = "Note shown to the recipient", value_name = "NOTE")]
    note: Option<String>,
    #[arg(long = "ref", help = "Merchant reference", value_name = "REF")]
    reference: Option<String>,
    #[arg(long = "id", help = "Caller chosen id of the transfer", value_name = "ID")]
    id: Option<String>,
}

impl From<TransferArgs> for TransferLineItem {
    fn from(args: TransferArgs) -> Self {
        Self {
            id: args.id,
            to: args.to,
            amount: args.amount,
            currency: Some(args.currency),
            fee_mode: args.fee_mode,
            note: args.note,
            reference: args.reference,
        }
    }
}

#[derive(Args, Clone, Debug)]
pub(crate) struct HistoryArgs {
    #[arg(long = "start-date", help = "First day, yyyy-mm-dd", value_name = "DATE")]
    start_date: Option<String>,
    #[arg(long = "end-date", help = "Last day, yyyy-mm-dd", value_name = "DATE")]
    end_date: Option<String>,
    #[arg(
        long = "type",
        help = "Only list one kind of transaction: transfer, topup, redeem, exchange or receive",
        value_name = "TYPE"
    )]
    transaction_type: Option<TransactionType>,
    #[arg(long = "order-by", help = "Field to sort by, e.g. date", value_name = "FIELD")]
    order_by: Option<String>,
    #[arg(long = "order", help = "ASC or DESC", value_name = "ORDER")]
    order: Option<SortOrder>,
    #[arg(long = "page", help = "Page to fetch", value_name = "PAGE")]
    page: Option<u64>,
    #[arg(long = "page-size", help = "Records per page", value_name = "SIZE")]
    page_size: Option<u64>,
}

impl From<HistoryArgs> for HistoryFilter {
    fn from(args: HistoryArgs) -> Self {
        Self {
            start_date: args.start_date,
            end_date: args.end_date,
            transaction_type: args.transaction_type,
            order_by: args.order_by,
            order: args.order,
            page: args.page,
            page_size: args.page_size,
        }
    }
}

#[derive(Args, Clone, Debug)]
pub(crate) struct DetailsArgs {
    #[arg(
        help = "Space separated list of batch numbers",
        num_args = 0..,
        value_name = "BATCH_NUMBER",
        required_unless_present_any = ["reference", "note"]
    )]
    batch_numbers: Vec<String>,
    #[arg(long = "ref", help = "Find a transaction by merchant reference", value_name = "REF")]
    reference: Option<String>,
    #[arg(long = "note", help = "Find a transaction by note", value_name = "NOTE")]
    note: Option<String>,
}

impl DetailsArgs {
    fn into_queries(self) -> Vec<DetailQuery> {
        let mut queries = self
            .batch_numbers
            .into_iter()
            .map(DetailQuery::ByBatchNumber)
            .collect::<Vec<_>>();

        if self.reference.is_some() || self.note.is_some() {
            queries.push(DetailQuery::filter(self.reference, self.note));
        }

        queries
    }
}

/// Handle `$ fasapay transfer`.
pub(crate) async fn handle_transfer(args: TransferArgs) -> AnyResult<(), FasapayCliError> {
    let client = load_client().await?;

    create_transfer(&client, args.into()).await
}

/// Handle `$ fasapay history`.
pub(crate) async fn handle_history(args: HistoryArgs) -> AnyResult<(), FasapayCliError> {
    let client = load_client().await?;

    get_history(&client, args.into()).await
}

/// Handle `$ fasapay details`.
pub(crate) async fn handle_details(args: DetailsArgs) -> AnyResult<(), FasapayCliError> {
    let client = load_client().await?;

    get_details(&client, args.into_queries()).await
}
