mod account_balances;
mod account_lookup;

use {
    crate::{client::load_client, prelude::*},
    account_balances::*,
    account_lookup::*,
    fasapay_sdk::CurrencyCode,
};

#[derive(Args, Clone, Debug)]
pub(crate) struct BalancesArgs {
    /// Space separated list of currencies
    #[arg(
        help = "Space separated list of currencies, e.g. IDR USD",
        required = true,
        num_args = 1..,
        value_name = "CURRENCY"
    )]
    currencies: Vec<CurrencyCode>,
}

#[derive(Args, Clone, Debug)]
pub(crate) struct AccountsArgs {
    /// Space separated list of FasaPay account numbers
    #[arg(
        help = "Space separated list of FasaPay account numbers, e.g. FP00001",
        required = true,
        num_args = 1..,
        value_name = "ACCOUNT"
    )]
    accounts: Vec<String>,
}

/// Handle `$ fasapay balances`.
pub(crate) async fn handle_balances(
    BalancesArgs { currencies }: BalancesArgs,
) -> AnyResult<(), FasapayCliError> {
    let client = load_client().await?;

    get_balances(&client, currencies).await
}

/// Handle `$ fasapay accounts`.
pub(crate) async fn handle_accounts(
    AccountsArgs { accounts }: AccountsArgs,
) -> AnyResult<(), FasapayCliError> {
    let client = load_client().await?;

    get_accounts(&client, accounts).await
}
