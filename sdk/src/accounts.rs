use {
    crate::{
        resource::{Reply, Resource},
        CurrencyCode,
        EnvelopeAttributes,
        FasapayError,
    },
    serde::{Deserialize, Serialize},
};

// == Balances ==

/// `<balance>CUR</balance>` for every requested currency, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct BalancesRequest {
    #[serde(rename = "balance")]
    pub currencies: Vec<CurrencyCode>,
}

/// Aggregate balance of the merchant account, one field per currency.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Balances {
    #[serde(rename = "IDR")]
    pub idr: f64,
    #[serde(rename = "USD")]
    pub usd: f64,
    #[serde(rename = "JPY", skip_serializing_if = "Option::is_none")]
    pub jpy: Option<f64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BalancesResult {
    #[serde(alias = "balance", default, skip_serializing_if = "Option::is_none")]
    pub balances: Option<Balances>,
}

// == Accounts ==

/// `<account>FP...</account>` for every requested account, in order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccountsRequest {
    #[serde(rename = "account")]
    pub accounts: Vec<String>,
}

/// Public information about a FasaPay account.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountInfo {
    pub fullname: String,
    pub account: String,
    pub status: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountsResult {
    #[serde(alias = "account", default, skip_serializing_if = "Vec::is_empty")]
    pub accounts: Vec<AccountInfo>,
}

/// Balance and account lookups.
pub struct AccountsResource<'a> {
    resource: &'a Resource,
}

impl<'a> AccountsResource<'a> {
    pub(crate) fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }

    /// Fetch the merchant balance for `currencies`.
    pub async fn get_balances(
        &self,
        currencies: &[CurrencyCode],
        attributes: Option<EnvelopeAttributes>,
    ) -> Result<Reply<BalancesResult>, FasapayError> {
        let payload = BalancesRequest {
            currencies: currencies.to_vec(),
        };

        self.resource.call("GetBalances", payload, attributes).await
    }

    /// Look up the owner and status of each account in `accounts`.
    pub async fn get_accounts(
        &self,
        accounts: &[String],
        attributes: Option<EnvelopeAttributes>,
    ) -> Result<Reply<AccountsResult>, FasapayError> {
        let payload = AccountsRequest {
            accounts: accounts.to_vec(),
        };

        self.resource.call("GetAccounts", payload, attributes).await
    }
}
