use {
    crate::{
        resource::{Reply, Resource},
        CurrencyCode,
        EnvelopeAttributes,
        FasapayError,
        FeeMode,
        SortOrder,
        TransactionStatus,
        TransactionType,
        ValidationError,
    },
    serde::{Deserialize, Serialize},
};

// == Create transfer ==

/// One outgoing transfer of a batch.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TransferLineItem {
    /// Caller chosen id, echoed back in errors about this item.
    #[serde(rename = "@id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub to: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<CurrencyCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fee_mode: Option<FeeMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
}

impl TransferLineItem {
    pub fn new(to: impl Into<String>, amount: f64, currency: CurrencyCode) -> Self {
        Self {
            to: to.into(),
            amount,
            currency: Some(currency),
            ..Default::default()
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_fee_mode(mut self, fee_mode: FeeMode) -> Self {
        self.fee_mode = Some(fee_mode);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Destination, currency and a finite non-zero amount are required.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.to.is_empty() {
            return Err(ValidationError::EmptyParameter("to"));
        }

        if self.currency.is_none() {
            return Err(ValidationError::EmptyParameter("currency"));
        }

        if self.amount == 0.0 {
            return Err(ValidationError::EmptyParameter("amount"));
        }

        if !self.amount.is_finite() {
            return Err(ValidationError::NotFinite("amount"));
        }

        Ok(())
    }
}

/// A batch of transfers. Either every item is sent or none is.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct TransfersRequest {
    #[serde(rename = "transfer")]
    pub transfers: Vec<TransferLineItem>,
}

impl TransfersRequest {
    /// Stops at the first invalid item.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.transfers.iter().try_for_each(TransferLineItem::validate)
    }
}

/// Settlement record of a completed transfer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransferRecord {
    #[serde(alias = "@mode")]
    pub mode: String,
    #[serde(alias = "@code")]
    pub code: u64,
    pub batchnumber: String,
    pub date: String,
    pub time: String,
    pub from: String,
    pub to: String,
    pub fee: f64,
    pub amount: f64,
    pub total: f64,
    pub fee_mode: String,
    pub currency: String,
    pub note: String,
    pub status: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub balance: f64,
    pub method: String,
}

impl TransferRecord {
    pub fn is_finished(&self) -> bool {
        self.status == TransactionStatus::Finish.as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransfersResult {
    #[serde(alias = "transfer", default, skip_serializing_if = "Vec::is_empty")]
    pub transfers: Vec<TransferRecord>,
}

// == History ==

/// Filter of the history listing. Absent fields are left out of the request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HistoryFilter {
    /// `yyyy-mm-dd`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    /// `yyyy-mm-dd`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransactionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<SortOrder>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
}

/// The `<history>` element of a history request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HistoryRequest {
    pub history: HistoryFilter,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageInfo {
    pub total_item: u64,
    pub page_count: u64,
    pub current_page: u64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryRecord {
    pub batchnumber: String,
    pub datetime: String,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub to: String,
    pub from: String,
    pub amount: f64,
    pub note: String,
    pub status: String,
    pub currency: String,
    pub fee: f64,
}

/// One page of the transaction history.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct History {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<PageInfo>,
    #[serde(alias = "detail", default)]
    pub details: Vec<HistoryRecord>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history: Option<History>,
}

// == Details ==

/// Selects a transaction either by its batch number or by reference and note.
/// Both forms are sent as a `<detail>` element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum DetailQuery {
    ByBatchNumber(String),
    ByFilter {
        #[serde(rename = "ref", skip_serializing_if = "Option::is_none")]
        reference: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
}

impl DetailQuery {
    pub fn batch_number(batch_number: impl Into<String>) -> Self {
        Self::ByBatchNumber(batch_number.into())
    }

    pub fn filter(reference: Option<String>, note: Option<String>) -> Self {
        Self::ByFilter { reference, note }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DetailsRequest {
    #[serde(rename = "detail")]
    pub details: Vec<DetailQuery>,
}

/// Full record of a single transaction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailRecord {
    #[serde(alias = "@mode")]
    pub mode: String,
    #[serde(alias = "@code")]
    pub code: u64,
    pub batchnumber: String,
    pub date: String,
    pub time: String,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub total: f64,
    pub currency: String,
    pub note: String,
    pub status: String,
    pub fee: f64,
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub method: String,
    #[serde(rename = "fee_mod")]
    pub fee_mode: String,
}

impl DetailRecord {
    pub fn is_finished(&self) -> bool {
        self.status == TransactionStatus::Finish.as_ref()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DetailsResult {
    #[serde(alias = "detail", default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<DetailRecord>,
}

/// Transfers, transaction history and transaction details.
pub struct TransfersResource<'a> {
    resource: &'a Resource,
}

impl<'a> TransfersResource<'a> {
    pub(crate) fn new(resource: &'a Resource) -> Self {
        Self { resource }
    }

    /// Send a batch of transfers. Every item is validated before anything
    /// goes over the wire.
    pub async fn create_transfer(
        &self,
        transfers: Vec<TransferLineItem>,
        attributes: Option<EnvelopeAttributes>,
    ) -> Result<Reply<TransfersResult>, FasapayError> {
        let payload = TransfersRequest { transfers };
        payload.validate()?;

        self.resource.call("CreateTransfer", payload, attributes).await
    }

    pub async fn get_history(
        &self,
        filter: HistoryFilter,
        attributes: Option<EnvelopeAttributes>,
    ) -> Result<Reply<HistoryResult>, FasapayError> {
        let payload = HistoryRequest { history: filter };

        self.resource.call("GetHistory", payload, attributes).await
    }

    pub async fn get_details(
        &self,
        details: Vec<DetailQuery>,
        attributes: Option<EnvelopeAttributes>,
    ) -> Result<Reply<DetailsResult>, FasapayError> {
        let payload = DetailsRequest { details };

        self.resource.call("GetDetails", payload, attributes).await
    }
}
