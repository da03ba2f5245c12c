//! Payment requests and responses (`/v2/payment/*`).

use serde::{Deserialize, Serialize};

use crate::types::null_as_default;

use super::common::Offset;

/// Request body for `/v2/payment/check`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentCheckRequest {
    /// `INVOICE`, `QR` or `ITEM`.
    pub object_type: String,
    pub object_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<Offset>,
}

/// Response from `/v2/payment/check`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCheckResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub rows: Vec<PaymentCheckRow>,
}

impl PaymentCheckResponse {
    /// True when at least one row reports `PAID`.
    pub fn is_paid(&self) -> bool {
        self.rows.iter().any(|row| row.payment_status == "PAID")
    }
}

/// One payment matched by a check.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentCheckRow {
    #[serde(deserialize_with = "null_as_default")]
    pub payment_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub trx_fee: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_wallet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_type: String,
    pub next_payment_date: Option<String>,
    pub next_payment_datetime: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub card_transactions: Vec<CardTransaction>,
    #[serde(deserialize_with = "null_as_default")]
    pub p2p_transactions: Vec<P2PTransaction>,
}

/// Response from `GET /v2/payment/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentDetail {
    #[serde(deserialize_with = "null_as_default")]
    pub payment_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_fee: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_wallet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object_id: String,
    pub next_payment_date: Option<String>,
    pub next_payment_datetime: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub card_transactions: Vec<CardTransaction>,
    #[serde(deserialize_with = "null_as_default")]
    pub p2p_transactions: Vec<P2PTransaction>,
}

/// A card payment transaction.
///
/// The service reports some values under two names (`amount` and
/// `transaction_amount`, `status` and `transaction_status`); both are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_merchant_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_terminal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub card_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub is_cross_border: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_status: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub settlement_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub settlement_status_date: String,
}

/// A peer-to-peer (bank transfer) payment transaction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct P2PTransaction {
    #[serde(deserialize_with = "null_as_default")]
    pub transaction_bank_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_bank_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_bank_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub account_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub settlement_status: String,
}

/// Request body for `/v2/payment/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentListRequest {
    pub object_type: String,
    pub object_id: String,
    pub start_date: String,
    pub end_date: String,
    pub offset: Offset,
}

/// Response from `/v2/payment/list`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentListResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub rows: Vec<PaymentListItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentListItem {
    #[serde(deserialize_with = "null_as_default")]
    pub payment_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_fee: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_currency: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_wallet: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub payment_description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub qr_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub paid_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object_id: String,
}

/// Request body for `DELETE /v2/payment/cancel/{id}` (card payments only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentCancelRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Request body for `DELETE /v2/payment/refund/{id}` (card payments only).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentRefundRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
