//! Ebarimt (electronic tax receipt) requests and responses.

use serde::{Deserialize, Serialize};

use crate::types::null_as_default;

/// Request body for `/v2/ebarimt_v3/create`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEbarimtRequest {
    pub payment_id: String,
    /// `CITIZEN` or `COMPANY`.
    pub ebarimt_receiver_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ebarimt_receiver: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub classification_code: Option<String>,
}

/// An ebarimt as returned by create and cancel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EbarimtResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub g_wallet_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub g_wallet_customer_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_receiver_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_receiver: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_district_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_bill_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub g_merchant_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub merchant_branch_code: String,
    pub merchant_terminal_code: Option<String>,
    pub merchant_staff_code: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub merchant_register_no: String,
    #[serde(deserialize_with = "null_as_default")]
    pub g_payment_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub paid_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vat_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city_tax_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_qr_data: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_lottery: String,
    pub note: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub barimt_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub barimt_status_date: String,
    pub ebarimt_sent_email: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_receiver_phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_tin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebarimt_receipt_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub barimt_items: Vec<EbarimtItem>,
    // Shape undocumented by the service
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub barimt_transactions: Vec<serde_json::Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    pub barimt_histories: Vec<EbarimtHistory>,
}

/// One item on an ebarimt receipt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EbarimtItem {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub barimt_id: String,
    pub merchant_product_code: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_product_code: String,
    pub bar_code: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub unit_price: String,
    #[serde(deserialize_with = "null_as_default")]
    pub quantity: String,
    #[serde(deserialize_with = "null_as_default")]
    pub amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub city_tax_amount: String,
    #[serde(deserialize_with = "null_as_default")]
    pub vat_amount: String,
    pub note: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: bool,
}

/// A historical registration record of an ebarimt.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EbarimtHistory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub barimt_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_receiver_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_receiver: String,
    pub ebarimt_register_no: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_bill_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_mac_address: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_internal_code: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_bill_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_qr_data: String,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_lottery: String,
    pub ebarimt_lottery_msg: Option<String>,
    pub ebarimt_error_code: Option<String>,
    pub ebarimt_error_msg: Option<String>,
    pub ebarimt_response_code: Option<String>,
    pub ebarimt_response_msg: Option<String>,
    pub note: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub barimt_status: String,
    #[serde(deserialize_with = "null_as_default")]
    pub barimt_status_date: String,
    pub ebarimt_sent_email: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub ebarimt_receiver_phone: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tax_type: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_by: String,
    #[serde(deserialize_with = "null_as_default")]
    pub updated_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub status: bool,
}
