//! Invoice requests and responses (`/v2/invoice`).

use serde::{Deserialize, Serialize};

use crate::types::null_as_default;

use super::common::{
    Deeplink, EbarimtInvoiceLine, InvoiceLine, InvoiceReceiverData, SenderBranchData,
    SenderStaffData, Transaction,
};

/// Request body for a detailed invoice with the full option set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateInvoiceRequest {
    pub invoice_code: String,
    pub sender_invoice_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_branch_data: Option<SenderBranchData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_staff_data: Option<SenderStaffData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_staff_code: Option<String>,
    pub invoice_receiver_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_receiver_data: Option<InvoiceReceiverData>,
    pub invoice_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_expiry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_partial: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_exceed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_amount: Option<f64>,
    pub amount: f64,
    pub callback_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_terminal_code: Option<String>,
    /// Free-form terminal data passed through to the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_terminal_data: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_subscribe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_webhook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<Transaction>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lines: Vec<InvoiceLine>,
}

/// Request body for a simple invoice with the minimal field set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateSimpleInvoiceRequest {
    pub invoice_code: String,
    pub sender_invoice_no: String,
    pub invoice_receiver_code: String,
    pub invoice_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_branch_code: Option<String>,
    pub amount: f64,
    pub callback_url: String,
}

/// Request body for an invoice that carries ebarimt (tax) lines.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateEbarimtInvoiceRequest {
    pub invoice_code: String,
    pub sender_invoice_no: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_branch_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_staff_data: Option<SenderStaffData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender_staff_code: Option<String>,
    pub invoice_receiver_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice_receiver_data: Option<InvoiceReceiverData>,
    pub invoice_description: String,
    pub tax_type: String,
    pub district_code: String,
    pub callback_url: String,
    pub lines: Vec<EbarimtInvoiceLine>,
}

/// Response to any invoice creation request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InvoiceResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub invoice_id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub qr_text: String,
    /// Base64-encoded PNG.
    #[serde(deserialize_with = "null_as_default")]
    pub qr_image: String,
    #[serde(rename = "qPay_shortUrl")]
    #[serde(deserialize_with = "null_as_default")]
    pub qpay_short_url: String,
    #[serde(deserialize_with = "null_as_default")]
    pub urls: Vec<Deeplink>,
}
