//! Symbolic error codes returned in the `error` field of QPay responses.
//!
//! Values are the exact wire spelling, including the service's own typos
//! (`EBARIMT_CANCEL_NOTSUPPERDED`, `NO_CREDENDIALS`). Compare against
//! [`ApiError::code`](crate::ApiError::code) or use
//! [`ApiError::is`](crate::ApiError::is).

pub const ACCOUNT_BANK_DUPLICATED: &str = "ACCOUNT_BANK_DUPLICATED";
pub const ACCOUNT_SELECTION_INVALID: &str = "ACCOUNT_SELECTION_INVALID";
pub const AUTHENTICATION_FAILED: &str = "AUTHENTICATION_FAILED";
pub const BANK_ACCOUNT_NOT_FOUND: &str = "BANK_ACCOUNT_NOTFOUND";
pub const BANK_MCC_ALREADY_ADDED: &str = "BANK_MCC_ALREADY_ADDED";
pub const BANK_MCC_NOT_FOUND: &str = "BANK_MCC_NOT_FOUND";
pub const CARD_TERMINAL_NOT_FOUND: &str = "CARD_TERMINAL_NOTFOUND";
pub const CLIENT_NOT_FOUND: &str = "CLIENT_NOTFOUND";
pub const CLIENT_USERNAME_DUPLICATED: &str = "CLIENT_USERNAME_DUPLICATED";
pub const CUSTOMER_DUPLICATE: &str = "CUSTOMER_DUPLICATE";
pub const CUSTOMER_NOT_FOUND: &str = "CUSTOMER_NOTFOUND";
pub const CUSTOMER_REGISTER_INVALID: &str = "CUSTOMER_REGISTER_INVALID";
pub const EBARIMT_CANCEL_NOT_SUPPORTED: &str = "EBARIMT_CANCEL_NOTSUPPERDED";
pub const EBARIMT_NOT_REGISTERED: &str = "EBARIMT_NOT_REGISTERED";
pub const EBARIMT_QR_CODE_INVALID: &str = "EBARIMT_QR_CODE_INVALID";
pub const INFORM_NOT_FOUND: &str = "INFORM_NOTFOUND";
pub const INPUT_CODE_REGISTERED: &str = "INPUT_CODE_REGISTERED";
pub const INPUT_NOT_FOUND: &str = "INPUT_NOTFOUND";
pub const INVALID_AMOUNT: &str = "INVALID_AMOUNT";
pub const INVALID_OBJECT_TYPE: &str = "INVALID_OBJECT_TYPE";
pub const INVOICE_ALREADY_CANCELED: &str = "INVOICE_ALREADY_CANCELED";
pub const INVOICE_CODE_INVALID: &str = "INVOICE_CODE_INVALID";
pub const INVOICE_CODE_REGISTERED: &str = "INVOICE_CODE_REGISTERED";
pub const INVOICE_LINE_REQUIRED: &str = "INVOICE_LINE_REQUIRED";
pub const INVOICE_NOT_FOUND: &str = "INVOICE_NOTFOUND";
pub const INVOICE_PAID: &str = "INVOICE_PAID";
pub const INVOICE_RECEIVER_DATA_ADDRESS_REQUIRED: &str = "INVOICE_RECEIVER_DATA_ADDRESS_REQUIRED";
pub const INVOICE_RECEIVER_DATA_EMAIL_REQUIRED: &str = "INVOICE_RECEIVER_DATA_EMAIL_REQUIRED";
pub const INVOICE_RECEIVER_DATA_PHONE_REQUIRED: &str = "INVOICE_RECEIVER_DATA_PHONE_REQUIRED";
pub const INVOICE_RECEIVER_DATA_REQUIRED: &str = "INVOICE_RECEIVER_DATA_REQUIRED";
pub const MAX_AMOUNT_ERR: &str = "MAX_AMOUNT_ERR";
pub const MCC_NOT_FOUND: &str = "MCC_NOTFOUND";
pub const MERCHANT_ALREADY_REGISTERED: &str = "MERCHANT_ALREADY_REGISTERED";
pub const MERCHANT_INACTIVE: &str = "MERCHANT_INACTIVE";
pub const MERCHANT_NOT_FOUND: &str = "MERCHANT_NOTFOUND";
pub const MIN_AMOUNT_ERR: &str = "MIN_AMOUNT_ERR";
pub const NO_CREDENTIALS: &str = "NO_CREDENDIALS";
pub const OBJECT_DATA_ERROR: &str = "OBJECT_DATA_ERROR";
pub const P2P_TERMINAL_NOT_FOUND: &str = "P2P_TERMINAL_NOTFOUND";
pub const PAYMENT_ALREADY_CANCELED: &str = "PAYMENT_ALREADY_CANCELED";
pub const PAYMENT_NOT_PAID: &str = "PAYMENT_NOT_PAID";
pub const PAYMENT_NOT_FOUND: &str = "PAYMENT_NOTFOUND";
pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
pub const QR_ACCOUNT_INACTIVE: &str = "QRACCOUNT_INACTIVE";
pub const QR_ACCOUNT_NOT_FOUND: &str = "QRACCOUNT_NOTFOUND";
pub const QR_CODE_NOT_FOUND: &str = "QRCODE_NOTFOUND";
pub const QR_CODE_USED: &str = "QRCODE_USED";
pub const SENDER_BRANCH_DATA_REQUIRED: &str = "SENDER_BRANCH_DATA_REQUIRED";
pub const TAX_LINE_REQUIRED: &str = "TAX_LINE_REQUIRED";
pub const TAX_PRODUCT_CODE_REQUIRED: &str = "TAX_PRODUCT_CODE_REQUIRED";
pub const TRANSACTION_NOT_APPROVED: &str = "TRANSACTION_NOT_APPROVED";
pub const TRANSACTION_REQUIRED: &str = "TRANSACTION_REQUIRED";
