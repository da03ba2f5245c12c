//! Request and response bodies of the QPay V2 API.
//!
//! Field names follow the service's JSON exactly. Optional request fields
//! are omitted from the serialized body when unset; response types accept
//! missing fields and fill them with defaults.

mod common;
mod ebarimt;
mod invoice;
mod payment;

pub use common::{
    Account, Address, Deeplink, EbarimtInvoiceLine, InvoiceLine, InvoiceReceiverData, Offset,
    SenderBranchData, SenderStaffData, TaxEntry, Transaction,
};
pub use ebarimt::{CreateEbarimtRequest, EbarimtHistory, EbarimtItem, EbarimtResponse};
pub use invoice::{
    CreateEbarimtInvoiceRequest, CreateInvoiceRequest, CreateSimpleInvoiceRequest,
    InvoiceResponse,
};
pub use payment::{
    CardTransaction, P2PTransaction, PaymentCancelRequest, PaymentCheckRequest,
    PaymentCheckResponse, PaymentCheckRow, PaymentDetail, PaymentListItem, PaymentListRequest,
    PaymentListResponse, PaymentRefundRequest,
};

#[cfg(test)]
mod tests {
    use serde::Serialize;
    use serde::de::DeserializeOwned;
    use serde_json::json;

    use super::*;

    fn round_trip<T>(value: &T) -> T
    where
        T: Serialize + DeserializeOwned,
    {
        let json = serde_json::to_string(value).unwrap();
        serde_json::from_str(&json).unwrap()
    }

    #[test]
    fn detailed_invoice_round_trips() {
        let request = CreateInvoiceRequest {
            invoice_code: "TEST_INVOICE".into(),
            sender_invoice_no: "ORDER-42".into(),
            sender_branch_data: Some(SenderBranchData {
                name: Some("Central".into()),
                address: Some(Address {
                    city: Some("Ulaanbaatar".into()),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            invoice_receiver_code: "terminal".into(),
            invoice_description: "Order 42".into(),
            allow_partial: Some(false),
            minimum_amount: Some(100.0),
            amount: 15000.0,
            callback_url: "https://example.com/callback".into(),
            sender_terminal_data: Some(json!({"name": "POS-1"})),
            lines: vec![InvoiceLine {
                tax_product_code: Some("6401".into()),
                line_description: "Coffee".into(),
                line_quantity: "2".into(),
                line_unit_price: "7500".into(),
                taxes: vec![TaxEntry {
                    tax_code: Some("VAT".into()),
                    description: "VAT".into(),
                    amount: 1363.64,
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        };

        assert_eq!(round_trip(&request), request);
    }

    #[test]
    fn unset_optional_fields_are_omitted() {
        let request = CreateSimpleInvoiceRequest {
            invoice_code: "TEST_INVOICE".into(),
            sender_invoice_no: "1".into(),
            invoice_receiver_code: "terminal".into(),
            invoice_description: "test".into(),
            sender_branch_code: None,
            amount: 100.0,
            callback_url: "https://example.com/cb".into(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert!(value.get("sender_branch_code").is_none());
        assert_eq!(value["amount"], json!(100.0));

        let cancel = serde_json::to_value(PaymentCancelRequest::default()).unwrap();
        assert_eq!(cancel, json!({}));
    }

    #[test]
    fn invoice_response_uses_service_field_names() {
        let body = json!({
            "invoice_id": "INV-1",
            "qr_text": "0002010102121531...",
            "qr_image": "iVBORw0KGgo=",
            "qPay_shortUrl": "https://s.qpay.mn/abc",
            "urls": [{"name": "Khan bank", "description": "Хаан банк", "logo": "https://qpay.mn/khan.png", "link": "khanbank://q?qPay_QRcode=..."}]
        });
        let response: InvoiceResponse = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(response.qpay_short_url, "https://s.qpay.mn/abc");
        assert_eq!(response.urls[0].name, "Khan bank");
        assert_eq!(serde_json::to_value(&response).unwrap(), body);
    }

    #[test]
    fn payment_check_tolerates_sparse_rows() {
        let body = json!({
            "count": 1,
            "paid_amount": 100,
            "rows": [{
                "payment_id": "PAY-1",
                "payment_status": "PAID",
                "payment_amount": "100.00",
                "next_payment_date": null,
                "card_transactions": [],
                "p2p_transactions": [{"transaction_bank_code": "050000", "amount": "100.00", "currency": "MNT"}]
            }]
        });
        let response: PaymentCheckResponse = serde_json::from_value(body).unwrap();
        assert!(response.is_paid());
        assert_eq!(response.paid_amount, Some(100.0));
        assert_eq!(response.rows[0].p2p_transactions[0].currency, "MNT");
        assert!(response.rows[0].next_payment_date.is_none());
        assert_eq!(round_trip(&response), response);
    }

    #[test]
    fn null_response_fields_decode_as_defaults() {
        let payment: PaymentDetail = serde_json::from_value(json!({
            "payment_id": "PAY-1",
            "payment_status": "PAID",
            "payment_wallet": null,
            "payment_fee": null,
            "card_transactions": null,
            "p2p_transactions": [{"transaction_bank_code": "050000", "account_bank_name": null}]
        }))
        .unwrap();
        assert_eq!(payment.payment_status, "PAID");
        assert_eq!(payment.payment_wallet, "");
        assert!(payment.card_transactions.is_empty());
        assert_eq!(payment.p2p_transactions[0].account_bank_name, "");

        let check: PaymentCheckResponse = serde_json::from_value(json!({
            "count": null,
            "rows": [{"payment_id": "PAY-1", "payment_status": "PAID", "payment_type": null}]
        }))
        .unwrap();
        assert_eq!(check.count, 0);
        assert!(check.is_paid());

        let ebarimt: EbarimtResponse = serde_json::from_value(json!({
            "id": "EB-1",
            "ebarimt_receiver": null,
            "status": null,
            "barimt_items": [{"id": "IT-1", "name": null, "status": true}],
            "barimt_histories": null
        }))
        .unwrap();
        assert_eq!(ebarimt.ebarimt_receiver, "");
        assert!(!ebarimt.status);
        assert_eq!(ebarimt.barimt_items[0].name, "");
        assert!(ebarimt.barimt_histories.is_empty());

        let invoice: InvoiceResponse =
            serde_json::from_value(json!({"invoice_id": "INV-1", "qPay_shortUrl": null, "urls": null}))
                .unwrap();
        assert_eq!(invoice.qpay_short_url, "");
        assert!(invoice.urls.is_empty());
    }

    #[test]
    fn ebarimt_response_round_trips() {
        let response = EbarimtResponse {
            id: "EB-1".into(),
            ebarimt_receiver_type: "CITIZEN".into(),
            amount: "1000.00".into(),
            vat_amount: "90.91".into(),
            merchant_terminal_code: None,
            merchant_tin: Some("12345678".into()),
            status: true,
            barimt_items: vec![EbarimtItem {
                id: "IT-1".into(),
                name: "Coffee".into(),
                bar_code: Some("8651234567890".into()),
                status: true,
                ..Default::default()
            }],
            barimt_transactions: vec![json!({"bank": "KHAN"})],
            ..Default::default()
        };
        assert_eq!(round_trip(&response), response);
    }

    #[test]
    fn payment_list_request_defaults_to_first_page() {
        let request = PaymentListRequest {
            object_type: "MERCHANT".into(),
            object_id: "M-1".into(),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["offset"], json!({"page_number": 1, "page_limit": 100}));
    }
}
