//! QPay V2 endpoint paths.

/// POST, Basic auth
pub const AUTH_TOKEN: &str = "/v2/auth/token";

/// POST, Bearer refresh token
pub const AUTH_REFRESH: &str = "/v2/auth/refresh";

/// POST, all invoice variants
pub const INVOICE: &str = "/v2/invoice";

pub const PAYMENT_CHECK: &str = "/v2/payment/check";

pub const PAYMENT_LIST: &str = "/v2/payment/list";

pub const EBARIMT_CREATE: &str = "/v2/ebarimt_v3/create";

/// DELETE /v2/invoice/{id}
pub fn invoice(invoice_id: &str) -> String {
    format!("{INVOICE}/{invoice_id}")
}

/// GET /v2/payment/{id}
pub fn payment(payment_id: &str) -> String {
    format!("/v2/payment/{payment_id}")
}

/// DELETE /v2/payment/cancel/{id}
pub fn payment_cancel(payment_id: &str) -> String {
    format!("/v2/payment/cancel/{payment_id}")
}

/// DELETE /v2/payment/refund/{id}
pub fn payment_refund(payment_id: &str) -> String {
    format!("/v2/payment/refund/{payment_id}")
}

/// DELETE /v2/ebarimt_v3/{id}
pub fn ebarimt(payment_id: &str) -> String {
    format!("/v2/ebarimt_v3/{payment_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_paths() {
        assert_eq!(invoice("INV-1"), "/v2/invoice/INV-1");
        assert_eq!(payment("PAY-1"), "/v2/payment/PAY-1");
        assert_eq!(payment_cancel("PAY-1"), "/v2/payment/cancel/PAY-1");
        assert_eq!(payment_refund("PAY-1"), "/v2/payment/refund/PAY-1");
        assert_eq!(ebarimt("PAY-1"), "/v2/ebarimt_v3/PAY-1");
    }
}
