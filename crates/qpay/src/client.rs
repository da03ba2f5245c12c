//! The QPay API client.

use std::sync::Arc;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::auth::{SessionManager, TokenResponse, TokenState};
use crate::config::Config;
use crate::error::Error;
use crate::models::{
    CreateEbarimtInvoiceRequest, CreateEbarimtRequest, CreateInvoiceRequest,
    CreateSimpleInvoiceRequest, EbarimtResponse, InvoiceResponse, PaymentCancelRequest,
    PaymentCheckRequest, PaymentCheckResponse, PaymentDetail, PaymentListRequest,
    PaymentListResponse, PaymentRefundRequest,
};
use crate::transport::{Authorization, HttpTransport, NO_BODY, endpoints};

/// A client for the QPay V2 merchant API.
///
/// Every operation first makes sure a valid access token is held (reusing,
/// refreshing or re-authenticating as needed) and then performs exactly one
/// API request.
///
/// # Thread Safety
///
/// Clients are cheap to clone (they use internal `Arc`) and are safe to
/// share across tasks. All clones share one token state; separate clients
/// created with [`QPayClient::new`] do not.
///
/// # Example
///
/// ```no_run
/// use qpay::{BaseUrl, Config, QPayClient};
/// use qpay::models::PaymentCheckRequest;
///
/// # async fn example() -> Result<(), qpay::Error> {
/// let config = Config::new(
///     BaseUrl::new("https://merchant.qpay.mn")?,
///     "TEST_MERCHANT",
///     "123456",
///     "TEST_INVOICE",
///     "https://example.com/qpay/callback",
/// );
/// let client = QPayClient::new(config)?;
///
/// let check = client
///     .check_payment(&PaymentCheckRequest {
///         object_type: "INVOICE".into(),
///         object_id: "INV-1".into(),
///         offset: None,
///     })
///     .await?;
/// println!("paid: {}", check.is_paid());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct QPayClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    config: Config,
    transport: HttpTransport,
    session: SessionManager,
}

impl QPayClient {
    /// Create a client with the default HTTP client (30 second timeout).
    ///
    /// # Errors
    ///
    /// Returns a transport error if the HTTP client cannot be initialized.
    pub fn new(config: Config) -> Result<Self, Error> {
        let transport = HttpTransport::new(config.base_url.clone())?;
        Ok(Self::from_transport(config, transport))
    }

    /// Create a client that sends requests through `http_client`.
    ///
    /// Use this to control timeouts, proxies or TLS settings.
    pub fn with_http_client(config: Config, http_client: reqwest::Client) -> Self {
        let transport = HttpTransport::with_client(config.base_url.clone(), http_client);
        Self::from_transport(config, transport)
    }

    fn from_transport(config: Config, transport: HttpTransport) -> Self {
        let session = SessionManager::new(transport.clone(), config.credentials());
        Self {
            inner: Arc::new(ClientInner {
                config,
                transport,
                session,
            }),
        }
    }

    /// Returns the configuration this client was built with.
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Returns the session manager holding this client's token pair.
    pub fn session(&self) -> &SessionManager {
        &self.inner.session
    }

    /// Snapshot of the current token state.
    pub async fn token_state(&self) -> TokenState {
        self.inner.session.token_state().await
    }

    // ========================================================================
    // Authentication
    // ========================================================================

    /// Authenticate with the merchant credentials and store the new token pair.
    ///
    /// Not needed in normal use: every operation obtains a token on demand.
    pub async fn get_token(&self) -> Result<TokenResponse, Error> {
        self.inner.session.get_token().await
    }

    /// Exchange the stored refresh token for a new pair and store it.
    pub async fn refresh_token(&self) -> Result<TokenResponse, Error> {
        self.inner.session.refresh_token().await
    }

    /// Make sure a valid access token is held, authenticating if necessary.
    pub async fn ensure_token(&self) -> Result<(), Error> {
        self.inner.session.ensure_token().await.map(|_| ())
    }

    // ========================================================================
    // Invoices
    // ========================================================================

    /// Create a detailed invoice with the full option set.
    #[instrument(skip(self, request), fields(sender_invoice_no = %request.sender_invoice_no))]
    pub async fn create_invoice(
        &self,
        request: &CreateInvoiceRequest,
    ) -> Result<InvoiceResponse, Error> {
        debug!("Creating invoice");
        self.send(Method::POST, endpoints::INVOICE, Some(request))
            .await
    }

    /// Create a simple invoice with the minimal field set.
    #[instrument(skip(self, request), fields(sender_invoice_no = %request.sender_invoice_no))]
    pub async fn create_simple_invoice(
        &self,
        request: &CreateSimpleInvoiceRequest,
    ) -> Result<InvoiceResponse, Error> {
        debug!("Creating simple invoice");
        self.send(Method::POST, endpoints::INVOICE, Some(request))
            .await
    }

    /// Create an invoice that carries ebarimt (tax) lines.
    #[instrument(skip(self, request), fields(sender_invoice_no = %request.sender_invoice_no))]
    pub async fn create_ebarimt_invoice(
        &self,
        request: &CreateEbarimtInvoiceRequest,
    ) -> Result<InvoiceResponse, Error> {
        debug!("Creating ebarimt invoice");
        self.send(Method::POST, endpoints::INVOICE, Some(request))
            .await
    }

    /// Cancel an unpaid invoice.
    #[instrument(skip(self))]
    pub async fn cancel_invoice(&self, invoice_id: &str) -> Result<(), Error> {
        debug!("Canceling invoice");
        self.send_no_response(Method::DELETE, &endpoints::invoice(invoice_id), NO_BODY)
            .await
    }

    // ========================================================================
    // Payments
    // ========================================================================

    /// Fetch the details of one payment.
    #[instrument(skip(self))]
    pub async fn get_payment(&self, payment_id: &str) -> Result<PaymentDetail, Error> {
        debug!("Getting payment");
        self.send(Method::GET, &endpoints::payment(payment_id), NO_BODY)
            .await
    }

    /// Check whether an invoice (or QR, or item) has been paid.
    #[instrument(skip(self, request), fields(object_type = %request.object_type, object_id = %request.object_id))]
    pub async fn check_payment(
        &self,
        request: &PaymentCheckRequest,
    ) -> Result<PaymentCheckResponse, Error> {
        debug!("Checking payment");
        self.send(Method::POST, endpoints::PAYMENT_CHECK, Some(request))
            .await
    }

    /// List payments matching the given filter.
    #[instrument(skip(self, request), fields(object_type = %request.object_type, object_id = %request.object_id))]
    pub async fn list_payments(
        &self,
        request: &PaymentListRequest,
    ) -> Result<PaymentListResponse, Error> {
        debug!("Listing payments");
        self.send(Method::POST, endpoints::PAYMENT_LIST, Some(request))
            .await
    }

    /// Cancel a card payment.
    #[instrument(skip(self, request))]
    pub async fn cancel_payment(
        &self,
        payment_id: &str,
        request: &PaymentCancelRequest,
    ) -> Result<(), Error> {
        debug!("Canceling payment");
        self.send_no_response(
            Method::DELETE,
            &endpoints::payment_cancel(payment_id),
            Some(request),
        )
        .await
    }

    /// Refund a card payment.
    #[instrument(skip(self, request))]
    pub async fn refund_payment(
        &self,
        payment_id: &str,
        request: &PaymentRefundRequest,
    ) -> Result<(), Error> {
        debug!("Refunding payment");
        self.send_no_response(
            Method::DELETE,
            &endpoints::payment_refund(payment_id),
            Some(request),
        )
        .await
    }

    // ========================================================================
    // Ebarimt
    // ========================================================================

    /// Issue an ebarimt (electronic tax receipt) for a payment.
    #[instrument(skip(self, request), fields(payment_id = %request.payment_id))]
    pub async fn create_ebarimt(
        &self,
        request: &CreateEbarimtRequest,
    ) -> Result<EbarimtResponse, Error> {
        debug!("Creating ebarimt");
        self.send(Method::POST, endpoints::EBARIMT_CREATE, Some(request))
            .await
    }

    /// Cancel the ebarimt issued for a payment.
    #[instrument(skip(self))]
    pub async fn cancel_ebarimt(&self, payment_id: &str) -> Result<EbarimtResponse, Error> {
        debug!("Canceling ebarimt");
        self.send(Method::DELETE, &endpoints::ebarimt(payment_id), NO_BODY)
            .await
    }

    async fn send<B, R>(&self, method: Method, path: &str, body: Option<&B>) -> Result<R, Error>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned + Default,
    {
        let token = self.inner.session.ensure_token().await?;
        self.inner
            .transport
            .request(method, path, body, Authorization::Bearer(token.as_str()))
            .await
    }

    async fn send_no_response<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        let token = self.inner.session.ensure_token().await?;
        self.inner
            .transport
            .execute(method, path, body, Authorization::Bearer(token.as_str()))
            .await
            .map(|_| ())
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for QPayClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QPayClient")
            .field("config", &self.inner.config)
            .field("tokens", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BaseUrl;

    fn config() -> Config {
        Config::new(
            BaseUrl::new("https://merchant.qpay.mn").unwrap(),
            "user",
            "pass",
            "INV001",
            "https://example.com/callback",
        )
    }

    #[tokio::test]
    async fn new_client_has_no_token() {
        let client = QPayClient::new(config()).unwrap();
        assert!(client.token_state().await.is_empty());
        assert_eq!(client.config().invoice_code, "INV001");
    }

    #[tokio::test]
    async fn clones_share_token_state() {
        let client = QPayClient::new(config()).unwrap();
        let clone = client.clone();
        assert!(std::ptr::eq(client.session(), clone.session()));

        let other = QPayClient::new(config()).unwrap();
        assert!(!std::ptr::eq(client.session(), other.session()));
    }

    #[test]
    fn debug_hides_password() {
        let client = QPayClient::with_http_client(config(), reqwest::Client::new());
        let debug = format!("{:?}", client);
        assert!(!debug.contains("\"pass\""));
        assert!(debug.contains("[REDACTED]"));
    }
}
