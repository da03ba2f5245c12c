//! Subcommand implementations.

pub mod ebarimt;
pub mod invoice;
pub mod payment;
pub mod token;

use anyhow::{Context, Result};
use clap::Args;
use qpay::models::Offset;
use qpay::{Config, QPayClient};

/// Build a client from the `QPAY_*` environment variables.
pub fn client_from_env() -> Result<QPayClient> {
    let config = Config::from_env().context("Failed to load configuration")?;
    QPayClient::new(config).context("Failed to create client")
}

/// Paging options shared by check and list.
#[derive(Args, Debug)]
pub struct PageArgs {
    /// Page number, starting at 1
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Rows per page
    #[arg(long, default_value_t = 100)]
    pub limit: u32,
}

impl From<PageArgs> for Offset {
    fn from(args: PageArgs) -> Self {
        Offset {
            page_number: args.page,
            page_limit: args.limit,
        }
    }
}
