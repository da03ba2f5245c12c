//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::ebarimt::EbarimtCommand;
use crate::commands::invoice::InvoiceCommand;
use crate::commands::payment::PaymentCommand;
use crate::commands::token::TokenArgs;

/// Command-line client for the QPay V2 merchant API.
///
/// Reads QPAY_BASE_URL, QPAY_USERNAME, QPAY_PASSWORD, QPAY_INVOICE_CODE and
/// QPAY_CALLBACK_URL from the environment.
#[derive(Parser, Debug)]
#[command(name = "qpay")]
#[command(author, version = env!("QPAY_CLI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Authenticate and print the token expiry
    Token(TokenArgs),

    /// Authenticate, then exchange the refresh token for a new pair
    Refresh(TokenArgs),

    /// Invoice operations
    Invoice(InvoiceCommand),

    /// Payment operations
    Payment(PaymentCommand),

    /// Ebarimt (electronic tax receipt) operations
    Ebarimt(EbarimtCommand),
}
