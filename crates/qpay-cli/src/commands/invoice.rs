//! Invoice commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use crate::output;

use super::client_from_env;

#[derive(Args, Debug)]
pub struct InvoiceCommand {
    #[command(subcommand)]
    pub command: InvoiceSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum InvoiceSubcommand {
    /// Create a simple invoice with the configured invoice code
    Create(CreateArgs),

    /// Cancel an unpaid invoice
    Cancel(CancelArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Merchant-side invoice number
    #[arg(long)]
    pub sender_invoice_no: String,

    /// Amount to charge
    #[arg(long)]
    pub amount: f64,

    /// Invoice description shown to the payer
    #[arg(long)]
    pub description: String,

    /// Receiver code
    #[arg(long, default_value = "terminal")]
    pub receiver_code: String,

    /// Branch code
    #[arg(long)]
    pub branch_code: Option<String>,
}

#[derive(Args, Debug)]
pub struct CancelArgs {
    /// Invoice ID returned at creation
    pub invoice_id: String,
}

pub async fn handle(cmd: InvoiceCommand) -> Result<()> {
    match cmd.command {
        InvoiceSubcommand::Create(args) => create(args).await,
        InvoiceSubcommand::Cancel(args) => cancel(args).await,
    }
}

async fn create(args: CreateArgs) -> Result<()> {
    let client = client_from_env()?;

    let mut request = client.config().simple_invoice(
        args.sender_invoice_no,
        args.receiver_code,
        args.description,
        args.amount,
    );
    request.sender_branch_code = args.branch_code;

    let invoice = client
        .create_simple_invoice(&request)
        .await
        .context("Failed to create invoice")?;

    output::json_pretty(&invoice)
}

async fn cancel(args: CancelArgs) -> Result<()> {
    let client = client_from_env()?;

    client
        .cancel_invoice(&args.invoice_id)
        .await
        .context("Failed to cancel invoice")?;

    output::success(&format!("Canceled invoice {}", args.invoice_id));
    Ok(())
}
