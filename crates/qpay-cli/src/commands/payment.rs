//! Payment commands.

use anyhow::{Context, Result};
use chrono::{Days, Utc};
use clap::{Args, Subcommand};
use qpay::models::{
    PaymentCancelRequest, PaymentCheckRequest, PaymentListRequest, PaymentRefundRequest,
};

use crate::output;

use super::{PageArgs, client_from_env};

/// Look-back window for `payment list` without an explicit start date.
const DEFAULT_LIST_DAYS: u64 = 30;

#[derive(Args, Debug)]
pub struct PaymentCommand {
    #[command(subcommand)]
    pub command: PaymentSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PaymentSubcommand {
    /// Fetch one payment
    Get(GetArgs),

    /// Check whether an invoice has been paid
    Check(CheckArgs),

    /// List payments in a date range
    List(ListArgs),

    /// Cancel a card payment
    Cancel(ReverseArgs),

    /// Refund a card payment
    Refund(ReverseArgs),
}

#[derive(Args, Debug)]
pub struct GetArgs {
    pub payment_id: String,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Invoice, QR or item ID
    pub object_id: String,

    /// INVOICE, QR or ITEM
    #[arg(long, default_value = "INVOICE")]
    pub object_type: String,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Merchant, invoice or QR ID
    pub object_id: String,

    /// MERCHANT, INVOICE or QR
    #[arg(long, default_value = "MERCHANT")]
    pub object_type: String,

    /// Start date, YYYY-MM-DD (default: 30 days ago)
    #[arg(long)]
    pub start_date: Option<String>,

    /// End date, YYYY-MM-DD (default: today)
    #[arg(long)]
    pub end_date: Option<String>,

    #[command(flatten)]
    pub page: PageArgs,
}

#[derive(Args, Debug)]
pub struct ReverseArgs {
    pub payment_id: String,

    /// Callback URL notified when the operation settles
    #[arg(long)]
    pub callback_url: Option<String>,

    /// Free-form note
    #[arg(long)]
    pub note: Option<String>,
}

pub async fn handle(cmd: PaymentCommand) -> Result<()> {
    match cmd.command {
        PaymentSubcommand::Get(args) => get(args).await,
        PaymentSubcommand::Check(args) => check(args).await,
        PaymentSubcommand::List(args) => list(args).await,
        PaymentSubcommand::Cancel(args) => cancel(args).await,
        PaymentSubcommand::Refund(args) => refund(args).await,
    }
}

async fn get(args: GetArgs) -> Result<()> {
    let client = client_from_env()?;

    let payment = client
        .get_payment(&args.payment_id)
        .await
        .context("Failed to get payment")?;

    output::json_pretty(&payment)
}

async fn check(args: CheckArgs) -> Result<()> {
    let client = client_from_env()?;

    let request = PaymentCheckRequest {
        object_type: args.object_type,
        object_id: args.object_id,
        offset: Some(args.page.into()),
    };
    let response = client
        .check_payment(&request)
        .await
        .context("Failed to check payment")?;

    output::json_pretty(&response)?;
    if response.is_paid() {
        output::note("Paid");
    } else {
        output::note("Not paid");
    }
    Ok(())
}

async fn list(args: ListArgs) -> Result<()> {
    let client = client_from_env()?;

    let today = Utc::now().date_naive();
    let start_date = match args.start_date {
        Some(date) => date,
        None => today
            .checked_sub_days(Days::new(DEFAULT_LIST_DAYS))
            .unwrap_or(today)
            .format("%Y-%m-%d")
            .to_string(),
    };
    let end_date = args
        .end_date
        .unwrap_or_else(|| today.format("%Y-%m-%d").to_string());

    let request = PaymentListRequest {
        object_type: args.object_type,
        object_id: args.object_id,
        start_date,
        end_date,
        offset: args.page.into(),
    };
    let response = client
        .list_payments(&request)
        .await
        .context("Failed to list payments")?;

    output::json_pretty(&response)
}

async fn cancel(args: ReverseArgs) -> Result<()> {
    let client = client_from_env()?;

    let request = PaymentCancelRequest {
        callback_url: args.callback_url,
        note: args.note,
    };
    client
        .cancel_payment(&args.payment_id, &request)
        .await
        .context("Failed to cancel payment")?;

    output::success(&format!("Canceled payment {}", args.payment_id));
    Ok(())
}

async fn refund(args: ReverseArgs) -> Result<()> {
    let client = client_from_env()?;

    let request = PaymentRefundRequest {
        callback_url: args.callback_url,
        note: args.note,
    };
    client
        .refund_payment(&args.payment_id, &request)
        .await
        .context("Failed to refund payment")?;

    output::success(&format!("Refunded payment {}", args.payment_id));
    Ok(())
}
