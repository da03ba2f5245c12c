//! Ebarimt commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use qpay::models::CreateEbarimtRequest;

use crate::output;

use super::client_from_env;

#[derive(Args, Debug)]
pub struct EbarimtCommand {
    #[command(subcommand)]
    pub command: EbarimtSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum EbarimtSubcommand {
    /// Issue an ebarimt for a payment
    Create(CreateArgs),

    /// Cancel the ebarimt of a payment
    Cancel(CancelArgs),
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    pub payment_id: String,

    /// CITIZEN or COMPANY
    #[arg(long, default_value = "CITIZEN")]
    pub receiver_type: String,

    /// Receiver registration number or phone
    #[arg(long)]
    pub receiver: Option<String>,

    #[arg(long)]
    pub district_code: Option<String>,

    #[arg(long)]
    pub classification_code: Option<String>,
}

#[derive(Args, Debug)]
pub struct CancelArgs {
    pub payment_id: String,
}

pub async fn handle(cmd: EbarimtCommand) -> Result<()> {
    match cmd.command {
        EbarimtSubcommand::Create(args) => create(args).await,
        EbarimtSubcommand::Cancel(args) => cancel(args).await,
    }
}

async fn create(args: CreateArgs) -> Result<()> {
    let client = client_from_env()?;

    let request = CreateEbarimtRequest {
        payment_id: args.payment_id,
        ebarimt_receiver_type: args.receiver_type,
        ebarimt_receiver: args.receiver,
        district_code: args.district_code,
        classification_code: args.classification_code,
    };
    let ebarimt = client
        .create_ebarimt(&request)
        .await
        .context("Failed to create ebarimt")?;

    output::json_pretty(&ebarimt)
}

async fn cancel(args: CancelArgs) -> Result<()> {
    let client = client_from_env()?;

    let ebarimt = client
        .cancel_ebarimt(&args.payment_id)
        .await
        .context("Failed to cancel ebarimt")?;

    output::json_pretty(&ebarimt)
}
