//! Merchant command handlers.

use tracing::info;

use backoffice_api::types::{MerchantCreateQrRequest, MerchantTransactionHistoryPrintParams};

use crate::cli::{MerchantArgs, MerchantCommand, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::Client;

pub async fn handle(
    client: &Client,
    args: MerchantArgs,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    match args.command {
        MerchantCommand::CreateQr {
            amount,
            merchant_code,
        } => {
            info!(amount, %merchant_code, "creating merchant QR");
            let payload = MerchantCreateQrRequest {
                amount,
                merchant_code,
            };
            let resp = client.create_qr(&payload).await?;
            let out = output::render_single(
                format,
                &resp,
                |r| format!("Amount: {}", r.amount),
                |r| r.amount.to_string(),
            )?;
            output::print_output(&out, quiet);
            Ok(())
        }

        MerchantCommand::Print { id } => {
            info!(%id, "rendering transaction history");
            let params = MerchantTransactionHistoryPrintParams { id };
            let resp = client.transaction_history_print(&params).await?;
            let out = output::render_single(
                format,
                &resp,
                |r| format!("URL: {}", r.url),
                |r| r.url.clone(),
            )?;
            output::print_output(&out, quiet);
            Ok(())
        }
    }
}
