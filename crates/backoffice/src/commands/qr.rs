//! QR catalogue command handlers.

use tabled::Tabled;
use tracing::info;

use backoffice_api::types::{Pagination, QrLocationTypeListParams, QrTypeListParams};

use crate::cli::{OutputFormat, QrArgs, QrCommand};
use crate::error::CliError;
use crate::output;

use super::Client;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct LocationTypeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
}

#[derive(Tabled)]
struct QrTypeRow {
    #[tabled(rename = "QR Type")]
    code: String,
}

fn pagination_footer(p: &Pagination) -> String {
    format!("page {} (size {}), {} total", p.page, p.size, p.total)
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    client: &Client,
    args: QrArgs,
    format: OutputFormat,
    quiet: bool,
) -> Result<(), CliError> {
    match args.command {
        QrCommand::LocationTypes {
            page,
            size,
            id,
            name,
        } => {
            let params = QrLocationTypeListParams {
                page,
                size,
                id,
                name,
            };
            info!(?params, "listing QR location types");
            let resp = client.qr_location_type_list(&params).await?;

            let out = if format.is_structured() {
                output::render_structured(format, &resp)?
            } else {
                let mut out = output::render_list(
                    format,
                    &resp.items,
                    |t| LocationTypeRow {
                        id: t.id.to_string(),
                        name: t.name.clone(),
                    },
                    |t| t.id.to_string(),
                )?;
                if format == OutputFormat::Table {
                    out.push('\n');
                    out.push_str(&pagination_footer(&resp.pagination));
                }
                out
            };
            output::print_output(&out, quiet);
            Ok(())
        }

        QrCommand::Types {
            page,
            size,
            qr_type,
        } => {
            let params = QrTypeListParams {
                page,
                size,
                qr_type,
            };
            info!(?params, "listing QR types");
            let resp = client.qr_type_list(&params).await?;

            let out = if format.is_structured() {
                output::render_structured(format, &resp)?
            } else {
                output::render_list(
                    format,
                    &resp.qr_type,
                    |code| QrTypeRow { code: code.clone() },
                    Clone::clone,
                )?
            };
            output::print_output(&out, quiet);
            Ok(())
        }
    }
}
