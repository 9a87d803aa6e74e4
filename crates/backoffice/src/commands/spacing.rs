//! Spacing scale listing.

use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::Tabled;

use backoffice_ui::Spacing;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output;

#[derive(Clone, Serialize, Tabled)]
struct SpacingRow {
    #[tabled(rename = "Token")]
    token: &'static str,
    #[tabled(rename = "px")]
    px: u16,
    #[tabled(rename = "CSS")]
    css: String,
}

fn rows() -> Vec<SpacingRow> {
    Spacing::iter()
        .map(|s| SpacingRow {
            token: s.name(),
            px: s.px(),
            css: s.css(),
        })
        .collect()
}

pub fn handle(format: OutputFormat, quiet: bool) -> Result<(), CliError> {
    let out = output::render_list(format, &rows(), Clone::clone, |r| r.token.to_owned())?;
    output::print_output(&out, quiet);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_follow_scale_order() {
        let rows = rows();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].token, "zero");
        assert_eq!(rows[0].css, "0");
        assert_eq!(rows.last().map(|r| r.px), Some(48));
        assert!(rows.windows(2).all(|w| w[0].px < w[1].px));
    }
}
