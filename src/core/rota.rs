use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::core::{DateWindow, DutySection, Result};
use crate::utils::error::RotaError;

pub const MONDAYS_HEADER: &str = "Mondays";
pub const WEDNESDAYS_HEADER: &str = "Wednesdays";
/// Placeholder line for a section with no duty dates in the month.
pub const NO_DATES: &str = "No dates";

const MONTH_TOKEN: &str = "<month>";
const ROTA_TOKEN: &str = "<rota>";

/// Flatten the sections into the rota body: header, then the section's lines
/// (or the placeholder), with one blank line between sections.
pub fn assemble_rota(sections: &[DutySection]) -> Vec<String> {
    let mut rota = Vec::new();

    for (index, section) in sections.iter().enumerate() {
        if index > 0 {
            rota.push(String::new());
        }
        rota.push(section.header.to_string());
        if section.lines.is_empty() {
            rota.push(NO_DATES.to_string());
        } else {
            rota.extend(section.lines.iter().cloned());
        }
    }

    rota
}

/// Read the template file and substitute every month and rota token.
pub fn render_email(template_path: &Path, window: DateWindow, rota: &[String]) -> Result<String> {
    let template = fs::read_to_string(template_path).map_err(|err| {
        if err.kind() == ErrorKind::NotFound {
            RotaError::TemplateMissing {
                path: template_path.to_path_buf(),
            }
        } else {
            RotaError::IoError(err)
        }
    })?;

    Ok(template
        .replace(MONTH_TOKEN, &window.month_label())
        .replace(ROTA_TOKEN, &rota.join("\n")))
}
