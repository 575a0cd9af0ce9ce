use crate::adapters::xlsx::XlsxWorkbook;
use crate::core::directory::load_directors;
use crate::core::rota::{assemble_rota, render_email, MONDAYS_HEADER, WEDNESDAYS_HEADER};
use crate::core::schedule::extract_duty_lines;
use crate::core::{
    ConfigProvider, DutySection, Extraction, Result, RotaMonth, RotaOutcome, WorkbookSource,
};

/// Drives one generation run: open workbook, locate sheets, load the
/// directory, extract both weekday columns, assemble, render.
pub struct RotaGenerator<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> RotaGenerator<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    /// Generate the rota for the target month from the configured workbook.
    pub async fn generate(&self, month: RotaMonth) -> Result<RotaOutcome> {
        let path = self.config.workbook_path();
        tracing::debug!("Opening workbook: {}", path.display());
        let mut workbook = XlsxWorkbook::open(&path)?;
        self.generate_from(&mut workbook, month).await
    }

    /// Generate the rota from an already-opened workbook source.
    pub async fn generate_from<W: WorkbookSource>(
        &self,
        workbook: &mut W,
        month: RotaMonth,
    ) -> Result<RotaOutcome> {
        let main_rows = workbook.sheet_rows(self.config.main_sheet()).await?;
        let directors_rows = workbook.sheet_rows(self.config.directors_sheet()).await?;

        let directors = load_directors(&directors_rows, self.config.directory_columns());
        tracing::info!("Loaded {} directors", directors.len());

        let window = month.window()?;
        let sections = [
            (MONDAYS_HEADER, self.config.mon_date_col()),
            (WEDNESDAYS_HEADER, self.config.wed_date_col()),
        ]
        .map(|(header, date_col)| {
            let extraction = extract_duty_lines(&main_rows, date_col, window, &directors);
            log_diagnostics(&extraction);
            DutySection {
                header,
                lines: extraction.lines,
            }
        });

        let rota = assemble_rota(&sections);
        let email_text = render_email(&self.config.email_template(), window, &rota)?;
        tracing::debug!("Rendered rota email for {}", window.month_label());

        Ok(RotaOutcome {
            email_text,
            directors,
        })
    }
}

fn log_diagnostics(extraction: &Extraction) {
    for diagnostic in &extraction.diagnostics {
        tracing::warn!("{}", diagnostic);
    }
}
