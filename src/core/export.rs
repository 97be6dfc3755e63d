use crate::core::client::DeviceClient;
use crate::core::format::TimePolicy;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, LogExport, ensure_writable, export_csv, export_json};
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level business logic for the `export` command.
pub struct ExportLogic;

impl ExportLogic {
    /// Rows for every record that would be displayed, in device order.
    pub fn rows<C: DeviceClient>(client: &C, policy: &TimePolicy) -> AppResult<Vec<LogExport>> {
        let records = client.fetch_log()?;
        let rows: Vec<LogExport> = records
            .iter()
            .filter_map(|r| LogExport::from_record(r, policy))
            .collect();

        let skipped = records.len() - rows.len();
        if skipped > 0 {
            log::warn!("{skipped} log record(s) skipped: missing word/time or bad timestamp");
        }

        Ok(rows)
    }

    /// Export the device log.
    ///
    /// - `format`: csv | json
    /// - `file`: output path (absolute, `~/` is expanded)
    pub fn export<C: DeviceClient>(
        client: &C,
        policy: &TimePolicy,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let rows = Self::rows(client, policy)?;
        if rows.is_empty() {
            warning("The device log is empty: nothing but the header will be written.");
        }

        log::debug!("exporting {} rows as {}", rows.len(), format.as_str());
        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(rows.len())
    }
}
