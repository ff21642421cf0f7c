use ::csv::{QuoteStyle, WriterBuilder};
use tracing::info;

use mindbalance_core::models::record::AssessmentRecord;

use crate::error::ExportError;

/// Byte-order mark so spreadsheet tools pick UTF-8.
const BOM: &[u8] = "\u{feff}".as_bytes();

const HEADERS: [&str; 6] = ["Date", "Scale", "Score", "Max", "Result", "Percentage"];

/// Write records as CSV, one row per record, every cell quoted.
pub fn records_to_csv(records: &[AssessmentRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(BOM.to_vec());

    writer.write_record(HEADERS)?;
    for record in records {
        writer.write_record([
            record.created_at.strftime("%Y-%m-%d %H:%M:%S").to_string(),
            record.scale_title.clone(),
            record.total.to_string(),
            record.max.to_string(),
            record.label.clone(),
            format!("{}%", record.percentage().round()),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.to_string()))?;
    info!(rows = records.len(), bytes = bytes.len(), "exported csv");
    Ok(bytes)
}
