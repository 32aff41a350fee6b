//! Spreadsheet adapter: survey workbook to raw grid
//!
//! Loads the uploaded survey workbook and converts the required sheet into
//! the in-memory [`RawGrid`] the parser consumes. A workbook without the
//! survey sheet is a structural failure the user must fix before retrying;
//! everything past this boundary works on plain cell values.

use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;
use tracing::{debug, info};

use crate::app::models::{CellValue, RawGrid};
use crate::constants::SURVEY_SHEET_NAME;
use crate::{Error, Result};

/// Load the survey sheet of a workbook as a raw grid
pub fn load_survey_grid(path: &Path) -> Result<RawGrid> {
    let file_name = path.display().to_string();
    info!("Loading survey workbook: {}", file_name);

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| Error::workbook(&file_name, format!("Failed to open workbook: {}", e)))?;

    if !workbook
        .sheet_names()
        .iter()
        .any(|s| s == SURVEY_SHEET_NAME)
    {
        return Err(Error::sheet_not_found(SURVEY_SHEET_NAME));
    }

    let range = workbook
        .worksheet_range(SURVEY_SHEET_NAME)
        .map_err(|e| Error::workbook(&file_name, format!("Failed to read survey sheet: {}", e)))?;

    let rows: Vec<Vec<CellValue>> = range
        .rows()
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();

    let grid = RawGrid::from_rows(rows);
    debug!(
        "Loaded grid: {} rows x {} columns",
        grid.max_row(),
        grid.max_column()
    );
    Ok(grid)
}

/// Convert one workbook cell into a grid cell
///
/// Date cells keep their calendar value; error cells degrade to empty so
/// a stray formula error never poisons extraction.
fn convert_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(naive) => CellValue::Date(naive.date()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.clone()),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) => CellValue::Empty,
    }
}
