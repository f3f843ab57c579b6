use std::fs::File;
use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, DataType, Reader, Xlsx};
use serde::Deserialize;
use thiserror::Error;

use super::model::{CommodityRecord, CommodityTable};

// ---------------------------------------------------------------------------
// Column names of the published dataset
// ---------------------------------------------------------------------------

pub const COL_COMMODITY: &str = "Komoditi";
pub const COL_REGENCY: &str = "Kabupaten";
pub const COL_PRODUCTION: &str = "Produksi";
pub const COL_GEO_LOW: &str = "Range Indeks Kesulitan Geografis Bawah";
pub const COL_GEO_HIGH: &str = "Range Indeks Kesulitan Geografis Atas";

/// Structural problems in a table file, independent of the carrier format.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("unsupported table format: .{0}")]
    UnsupportedExtension(String),
    #[error("workbook contains no sheets")]
    NoSheet,
    #[error("sheet '{0}' has no header row")]
    EmptySheet(String),
    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),
    #[error("row {row}: missing or invalid '{column}'")]
    BadCell { row: usize, column: &'static str },
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the commodity table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.xlsx` – spreadsheet, first sheet, header row (the published dataset)
/// * `.csv`  – the same columns, comma separated
/// * `.json` – records-oriented array of objects with the same keys
pub fn load_table(path: &Path) -> Result<CommodityTable> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "xlsx" => load_xlsx(path),
        "csv" => {
            let file = File::open(path).context("opening CSV file")?;
            read_csv(file)
        }
        "json" => {
            let file = File::open(path).context("opening JSON file")?;
            read_json(file)
        }
        other => Err(TableError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV / JSON loaders (serde-typed rows)
// ---------------------------------------------------------------------------

/// Row shape shared by the CSV and JSON loaders.  The serde renames are the
/// literal column headers of the published dataset.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Komoditi")]
    commodity: String,
    #[serde(rename = "Kabupaten")]
    regency: String,
    #[serde(rename = "Produksi")]
    production: i64,
    #[serde(rename = "Range Indeks Kesulitan Geografis Bawah")]
    geo_difficulty_low: f64,
    #[serde(rename = "Range Indeks Kesulitan Geografis Atas")]
    geo_difficulty_high: f64,
}

impl From<RawRow> for CommodityRecord {
    fn from(raw: RawRow) -> Self {
        CommodityRecord {
            commodity: raw.commodity,
            regency: raw.regency,
            production: raw.production,
            geo_difficulty_low: raw.geo_difficulty_low,
            geo_difficulty_high: raw.geo_difficulty_high,
        }
    }
}

fn read_csv<R: io::Read>(reader: R) -> Result<CommodityTable> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();
    for (row_no, result) in rdr.deserialize::<RawRow>().enumerate() {
        let raw = result.with_context(|| format!("CSV row {row_no}"))?;
        records.push(raw.into());
    }
    Ok(CommodityTable::from_records(records))
}

/// Records-oriented JSON, the shape `df.to_json(orient='records')` writes:
/// `[{"Komoditi": "Jagung", "Kabupaten": "Kupang", ...}, ...]`.
fn read_json<R: io::Read>(reader: R) -> Result<CommodityTable> {
    let rows: Vec<RawRow> = serde_json::from_reader(reader).context("parsing JSON table")?;
    Ok(CommodityTable::from_records(
        rows.into_iter().map(Into::into).collect(),
    ))
}

// ---------------------------------------------------------------------------
// XLSX loader
// ---------------------------------------------------------------------------

fn load_xlsx(path: &Path) -> Result<CommodityTable> {
    let mut workbook: Xlsx<_> = open_workbook(path).context("opening workbook")?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(TableError::NoSheet)?;
    let range = workbook
        .worksheet_range(&sheet)
        .with_context(|| format!("reading sheet '{sheet}'"))?;

    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .ok_or_else(|| TableError::EmptySheet(sheet.clone()))?
        .iter()
        .map(|cell| cell.get_string().unwrap_or_default().trim().to_string())
        .collect();

    let commodity_idx = find_column(&headers, COL_COMMODITY)?;
    let regency_idx = find_column(&headers, COL_REGENCY)?;
    let production_idx = find_column(&headers, COL_PRODUCTION)?;
    let geo_low_idx = find_column(&headers, COL_GEO_LOW)?;
    let geo_high_idx = find_column(&headers, COL_GEO_HIGH)?;

    let mut records = Vec::new();
    for (row_no, row) in rows.enumerate() {
        // 1-based sheet row, accounting for the header.
        let sheet_row = row_no + 2;

        // A blank Komoditi cell marks the trailing empty rows exported
        // sheets tend to keep.
        let commodity = row
            .get(commodity_idx)
            .and_then(|c| c.get_string())
            .map(str::trim)
            .unwrap_or("");
        if commodity.is_empty() {
            continue;
        }

        let regency = row
            .get(regency_idx)
            .and_then(|c| c.get_string())
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(TableError::BadCell {
                row: sheet_row,
                column: COL_REGENCY,
            })?
            .to_string();
        let production = row
            .get(production_idx)
            .and_then(|c| c.as_i64())
            .ok_or(TableError::BadCell {
                row: sheet_row,
                column: COL_PRODUCTION,
            })?;
        let geo_difficulty_low = row
            .get(geo_low_idx)
            .and_then(|c| c.as_f64())
            .ok_or(TableError::BadCell {
                row: sheet_row,
                column: COL_GEO_LOW,
            })?;
        let geo_difficulty_high = row
            .get(geo_high_idx)
            .and_then(|c| c.as_f64())
            .ok_or(TableError::BadCell {
                row: sheet_row,
                column: COL_GEO_HIGH,
            })?;

        records.push(CommodityRecord {
            commodity: commodity.to_string(),
            regency,
            production,
            geo_difficulty_low,
            geo_difficulty_high,
        });
    }

    Ok(CommodityTable::from_records(records))
}

fn find_column(headers: &[String], name: &'static str) -> Result<usize, TableError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(TableError::MissingColumn(name))
}
