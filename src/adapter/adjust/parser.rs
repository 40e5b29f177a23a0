//! KPI CSV parsing
//!
//! Turns the body of a `.csv` KPI report into typed report rows.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use super::error::FetchError;
use crate::domain::entities::report_row::ReportRow;
use crate::domain::entities::report_table::ReportTable;

/// Columns of a KPI report, in response order
pub const KPI_COLUMNS: [&str; 6] = ["adj_date", "os", "daus", "waus", "maus", "installs"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse one app's report body.
///
/// The first line is skipped when it looks like a header (its date field does
/// not start with a digit). A body without any record is an error; a
/// header-only body gives an empty table. Empty `installs` become 0; empty
/// user counts stay empty.
pub fn parse_kpi_csv(app_name: &str, body: &str) -> Result<ReportTable, FetchError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(body.as_bytes());

    let mut rows = Vec::new();
    let mut records = 0usize;

    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| FetchError::Csv {
            app: app_name.to_string(),
            source,
        })?;
        records += 1;
        let line = record
            .position()
            .map_or(index as u64 + 1, |pos| pos.line());

        if record.len() != KPI_COLUMNS.len() {
            return Err(FetchError::ColumnCount {
                app: app_name.to_string(),
                line,
                expected: KPI_COLUMNS.len(),
                found: record.len(),
            });
        }

        let adj_date = match NaiveDate::parse_from_str(&record[0], DATE_FORMAT) {
            Ok(date) => date,
            Err(_) if index == 0 && is_header(&record) => {
                debug!("Skipping header line for {}: {:?}", app_name, record);
                continue;
            }
            Err(_) => {
                return Err(invalid(app_name, line, KPI_COLUMNS[0], &record[0]));
            }
        };

        rows.push(parse_row(app_name, line, adj_date, &record)?);
    }

    if records == 0 {
        return Err(FetchError::EmptyResponse {
            app: app_name.to_string(),
        });
    }
    if rows.is_empty() {
        warn!("Adjust returned no rows for {}", app_name);
    }

    Ok(ReportTable::new(rows))
}

fn is_header(record: &StringRecord) -> bool {
    !record[0].starts_with(|c: char| c.is_ascii_digit())
}

fn parse_row(
    app_name: &str,
    line: u64,
    adj_date: NaiveDate,
    record: &StringRecord,
) -> Result<ReportRow, FetchError> {
    let count = |i: usize| parse_count(app_name, line, KPI_COLUMNS[i], &record[i]);

    Ok(ReportRow::new(
        adj_date,
        &record[1],
        count(2)?,
        count(3)?,
        count(4)?,
        count(5)?,
        app_name,
    ))
}

/// Empty -> `None`. Accepts integral decimals such as `12.0`.
fn parse_count(
    app_name: &str,
    line: u64,
    column: &'static str,
    value: &str,
) -> Result<Option<u64>, FetchError> {
    if value.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = value.parse::<u64>() {
        return Ok(Some(n));
    }

    match value.parse::<f64>() {
        Ok(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => {
            Ok(Some(f as u64))
        }
        _ => Err(invalid(app_name, line, column, value)),
    }
}

fn invalid(app_name: &str, line: u64, column: &'static str, value: &str) -> FetchError {
    FetchError::InvalidValue {
        app: app_name.to_string(),
        line,
        column,
        value: value.to_string(),
    }
}
