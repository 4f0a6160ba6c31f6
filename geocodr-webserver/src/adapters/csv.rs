//! Reading address tables from and writing result tables to CSV.

use std::string::FromUtf8Error;

use csv::{ReaderBuilder, StringRecord, Writer};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::entities::AddressRow;

pub const ADDRESS_COLUMN: &str = "address";
pub const NAME_COLUMN: &str = "name";

pub type Record = Map<String, Value>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("CSV must contain '{0}' column")]
    MissingColumn(&'static str),
    #[error("Field '{0}' is missing in all records")]
    MissingField(String),
    #[error("Field '{0}' is not a scalar value")]
    NotScalar(String),
    #[error("Error reading CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Utf8(#[from] FromUtf8Error),
}

fn read_table(data: &[u8]) -> Result<(StringRecord, Vec<StringRecord>), Error> {
    let mut rdr = ReaderBuilder::new().from_reader(data);
    let headers = rdr.headers()?.clone();
    let rows = rdr.records().collect::<Result<Vec<_>, _>>()?;
    Ok((headers, rows))
}

/// Parses a CSV table into one mapping per row, keyed by the header names.
#[cfg(test)]
pub fn parse_records(data: &[u8]) -> Result<Vec<Record>, Error> {
    let (headers, rows) = read_table(data)?;
    let records = rows
        .iter()
        .map(|row| {
            headers
                .iter()
                .zip(row.iter())
                .map(|(key, value)| (key.to_string(), Value::String(value.to_string())))
                .collect()
        })
        .collect();
    Ok(records)
}

/// Parses an uploaded address table.
///
/// The table needs an `address` column, a `name` column is optional.
/// Rows with an empty address are kept; it's up to the caller to skip them.
pub fn parse_address_rows(data: &[u8]) -> Result<Vec<AddressRow>, Error> {
    let (headers, rows) = read_table(data)?;
    let position = |column| headers.iter().position(|h| h == column);
    let address_idx = position(ADDRESS_COLUMN).ok_or(Error::MissingColumn(ADDRESS_COLUMN))?;
    let name_idx = position(NAME_COLUMN);
    let address_rows = rows
        .iter()
        .map(|row| AddressRow {
            name: name_idx
                .and_then(|idx| row.get(idx))
                .filter(|name| !name.is_empty())
                .map(ToString::to_string),
            address: row.get(address_idx).unwrap_or_default().to_string(),
        })
        .collect();
    Ok(address_rows)
}

/// Writes `records` projected onto `fields` (in that order) as a CSV table.
///
/// A field that is missing in only some records ends up as an empty cell.
pub fn serialize_records(records: &[Record], fields: &[&str]) -> Result<String, Error> {
    if let Some(missing) = fields
        .iter()
        .find(|field| !records.iter().any(|r| r.contains_key(**field)))
    {
        return Err(Error::MissingField(missing.to_string()));
    }
    let mut wtr = Writer::from_writer(vec![]);
    wtr.write_record(fields)?;
    for record in records {
        let row = fields
            .iter()
            .map(|field| scalar_to_string(field, record.get(*field)))
            .collect::<Result<Vec<_>, _>>()?;
        wtr.write_record(&row)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    let data = wtr
        .into_inner()
        .map_err(|err| csv::Error::from(err.into_error()))?;
    Ok(String::from_utf8(data)?)
}

fn scalar_to_string(field: &str, value: Option<&Value>) -> Result<String, Error> {
    let s = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Array(_) | Value::Object(_)) => {
            return Err(Error::NotScalar(field.to_string()));
        }
    };
    Ok(s)
}
