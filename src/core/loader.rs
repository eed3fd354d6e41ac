//! Reads the holdings and market price tables from CSV files.

use crate::core::holding::{Holding, MarketPrice, Snapshot};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

pub const HOLDING_COLUMNS: &[&str] = &[
    "asset_name",
    "asset_class",
    "risk_category",
    "units",
    "investment_amount",
];

pub const PRICE_COLUMNS: &[&str] = &["asset_name", "current_price"];

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Source file not found: {}", .path.display())]
    MissingSource { path: PathBuf },

    #[error("{}: missing required column '{column}'", .path.display())]
    Schema { path: PathBuf, column: String },

    #[error("{}: line {line}: invalid {column} '{value}': {reason}", .path.display())]
    Parse {
        path: PathBuf,
        line: u64,
        column: String,
        value: String,
        reason: &'static str,
    },

    #[error("{}: line {line}: duplicate price for asset '{asset_name}'", .path.display())]
    DuplicatePrice {
        path: PathBuf,
        line: u64,
        asset_name: String,
    },

    #[error("{}: malformed CSV: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// One data row, with values ordered like the requested columns.
struct Row {
    line: u64,
    columns: &'static [&'static str],
    values: Vec<String>,
}

impl Row {
    fn text(&self, idx: usize) -> String {
        self.values[idx].clone()
    }

    fn amount(&self, idx: usize, path: &Path) -> Result<f64, LoadError> {
        let raw = &self.values[idx];
        let invalid = |reason| LoadError::Parse {
            path: path.to_path_buf(),
            line: self.line,
            column: self.columns[idx].to_string(),
            value: raw.clone(),
            reason,
        };

        let value = raw.parse::<f64>().map_err(|_| invalid("not a number"))?;
        if !value.is_finite() {
            return Err(invalid("not a finite number"));
        }
        if value < 0.0 {
            return Err(invalid("must not be negative"));
        }
        Ok(value)
    }
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::MissingSource {
            path: path.to_path_buf(),
        },
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

fn read_rows<R: Read>(
    input: R,
    path: &Path,
    columns: &'static [&'static str],
) -> Result<Vec<Row>, LoadError> {
    let csv_err = |source| LoadError::Csv {
        path: path.to_path_buf(),
        source,
    };

    let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(input);
    let headers = reader.headers().map_err(csv_err)?.clone();

    let indices = columns
        .iter()
        .map(|column| {
            headers
                .iter()
                .position(|h| h == *column)
                .ok_or_else(|| LoadError::Schema {
                    path: path.to_path_buf(),
                    column: column.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record: StringRecord = record.map_err(csv_err)?;
        let line = record.position().map_or(0, |p| p.line());
        let values = indices
            .iter()
            .map(|&i| record.get(i).unwrap_or_default().to_string())
            .collect();
        rows.push(Row {
            line,
            columns,
            values,
        });
    }
    Ok(rows)
}

/// Parses a holdings table. `path` is only used to label errors.
pub fn parse_holdings<R: Read>(input: R, path: &Path) -> Result<Vec<Holding>, LoadError> {
    read_rows(input, path, HOLDING_COLUMNS)?
        .into_iter()
        .map(|row| {
            Ok(Holding {
                asset_name: row.text(0),
                asset_class: row.text(1),
                risk_category: row.text(2),
                units: row.amount(3, path)?,
                investment_amount: row.amount(4, path)?,
            })
        })
        .collect()
}

/// Parses a price table, rejecting repeated asset names.
pub fn parse_prices<R: Read>(input: R, path: &Path) -> Result<Vec<MarketPrice>, LoadError> {
    let mut seen: HashMap<String, u64> = HashMap::new();
    let mut prices = Vec::new();

    for row in read_rows(input, path, PRICE_COLUMNS)? {
        let asset_name = row.text(0);
        if seen.insert(asset_name.clone(), row.line).is_some() {
            return Err(LoadError::DuplicatePrice {
                path: path.to_path_buf(),
                line: row.line,
                asset_name,
            });
        }
        prices.push(MarketPrice {
            current_price: row.amount(1, path)?,
            asset_name,
        });
    }
    Ok(prices)
}

pub fn load_holdings(path: &Path) -> Result<Vec<Holding>, LoadError> {
    let holdings = parse_holdings(open(path)?, path)?;
    debug!("Loaded {} holdings from {}", holdings.len(), path.display());
    Ok(holdings)
}

pub fn load_prices(path: &Path) -> Result<Vec<MarketPrice>, LoadError> {
    let prices = parse_prices(open(path)?, path)?;
    debug!("Loaded {} prices from {}", prices.len(), path.display());
    Ok(prices)
}

/// Loads both tables. Either failing aborts the whole snapshot.
pub fn load_snapshot(portfolio_path: &Path, prices_path: &Path) -> Result<Snapshot, LoadError> {
    Ok(Snapshot {
        holdings: load_holdings(portfolio_path)?,
        prices: load_prices(prices_path)?,
    })
}
