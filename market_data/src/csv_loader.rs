//! Offline price-series loading from CSV files

use crate::error::{MarketDataError, Result};
use crate::series::{PricePoint, PriceSeries};
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CsvRow {
    date: NaiveDate,
    close: f64,
}

/// Loader for `date,close` CSV files
#[derive(Debug)]
pub struct DataLoader;

impl DataLoader {
    /// Load a price series from a CSV file with `date,close` headers
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load a price series from any CSV reader
    pub fn from_reader<R: Read>(reader: R) -> Result<PriceSeries> {
        let mut rdr = csv::Reader::from_reader(reader);

        let mut points = Vec::new();
        for row in rdr.deserialize::<CsvRow>() {
            let row = row?;
            points.push(PricePoint {
                date: row.date,
                close: row.close,
            });
        }

        if points.is_empty() {
            return Err(MarketDataError::DataError(
                "CSV file contains no price rows".to_string(),
            ));
        }

        PriceSeries::new(points)
    }
}
