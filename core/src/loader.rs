//! Series loader: reads the revenue table into absolute and relative maps.
//!
//! Table layout: one row per customer, column 0 is the identifier and every
//! further column is one period of revenue. Rows may be ragged.

use crate::{
    config::AnalysisConfig,
    error::{AnalysisError, AnalysisResult},
    series::{coerce_row, relative_series},
    types::CustomerSeriesMap,
};
use csv::ReaderBuilder;
use std::{fs::File, io::Read};

/// The two framings of one loaded table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedSeries {
    pub absolute: CustomerSeriesMap,
    pub relative: CustomerSeriesMap,
}

impl LoadedSeries {
    pub fn customer_count(&self) -> usize {
        self.absolute.len()
    }
}

/// Open `path` and load it. The file handle is dropped before returning.
pub fn load_series_from_path(path: &str, config: &AnalysisConfig) -> AnalysisResult<LoadedSeries> {
    let file = File::open(path).map_err(|source| AnalysisError::Io {
        path: path.to_string(),
        source,
    })?;
    log::info!("Reading revenue table from {path}");
    load_series_from_reader(file, config)
}

pub fn load_series_from_reader<R: Read>(
    reader: R,
    config: &AnalysisConfig,
) -> AnalysisResult<LoadedSeries> {
    let mut table = ReaderBuilder::new()
        .has_headers(config.has_headers)
        .delimiter(config.delimiter_byte()?)
        .flexible(true)
        .from_reader(reader);

    let mut loaded = LoadedSeries::default();

    // Byte records: an undecodable revenue cell is malformed data, not a broken file.
    for record in table.byte_records() {
        let record = record?;
        let Some(raw_customer) = record.get(0) else {
            continue;
        };
        let customer = String::from_utf8_lossy(raw_customer);
        let absolute = coerce_row(record.iter().skip(1));
        if absolute.is_empty() {
            log::warn!("Customer '{customer}' has no revenue columns");
        }
        let relative = relative_series(&absolute);
        log::debug!(
            "Customer '{customer}': {} periods, {} since first revenue",
            absolute.len(),
            relative.len()
        );

        // Last row wins on duplicate identifiers.
        if loaded.absolute.insert(customer.to_string(), absolute).is_some() {
            log::warn!("Duplicate customer '{customer}'; keeping the later row");
        }
        loaded.relative.insert(customer.to_string(), relative);
    }

    log::info!("Loaded {} customers", loaded.customer_count());
    Ok(loaded)
}
