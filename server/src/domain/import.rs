//! CSV import of the electric car dataset
//!
//! Expected column order (header row is skipped):
//! Brand, Model, AccelSec, TopSpeed_KmH, Range_Km, Efficiency_WhKm,
//! FastCharge_KmH, RapidCharge, PowerTrain, PlugType, BodyStyle, Segment,
//! Seats, PriceEuro, Date

use std::io::Read;
use std::path::Path;
use std::time::Instant;

use thiserror::Error;

use crate::data::error::DataError;
use crate::data::traits::CarRepository;
use crate::data::types::NewCar;
use crate::utils::number::{leading_float, leading_int};

/// Number of fields a data row must have
pub const CSV_FIELD_COUNT: usize = 15;

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Data(#[from] DataError),
}

/// What happens to existing rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ImportMode {
    /// Swap the table contents in one step
    #[default]
    Replace,
    /// Keep existing rows
    Append,
}

/// Outcome of an import run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Rows removed before inserting (replace mode)
    pub cleared: u64,
    pub imported: u64,
    /// Data rows skipped for having too few fields
    pub skipped: u64,
}

/// Parse CSV content into insertable cars
///
/// Returns the cars and the number of skipped rows.
pub fn parse_cars<R: Read>(reader: R) -> Result<(Vec<NewCar>, u64), csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut cars = Vec::new();
    let mut skipped = 0;

    for result in rdr.records() {
        let record = result?;
        if record.len() < CSV_FIELD_COUNT {
            let line = record.position().map(|p| p.line()).unwrap_or_default();
            tracing::warn!(line, fields = record.len(), "Skipping row: insufficient columns");
            skipped += 1;
            continue;
        }

        let text = |i: usize| Some(record[i].trim().to_string());
        let int = |i: usize| leading_int(&record[i]);

        cars.push(NewCar {
            brand: text(0),
            model: text(1),
            accel_sec: leading_float(&record[2]),
            top_speed_kmh: int(3),
            range_km: int(4),
            efficiency_whkm: int(5),
            fast_charge_kmh: match record[6].trim() {
                "-" => None,
                raw => leading_int(raw),
            },
            rapid_charge: text(7),
            power_train: text(8),
            plug_type: text(9),
            body_style: text(10),
            segment: text(11),
            seats: int(12),
            price_euro: int(13),
            date: text(14),
        });
    }

    Ok((cars, skipped))
}

/// Import a CSV file into the repository
pub async fn import_csv(
    path: &Path,
    repo: &dyn CarRepository,
    mode: ImportMode,
) -> Result<ImportReport, ImportError> {
    let start = Instant::now();
    let content = tokio::fs::read(path).await.map_err(|source| ImportError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let (cars, skipped) = parse_cars(content.as_slice())?;
    tracing::debug!(path = %path.display(), parsed = cars.len(), skipped, "Parsed CSV");

    let (cleared, imported) = match mode {
        ImportMode::Replace => repo.replace_cars(&cars).await?,
        ImportMode::Append => (0, repo.insert_cars(&cars).await?),
    };

    tracing::info!(
        path = %path.display(),
        imported,
        skipped,
        cleared,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "CSV import complete"
    );

    Ok(ImportReport {
        cleared,
        imported,
        skipped,
    })
}
