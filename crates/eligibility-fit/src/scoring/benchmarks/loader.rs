use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::info;

use super::{insert_normalized, BenchmarkTables, SalaryBand, DEFAULT_SECTOR_LABEL};
use crate::scoring::normalizer::normalize_text;

/// Failure while importing benchmark tables at startup.
#[derive(Debug, thiserror::Error)]
pub enum BenchmarkError {
    #[error("failed to read benchmark export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid benchmark CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("benchmark row {line} rejected: {reason}")]
    InvalidRow { line: usize, reason: String },
}

#[derive(Debug, Deserialize)]
struct BenchmarkRow {
    #[serde(rename = "Table")]
    table: String,
    #[serde(rename = "Value")]
    value: String,
    #[serde(
        rename = "Early Career",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    early_career: Option<String>,
    #[serde(
        rename = "Experienced",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    experienced: Option<String>,
}

impl BenchmarkTables {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, BenchmarkError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Replaces the built-in tables with a CSV export; the default band survives unless overridden.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BenchmarkError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);
        let mut tables = BenchmarkTables::new(BenchmarkTables::builtin().default_band());

        for (index, record) in csv_reader.deserialize::<BenchmarkRow>().enumerate() {
            let row = record?;
            // header occupies line 1
            let line = index + 2;
            let value = normalize_text(&row.value);
            if value.is_empty() {
                return Err(invalid(line, "value column is empty"));
            }

            match normalize_text(&row.table).as_str() {
                "sector" => {
                    let band = SalaryBand::new(
                        parse_amount(line, "Early Career", row.early_career.as_deref())?,
                        parse_amount(line, "Experienced", row.experienced.as_deref())?,
                    );
                    if value == DEFAULT_SECTOR_LABEL {
                        tables.set_default_band(band);
                    } else {
                        tables.push_sector(&value, band);
                    }
                }
                "institution" => insert_normalized(&mut tables.institutions, &value),
                "certification" => insert_normalized(&mut tables.certifications, &value),
                "shortage" => insert_normalized(&mut tables.shortage_occupations, &value),
                other => {
                    return Err(invalid(line, &format!("unknown table '{other}'")));
                }
            }
        }

        info!(
            sectors = tables.sectors.len(),
            institutions = tables.institutions.len(),
            certifications = tables.certifications.len(),
            shortage_occupations = tables.shortage_occupations.len(),
            "benchmark tables imported"
        );

        Ok(tables)
    }
}

fn parse_amount(line: usize, column: &str, raw: Option<&str>) -> Result<f64, BenchmarkError> {
    let raw = raw.ok_or_else(|| invalid(line, &format!("{column} is required for sectors")))?;
    match raw.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount > 0.0 => Ok(amount),
        _ => Err(invalid(
            line,
            &format!("{column} must be a positive amount (found '{raw}')"),
        )),
    }
}

fn invalid(line: usize, reason: &str) -> BenchmarkError {
    BenchmarkError::InvalidRow {
        line,
        reason: reason.to_string(),
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
