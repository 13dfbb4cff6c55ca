//! Tabular reports
//!
//! Flattens a projection into one row per epoch so it can be exported as
//! CSV, JSON or NDJSON, or printed as a table by the CLI.

use serde_json::{Map, Value};
use std::fmt;

use crate::calculator::{EmissionsProjection, PresaleProjection};

/// Which projection a report is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Emissions,
    Presale,
}

impl ReportKind {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "emissions" => Some(ReportKind::Emissions),
            "presale" | "earnings" => Some(ReportKind::Presale),
            _ => None,
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportKind::Emissions => write!(f, "emissions"),
            ReportKind::Presale => write!(f, "presale"),
        }
    }
}

/// Output format of a report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
    Ndjson,
}

impl ReportFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Some(ReportFormat::Csv),
            "json" => Some(ReportFormat::Json),
            "ndjson" | "jsonl" => Some(ReportFormat::Ndjson),
            _ => None,
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "text/csv",
            ReportFormat::Json => "application/json",
            ReportFormat::Ndjson => "application/x-ndjson",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Csv => "csv",
            ReportFormat::Json => "json",
            ReportFormat::Ndjson => "ndjson",
        }
    }
}

/// One row per epoch, one column per series
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub kind: ReportKind,
    pub columns: Vec<&'static str>,
    pub rows: Vec<(u32, Vec<f64>)>,
}

impl Report {
    fn from_columns(kind: ReportKind, epochs: &[u32], series: Vec<(&'static str, &[f64])>) -> Self {
        let columns = series.iter().map(|(name, _)| *name).collect();
        let rows = epochs
            .iter()
            .enumerate()
            .map(|(i, epoch)| {
                let values = series.iter().map(|(_, values)| values[i]).collect();
                (*epoch, values)
            })
            .collect();

        Self {
            kind,
            columns,
            rows,
        }
    }

    pub fn from_emissions(projection: &EmissionsProjection) -> Self {
        Self::from_columns(
            ReportKind::Emissions,
            &projection.epochs,
            vec![
                ("emissions", projection.emissions.as_slice()),
                ("cumulative_emissions", projection.cumulative_emissions.as_slice()),
                ("adjusted_emissions", projection.adjusted_emissions.as_slice()),
            ],
        )
    }

    pub fn from_presale(projection: &PresaleProjection) -> Self {
        Self::from_columns(
            ReportKind::Presale,
            &projection.epochs,
            vec![
                ("weekly_earnings", projection.weekly_earnings.as_slice()),
                ("cumulative_earnings", projection.cumulative_earnings.as_slice()),
            ],
        )
    }

    /// Render in the requested format
    pub fn render(&self, format: ReportFormat) -> Result<String, ReportError> {
        match format {
            ReportFormat::Csv => self.to_csv(),
            ReportFormat::Json => Ok(serde_json::to_string_pretty(&self.records())?),
            ReportFormat::Ndjson => self.to_ndjson(),
        }
    }

    pub fn to_csv(&self) -> Result<String, ReportError> {
        let mut writer = csv::Writer::from_writer(Vec::new());

        let mut header = vec!["epoch"];
        header.extend(self.columns.iter().copied());
        writer.write_record(&header)?;

        for (epoch, values) in &self.rows {
            let mut record = vec![epoch.to_string()];
            record.extend(values.iter().map(|v| v.to_string()));
            writer.write_record(&record)?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| ReportError::Csv(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| ReportError::Csv(e.to_string()))
    }

    fn to_ndjson(&self) -> Result<String, ReportError> {
        let mut ndjson = String::new();
        for record in self.records() {
            ndjson.push_str(&serde_json::to_string(&record)?);
            ndjson.push('\n');
        }
        Ok(ndjson)
    }

    /// Rows as JSON objects keyed by column name
    pub fn records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|(epoch, values)| {
                let mut record = Map::new();
                record.insert("epoch".to_string(), Value::from(*epoch));
                for (column, value) in self.columns.iter().zip(values) {
                    record.insert(column.to_string(), Value::from(*value));
                }
                Value::Object(record)
            })
            .collect()
    }
}

/// Errors raised while rendering a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<csv::Error> for ReportError {
    fn from(err: csv::Error) -> Self {
        ReportError::Csv(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{EmissionScheduleParams, PresaleEarningsParams};

    fn presale_report(horizon: u32) -> Report {
        let schedule = EmissionScheduleParams::default().horizon(horizon);
        let projection =
            PresaleProjection::compute(&schedule, &PresaleEarningsParams::default()).unwrap();
        Report::from_presale(&projection)
    }

    #[test]
    fn test_parse_kind_and_format() {
        assert_eq!(ReportKind::parse("Emissions"), Some(ReportKind::Emissions));
        assert_eq!(ReportKind::parse("earnings"), Some(ReportKind::Presale));
        assert_eq!(ReportKind::parse("farming"), None);

        assert_eq!(ReportFormat::parse("CSV"), Some(ReportFormat::Csv));
        assert_eq!(ReportFormat::parse("ndjson"), Some(ReportFormat::Ndjson));
        assert_eq!(ReportFormat::parse("xml"), None);
    }

    #[test]
    fn test_rows_follow_epochs() {
        let report = presale_report(3);

        assert_eq!(report.columns, vec!["weekly_earnings", "cumulative_earnings"]);
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.rows[0].0, 1);
        assert_eq!(report.rows[2].0, 3);
    }

    #[test]
    fn test_csv_output() {
        let csv = presale_report(2).to_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "epoch,weekly_earnings,cumulative_earnings");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,888.405"));
    }

    #[test]
    fn test_ndjson_output() {
        let report = presale_report(4);
        let ndjson = report.render(ReportFormat::Ndjson).unwrap();

        assert_eq!(ndjson.lines().count(), 4);
        let first: Value = serde_json::from_str(ndjson.lines().next().unwrap()).unwrap();
        assert_eq!(first["epoch"], 1);
    }

    #[test]
    fn test_emissions_report() {
        let schedule = EmissionScheduleParams::default().horizon(5);
        let projection = EmissionsProjection::compute(&schedule, 0.17, 0.0).unwrap();
        let report = Report::from_emissions(&projection);

        let records = report.records();
        assert_eq!(records.len(), 5);
        assert_eq!(records[0]["emissions"], 1_980_000.0);
    }
}
