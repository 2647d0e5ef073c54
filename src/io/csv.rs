use crate::coord::AxisOrder;
use crate::detect::{ParsedCoordinate, parse_coordinate};
use crate::error::CoordError;
use crate::grid::{Mgrs, Utm};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;
use tracing::{debug, warn};

/// What each parsed coordinate is written out as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `latitude` and `longitude` columns in decimal degrees.
    #[default]
    LatLon,
    /// A single `mgrs` column at the given precision (0–5 digits).
    Mgrs { precision: u8 },
    /// A single `utm` column.
    Utm,
}

impl OutputFormat {
    fn headers(&self) -> &'static [&'static str] {
        match self {
            OutputFormat::LatLon => &["latitude", "longitude"],
            OutputFormat::Mgrs { .. } => &["mgrs"],
            OutputFormat::Utm => &["utm"],
        }
    }

    fn render(&self, parsed: &ParsedCoordinate) -> Result<Vec<String>, CoordError> {
        match (self, parsed) {
            (OutputFormat::Mgrs { precision }, ParsedCoordinate::Mgrs(mgrs)) => {
                Ok(vec![mgrs.to_utm(None)?.to_mgrs(*precision)?.to_string()])
            }
            (OutputFormat::Utm, ParsedCoordinate::Utm(utm)) => Ok(vec![utm.to_string()]),
            (OutputFormat::Utm, ParsedCoordinate::Mgrs(mgrs)) => {
                Ok(vec![mgrs.to_utm(None)?.to_string()])
            }
            (OutputFormat::Mgrs { precision }, ParsedCoordinate::Utm(utm)) => {
                Ok(vec![utm.to_mgrs(*precision)?.to_string()])
            }
            (OutputFormat::LatLon, _) => {
                let point = parsed.to_point()?;
                Ok(vec![format!("{:.6}", point.y()), format!("{:.6}", point.x())])
            }
            (OutputFormat::Mgrs { precision }, ParsedCoordinate::LatLon(point)) => {
                Ok(vec![Mgrs::from_lat_lon(point, *precision)?.to_string()])
            }
            (OutputFormat::Utm, ParsedCoordinate::LatLon(point)) => {
                Ok(vec![Utm::from_lat_lon(point)?.to_string()])
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct CsvCoordConfig {
    pub column: String,
    pub exclude_columns: Vec<String>,
    pub order: Option<AxisOrder>,
    pub output: OutputFormat,
}

impl CsvCoordConfig {
    /// Create config for a CSV with a free-text coordinate column.
    ///
    /// # Example
    /// ```
    /// use geocoord_rs::{AxisOrder, CsvCoordConfig, OutputFormat};
    ///
    /// let config = CsvCoordConfig::new("position")
    ///     .order(AxisOrder::LonLat)
    ///     .output(OutputFormat::Mgrs { precision: 5 });
    /// ```
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            exclude_columns: Vec::new(),
            order: None,
            output: OutputFormat::default(),
        }
    }

    pub fn exclude(mut self, columns: Vec<String>) -> Self {
        self.exclude_columns = columns;
        self
    }

    /// Axis order assumed for lat/lon text without compass letters.
    pub fn order(mut self, order: AxisOrder) -> Self {
        self.order = Some(order);
        self
    }

    pub fn output(mut self, output: OutputFormat) -> Self {
        self.output = output;
        self
    }
}

pub trait CsvToCoords {
    fn to_coords_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvCoordConfig,
    ) -> Result<usize, CoordError>;
}

impl<P: AsRef<Path>> CsvToCoords for P {
    fn to_coords_csv(
        &self,
        output_path: impl AsRef<Path>,
        config: &CsvCoordConfig,
    ) -> Result<usize, CoordError> {
        csv_to_coords_csv(self, output_path, config)
    }
}

/// Converts a CSV file with a free-text coordinate column into a CSV file
/// with normalized coordinate columns.
///
/// Each value is auto-detected as lat/lon, MGRS or UTM. The output starts
/// with the columns of [`OutputFormat`], then an `error` column, then the
/// remaining input columns. Rows that fail to parse keep empty coordinate
/// columns and carry the message in `error`. Returns the number of rows that
/// failed.
///
/// # Example
///
/// ```no_run
/// use geocoord_rs::{csv_to_coords_csv, CsvCoordConfig, OutputFormat};
///
/// # fn main() -> Result<(), geocoord_rs::CoordError> {
/// let config = CsvCoordConfig::new("Location")
///     .exclude(vec!["Notes".into()])
///     .output(OutputFormat::Utm);
///
/// let failed = csv_to_coords_csv("sightings.csv", "output.csv", &config)?;
/// println!("{} rows could not be parsed", failed);
/// # Ok(())
/// # }
/// ```
pub fn csv_to_coords_csv(
    csv_path: impl AsRef<Path>,
    output_path: impl AsRef<Path>,
    config: &CsvCoordConfig,
) -> Result<usize, CoordError> {
    if config.column.is_empty() {
        return Err(CoordError::CsvError(
            "Coordinate column name cannot be empty".to_string(),
        ));
    }

    let file = File::open(csv_path).map_err(|e| CoordError::IoError(e.to_string()))?;
    let mut reader = csv::Reader::from_reader(file);

    let headers = reader
        .headers()
        .map_err(|e| CoordError::CsvError(e.to_string()))?
        .clone();

    let source_idx = headers
        .iter()
        .position(|h| h == config.column)
        .ok_or_else(|| {
            CoordError::CsvError(format!("Coordinate column '{}' not found", config.column))
        })?;

    let mut exclude_indices = HashSet::new();
    exclude_indices.insert(source_idx);
    for col_name in &config.exclude_columns {
        if let Some(idx) = headers.iter().position(|h| h == col_name) {
            exclude_indices.insert(idx);
        }
    }

    let records = reader
        .records()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CoordError::CsvError(e.to_string()))?;
    debug!(rows = records.len(), column = %config.column, "converting coordinates");

    let converted: Vec<Result<Vec<String>, CoordError>> = records
        .par_iter()
        .map(|record| {
            let text = record.get(source_idx).unwrap_or_default().trim();
            parse_coordinate(text, config.order).and_then(|parsed| config.output.render(&parsed))
        })
        .collect();

    let out_file = File::create(output_path).map_err(|e| CoordError::IoError(e.to_string()))?;
    let mut writer = csv::Writer::from_writer(out_file);

    let output_headers = config.output.headers();
    let mut header_row: Vec<&str> = output_headers.to_vec();
    header_row.push("error");
    for (i, h) in headers.iter().enumerate() {
        if !exclude_indices.contains(&i) {
            header_row.push(h);
        }
    }
    writer
        .write_record(&header_row)
        .map_err(|e| CoordError::CsvError(e.to_string()))?;

    let mut failed = 0;
    for (line, (record, result)) in records.iter().zip(converted).enumerate() {
        let mut row = match result {
            Ok(mut values) => {
                values.push(String::new());
                values
            }
            Err(e) => {
                failed += 1;
                warn!(
                    row = line + 1,
                    value = record.get(source_idx).unwrap_or_default(),
                    error = %e,
                    "skipping unparseable coordinate"
                );
                let mut values = vec![String::new(); output_headers.len()];
                values.push(e.to_string());
                values
            }
        };

        for (i, field) in record.iter().enumerate() {
            if !exclude_indices.contains(&i) {
                row.push(field.to_string());
            }
        }
        writer
            .write_record(&row)
            .map_err(|e| CoordError::CsvError(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| CoordError::IoError(e.to_string()))?;

    Ok(failed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_input(path: &Path, lines: &[&str]) -> Result<(), CoordError> {
        let mut file = File::create(path).map_err(|e| CoordError::IoError(e.to_string()))?;
        for line in lines {
            writeln!(file, "{}", line).map_err(|e| CoordError::IoError(e.to_string()))?;
        }
        Ok(())
    }

    #[test]
    fn test_csv_to_lat_lon() -> Result<(), CoordError> {
        let dir = tempdir().map_err(|e| CoordError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "ID,Location,Notes",
                "1,\"40° 26' 46\"\" N, 79° 58' 56\"\" W\",Pittsburgh",
                "2,31U DQ 48252 11932,Paris",
                "3,56H 334900 6252288,Sydney",
            ],
        )?;

        let config = CsvCoordConfig::new("Location");
        let failed = csv_to_coords_csv(&csv_path, &output_path, &config)?;
        assert_eq!(failed, 0);

        let output =
            std::fs::read_to_string(&output_path).map_err(|e| CoordError::IoError(e.to_string()))?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "latitude,longitude,error,ID,Notes");
        assert!(lines[1].starts_with("40.446111,-79.982222,,1,"));
        assert!(lines[2].contains(",,2,Paris"));
        assert!(lines[3].starts_with("-33."));
        assert!(!output.contains("Location"));
        Ok(())
    }

    #[test]
    fn test_csv_to_mgrs_with_errors() -> Result<(), CoordError> {
        let dir = tempdir().map_err(|e| CoordError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(
            &csv_path,
            &[
                "Name,Location",
                "Paris,31U 448252 5411932",
                "Broken,not a place",
                "Compact,31udq4825211932",
            ],
        )?;

        let config = CsvCoordConfig::new("Location").output(OutputFormat::Mgrs { precision: 5 });
        let failed = csv_path.to_coords_csv(&output_path, &config)?;
        assert_eq!(failed, 1);

        let output =
            std::fs::read_to_string(&output_path).map_err(|e| CoordError::IoError(e.to_string()))?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "mgrs,error,Name");
        assert_eq!(lines[1], "31U DQ 48252 11932,,Paris");
        assert!(lines[2].starts_with(",Invalid character"));
        assert!(lines[2].ends_with(",Broken"));
        assert_eq!(lines[3], "31U DQ 48252 11932,,Compact");
        Ok(())
    }

    #[test]
    fn test_csv_to_utm_with_lon_lat_order() -> Result<(), CoordError> {
        let dir = tempdir().map_err(|e| CoordError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");

        write_input(&csv_path, &["Location,Extra", "\"2.2945, 48.85825\",x"])?;

        let config = CsvCoordConfig::new("Location")
            .order(AxisOrder::LonLat)
            .exclude(vec!["Extra".into()])
            .output(OutputFormat::Utm);
        csv_to_coords_csv(&csv_path, &output_path, &config)?;

        let output =
            std::fs::read_to_string(&output_path).map_err(|e| CoordError::IoError(e.to_string()))?;
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "utm,error");
        assert!(lines[1].starts_with("31U 44825"));
        Ok(())
    }

    #[test]
    fn test_missing_column() -> Result<(), CoordError> {
        let dir = tempdir().map_err(|e| CoordError::IoError(e.to_string()))?;
        let csv_path = dir.path().join("test.csv");
        let output_path = dir.path().join("output.csv");
        write_input(&csv_path, &["A,B", "1,2"])?;

        let result = csv_to_coords_csv(&csv_path, &output_path, &CsvCoordConfig::new("Location"));
        assert_eq!(
            result,
            Err(CoordError::CsvError(
                "Coordinate column 'Location' not found".to_string()
            ))
        );

        let result = csv_to_coords_csv(&csv_path, &output_path, &CsvCoordConfig::new(""));
        assert!(matches!(result, Err(CoordError::CsvError(_))));
        Ok(())
    }
}
