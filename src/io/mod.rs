pub mod csv;

pub use csv::{CsvCoordConfig, CsvToCoords, OutputFormat, csv_to_coords_csv};
