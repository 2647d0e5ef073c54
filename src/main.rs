use geocoord_rs::{
    CoordError, CoordinateFormat, CoordinateKind, Mgrs, Utm, format_lat_lon, parse_coordinate,
};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Serialize)]
struct Report {
    input: String,
    kind: Option<&'static str>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    dms: Option<String>,
    mgrs: Option<Mgrs>,
    utm: Option<Utm>,
    error: Option<String>,
}

impl Report {
    fn failed(input: &str, error: &CoordError) -> Self {
        Self {
            input: input.to_string(),
            kind: None,
            latitude: None,
            longitude: None,
            dms: None,
            mgrs: None,
            utm: None,
            error: Some(error.to_string()),
        }
    }
}

fn describe(input: &str) -> Result<Report, CoordError> {
    let parsed = parse_coordinate(input, None)?;
    let point = parsed.to_point()?;

    let kind = match parsed.kind() {
        CoordinateKind::LatLon => "latlon",
        CoordinateKind::Mgrs => "mgrs",
        CoordinateKind::Utm => "utm",
    };

    // Grid output is optional: lat/lon input beyond the UTM limits is still valid.
    let utm = Utm::from_lat_lon(&point).ok();
    let mgrs = utm.as_ref().and_then(|u| u.to_mgrs(5).ok());

    Ok(Report {
        input: input.to_string(),
        kind: Some(kind),
        latitude: Some(point.y()),
        longitude: Some(point.x()),
        dms: Some(format_lat_lon(&point, CoordinateFormat::Dms)),
        mgrs,
        utm,
        error: None,
    })
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("usage: geocoord <coordinate> [<coordinate> ...]");
        std::process::exit(2);
    }

    let reports: Vec<Report> = inputs
        .iter()
        .map(|input| describe(input).unwrap_or_else(|e| Report::failed(input, &e)))
        .collect();

    println!("{}", serde_json::to_string_pretty(&reports)?);
    Ok(())
}
