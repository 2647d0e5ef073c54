/// Error type for geocoord-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// Coordinate text could not be parsed into a lat/lon pair.
    Parse(String),
    /// One or more validation rules failed. Every failing message is kept.
    Validation(Vec<String>),
    /// A numeric argument was out of its allowed range (e.g. `min > max`).
    Range(String),
    /// The projection library failed to build or apply a transform.
    ProjectionError(String),
    /// A hex color string could not be decoded.
    InvalidColor(String),
    /// File I/O error.
    IoError(String),
    /// CSV parsing or writing error.
    CsvError(String),
}

impl CoordError {
    /// Builds a validation error carrying a single message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        CoordError::Validation(vec![msg.into()])
    }

    /// Returns the human-readable messages carried by this error.
    pub fn messages(&self) -> Vec<String> {
        match self {
            CoordError::Validation(msgs) => msgs.clone(),
            other => vec![other.to_string()],
        }
    }

    /// Merges two errors into one validation error, keeping every message.
    pub fn merge(self, other: CoordError) -> Self {
        let mut msgs = self.messages();
        msgs.extend(other.messages());
        CoordError::Validation(msgs)
    }
}

impl std::fmt::Display for CoordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordError::Parse(msg) => write!(f, "{}", msg),
            CoordError::Validation(msgs) => write!(f, "{}", msgs.join("; ")),
            CoordError::Range(msg) => write!(f, "{}", msg),
            CoordError::ProjectionError(msg) => write!(f, "Projection error: {}", msg),
            CoordError::InvalidColor(msg) => write!(f, "Invalid color: {}", msg),
            CoordError::IoError(msg) => write!(f, "IO error: {}", msg),
            CoordError::CsvError(msg) => write!(f, "CSV error: {}", msg),
        }
    }
}

impl std::error::Error for CoordError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_joins_messages() {
        let err = CoordError::Validation(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "first; second");
    }

    #[test]
    fn test_merge_keeps_all_messages() {
        let merged = CoordError::invalid("a").merge(CoordError::Parse("b".into()));
        assert_eq!(merged, CoordError::Validation(vec!["a".into(), "b".into()]));
    }
}
