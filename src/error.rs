use std::io;
use std::path::PathBuf;

/// Everything that can stop a render before any output is written.
///
/// Numerical corner cases (parallel rays, misses, zero attenuation) are not
/// errors; they resolve to "no hit" or "no falloff" where they occur.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed scene description: {0}")]
    Json(#[from] serde_json::Error),

    #[error("scene description contains no records")]
    EmptyScene,

    #[error("scene description has no camera")]
    MissingCamera,

    #[error("record {record}: a scene may only contain one camera")]
    DuplicateCamera { record: usize },

    #[error("record {record} ({kind}): field '{field}' {reason}")]
    InvalidField {
        record: usize,
        kind: &'static str,
        field: &'static str,
        reason: String,
    },

    #[error("image dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("invalid color '{0}', expected three comma-separated numbers")]
    InvalidColor(String),

    #[error("unknown image format '{0}', expected 'p3' or 'p6'")]
    InvalidFormat(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Error {
        Error::Io { path: path.into(), source }
    }
}

#[test]
fn invalid_field_names_record_and_field() {
    let e = Error::InvalidField {
        record: 3,
        kind: "sphere",
        field: "radius",
        reason: "must be positive, got -1".into(),
    };

    assert_eq!(
        e.to_string(),
        "record 3 (sphere): field 'radius' must be positive, got -1"
    );
}
