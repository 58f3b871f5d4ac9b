use std::io;
use std::path::PathBuf;

/// Failures building a grid. All are detected at construction time;
/// once a grid exists ticking cannot fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("a {rows}x{cols} grid has more cells than fit in memory")]
    TooLarge { rows: usize, cols: usize },
    #[error("initial buffer has {actual} cells, grid needs {expected}")]
    SizeMismatch { expected: usize, actual: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error("failed to read pattern file {}", path.display())]
    PatternFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),
    #[error("terminal i/o failed")]
    Io(#[from] io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
