pub mod cli;
pub mod converter;
pub mod jams;
pub mod svl;
pub mod utils;

/// Problems with the content of an otherwise well-formed SVL document.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DataError {
    #[error("no <model> element found")]
    MissingModel,
    #[error("<model> element has no sampleRate attribute")]
    MissingSampleRate,
    #[error("invalid sample rate: {0}")]
    InvalidSampleRate(String),
    #[error("no <point> elements found")]
    EmptyPoints,
    #[error("point {index} has no {attribute} attribute")]
    MissingAttribute { index: usize, attribute: &'static str },
    #[error("point {index} has an invalid frame: {value}")]
    InvalidFrame { index: usize, value: String },
}

#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Precondition failed: {0}")]
    Precondition(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed SVL document: {0}")]
    Parse(String),
    #[error("Failed to load JAMS container: {0}")]
    Load(String),
    #[error("Invalid SVL data: {0}")]
    Data(#[from] DataError),
    #[error("Failed to save JAMS container: {0}")]
    Save(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

// Re-exports for convenience
pub use converter::pipeline::{convert, ConvertOutcome, Converter};
pub use jams::container::{Annotation, AnnotationMetadata, Datapoint, Jams};
pub use jams::store::{ContainerStore, JamsFile};
pub use svl::document::{Point, SvlDocument};
