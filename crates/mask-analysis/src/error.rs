use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    /// The selected region has zero enclosed area (a single point or a
    /// collinear boundary), so its centroid is undefined.
    #[error("selected region is degenerate: zero enclosed area")]
    DegenerateRegion,

    #[error("region extraction failed: {0}")]
    Extraction(String),

    #[error("mask preprocessing failed: {0}")]
    Preprocessing(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
