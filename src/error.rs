use thiserror::Error;

/// Content-detection failures of the image operations. None of these produce
/// partial output.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AssetError {
    #[error("No non-white content found to crop.")]
    NoContent,

    #[error("Could not detect white icon area.")]
    NoMarkRegion,

    #[error("Could not detect lockup content after background removal.")]
    NoLockupContent,
}
