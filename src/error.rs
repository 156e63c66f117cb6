use thiserror::Error;

/// Errors raised while resolving startup configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("PIXABAY_API_KEY is not set; export it before launching")]
    MissingApiKey,
}

/// Errors from background network requests (search or image download)
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),
}

/// Errors from writing an export file to disk
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}
