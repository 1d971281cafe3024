//! Avatar images embedded as `data:` URLs

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("failed to read image {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Read an image file and encode it as `data:<mime>;base64,<payload>`
pub async fn read_data_url(path: &Path) -> Result<String, ImageError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    tracing::debug!(path = %path.display(), mime = %mime_type, size = bytes.len(), "encoded image");

    Ok(encode_data_url(mime_type.essence_str(), &bytes))
}

/// Read the optional image; no file means no image
pub async fn read_optional(path: Option<&Path>) -> Result<Option<String>, ImageError> {
    match path {
        Some(path) => read_data_url(path).await.map(Some),
        None => Ok(None),
    }
}

pub fn encode_data_url(mime_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes))
}

/// MIME type declared by a `data:` URL, if it is one
pub fn data_url_mime(data_url: &str) -> Option<&str> {
    let rest = data_url.strip_prefix("data:")?;
    let end = rest.find([';', ','])?;
    Some(&rest[..end])
}
