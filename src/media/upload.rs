//! Reading upload files into data URLs

use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use log::info;
use std::path::Path;

use super::{MediaKind, UploadedMedia};
use crate::error::MediaError;

const IMAGE_TYPES: [(&str, &str); 9] = [
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("svg", "image/svg+xml"),
    ("bmp", "image/bmp"),
    ("ico", "image/x-icon"),
    ("avif", "image/avif"),
];

const VIDEO_TYPES: [(&str, &str); 6] = [
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("webm", "video/webm"),
    ("ogg", "video/ogg"),
    ("ogv", "video/ogg"),
    ("mov", "video/quicktime"),
];

/// Media kind and MIME type from the file extension
pub fn classify(path: &Path) -> Option<(MediaKind, &'static str)> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    let lookup = |table: &[(&str, &'static str)]| {
        table
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, mime)| *mime)
    };

    lookup(&IMAGE_TYPES[..])
        .map(|mime| (MediaKind::Image, mime))
        .or_else(|| lookup(&VIDEO_TYPES[..]).map(|mime| (MediaKind::Video, mime)))
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, B64.encode(bytes))
}

/// Reads an image or video file, rejecting unknown types and files over
/// `max_bytes` before loading them.
pub async fn read_upload(path: &Path, max_bytes: u64) -> Result<UploadedMedia, MediaError> {
    let (kind, mime) =
        classify(path).ok_or_else(|| MediaError::UnsupportedType(path.display().to_string()))?;

    let size = tokio::fs::metadata(path).await?.len();
    if size > max_bytes {
        return Err(MediaError::TooLarge {
            size,
            limit: max_bytes,
        });
    }

    let bytes = tokio::fs::read(path).await?;
    info!("Loaded {} ({} bytes, {})", path.display(), bytes.len(), mime);

    Ok(UploadedMedia {
        data_url: encode_data_url(mime, &bytes),
        kind,
        mime,
    })
}

/// Like [`read_upload`] but only images are accepted
pub async fn read_image(path: &Path, max_bytes: u64) -> Result<UploadedMedia, MediaError> {
    if let Some((MediaKind::Video, _)) = classify(path) {
        return Err(MediaError::ImageRequired(path.display().to_string()));
    }
    read_upload(path, max_bytes).await
}
