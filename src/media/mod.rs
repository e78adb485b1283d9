//! Uploaded media
//!
//! Avatars, logos and backgrounds are kept inline as base64 data URLs.

pub mod upload;

pub use upload::{classify, encode_data_url, read_image, read_upload};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Image => "image",
            MediaKind::Video => "video",
        }
    }
}

/// A file read into memory as a data URL
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    pub data_url: String,
    pub kind: MediaKind,
    pub mime: &'static str,
}
