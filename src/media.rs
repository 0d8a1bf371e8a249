//! Media collaborator
//!
//! Cover-image extraction for uploads lives outside the store: the store only
//! ever sees the resulting cover URL on a finished [`crate::shared::model::Video`].
//! This module defines the seam — where in the stream to grab the still, the
//! decode trait an embedder implements, and the data-URL encoding the upload
//! screen stores.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use thiserror::Error;

/// Fraction of the stream duration where the cover still is captured.
pub const COVER_SEEK_FRACTION: f64 = 0.5;

/// Capture position in seconds for a stream of `duration_secs`.
///
/// Seeks to `duration * seek_to`; streams shorter than the seek offset
/// itself fall back to the start.
pub fn cover_capture_position(duration_secs: f64, seek_to: f64) -> f64 {
    if duration_secs < seek_to {
        0.0
    } else {
        duration_secs * seek_to
    }
}

/// Media decode errors
#[derive(Debug, Error)]
pub enum MediaError {
    /// The byte stream is not a decodable video
    #[error("could not decode video stream")]
    UndecodableStream,
}

/// A captured cover still
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

impl CoverImage {
    /// Wrap JPEG-encoded bytes
    pub fn jpeg(bytes: Vec<u8>) -> Self {
        Self {
            bytes,
            mime: "image/jpeg",
        }
    }

    /// Encode as a `data:` URL for storage on a video record
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, STANDARD.encode(&self.bytes))
    }
}

/// Decodes a selected video byte stream into a cover still.
///
/// Implementations should capture at [`cover_capture_position`] and return
/// [`MediaError::UndecodableStream`] when the bytes cannot be decoded; the
/// upload screen converts that into an inline error string.
pub trait CoverCapture {
    fn capture_cover(&self, video: &[u8], seek_to: f64) -> Result<CoverImage, MediaError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_position_is_the_midpoint() {
        assert_eq!(cover_capture_position(10.0, COVER_SEEK_FRACTION), 5.0);
        assert_eq!(cover_capture_position(90.0, COVER_SEEK_FRACTION), 45.0);
    }

    #[test]
    fn test_short_streams_capture_at_the_start() {
        // a 0.3s clip is shorter than the 0.5 seek offset
        assert_eq!(cover_capture_position(0.3, COVER_SEEK_FRACTION), 0.0);
    }

    #[test]
    fn test_data_url_encoding() {
        let cover = CoverImage::jpeg(vec![0xFF, 0xD8, 0xFF]);
        let url = cover.to_data_url();

        assert!(url.starts_with("data:image/jpeg;base64,"));
        assert_eq!(url, "data:image/jpeg;base64,/9j/");
    }

    #[test]
    fn test_undecodable_stream_error_message() {
        assert_eq!(
            MediaError::UndecodableStream.to_string(),
            "could not decode video stream"
        );
    }
}
