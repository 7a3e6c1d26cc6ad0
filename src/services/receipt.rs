//! # Payment Receipts
//!
//! Screenshots customers attach as proof of payment: type checking,
//! compression before upload, and the Cloudinary unsigned uploader.

use super::{ReceiptUploader, ServiceError};
use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};

/// Image subtypes accepted as receipts.
pub const ACCEPTED_RECEIPT_TYPES: [&str; 6] = ["jpeg", "jpg", "png", "webp", "heic", "heif"];

const RECEIPT_FOLDER: &str = "receipts";

/// An attached receipt image.
#[derive(Clone, PartialEq, Eq)]
pub struct ReceiptImage {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for ReceiptImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptImage")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("bytes", &self.bytes.len())
            .finish()
    }
}

impl ReceiptImage {
    /// Accepts `image/<type>` for the types in [`ACCEPTED_RECEIPT_TYPES`].
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, ServiceError> {
        let content_type = content_type.into().to_ascii_lowercase();
        let accepted = content_type
            .strip_prefix("image/")
            .is_some_and(|subtype| ACCEPTED_RECEIPT_TYPES.contains(&subtype));
        if !accepted {
            return Err(ServiceError::UnsupportedReceipt(content_type));
        }
        Ok(Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        })
    }
}

/// Scales the image down to at most `max_width` pixels wide and re-encodes it
/// as JPEG at `quality` (1-100).
///
/// Formats the decoder does not understand (HEIC, HEIF) are returned
/// unchanged.
pub fn compress_receipt(
    receipt: ReceiptImage,
    max_width: u32,
    quality: u8,
) -> Result<ReceiptImage, ServiceError> {
    let decoded = match image::load_from_memory(&receipt.bytes) {
        Ok(decoded) => decoded,
        Err(e) => {
            warn!(file = %receipt.file_name, error = %e, "Cannot decode receipt, uploading as-is");
            return Ok(receipt);
        }
    };

    let resized = if decoded.width() > max_width {
        decoded.resize(max_width, u32::MAX, FilterType::Lanczos3)
    } else {
        decoded
    };

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, quality.clamp(1, 100));
    resized.to_rgb8().write_with_encoder(encoder)?;

    let stem = receipt
        .file_name
        .rsplit_once('.')
        .map_or(receipt.file_name.as_str(), |(stem, _)| stem);
    debug!(
        before = receipt.bytes.len(),
        after = bytes.len(),
        width = resized.width(),
        "Receipt compressed"
    );

    Ok(ReceiptImage {
        file_name: format!("{}.jpg", stem),
        content_type: "image/jpeg".to_string(),
        bytes,
    })
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: Option<String>,
    error: Option<UploadError>,
}

#[derive(Debug, Deserialize)]
struct UploadError {
    message: String,
}

/// Unsigned upload to Cloudinary with an upload preset.
pub struct CloudinaryUploader {
    client: reqwest::Client,
    upload_url: String,
    upload_preset: String,
}

impl CloudinaryUploader {
    pub fn new(
        cloud_name: &str,
        upload_preset: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ServiceError> {
        Ok(Self {
            client: reqwest::Client::builder().timeout(timeout).build()?,
            upload_url: format!("https://api.cloudinary.com/v1_1/{}/image/upload", cloud_name),
            upload_preset: upload_preset.into(),
        })
    }
}

#[async_trait]
impl ReceiptUploader for CloudinaryUploader {
    #[instrument(skip(self, receipt), fields(file = %receipt.file_name))]
    async fn upload(&self, receipt: ReceiptImage) -> Result<String, ServiceError> {
        let part = reqwest::multipart::Part::bytes(receipt.bytes)
            .file_name(receipt.file_name)
            .mime_str(&receipt.content_type)?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("upload_preset", self.upload_preset.clone())
            .text("folder", RECEIPT_FOLDER);

        let response = self.client.post(&self.upload_url).multipart(form).send().await?;
        let status = response.status();
        let body: UploadResponse = response.json().await?;

        match (body.secure_url, body.error) {
            (Some(url), _) if status.is_success() => {
                info!(%url, "Receipt uploaded");
                Ok(url)
            }
            (_, Some(error)) => Err(ServiceError::Rejected(error.message)),
            _ => Err(ServiceError::Rejected(format!(
                "Upload failed with status {}",
                status
            ))),
        }
    }
}
