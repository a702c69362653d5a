use base64::{engine::general_purpose, Engine as _};
use google_cloud_storage::client::{Client, ClientConfig};
use google_cloud_storage::http::objects::delete::DeleteObjectRequest;
use google_cloud_storage::http::objects::upload::{Media, UploadObjectRequest, UploadType};
use serde::{Deserialize, Serialize};
use std::env;
use uuid::Uuid;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImageData {
    pub data: String,
    #[serde(rename = "fileName")]
    pub file_name: String,
    #[serde(rename = "fileType")]
    pub file_type: String,
    #[serde(rename = "fileSize")]
    pub file_size: u64,
}

#[derive(Debug)]
pub enum ImageError {
    Base64Decode(String),
    Storage(String),
    InvalidFormat(String),
    Environment(String),
}

impl std::fmt::Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::Base64Decode(err) => write!(f, "Base64 decode error: {}", err),
            ImageError::Storage(err) => write!(f, "Storage error: {}", err),
            ImageError::InvalidFormat(err) => write!(f, "Invalid image format: {}", err),
            ImageError::Environment(err) => write!(f, "Environment error: {}", err),
        }
    }
}

impl std::error::Error for ImageError {}

/// Uploads and deletes site media (gallery photos, banner images) in the
/// public bucket. Payloads arrive as base64 inside JSON bodies.
pub struct ImageService {
    client: Client,
    bucket_name: String,
}

impl ImageService {
    pub async fn new() -> Result<Self, ImageError> {
        let bucket_name = env::var("MEDIA_BUCKET")
            .map_err(|_| ImageError::Environment("MEDIA_BUCKET not set".to_string()))?;

        let config = ClientConfig::default()
            .with_auth()
            .await
            .map_err(|e| ImageError::Storage(format!("Failed to create storage client: {}", e)))?;

        Ok(Self {
            client: Client::new(config),
            bucket_name,
        })
    }

    /// Uploads one image under the given folder (e.g. "gallery", "banners")
    /// and returns its public URL.
    pub async fn upload(&self, image: ImageData, folder: &str) -> Result<String, ImageError> {
        let base64_data = if image.data.starts_with("data:") {
            image.data.split(',').nth(1).ok_or_else(|| {
                ImageError::InvalidFormat("Invalid base64 data format".to_string())
            })?
        } else {
            &image.data
        };

        let image_bytes = general_purpose::STANDARD
            .decode(base64_data)
            .map_err(|e| ImageError::Base64Decode(e.to_string()))?;

        let file_extension = self.file_extension(&image.file_type)?;
        let timestamp = chrono::Utc::now().timestamp();
        let random_id = Uuid::new_v4();
        let object_name = format!("{}/{}-{}.{}", folder, timestamp, random_id, file_extension);

        let upload_type = UploadType::Simple(Media::new(object_name.clone()));
        let upload_request = UploadObjectRequest {
            bucket: self.bucket_name.clone(),
            ..Default::default()
        };

        self.client
            .upload_object(&upload_request, image_bytes, &upload_type)
            .await
            .map_err(|e| ImageError::Storage(format!("Failed to upload object: {}", e)))?;

        Ok(format!(
            "https://storage.googleapis.com/{}/{}",
            self.bucket_name, object_name
        ))
    }

    /// Deletes an object previously uploaded by this service, identified by
    /// its public URL.
    pub async fn delete_by_url(&self, url: &str) -> Result<(), ImageError> {
        let prefix = format!("https://storage.googleapis.com/{}/", self.bucket_name);
        let object_name = url.strip_prefix(&prefix).ok_or_else(|| {
            ImageError::InvalidFormat(format!("URL does not belong to this bucket: {}", url))
        })?;

        self.client
            .delete_object(&DeleteObjectRequest {
                bucket: self.bucket_name.clone(),
                object: object_name.to_string(),
                ..Default::default()
            })
            .await
            .map_err(|e| ImageError::Storage(format!("Failed to delete object: {}", e)))
    }

    fn file_extension(&self, file_type: &str) -> Result<String, ImageError> {
        match file_type {
            "image/jpeg" => Ok("jpg".to_string()),
            "image/jpg" => Ok("jpg".to_string()),
            "image/png" => Ok("png".to_string()),
            "image/gif" => Ok("gif".to_string()),
            "image/webp" => Ok("webp".to_string()),
            _ => Err(ImageError::InvalidFormat(format!(
                "Unsupported file type: {}",
                file_type
            ))),
        }
    }
}
