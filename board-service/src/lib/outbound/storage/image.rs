use std::path::Path;
use std::path::PathBuf;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::post::errors::ImageStoreError;
use crate::domain::post::models::ImageRef;
use crate::domain::post::models::ImageUpload;
use crate::domain::post::ports::ImageStore;

/// Public path prefix image refs are served under.
const PUBLIC_PREFIX: &str = "/uploads/";

/// Image blob store backed by a local directory.
///
/// Blobs are written under a generated `<uuid>[.<ext>]` filename and
/// referenced by their public serving path.
pub struct FilesystemImageStore {
    root: PathBuf,
}

impl FilesystemImageStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Create the uploads directory if it does not exist yet.
    ///
    /// # Errors
    /// * `WriteFailed` - Directory could not be created
    pub async fn init(&self) -> Result<(), ImageStoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| ImageStoreError::WriteFailed(e.to_string()))
    }

    /// Resolve a public ref to its on-disk path.
    ///
    /// Only plain filenames directly under the store root are accepted, so a
    /// crafted ref can never reach outside the uploads directory.
    fn disk_path(&self, image: &ImageRef) -> Option<PathBuf> {
        let file_name = image.as_str().strip_prefix(PUBLIC_PREFIX)?;
        if file_name.is_empty() || file_name.contains('/') || file_name.contains("..") {
            return None;
        }
        Some(self.root.join(file_name))
    }

    fn generate_file_name(extension: Option<&str>) -> String {
        let stem = Uuid::new_v4();
        match extension {
            Some(ext) if is_safe_extension(ext) => format!("{}.{}", stem, ext),
            _ => stem.to_string(),
        }
    }

    /// Root directory blobs are stored under.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

fn is_safe_extension(extension: &str) -> bool {
    !extension.is_empty()
        && extension.len() <= 16
        && extension.chars().all(|c| c.is_ascii_alphanumeric())
}

#[async_trait]
impl ImageStore for FilesystemImageStore {
    async fn save(&self, upload: ImageUpload) -> Result<ImageRef, ImageStoreError> {
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| ImageStoreError::WriteFailed(e.to_string()))?;

        let file_name = Self::generate_file_name(upload.extension.as_deref());
        let path = self.root.join(&file_name);

        tokio::fs::write(&path, &upload.data)
            .await
            .map_err(|e| ImageStoreError::WriteFailed(e.to_string()))?;

        tracing::debug!(path = %path.display(), bytes = upload.data.len(), "Stored image blob");

        Ok(ImageRef::new(format!("{}{}", PUBLIC_PREFIX, file_name)))
    }

    async fn delete(&self, image: &ImageRef) -> Result<(), ImageStoreError> {
        let path = self.disk_path(image).ok_or_else(|| {
            ImageStoreError::DeleteFailed(format!("Ref outside store: {}", image))
        })?;

        tokio::fs::remove_file(&path)
            .await
            .map_err(|e| ImageStoreError::DeleteFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> FilesystemImageStore {
        let root = std::env::temp_dir().join(format!("board-uploads-{}", Uuid::new_v4()));
        FilesystemImageStore::new(root)
    }

    fn upload(extension: Option<&str>) -> ImageUpload {
        ImageUpload {
            data: b"image-bytes".to_vec(),
            extension: extension.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_save_and_delete_round_trip() {
        let store = temp_store();

        let image = store.save(upload(Some("png"))).await.expect("Failed to save");
        assert!(image.as_str().starts_with(PUBLIC_PREFIX));
        assert!(image.as_str().ends_with(".png"));

        let path = store.disk_path(&image).expect("Ref resolves inside store");
        assert_eq!(
            tokio::fs::read(&path).await.expect("Blob readable"),
            b"image-bytes"
        );

        store.delete(&image).await.expect("Failed to delete");
        assert!(!path.exists());

        tokio::fs::remove_dir_all(store.root()).await.ok();
    }

    #[tokio::test]
    async fn test_save_without_extension() {
        let store = temp_store();

        let image = store.save(upload(None)).await.expect("Failed to save");
        assert!(!image.as_str().contains('.'));

        tokio::fs::remove_dir_all(store.root()).await.ok();
    }

    #[tokio::test]
    async fn test_unsafe_extension_is_dropped() {
        let store = temp_store();

        let image = store
            .save(upload(Some("png/../../etc")))
            .await
            .expect("Failed to save");
        let file_name = image.as_str().strip_prefix(PUBLIC_PREFIX).unwrap();
        assert!(!file_name.contains('/'));
        assert!(!file_name.contains('.'));

        tokio::fs::remove_dir_all(store.root()).await.ok();
    }

    #[tokio::test]
    async fn test_delete_rejects_refs_outside_store() {
        let store = temp_store();

        let result = store.delete(&ImageRef::new("/uploads/../etc/passwd")).await;
        assert!(matches!(result, Err(ImageStoreError::DeleteFailed(_))));

        let result = store.delete(&ImageRef::new("/elsewhere/file.png")).await;
        assert!(matches!(result, Err(ImageStoreError::DeleteFailed(_))));
    }

    #[tokio::test]
    async fn test_delete_missing_blob_errors() {
        let store = temp_store();
        store.init().await.expect("Failed to init store");

        let result = store.delete(&ImageRef::new("/uploads/nope.png")).await;
        assert!(matches!(result, Err(ImageStoreError::DeleteFailed(_))));
    }
}
