use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use chrono::Utc;
use serde::Serialize;
use tokio::{
    fs,
    io::{AsyncWrite, AsyncWriteExt},
};

use crate::error::AppError;

/// URL prefix the stored files are served under; also the prefix of returned paths.
pub const PUBLIC_PREFIX: &str = "uploads";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredUpload {
    pub path: String,
    pub filename: String,
}

#[derive(Clone)]
pub struct UploadService {
    dir: PathBuf,
}

impl UploadService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<StoredUpload, AppError> {
        let filename = stored_filename(Utc::now().timestamp_millis(), original_name)?;

        fs::create_dir_all(&self.dir).await.map_err(|err| {
            tracing::error!(dir = %self.dir.display(), error = %err, "upload dir unavailable");
            AppError::internal("Upload directory unavailable")
        })?;

        // Two uploads of the same name in the same millisecond collide; refuse to overwrite.
        let target = self.dir.join(&filename);
        let mut file = fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::AlreadyExists => AppError::internal("Upload name collision, retry"),
                _ => {
                    tracing::error!(path = %target.display(), error = %err, "upload open failed");
                    AppError::internal("Upload failed")
                }
            })?;
        write_or_discard(&mut file, &target, bytes).await?;

        tracing::info!(filename = %filename, size = bytes.len(), "file uploaded");
        Ok(StoredUpload {
            path: format!("{PUBLIC_PREFIX}/{filename}"),
            filename,
        })
    }
}

/// Writes `bytes` to `writer`; on failure the half-written `target` is removed.
async fn write_or_discard<W>(writer: &mut W, target: &Path, bytes: &[u8]) -> Result<(), AppError>
where
    W: AsyncWrite + Unpin,
{
    let written = match writer.write_all(bytes).await {
        Ok(()) => writer.flush().await,
        Err(err) => Err(err),
    };
    if let Err(err) = written {
        tracing::error!(path = %target.display(), error = %err, "upload write failed");
        if let Err(cleanup) = fs::remove_file(target).await {
            tracing::warn!(path = %target.display(), error = %cleanup, "partial upload left behind");
        }
        return Err(AppError::internal("Upload failed"));
    }
    Ok(())
}

/// `<millis>-<basename>`. Client-supplied directories are dropped.
pub fn stored_filename(millis: i64, original_name: &str) -> Result<String, AppError> {
    let basename = original_name
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();
    if basename.is_empty() || basename == "." || basename == ".." {
        return Err(AppError::validation("Uploaded file needs a file name"));
    }
    Ok(format!("{millis}-{basename}"))
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        pin::Pin,
        task::{Context, Poll},
    };

    use tokio::io::AsyncWrite;

    use super::{UploadService, stored_filename, write_or_discard};

    struct FullDisk;

    impl AsyncWrite for FullDisk {
        fn poll_write(
            self: Pin<&mut Self>,
            _cx: &mut Context<'_>,
            _buf: &[u8],
        ) -> Poll<io::Result<usize>> {
            Poll::Ready(Err(io::Error::other("no space left on device")))
        }

        fn poll_flush(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }

        fn poll_shutdown(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<io::Result<()>> {
            Poll::Ready(Ok(()))
        }
    }

    #[test]
    fn prefixes_the_timestamp() {
        assert_eq!(
            stored_filename(1_700_000_000_123, "milk.png").expect("name should be accepted"),
            "1700000000123-milk.png"
        );
    }

    #[test]
    fn strips_client_directories() {
        assert_eq!(
            stored_filename(1, "../../etc/passwd").expect("basename should survive"),
            "1-passwd"
        );
        assert_eq!(
            stored_filename(1, "C:\\photos\\box.jpg").expect("basename should survive"),
            "1-box.jpg"
        );
    }

    #[test]
    fn rejects_names_without_a_basename() {
        for name in ["", "  ", "dir/", "..", "a/.."] {
            assert!(stored_filename(1, name).is_err(), "{name:?} should be rejected");
        }
    }

    #[tokio::test]
    async fn writes_the_file_under_the_upload_dir() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let service = UploadService::new(dir.path().join("nested"));

        let stored = service
            .store("cover.png", b"png-bytes")
            .await
            .expect("upload should be stored");

        assert!(stored.filename.ends_with("-cover.png"));
        assert_eq!(stored.path, format!("uploads/{}", stored.filename));
        let written = tokio::fs::read(dir.path().join("nested").join(&stored.filename))
            .await
            .expect("file should exist");
        assert_eq!(written, b"png-bytes");
    }

    #[tokio::test]
    async fn failed_write_removes_the_partial_file() {
        let dir = tempfile::tempdir().expect("tempdir should be created");
        let target = dir.path().join("1-half.png");
        tokio::fs::write(&target, b"half")
            .await
            .expect("partial file should be created");

        let err = write_or_discard(&mut FullDisk, &target, b"png-bytes")
            .await
            .expect_err("write should fail");

        assert_eq!(err.message(), "Upload failed");
        assert!(!target.exists());
    }
}
