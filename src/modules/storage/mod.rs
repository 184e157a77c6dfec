use crate::types::StorageContext;
use rand::Rng;
use std::path::Path;

pub const MAX_FILE_SIZE: u64 = 3 * 1024 * 1024;
pub const PUBLIC_PREFIX: &str = "/uploads";

#[derive(Debug, PartialEq)]
pub enum Error {
    UnsupportedFileType,
    FileTooLarge,
    UploadFailed,
}

pub fn extension_for(content_type: Option<&str>) -> Result<&'static str, Error> {
    match content_type.map(|c| c.trim().to_ascii_lowercase()).as_deref() {
        Some("image/jpeg") => Ok("jpg"),
        Some("image/png") => Ok("png"),
        Some("image/webp") => Ok("webp"),
        _ => Err(Error::UnsupportedFileType),
    }
}

pub fn generate_file_name(extension: &str) -> String {
    format!(
        "menu_{}_{}.{}",
        chrono::Utc::now().timestamp_millis(),
        rand::thread_rng().gen_range(0..1_000_000_000u32),
        extension
    )
}

/// Copies an uploaded temp file into the upload directory and returns the
/// public path it is served under.
pub async fn upload_file(
    cfg: &StorageContext,
    content_type: Option<&str>,
    source: &Path,
) -> Result<String, Error> {
    let extension = extension_for(content_type)?;

    let size = tokio::fs::metadata(source)
        .await
        .map_err(|err| {
            tracing::error!("Failed to read uploaded file metadata: {}", err);
            Error::UploadFailed
        })?
        .len();

    if size > MAX_FILE_SIZE {
        return Err(Error::FileTooLarge);
    }

    let file_name = generate_file_name(extension);

    tokio::fs::copy(source, cfg.upload_dir.join(&file_name))
        .await
        .map_err(|err| {
            tracing::error!("Failed to store uploaded file {}: {}", file_name, err);
            Error::UploadFailed
        })?;

    tracing::info!("Stored upload {}", file_name);

    Ok(format!("{}/{}", PUBLIC_PREFIX, file_name))
}

/// Removes a previously stored upload given its public path. Missing files are ignored.
pub async fn delete_file(cfg: &StorageContext, public_path: &str) {
    let Some(file_name) = public_path
        .strip_prefix(PUBLIC_PREFIX)
        .map(|name| name.trim_start_matches('/'))
        .filter(|name| !name.is_empty() && !name.contains('/') && !name.contains(".."))
    else {
        return;
    };

    if let Err(err) = tokio::fs::remove_file(cfg.upload_dir.join(file_name)).await {
        tracing::warn!("Failed to remove upload {}: {}", file_name, err);
    }
}
