//! Storage for uploaded clothes images.
//!
//! Files are written under the configured uploads directory with a fresh
//! UUID name; the returned path is the public URL the frontend renders.

use once_cell::sync::OnceCell;
use std::path::PathBuf;

static UPLOADS_DIR: OnceCell<PathBuf> = OnceCell::new();

pub fn initialize_uploads(dir: PathBuf) -> anyhow::Result<()> {
    std::fs::create_dir_all(&dir)?;
    UPLOADS_DIR
        .set(dir)
        .map_err(|_| anyhow::anyhow!("Failed to set UPLOADS_DIR"))?;
    Ok(())
}

pub fn uploads_dir() -> &'static PathBuf {
    UPLOADS_DIR
        .get()
        .expect("Uploads directory has not been initialized")
}

/// Keep only safe, short, lowercase extensions; anything else becomes "bin".
fn sanitize_extension(file_name: Option<&str>) -> String {
    let ext = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    if !ext.is_empty() && ext.len() <= 5 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        ext
    } else {
        "bin".to_string()
    }
}

/// Persist uploaded image bytes; returns the public "/uploads/..." path.
pub fn store_image(bytes: &[u8], file_name: Option<&str>) -> anyhow::Result<String> {
    let ext = sanitize_extension(file_name);
    let stored_name = format!("{}.{}", uuid::Uuid::new_v4(), ext);
    let target = uploads_dir().join(&stored_name);
    std::fs::write(&target, bytes)?;
    tracing::info!("Stored image {} ({} bytes)", target.display(), bytes.len());
    Ok(format!("/uploads/{}", stored_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extensions_are_sanitized() {
        assert_eq!(sanitize_extension(Some("photo.PNG")), "png");
        assert_eq!(sanitize_extension(Some("shirt.front.jpeg")), "jpeg");
        assert_eq!(sanitize_extension(Some("no-extension")), "bin");
        assert_eq!(sanitize_extension(Some("weird.p/../ng")), "bin");
        assert_eq!(sanitize_extension(None), "bin");
    }
}
