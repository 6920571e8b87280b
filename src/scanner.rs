use crate::error::{Result, UsfindError};
use std::path::Path;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// 対応画像形式かどうか（拡張子で判定）
pub fn is_image_file(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// 写真として受け付けられるか検証
pub fn ensure_image(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(UsfindError::FileNotFound(path.display().to_string()));
    }

    if !is_image_file(path) {
        return Err(UsfindError::UnsupportedImage(path.display().to_string()));
    }

    Ok(())
}
