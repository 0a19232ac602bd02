//! 写真マニフェストの読み書き
//!
//! 写真の配列、またはコンテンツ層のコレクション応答と同じ
//! `{ "photos": [...] }` 形式を受け付ける。

use crate::error::{PhotoGridError, Result};
use photo_grid_common::Photo;
use serde_json::Value;
use std::path::Path;

/// 配列か `{ "photos": [...] }` を受け付ける。写真ごとのエラーはそのまま返す
pub fn parse_manifest(json: &str) -> Result<Vec<Photo>> {
    let value: Value = serde_json::from_str(json)
        .map_err(|e| PhotoGridError::InvalidManifest(format!("JSONパースエラー: {}", e)))?;

    let photos = match value {
        Value::Array(list) => Value::Array(list),
        Value::Object(mut map) => map
            .remove("photos")
            .ok_or_else(|| PhotoGridError::InvalidManifest("`photos` フィールドがありません".into()))?,
        _ => {
            return Err(PhotoGridError::InvalidManifest(
                "写真の配列か `{ \"photos\": [...] }` が必要です".into(),
            ))
        }
    };

    serde_json::from_value(photos)
        .map_err(|e| PhotoGridError::InvalidManifest(format!("写真データが不正です: {}", e)))
}

pub fn load_manifest(path: &Path) -> Result<Vec<Photo>> {
    if !path.exists() {
        return Err(PhotoGridError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let photos = parse_manifest(&content)?;
    tracing::info!(path = %path.display(), photos = photos.len(), "manifest loaded");
    Ok(photos)
}

pub fn save_manifest(path: &Path, photos: &[Photo]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(photos)?;
    std::fs::write(path, json)?;
    Ok(())
}
