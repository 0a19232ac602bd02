mod exif;

use crate::error::{PhotoGridError, Result};
use photo_grid_common::{ImageSize, Photo};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

/// フォルダ直下の画像からマニフェストを作る
///
/// 寸法はヘッダーだけ読む。読めない画像は fullSize なしで残す。
pub fn scan_folder(folder: &Path) -> Result<Vec<Photo>> {
    if !folder.exists() {
        return Err(PhotoGridError::FolderNotFound(folder.display().to_string()));
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(folder)
        .max_depth(1)  // 直下のみ（再帰しない）
        .into_iter()
        .filter_map(|e| e.ok())
        .map(|e| e.into_path())
        .filter(|p| p.is_file() && is_image_path(p))
        .collect();

    // ファイル名でソート
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    let mut photos: Vec<Photo> = paths.par_iter().map(|p| read_photo(p)).collect();
    dedupe_slugs(&mut photos);
    tracing::info!(folder = %folder.display(), photos = photos.len(), "folder scanned");

    Ok(photos)
}

/// 画像ヘッダーから (width, height) を読む
pub fn read_dimensions(path: &Path) -> Result<(u32, u32)> {
    image::image_dimensions(path)
        .map_err(|e| PhotoGridError::ImageLoad(format!("{}: {}", path.display(), e)))
}

fn read_photo(path: &Path) -> Photo {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut photo = Photo::new(slugify(&stem));
    photo.extra.insert("fileName".into(), file_name.clone().into());

    match read_dimensions(path) {
        Ok((width, height)) => {
            let mut size = ImageSize::new(f64::from(width), f64::from(height));
            size.extra.insert("url".into(), file_name.into());
            photo.full_size = Some(size);
        }
        Err(e) => tracing::warn!(error = %e, "image size unavailable"),
    }

    if let Ok(date) = exif::extract_date(path) {
        photo.extra.insert("date".into(), date.into());
    }

    photo
}

/// 同じ slug の2件目以降に `-2`, `-3`... を付ける（`a.jpg` と `a.png` など）
fn dedupe_slugs(photos: &mut [Photo]) {
    let mut used = HashSet::new();
    for photo in photos.iter_mut() {
        if used.insert(photo.slug.clone()) {
            continue;
        }
        let base = photo.slug.clone();
        let mut n = 2;
        while used.contains(&format!("{}-{}", base, n)) {
            n += 1;
        }
        photo.slug = format!("{}-{}", base, n);
        used.insert(photo.slug.clone());
    }
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy())
        .is_some_and(|ext| IMAGE_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(&ext)))
}

/// ファイル名から slug を作る（小文字、英数字以外は `-` にまとめる）
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars().flat_map(char::to_lowercase) {
        if ch.is_alphanumeric() {
            slug.push(ch);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    let slug = slug.trim_end_matches('-');

    if slug.is_empty() {
        "photo".to_string()
    } else {
        slug.to_string()
    }
}
