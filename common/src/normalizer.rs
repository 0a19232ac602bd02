//! 縦横比の正規化
//!
//! 実寸に関わらず、横長/縦長の2種類の固定サイズへ書き換える。
//! 以降の高さ比較はすべて正規化後の値で行う。

use crate::layout::canonical_size;
use crate::types::{AspectClass, ImageSize, Photo};

/// 縦横区分を判定（寸法が読めなければ None）
pub fn classify(size: &ImageSize) -> Option<AspectClass> {
    let (width, height) = size.dimensions()?;
    if width > height {
        Some(AspectClass::Landscape)
    } else {
        Some(AspectClass::Portrait)
    }
}

/// 正規化した写真を返す
///
/// 入力は変更しない。fullSize が無い、または幅・高さが数値でない場合は
/// そのままのコピーを返す。
pub fn normalize(photo: &Photo) -> Photo {
    let mut normalized = photo.clone();
    if let Some(size) = normalized.full_size.as_mut() {
        if let Some(class) = classify(size) {
            let (width, height) = canonical_size(class);
            size.width = Some(width);
            size.height = Some(height);
        }
    }
    normalized
}

/// 比較に使う高さ
pub fn photo_height(photo: &Photo) -> Option<f64> {
    photo
        .full_size
        .as_ref()
        .and_then(ImageSize::dimensions)
        .map(|(_, h)| h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{LANDSCAPE_HEIGHT, MAX_SIZE, PORTRAIT_HEIGHT};

    #[test]
    fn test_classify() {
        assert_eq!(classify(&ImageSize::new(3000.0, 2000.0)), Some(AspectClass::Landscape));
        assert_eq!(classify(&ImageSize::new(2000.0, 3000.0)), Some(AspectClass::Portrait));
        // 正方形は縦長扱い
        assert_eq!(classify(&ImageSize::new(2000.0, 2000.0)), Some(AspectClass::Portrait));
        assert_eq!(classify(&ImageSize::default()), None);
    }

    #[test]
    fn test_normalize_landscape() {
        let photo = normalize(&Photo::with_size("a", 6000.0, 4000.0));
        let size = photo.full_size.unwrap();
        assert_eq!(size.width, Some(MAX_SIZE));
        assert_eq!(size.height, Some(LANDSCAPE_HEIGHT));
    }

    #[test]
    fn test_normalize_portrait() {
        let photo = normalize(&Photo::with_size("a", 4000.0, 6000.0));
        let size = photo.full_size.unwrap();
        assert_eq!(size.width, Some(MAX_SIZE));
        assert_eq!(size.height, Some(PORTRAIT_HEIGHT));
    }

    #[test]
    fn test_normalize_does_not_touch_input() {
        let original = Photo::with_size("a", 6000.0, 4000.0);
        let _ = normalize(&original);
        assert_eq!(original.full_size.unwrap().width, Some(6000.0));
    }

    #[test]
    fn test_normalize_missing_size_is_noop() {
        let photo = Photo::new("no-size");
        assert_eq!(normalize(&photo), photo);

        let mut half = Photo::new("half");
        half.full_size = Some(ImageSize {
            width: Some(100.0),
            ..Default::default()
        });
        assert_eq!(normalize(&half), half);
    }

    #[test]
    fn test_normalize_keeps_passthrough_fields() {
        let mut photo = Photo::with_size("a", 10.0, 5.0);
        photo.extra.insert("title".into(), "Dusk".into());
        photo
            .full_size
            .as_mut()
            .unwrap()
            .extra
            .insert("url".into(), "/a.jpg".into());

        let normalized = normalize(&photo);
        assert_eq!(normalized.extra["title"], "Dusk");
        assert_eq!(normalized.full_size.unwrap().extra["url"], "/a.jpg");
    }

    #[test]
    fn test_photo_height() {
        assert_eq!(photo_height(&Photo::with_size("a", 1.0, 2.0)), Some(2.0));
        assert_eq!(photo_height(&Photo::new("a")), None);
    }
}
