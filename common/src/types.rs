//! 写真グリッドの型定義
//!
//! コンテンツ層から受け取る写真メタデータと、カラム分割の結果型:
//! - Photo: 入力単位（slug + fullSize + 透過フィールド）
//! - ImageSize: フルサイズ画像の寸法
//! - Column: 1カラム分の写真列

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// 1カラム分の写真（上から順）
pub type Column = Vec<Photo>;

/// 写真
///
/// `width` / `height` 以外のフィールドは解釈せず、そのまま書き戻す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub slug: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_size: Option<ImageSize>,

    /// コレクション所属などの透過フィールド
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// フルサイズ画像の記述子
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSize {
    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    #[serde(default, deserialize_with = "lenient_number", skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// url, blurDataURL など
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 縦横区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AspectClass {
    /// 横長（width > height）
    Landscape,
    /// 縦長・正方形
    Portrait,
}

impl std::fmt::Display for AspectClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AspectClass::Landscape => write!(f, "landscape"),
            AspectClass::Portrait => write!(f, "portrait"),
        }
    }
}

impl Photo {
    /// 寸法なしの写真
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            full_size: None,
            extra: Map::new(),
        }
    }

    /// 寸法付きの写真
    pub fn with_size(slug: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            full_size: Some(ImageSize::new(width, height)),
            ..Self::new(slug)
        }
    }
}

impl ImageSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            extra: Map::new(),
        }
    }

    /// 幅・高さが両方とも有限の数値なら返す
    pub fn dimensions(&self) -> Option<(f64, f64)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w.is_finite() && h.is_finite() => Some((w, h)),
            _ => None,
        }
    }
}

/// 数値以外（文字列、bool、null など）は None として読む
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_f64()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_passthrough() {
        let json = r#"{
            "slug": "harbour-dusk",
            "fullSize": { "url": "https://cdn.example/harbour.jpg", "width": 4000, "height": 3000 },
            "collections": ["coast"]
        }"#;
        let photo: Photo = serde_json::from_str(json).unwrap();

        assert_eq!(photo.slug, "harbour-dusk");
        let size = photo.full_size.as_ref().unwrap();
        assert_eq!(size.dimensions(), Some((4000.0, 3000.0)));
        assert_eq!(size.extra["url"], "https://cdn.example/harbour.jpg");
        assert_eq!(photo.extra["collections"][0], "coast");
    }

    #[test]
    fn test_non_numeric_dimensions_are_none() {
        let json = r#"{ "slug": "a", "fullSize": { "width": "wide", "height": null } }"#;
        let photo: Photo = serde_json::from_str(json).unwrap();
        let size = photo.full_size.unwrap();

        assert_eq!(size.width, None);
        assert_eq!(size.height, None);
        assert_eq!(size.dimensions(), None);
    }

    #[test]
    fn test_null_full_size() {
        let photo: Photo = serde_json::from_str(r#"{ "slug": "a", "fullSize": null }"#).unwrap();
        assert!(photo.full_size.is_none());

        let photo: Photo = serde_json::from_str(r#"{ "slug": "b" }"#).unwrap();
        assert!(photo.full_size.is_none());
    }

    #[test]
    fn test_serialize_camel_case() {
        let photo = Photo::with_size("a", 10.0, 20.0);
        let json = serde_json::to_value(&photo).unwrap();
        assert_eq!(json["fullSize"]["width"], 10.0);
        assert!(json.get("full_size").is_none());
    }

    #[test]
    fn test_dimensions_rejects_non_finite() {
        assert_eq!(ImageSize::new(f64::NAN, 10.0).dimensions(), None);
        assert_eq!(ImageSize::new(10.0, f64::INFINITY).dimensions(), None);
    }
}
