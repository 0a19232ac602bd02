//! レイアウト定数モジュール
//!
//! 正規化後の写真サイズと、レンダラー側の padding-bottom 計算。
//! レンダラーはこの比率範囲を前提にしているため、定数は変更しないこと。

use crate::normalizer::photo_height;
use crate::types::{AspectClass, Photo};

// ============================================
// 正規化サイズ（Source of Truth）
// ============================================

/// 正規化後の幅（両区分共通）
pub const MAX_SIZE: f64 = 1000.0;

/// 横長写真の高さ係数
pub const LANDSCAPE_RATIO: f64 = 0.66;

/// 縦長写真の高さ係数
pub const PORTRAIT_RATIO: f64 = 1.34;

pub const LANDSCAPE_HEIGHT: f64 = MAX_SIZE * LANDSCAPE_RATIO; // 660
pub const PORTRAIT_HEIGHT: f64 = MAX_SIZE * PORTRAIT_RATIO;   // 1340

// ============================================
// ヘルパー関数
// ============================================

/// 区分ごとの正規化サイズ (width, height)
#[inline]
pub fn canonical_size(class: AspectClass) -> (f64, f64) {
    match class {
        AspectClass::Landscape => (MAX_SIZE, LANDSCAPE_HEIGHT),
        AspectClass::Portrait => (MAX_SIZE, PORTRAIT_HEIGHT),
    }
}

/// レンダラー用の padding-bottom（%）
///
/// 高さが読めない写真は None。
pub fn padding_bottom_percent(photo: &Photo) -> Option<f64> {
    photo_height(photo).map(|h| h / MAX_SIZE * 100.0)
}
