//! 写真グリッド
//!
//! ビューポート幅か写真リストが変わったら呼び出し側が `recompute` を呼ぶ。
//! グリッド自身はウィンドウを監視せず、カラムの状態も持ち越さない。

use crate::balancer::{balance, BalanceOptions, BalanceReport};
use crate::breakpoints::{BreakpointTable, LayoutVariant};
use crate::types::{Column, Photo};

#[derive(Debug, Clone)]
pub struct PhotoGrid {
    table: BreakpointTable,
    options: BalanceOptions,
}

impl PhotoGrid {
    pub fn new(table: BreakpointTable, options: BalanceOptions) -> Self {
        Self { table, options }
    }

    /// 組み込みテーブルで作成
    pub fn for_variant(variant: LayoutVariant) -> Self {
        Self::new(BreakpointTable::builtin(variant), BalanceOptions::default())
    }

    pub fn table(&self) -> &BreakpointTable {
        &self.table
    }

    pub fn column_count_for(&self, viewport_width: u32) -> usize {
        self.table.resolve(viewport_width)
    }

    /// カラムを一から作り直す
    pub fn recompute(&self, photos: &[Photo], viewport_width: u32) -> Vec<Column> {
        self.recompute_report(photos, viewport_width).columns
    }

    pub fn recompute_report(&self, photos: &[Photo], viewport_width: u32) -> BalanceReport {
        let column_count = self.column_count_for(viewport_width);
        tracing::debug!(viewport_width, column_count, photos = photos.len(), "recompute grid");
        balance(photos, column_count, &self.options)
    }
}
