//! カラムバランサー
//!
//! 写真をラウンドロビンでカラムに振り分け、最も高いカラムの末尾を
//! 最も低いカラムへ移すことで高さを揃える。
//!
//! 1パスで動かすのは最大1枚。パス数は `ceil(カラム数 × 1.5)` で打ち切る。
//! 完全に揃うことは保証しない（打ち切り時点の結果を返す）。

use crate::normalizer::{normalize, photo_height};
use crate::types::{Column, Photo};

/// パス上限 = カラム数 × この係数（切り上げ）
pub const MAX_PASS_FACTOR: f64 = 1.5;

/// 全カラムが最大高さのこの割合以上なら揃っているとみなす
pub const BALANCED_RATIO: f64 = 0.975;

/// 左端カラムから動かす写真は高低差のこの割合未満でなければならない
pub const SMALL_MOVE_RATIO: f64 = 0.9;

/// 高低差に対する閾値係数
pub const THRESHOLD_RATIO: f64 = 0.4;

/// カラム高さの丸め単位
const HEIGHT_STEP: f64 = 10.0;

/// バランス調整オプション
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BalanceOptions {
    /// 高低差がこの値未満なら調整しない（0なら無効）
    pub min_difference: f64,
}

/// ループを抜けた理由
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// パス上限に達した
    BudgetExhausted,
    /// カラム数0、またはカラムなし
    Degenerate,
    /// 全写真が同じ高さ
    UniformHeights,
    /// 全カラムが揃っている
    Balanced,
    /// 高低差が閾値未満
    BelowThreshold,
    /// 左端カラムの末尾が大きすぎて動かせない
    MoveRejected,
    /// 動かせる写真がない
    NoCandidate,
}

/// バランス調整の結果
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceReport {
    pub columns: Vec<Column>,
    /// 実際に写真を動かしたパス数
    pub passes: usize,
    pub stop: StopReason,
}

impl BalanceReport {
    pub fn photo_count(&self) -> usize {
        self.columns.iter().map(Vec::len).sum()
    }
}

/// 写真を動かす根拠
#[derive(Debug, Clone, Copy)]
enum MoveKind {
    /// 左端カラムの末尾が十分小さい
    SmallEnough,
    /// 末尾より一つ前の写真が高い
    TallerPredecessor,
    /// 手掛かりなし
    Fallback,
}

enum Decision {
    Move(MoveKind),
    Stop(StopReason),
}

/// パス上限
pub fn max_passes(column_count: usize) -> usize {
    (column_count as f64 * MAX_PASS_FACTOR).ceil() as usize
}

/// カラムの高さ（10単位に丸め）
///
/// 高さが読めない写真は0として数える。
pub fn column_height(column: &Column) -> f64 {
    let total: f64 = column.iter().filter_map(photo_height).sum();
    (total / HEIGHT_STEP).round() * HEIGHT_STEP
}

/// ラウンドロビンで振り分け（正規化込み）
///
/// カラム数0なら空を返す。
pub fn distribute(photos: &[Photo], column_count: usize) -> Vec<Column> {
    if column_count == 0 {
        return Vec::new();
    }

    let mut columns: Vec<Column> = vec![Vec::new(); column_count];
    for (i, photo) in photos.iter().enumerate() {
        columns[i % column_count].push(normalize(photo));
    }
    columns
}

/// 振り分け + バランス調整
pub fn balance(photos: &[Photo], column_count: usize, options: &BalanceOptions) -> BalanceReport {
    if column_count == 0 {
        return BalanceReport {
            columns: Vec::new(),
            passes: 0,
            stop: StopReason::Degenerate,
        };
    }

    let report = rebalance(distribute(photos, column_count), column_count, options);
    tracing::debug!(
        photos = photos.len(),
        columns = column_count,
        passes = report.passes,
        stop = ?report.stop,
        "balance finished"
    );
    report
}

/// バランス調整
///
/// 入力カラムは正規化済みであること。写真の総数は変わらない。
pub fn rebalance(mut columns: Vec<Column>, column_count: usize, options: &BalanceOptions) -> BalanceReport {
    let budget = max_passes(column_count);
    let mut passes = 0;

    let stop = loop {
        if passes >= budget {
            break StopReason::BudgetExhausted;
        }
        if column_count == 0 || columns.is_empty() {
            break StopReason::Degenerate;
        }
        if has_uniform_heights(&columns) {
            break StopReason::UniformHeights;
        }

        let heights: Vec<f64> = columns.iter().map(column_height).collect();
        let (tallest, shortest) = select_columns(&heights);
        let tallest_height = heights[tallest];
        let shortest_height = heights[shortest];

        if heights.iter().all(|&h| h >= tallest_height * BALANCED_RATIO) {
            break StopReason::Balanced;
        }

        let difference = tallest_height - shortest_height;
        let threshold = (difference * THRESHOLD_RATIO).max(options.min_difference);
        if difference < threshold {
            break StopReason::BelowThreshold;
        }

        let kind = match decide(&columns[tallest], tallest, difference) {
            Decision::Move(kind) => kind,
            Decision::Stop(reason) => break reason,
        };

        let Some(photo) = columns[tallest].pop() else {
            break StopReason::NoCandidate;
        };
        tracing::trace!(
            pass = passes,
            slug = %photo.slug,
            from = tallest,
            to = shortest,
            ?kind,
            difference,
            "move photo"
        );
        columns[shortest].push(photo);
        passes += 1;
    };

    BalanceReport { columns, passes, stop }
}

/// 全写真（高さが読めるもの）が同じ高さか
fn has_uniform_heights(columns: &[Column]) -> bool {
    let mut heights = columns.iter().flatten().filter_map(photo_height);
    match heights.next() {
        Some(first) => heights.all(|h| h == first),
        None => true,
    }
}

/// (最も高いカラム, 最も低いカラム)
///
/// 同率なら高い方は右端、低い方は左端を選ぶ。
fn select_columns(heights: &[f64]) -> (usize, usize) {
    let mut tallest = 0;
    let mut shortest = 0;
    for (i, &h) in heights.iter().enumerate() {
        if h >= heights[tallest] {
            tallest = i;
        }
        if h < heights[shortest] {
            shortest = i;
        }
    }
    (tallest, shortest)
}

fn decide(column: &Column, index: usize, difference: f64) -> Decision {
    let height_at = |i: usize| column.get(i).and_then(photo_height).unwrap_or(0.0);

    if column.is_empty() {
        return Decision::Stop(StopReason::NoCandidate);
    }
    let last = height_at(column.len() - 1);

    if index == 0 {
        // 左端は行き過ぎない小さい写真だけ動かす
        if last < SMALL_MOVE_RATIO * difference {
            Decision::Move(MoveKind::SmallEnough)
        } else {
            Decision::Stop(StopReason::MoveRejected)
        }
    } else if column.len() < 2 {
        Decision::Stop(StopReason::NoCandidate)
    } else if height_at(column.len() - 2) > last {
        Decision::Move(MoveKind::TallerPredecessor)
    } else {
        // 明確な手掛かりがなくても1枚動かして次のパスで判定する
        Decision::Move(MoveKind::Fallback)
    }
}
