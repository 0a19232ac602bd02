use crate::output::OutputFormat;
use clap::{Parser, Subcommand};
use photo_grid_common::LayoutVariant;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "photo-grid")]
#[command(about = "写真グリッドのカラム分割・バランス調整ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// マニフェストの写真をカラムに分割
    Balance {
        /// 写真マニフェスト（JSON）
        #[arg(required = true)]
        input: PathBuf,

        /// カラム数（指定時はブレークポイントを使わない）
        #[arg(short, long, conflicts_with = "width")]
        columns: Option<usize>,

        /// ビューポート幅（px）
        #[arg(short, long)]
        width: Option<u32>,

        /// レイアウト種別 (default/home)
        #[arg(long)]
        variant: Option<LayoutVariant>,

        /// 高低差がこの値未満なら調整しない
        #[arg(long)]
        min_difference: Option<f64>,

        /// 出力形式 (json/text)
        #[arg(short, long, default_value = "json")]
        format: OutputFormat,

        /// 出力ファイル（省略時は標準出力）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 画像フォルダからマニフェストを作成
    Scan {
        /// 画像フォルダのパス
        #[arg(required = true)]
        folder: PathBuf,

        /// 出力JSONファイル（デフォルト: 入力フォルダ/photos.json）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// ブレークポイントを表示
    Breakpoints {
        /// レイアウト種別 (default/home)
        #[arg(long)]
        variant: Option<LayoutVariant>,

        /// この幅でのカラム数も表示
        #[arg(short, long)]
        width: Option<u32>,
    },

    /// 設定を表示/編集
    Config {
        /// 既定のレイアウト種別を設定
        #[arg(long)]
        set_variant: Option<LayoutVariant>,

        /// 既定のビューポート幅を設定
        #[arg(long)]
        set_width: Option<u32>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
