//! カラム分割結果の出力

use crate::error::Result;
use photo_grid_common::{classify, padding_bottom_percent, Column};
use std::fmt::Write as _;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// カラムごとの写真配列（JSON）
    #[default]
    Json,
    /// 確認用のテキスト
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "text" | "txt" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown format: {}. Use json or text", s)),
        }
    }
}

pub fn render_columns(columns: &[Column], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(columns)?),
        OutputFormat::Text => Ok(render_text(columns)),
    }
}

fn render_text(columns: &[Column]) -> String {
    let mut out = String::new();
    for (index, column) in columns.iter().enumerate() {
        let _ = writeln!(out, "column {} ({} photos)", index + 1, column.len());
        for photo in column {
            let class = photo
                .full_size
                .as_ref()
                .and_then(classify)
                .map(|c| c.to_string())
                .unwrap_or_else(|| "unknown".into());
            match padding_bottom_percent(photo) {
                Some(padding) => {
                    let _ = writeln!(out, "  {:<32} {:<9} {:>6.1}%", photo.slug, class, padding);
                }
                None => {
                    let _ = writeln!(out, "  {:<32} {:<9} {:>7}", photo.slug, class, "-");
                }
            }
        }
    }
    out
}
