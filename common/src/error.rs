//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// バランス調整自体は失敗しない。設定値の検証だけがエラーを返す。
#[derive(Error, Debug)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoints::BreakpointTable;
    use std::collections::BTreeMap;

    #[test]
    fn test_invalid_table_reports_config_error() {
        let err = BreakpointTable::new(BTreeMap::new()).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert_eq!(format!("{}", err), "Config error: ブレークポイントが空です");
    }
}
