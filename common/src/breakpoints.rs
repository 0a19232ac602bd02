//! ブレークポイント解決モジュール
//!
//! ビューポート幅からカラム数を決める。
//! テーブルは「最小幅 → カラム数」で、幅が大きいほどカラム数は減らない。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// レイアウト種別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    /// コレクション一覧などの通常グリッド
    #[default]
    Default,
    /// トップページ
    Home,
}

impl LayoutVariant {
    pub const ALL: [LayoutVariant; 2] = [LayoutVariant::Default, LayoutVariant::Home];

    /// 組み込みテーブル (最小幅px, カラム数)
    fn builtin_entries(self) -> &'static [(u32, usize)] {
        match self {
            LayoutVariant::Default => &[(0, 1), (640, 2), (1024, 3), (1536, 4)],
            LayoutVariant::Home => &[(0, 1), (768, 2), (1280, 3)],
        }
    }
}

impl std::str::FromStr for LayoutVariant {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(LayoutVariant::Default),
            "home" => Ok(LayoutVariant::Home),
            _ => Err(format!("Unknown variant: {}. Use default or home", s)),
        }
    }
}

impl std::fmt::Display for LayoutVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutVariant::Default => write!(f, "default"),
            LayoutVariant::Home => write!(f, "home"),
        }
    }
}

/// ブレークポイントテーブル
///
/// 構築時に検証済み: 空でない、カラム数は1以上、幅の昇順でカラム数が減らない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakpointTable {
    entries: BTreeMap<u32, usize>,
}

impl BreakpointTable {
    /// 検証付きでテーブルを作成
    pub fn new(entries: BTreeMap<u32, usize>) -> Result<Self> {
        if entries.is_empty() {
            return Err(Error::Config("ブレークポイントが空です".into()));
        }

        let mut previous = 0;
        for (&width, &count) in &entries {
            if count == 0 {
                return Err(Error::Config(format!("{}px のカラム数が0です", width)));
            }
            if count < previous {
                return Err(Error::Config(format!(
                    "{}px のカラム数 {} が小さい幅の値 {} を下回っています",
                    width, count, previous
                )));
            }
            previous = count;
        }

        Ok(Self { entries })
    }

    /// 組み込みテーブル
    pub fn builtin(variant: LayoutVariant) -> Self {
        Self {
            entries: variant.builtin_entries().iter().copied().collect(),
        }
    }

    /// ビューポート幅に対するカラム数
    ///
    /// 幅以下で最大の閾値が採用される。全閾値より狭い場合は
    /// 最小閾値（最も狭いレイアウト）のカラム数を返す。
    pub fn resolve(&self, viewport_width: u32) -> usize {
        self.entries
            .range(..=viewport_width)
            .next_back()
            .or_else(|| self.entries.iter().next())
            .map(|(_, &count)| count)
            .unwrap_or(1)
    }

    /// (最小幅, カラム数) を幅の昇順で列挙
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.entries.iter().map(|(&w, &c)| (w, c))
    }
}

/// 組み込みテーブルでカラム数を解決
pub fn resolve_column_count(variant: LayoutVariant, viewport_width: u32) -> usize {
    BreakpointTable::builtin(variant).resolve(viewport_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(u32, usize)]) -> Result<BreakpointTable> {
        BreakpointTable::new(entries.iter().copied().collect())
    }

    #[test]
    fn test_resolve_default_variant() {
        assert_eq!(resolve_column_count(LayoutVariant::Default, 320), 1);
        assert_eq!(resolve_column_count(LayoutVariant::Default, 640), 2);
        assert_eq!(resolve_column_count(LayoutVariant::Default, 1023), 2);
        assert_eq!(resolve_column_count(LayoutVariant::Default, 1024), 3);
        assert_eq!(resolve_column_count(LayoutVariant::Default, 2560), 4);
    }

    #[test]
    fn test_resolve_home_variant() {
        assert_eq!(resolve_column_count(LayoutVariant::Home, 0), 1);
        assert_eq!(resolve_column_count(LayoutVariant::Home, 800), 2);
        assert_eq!(resolve_column_count(LayoutVariant::Home, 1920), 3);
    }

    #[test]
    fn test_resolve_below_every_threshold() {
        let t = table(&[(600, 2), (900, 3), (1200, 4)]).unwrap();
        assert_eq!(t.resolve(300), 2);
    }

    #[test]
    fn test_builtin_tables_are_valid() {
        for variant in LayoutVariant::ALL {
            let builtin = BreakpointTable::builtin(variant);
            let entries = builtin.iter().collect::<BTreeMap<_, _>>();
            assert_eq!(BreakpointTable::new(entries).unwrap(), builtin);
        }
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(matches!(table(&[]), Err(Error::Config(_))));
    }

    #[test]
    fn test_new_rejects_zero_columns() {
        assert!(matches!(table(&[(0, 0), (800, 2)]), Err(Error::Config(_))));
    }

    #[test]
    fn test_new_rejects_decreasing_counts() {
        assert!(matches!(table(&[(0, 3), (800, 2)]), Err(Error::Config(_))));
        assert!(table(&[(0, 2), (800, 2)]).is_ok());
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("home".parse::<LayoutVariant>(), Ok(LayoutVariant::Home));
        assert_eq!("DEFAULT".parse::<LayoutVariant>(), Ok(LayoutVariant::Default));
        assert!("gallery".parse::<LayoutVariant>().is_err());
        assert_eq!(LayoutVariant::Home.to_string(), "home");
    }
}
