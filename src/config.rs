use crate::error::{PhotoGridError, Result};
use photo_grid_common::{BalanceOptions, BreakpointTable, LayoutVariant, PhotoGrid};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_variant: LayoutVariant,
    pub default_viewport_width: Option<u32>,
    pub min_difference: f64,
    /// 種別ごとのブレークポイント上書き（最小幅 → カラム数）
    pub breakpoints: HashMap<LayoutVariant, BTreeMap<u32, usize>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_variant: LayoutVariant::Default,
            default_viewport_width: None,
            min_difference: 0.0,
            breakpoints: HashMap::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        // 上書きテーブルは使う種別の分だけ breakpoint_table で検証する
        let config: Config = serde_json::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PhotoGridError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("photo-grid").join("config.json"))
    }

    /// 上書きがあればそれを、なければ組み込みテーブルを返す
    pub fn breakpoint_table(&self, variant: LayoutVariant) -> Result<BreakpointTable> {
        match self.breakpoints.get(&variant) {
            Some(entries) => Ok(BreakpointTable::new(entries.clone())?),
            None => Ok(BreakpointTable::builtin(variant)),
        }
    }

    /// ビューポート幅（指定 → 既定の幅 の順）
    pub fn viewport_width(&self, width: Option<u32>) -> Result<u32> {
        width
            .or(self.default_viewport_width)
            .ok_or(PhotoGridError::MissingColumnCount)
    }

    pub fn photo_grid(&self, variant: LayoutVariant, min_difference: Option<f64>) -> Result<PhotoGrid> {
        Ok(PhotoGrid::new(
            self.breakpoint_table(variant)?,
            self.balance_options(min_difference),
        ))
    }

    pub fn balance_options(&self, min_difference: Option<f64>) -> BalanceOptions {
        BalanceOptions {
            min_difference: min_difference.unwrap_or(self.min_difference),
        }
    }
}
