use crate::error::{Result, UsfindError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use usfind_common::MatchWeights;

/// 保存先を上書きする環境変数
pub const STORE_ENV: &str = "USFIND_STORE";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 物品データの保存先（省略時は ~/.config/usfind/items.json）
    pub store_path: Option<PathBuf>,
    /// 照合結果の表示件数
    pub display_limit: usize,
    /// AI解析のタイムアウト
    pub timeout_seconds: u64,
    /// 照合の配点と閾値
    pub matching: MatchWeights,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            display_limit: 6,
            timeout_seconds: 120,
            matching: MatchWeights::default(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            tracing::debug!(path = %config_path.display(), "設定を読み込みました");
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| UsfindError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("usfind"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// 保存先を解決（環境変数 > 設定 > 既定）
    pub fn resolve_store_path(&self) -> Result<PathBuf> {
        if let Ok(path) = std::env::var(STORE_ENV) {
            if !path.trim().is_empty() {
                return Ok(PathBuf::from(path));
            }
        }

        match &self.store_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::config_dir()?.join("items.json")),
        }
    }

    pub fn set_threshold(&mut self, threshold: u32) -> Result<()> {
        if threshold > self.matching.max_score() {
            return Err(UsfindError::Config(format!(
                "閾値は0〜{}で指定してください: {}",
                self.matching.max_score(),
                threshold
            )));
        }
        self.matching.threshold = threshold;
        self.save()
    }

    pub fn set_display_limit(&mut self, limit: usize) -> Result<()> {
        if limit == 0 {
            return Err(UsfindError::Config("表示件数は1以上で指定してください".into()));
        }
        self.display_limit = limit;
        self.save()
    }

    pub fn set_store_path(&mut self, path: PathBuf) -> Result<()> {
        self.store_path = Some(path);
        self.save()
    }
}
