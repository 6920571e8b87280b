//! JSONファイルストア
//!
//! 全件を1つのJSONファイルに保持し、追記のたびに書き出す。
//! 書き出しは一時ファイル経由で置き換える。

use super::{newest_first, now_iso8601, ItemStore, StoredItem};
use crate::error::{Result, UsfindError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use usfind_common::{ItemCategory, ItemRecord};

/// 保存ファイルの構造
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoreFile {
    /// バージョン（互換性チェック用）
    version: u32,
    /// 次に採番するID
    next_id: u64,
    items: Vec<StoredItem>,
}

impl Default for StoreFile {
    fn default() -> Self {
        Self {
            version: JsonStore::CURRENT_VERSION,
            next_id: 1,
            items: Vec::new(),
        }
    }
}

#[derive(Debug)]
pub struct JsonStore {
    path: PathBuf,
    data: StoreFile,
}

impl JsonStore {
    const CURRENT_VERSION: u32 = 1;

    /// ストアを開く（ファイルがなければ空）
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "新規ストア");
            return Ok(Self {
                path,
                data: StoreFile::default(),
            });
        }

        let reader = BufReader::new(File::open(&path)?);
        let data: StoreFile = serde_json::from_reader(reader)?;

        if data.version != Self::CURRENT_VERSION {
            return Err(UsfindError::InvalidStore(format!(
                "バージョン不一致（{} / 対応: {}）: {}",
                data.version,
                Self::CURRENT_VERSION,
                path.display()
            )));
        }

        tracing::debug!(path = %path.display(), items = data.items.len(), "ストアを読み込みました");
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.data.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.items.is_empty()
    }

    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let tmp_path = self.path.with_extension("json.tmp");
        {
            let mut writer = BufWriter::new(File::create(&tmp_path)?);
            serde_json::to_writer_pretty(&mut writer, &self.data)?;
            writer.flush()?;
        }
        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl ItemStore for JsonStore {
    fn append(&mut self, category: ItemCategory, record: ItemRecord) -> Result<u64> {
        let id = self.data.next_id;
        self.data.next_id += 1;
        self.data.items.push(StoredItem {
            id,
            category,
            record,
            created_at: now_iso8601(),
        });

        // 書き出しに失敗したら追記を取り消す
        if let Err(e) = self.save() {
            self.data.items.pop();
            self.data.next_id = id;
            return Err(e);
        }

        tracing::info!(id, %category, "物品を保存しました");
        Ok(id)
    }

    fn scan(&self, category: ItemCategory) -> Result<Vec<StoredItem>> {
        Ok(newest_first(&self.data.items, category))
    }
}
