//! 物品データの保存
//!
//! 追記と区分ごとの全件取得のみを提供する。
//! 照合エンジンは保存方式を知らず、取得済みのレコードだけを受け取る。

mod json;
mod memory;

pub use json::JsonStore;
pub use memory::MemoryStore;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use usfind_common::{ItemCategory, ItemRecord};

/// 保存済みの物品
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredItem {
    pub id: u64,
    pub category: ItemCategory,
    pub record: ItemRecord,
    /// 保存日時（ISO-8601）
    pub created_at: String,
}

impl AsRef<ItemRecord> for StoredItem {
    fn as_ref(&self) -> &ItemRecord {
        &self.record
    }
}

/// 件数の集計
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub found_items: usize,
    pub lost_items: usize,
    pub total_items: usize,
}

/// 物品ストア
pub trait ItemStore {
    /// 追記してIDを返す
    fn append(&mut self, category: ItemCategory, record: ItemRecord) -> Result<u64>;

    /// 区分の全件を新しい順で返す
    fn scan(&self, category: ItemCategory) -> Result<Vec<StoredItem>>;

    fn stats(&self) -> Result<StoreStats> {
        let found_items = self.scan(ItemCategory::Found)?.len();
        let lost_items = self.scan(ItemCategory::Lost)?.len();
        Ok(StoreStats {
            found_items,
            lost_items,
            total_items: found_items + lost_items,
        })
    }

    /// 品目・色の部分一致で絞り込む（大文字小文字は無視）
    fn search(
        &self,
        category: ItemCategory,
        item_type: Option<&str>,
        color: Option<&str>,
    ) -> Result<Vec<StoredItem>> {
        let item_type = item_type.map(str::to_lowercase);
        let color = color.map(str::to_lowercase);

        Ok(self
            .scan(category)?
            .into_iter()
            .filter(|item| {
                item_type
                    .as_deref()
                    .map_or(true, |t| item.record.item_type.to_lowercase().contains(t))
            })
            .filter(|item| {
                color
                    .as_deref()
                    .map_or(true, |c| item.record.color.to_lowercase().contains(c))
            })
            .collect())
    }
}

/// 現在時刻（ISO-8601、マイクロ秒まで）
pub fn now_iso8601() -> String {
    chrono::Local::now()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// 区分で絞り込み、新しい順（ID降順）に並べる
fn newest_first(items: &[StoredItem], category: ItemCategory) -> Vec<StoredItem> {
    let mut selected: Vec<StoredItem> = items
        .iter()
        .filter(|item| item.category == category)
        .cloned()
        .collect();
    selected.sort_by(|a, b| b.id.cmp(&a.id));
    selected
}
