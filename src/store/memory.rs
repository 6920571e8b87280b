use super::{newest_first, now_iso8601, ItemStore, StoredItem};
use crate::error::Result;
use usfind_common::{ItemCategory, ItemRecord};

/// メモリ上のストア（テスト・一時利用）
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Vec<StoredItem>,
    next_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl ItemStore for MemoryStore {
    fn append(&mut self, category: ItemCategory, record: ItemRecord) -> Result<u64> {
        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.items.push(StoredItem {
            id,
            category,
            record,
            created_at: now_iso8601(),
        });
        Ok(id)
    }

    fn scan(&self, category: ItemCategory) -> Result<Vec<StoredItem>> {
        Ok(newest_first(&self.items, category))
    }
}
