//! 手入力による物品情報
//!
//! - 遺失物: テキスト入力からレコードを組み立てる
//! - 拾得物: AI抽出結果を手入力値で上書きする

use crate::types::ItemRecord;

/// 手入力フィールド
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualEntry {
    pub item_type: String,
    pub color: String,
    pub brand: String,
    pub features: String,
}

impl ManualEntry {
    /// すべて空欄かどうか
    pub fn is_blank(&self) -> bool {
        [&self.item_type, &self.color, &self.brand, &self.features]
            .iter()
            .all(|s| s.trim().is_empty())
    }

    /// 遺失物レコードを組み立てる
    ///
    /// 品目・色・ブランドの空欄は "Unknown"、特徴の空欄は空文字のまま。
    pub fn into_lost_record(self) -> ItemRecord {
        let description = format!("{} {} {}", self.color, self.brand, self.item_type)
            .trim()
            .to_string();

        ItemRecord {
            item_type: or_unknown(&self.item_type),
            color: or_unknown(&self.color),
            brand: or_unknown(&self.brand),
            features: self.features.trim().to_string(),
            description,
            ..Default::default()
        }
    }

    /// 入力のあるフィールドだけレコードを上書きする
    pub fn apply_overrides(&self, record: &mut ItemRecord) {
        let overrides = [
            (&self.item_type, &mut record.item_type),
            (&self.color, &mut record.color),
            (&self.brand, &mut record.brand),
            (&self.features, &mut record.features),
        ];

        for (value, target) in overrides {
            if !value.is_empty() {
                *target = value.clone();
            }
        }
    }
}

fn or_unknown(value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        ItemRecord::UNKNOWN.to_string()
    } else {
        trimmed.to_string()
    }
}
