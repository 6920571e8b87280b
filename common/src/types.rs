//! 遺失物・拾得物レコードの型定義
//!
//! - ItemRecord: 1件の物品の属性（AI抽出 or 手入力）
//! - ItemCategory: 拾得(found) / 遺失(lost) の区分

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// 物品レコード
///
/// 文字列フィールドはすべて欠損時に空文字になる。
/// JSONの `null` や数値・配列など文字列以外の値も空文字として受け入れる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// 品目（"Unknown" は未判定）
    #[serde(default, deserialize_with = "lenient_string")]
    pub item_type: String,

    /// 色（複数語可）
    #[serde(default, deserialize_with = "lenient_string")]
    pub color: String,

    /// ブランド・型番（"Unknown" は未判定）
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: String,

    /// 特徴（空白区切りの単語集合として扱う）
    #[serde(default, deserialize_with = "lenient_string")]
    pub features: String,

    /// 説明文（照合には使わない）
    #[serde(default, deserialize_with = "lenient_string")]
    pub description: String,

    /// 画像への参照
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    /// 作成日時（ISO-8601）
    #[serde(default, deserialize_with = "lenient_string")]
    pub timestamp: String,
}

impl ItemRecord {
    /// 未判定を表す値
    pub const UNKNOWN: &'static str = "Unknown";

    /// AI抽出に失敗した場合のレコード
    pub fn extraction_failed(reason: impl std::fmt::Display) -> Self {
        Self {
            item_type: Self::UNKNOWN.into(),
            color: Self::UNKNOWN.into(),
            brand: Self::UNKNOWN.into(),
            features: format!("Error: {}", reason),
            description: "Extraction failed".into(),
            ..Default::default()
        }
    }

    /// 抽出失敗レコードかどうか
    pub fn is_extraction_failure(&self) -> bool {
        self.description == "Extraction failed" && self.item_type == Self::UNKNOWN
    }
}

impl AsRef<ItemRecord> for ItemRecord {
    fn as_ref(&self) -> &ItemRecord {
        self
    }
}

/// 物品の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Found,
    Lost,
}

impl std::fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemCategory::Found => write!(f, "found"),
            ItemCategory::Lost => write!(f, "lost"),
        }
    }
}

/// 文字列以外（null・数値・真偽値・配列・オブジェクト）は空文字
fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record: ItemRecord = serde_json::from_str(r#"{"item_type": "wallet"}"#).unwrap();
        assert_eq!(record.item_type, "wallet");
        assert_eq!(record.color, "");
        assert_eq!(record.brand, "");
        assert_eq!(record.features, "");
        assert_eq!(record.image_path, None);
        assert_eq!(record.timestamp, "");
    }

    #[test]
    fn test_null_fields_become_empty() {
        let record: ItemRecord =
            serde_json::from_str(r#"{"item_type": null, "color": null, "image_path": null}"#)
                .unwrap();
        assert_eq!(record.item_type, "");
        assert_eq!(record.color, "");
        assert_eq!(record.image_path, None);
    }

    #[test]
    fn test_non_string_values_become_empty() {
        let record: ItemRecord = serde_json::from_str(
            r#"{"brand": 13, "features": ["zip"], "item_type": true, "color": {"a": 1}}"#,
        )
        .unwrap();
        assert_eq!(record.brand, "");
        assert_eq!(record.features, "");
        assert_eq!(record.item_type, "");
        assert_eq!(record.color, "");
    }

    // 数値の色は空文字扱いで色点を得る、数値のブランドは加点しない
    #[test]
    fn test_non_string_values_score_as_empty() {
        let query: ItemRecord =
            serde_json::from_str(r#"{"item_type": "wallet", "color": 7, "brand": 13}"#).unwrap();
        let candidate: ItemRecord =
            serde_json::from_str(r#"{"item_type": "wallet", "color": "blue", "brand": "13"}"#)
                .unwrap();

        let breakdown = crate::matcher::explain(&query, &candidate);
        assert_eq!(breakdown.item_type, 40);
        assert_eq!(breakdown.color, 25);
        assert_eq!(breakdown.brand, 0);
        assert_eq!(breakdown.total(), 65);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let record: ItemRecord =
            serde_json::from_str(r#"{"item_type": "keys", "id": 4, "type": "found"}"#).unwrap();
        assert_eq!(record.item_type, "keys");
    }

    #[test]
    fn test_extraction_failed_record() {
        let record = ItemRecord::extraction_failed("timeout");
        assert_eq!(record.item_type, "Unknown");
        assert_eq!(record.color, "Unknown");
        assert_eq!(record.brand, "Unknown");
        assert_eq!(record.features, "Error: timeout");
        assert_eq!(record.description, "Extraction failed");
        assert!(record.is_extraction_failure());
        assert!(!ItemRecord::default().is_extraction_failure());
    }

    #[test]
    fn test_category_serde() {
        assert_eq!(serde_json::to_string(&ItemCategory::Found).unwrap(), r#""found""#);
        let lost: ItemCategory = serde_json::from_str(r#""lost""#).unwrap();
        assert_eq!(lost, ItemCategory::Lost);
        assert_eq!(ItemCategory::Lost.to_string(), "lost");
    }
}
