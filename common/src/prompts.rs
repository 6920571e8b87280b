//! プロンプト生成モジュール
//!
//! 写真から物品情報を抽出するためのプロンプト

/// 抽出結果のJSONキー
pub const ITEM_KEYS: &[&str] = &["item_type", "color", "brand", "features", "description"];

/// 物品抽出プロンプト生成
///
/// AIには英語で指示し、固定キーのJSONオブジェクトのみを返させる
pub fn build_extraction_prompt() -> String {
    let keys = ITEM_KEYS.join(", ");

    format!(
        r#"Analyze this image of a lost/found item and extract the following information in a structured format:
- Item Type: (e.g., phone, wallet, keys, bag, etc.)
- Color: (primary color)
- Brand/Model: (if visible, otherwise "Unknown")
- Distinctive Features: (unique characteristics, damages, stickers, etc.)
- Description: (brief overall description)

Format your response as a single JSON object with these exact keys: {keys}"#
    )
}
