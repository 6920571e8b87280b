//! APIレスポンスパーサー
//!
//! AI CLIの応答テキストからJSONを抽出し、ItemRecordに変換する

use crate::error::{Error, Result};
use crate::types::ItemRecord;

/// APIレスポンスからJSON部分を抽出
///
/// 抽出優先順位:
/// 1. ```json ... ``` ブロック
/// 2. ``` ... ``` ブロック
/// 3. 生の {...} オブジェクト
/// 4. エラー
///
/// # Examples
/// ```
/// use usfind_common::extract_json;
///
/// let response = "結果: {\"item_type\": \"wallet\"}";
/// let json = extract_json(response).unwrap();
/// assert_eq!(json, "{\"item_type\": \"wallet\"}");
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    if let Some(block) = fenced_block(response, "```json") {
        return Ok(block);
    }

    if let Some(block) = fenced_block(response, "```") {
        return Ok(block);
    }

    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end > start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSONが見つかりません".into()))
}

/// 開始マーカーから次の ``` までを取り出す
fn fenced_block<'a>(response: &'a str, marker: &str) -> Option<&'a str> {
    let start = response.find(marker)? + marker.len();
    let end = start + response[start..].find("```")?;
    Some(response[start..end].trim())
}

/// 物品抽出レスポンスをパース
///
/// # Returns
/// * `Ok(ItemRecord)` - パース成功（欠損フィールドは空文字）
/// * `Err` - JSONが見つからないかパース失敗
pub fn parse_item_response(response: &str) -> Result<ItemRecord> {
    let json_str = extract_json(response)?;
    serde_json::from_str(json_str)
        .map_err(|e| Error::Parse(format!("物品情報 JSONパースエラー: {}", e)))
}
