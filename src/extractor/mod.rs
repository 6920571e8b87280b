//! 写真からの物品情報抽出
//!
//! AI CLIに画像ファイルを読ませ、JSON応答をItemRecordに変換する。
//! 失敗時は "Unknown" で埋めたレコードを返し、照合側にエラーを渡さない。

mod cli_runner;

pub use cli_runner::run_ai_cli;

use crate::ai_provider::AiProvider;
use crate::error::{Result, UsfindError};
use std::path::Path;
use std::time::Duration;
use usfind_common::{build_extraction_prompt, parse_item_response, ItemRecord};

/// 写真から物品情報を抽出（失敗時は抽出失敗レコード）
pub async fn extract_item(image: &Path, provider: AiProvider, timeout: Duration) -> ItemRecord {
    match try_extract(image, provider, timeout).await {
        Ok(record) => record,
        Err(e) => {
            tracing::warn!(error = %e, image = %image.display(), "物品情報の抽出に失敗");
            let mut record = ItemRecord::extraction_failed(&e);
            record.image_path = Some(image.display().to_string());
            record
        }
    }
}

/// 写真から物品情報を抽出
pub async fn try_extract(
    image: &Path,
    provider: AiProvider,
    timeout: Duration,
) -> Result<ItemRecord> {
    let prompt = build_image_prompt(image)?;
    let args = provider.args(&prompt);

    let response = run_ai_cli(provider.command_name(), &args, timeout).await?;

    let mut record = parse_response(&response)?;
    record.image_path = Some(image.display().to_string());
    Ok(record)
}

/// 画像パスを含むプロンプトを構築
fn build_image_prompt(image: &Path) -> Result<String> {
    let abs_path = std::fs::canonicalize(image)?;
    let image_ref = abs_path.display().to_string().replace('\\', "/");

    let raw_prompt = format!(
        "Read the following image file and analyze it: {}\n\n{}",
        image_ref,
        build_extraction_prompt()
    );

    // cmd経由では改行と引用符が壊れる
    if cfg!(windows) {
        Ok(raw_prompt.replace('\n', " ").replace('"', "\\\""))
    } else {
        Ok(raw_prompt)
    }
}

/// 物品抽出レスポンスをパース（共通パーサーをラップ）
fn parse_response(response: &str) -> Result<ItemRecord> {
    parse_item_response(response).map_err(|e| UsfindError::ApiParse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_response_wraps_error() {
        let result = parse_response("no json");
        assert!(matches!(result, Err(UsfindError::ApiParse(_))));
    }

    #[test]
    fn test_parse_response_ok() {
        let response = "```json\n{\"item_type\": \"keys\", \"color\": \"silver\"}\n```";
        let record = parse_response(response).unwrap();
        assert_eq!(record.item_type, "keys");
        assert_eq!(record.color, "silver");
    }

    #[test]
    fn test_build_image_prompt_contains_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("found.jpg");
        std::fs::write(&path, b"dummy").unwrap();

        let prompt = build_image_prompt(&path).unwrap();
        assert!(prompt.contains("found.jpg"));
        assert!(prompt.contains("item_type"));
    }

    #[tokio::test]
    async fn test_extract_missing_image_returns_sentinel() {
        let path = Path::new("/nonexistent/lost.jpg");
        let record = extract_item(path, AiProvider::Claude, Duration::from_secs(1)).await;

        assert!(record.is_extraction_failure());
        assert_eq!(record.item_type, "Unknown");
        assert_eq!(record.brand, "Unknown");
        assert!(record.features.starts_with("Error: "));
        assert_eq!(record.image_path.as_deref(), Some("/nonexistent/lost.jpg"));
    }
}
