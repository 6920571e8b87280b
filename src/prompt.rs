//! 対話式の物品情報入力

use crate::error::{Result, UsfindError};
use dialoguer::Input;
use usfind_common::ManualEntry;

/// 4項目を順に入力させる（空欄可）
pub fn prompt_manual_entry() -> Result<ManualEntry> {
    println!("📝 なくした物の特徴を入力してください（空欄でスキップ）\n");

    Ok(ManualEntry {
        item_type: ask("品目 (例: phone, wallet, bag)")?,
        color: ask("色 (例: black, blue, red)")?,
        brand: ask("ブランド・型番 (例: iPhone 13, Nike)")?,
        features: ask("特徴 (例: cracked screen, red sticker)")?,
    })
}

fn ask(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| UsfindError::Prompt(e.to_string()))?;

    Ok(input.trim().to_string())
}
