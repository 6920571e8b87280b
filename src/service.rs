//! 拾得物登録・遺失物照合の処理フロー

use crate::error::{Result, UsfindError};
use crate::store::{now_iso8601, ItemStore, StoredItem};
use std::path::Path;
use usfind_common::{ItemCategory, ItemRecord, Matcher, ScoreBreakdown};

/// 照合で見つかった拾得物
#[derive(Debug, Clone)]
pub struct RankedItem {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub item: StoredItem,
}

/// 遺失物届の結果
#[derive(Debug, Clone)]
pub struct LostReport {
    /// 遺失物として保存したID
    pub id: u64,
    /// 照合対象になった拾得物の件数
    pub candidates_count: usize,
    /// スコア降順の照合結果（表示件数で切り詰め済み）
    pub matches: Vec<RankedItem>,
}

/// 拾得物を登録
pub fn report_found<S: ItemStore>(store: &mut S, mut record: ItemRecord) -> Result<u64> {
    stamp(&mut record);
    store.append(ItemCategory::Found, record)
}

/// 遺失物を登録し、拾得物と照合する
pub fn report_lost<S: ItemStore>(
    store: &mut S,
    mut record: ItemRecord,
    matcher: &Matcher,
    limit: usize,
) -> Result<LostReport> {
    stamp(&mut record);
    let id = store.append(ItemCategory::Lost, record.clone())?;

    let found_items = store.scan(ItemCategory::Found)?;
    let matches: Vec<RankedItem> = matcher
        .rank(&record, &found_items)
        .into_iter()
        .take(limit)
        .map(|m| RankedItem {
            score: m.score,
            breakdown: m.breakdown,
            item: m.candidate.clone(),
        })
        .collect();

    tracing::debug!(
        id,
        candidates = found_items.len(),
        matches = matches.len(),
        threshold = matcher.weights().threshold,
        "照合完了"
    );

    Ok(LostReport {
        id,
        candidates_count: found_items.len(),
        matches,
    })
}

/// JSONファイルからレコードを読み込む
pub fn load_record(path: &Path) -> Result<ItemRecord> {
    if !path.exists() {
        return Err(UsfindError::FileNotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| UsfindError::InvalidRecord(format!("{}: {}", path.display(), e)))
}

fn stamp(record: &mut ItemRecord) {
    if record.timestamp.is_empty() {
        record.timestamp = now_iso8601();
    }
}
