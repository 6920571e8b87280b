//! 端末表示用の整形

use crate::service::RankedItem;
use crate::store::{StoreStats, StoredItem};
use usfind_common::{ItemRecord, ScoreBreakdown};

/// 単語ごとに先頭を大文字化（"black WALLET" → "Black Wallet"）
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_alpha = false;

    for c in text.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }

    out
}

/// 空欄は "—"
pub fn display_or_dash(text: &str) -> &str {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        "—"
    } else {
        trimmed
    }
}

/// 日時文字列の日付部分
pub fn date_part(timestamp: &str) -> String {
    timestamp.chars().take(10).collect()
}

/// 保存したレコードの詳細
pub fn render_record(record: &ItemRecord) -> String {
    let mut lines = vec![
        format!("品目: {}", display_or_dash(&record.item_type)),
        format!("色: {}", display_or_dash(&record.color)),
        format!("ブランド: {}", display_or_dash(&record.brand)),
        format!("特徴: {}", display_or_dash(&record.features)),
        format!("説明: {}", display_or_dash(&record.description)),
    ];
    if let Some(path) = &record.image_path {
        lines.push(format!("画像: {}", path));
    }
    lines.join("\n")
}

/// 一覧表示用の1件
pub fn render_item(item: &StoredItem) -> String {
    let record = &item.record;
    format!(
        "#{} {} ({})\n  ブランド: {}\n  登録日: {}",
        item.id,
        title_case(display_or_dash(&record.item_type)),
        record.color,
        display_or_dash(&record.brand),
        display_or_dash(&date_part(&record.timestamp)),
    )
}

/// 得点内訳
pub fn render_breakdown(breakdown: &ScoreBreakdown) -> String {
    let mut line = format!(
        "品目 {} / 色 {} / ブランド {} / 特徴 {}",
        breakdown.item_type, breakdown.color, breakdown.brand, breakdown.features
    );
    if !breakdown.shared_features.is_empty() {
        line.push_str(&format!(" ({})", breakdown.shared_features.join(", ")));
    }
    line
}

/// 照合結果の1件
pub fn render_match(ranked: &RankedItem) -> String {
    let record = &ranked.item.record;
    let mut lines = vec![
        format!("一致度: {}%  [#{}]", ranked.score, ranked.item.id),
        format!(
            "  品目: {} ({})",
            title_case(display_or_dash(&record.item_type)),
            record.color
        ),
        format!("  ブランド: {}", display_or_dash(&record.brand)),
        format!("  特徴: {}", display_or_dash(&record.features)),
        format!("  拾得日: {}", display_or_dash(&date_part(&record.timestamp))),
        format!("  内訳: {}", render_breakdown(&ranked.breakdown)),
    ];
    if let Some(path) = &record.image_path {
        lines.push(format!("  画像: {}", path));
    }
    lines.join("\n")
}

pub fn render_stats(stats: &StoreStats) -> String {
    format!(
        "拾得物: {}件\n遺失物: {}件\n合計: {}件",
        stats.found_items, stats.lost_items, stats.total_items
    )
}
