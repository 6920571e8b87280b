//! 遺失物照合エンジン
//!
//! 遺失物1件（クエリ）と拾得物の集合（候補）を比較し、
//! 4つの独立したシグナルの加点方式でスコアを算出する。
//!
//! | シグナル | 配点 | 条件 |
//! |---|---|---|
//! | 品目 | 40 | 大文字小文字を無視した完全一致 |
//! | 色 | 25 | どちらかがもう一方を部分文字列として含む（空文字は常に含まれる） |
//! | ブランド | 20 | 完全一致、かつクエリ側が `"Unknown"` でない |
//! | 特徴 | 最大15 | 共通単語数 × 5 |
//!
//! スコアは整数で、閾値（既定30）以上の候補のみを降順で返す。
//! 同点の候補は入力順を保つ。

use crate::types::ItemRecord;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 品目一致の既定配点
pub const DEFAULT_ITEM_TYPE_POINTS: u32 = 40;
/// 色一致の既定配点
pub const DEFAULT_COLOR_POINTS: u32 = 25;
/// ブランド一致の既定配点
pub const DEFAULT_BRAND_POINTS: u32 = 20;
/// 共通特徴1語あたりの既定配点
pub const DEFAULT_FEATURE_POINTS_PER_TOKEN: u32 = 5;
/// 特徴シグナルの既定上限
pub const DEFAULT_FEATURE_CAP: u32 = 15;
/// 候補として採用する既定の最低スコア
pub const DEFAULT_THRESHOLD: u32 = 30;

/// 配点と採用閾値
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchWeights {
    pub item_type: u32,
    pub color: u32,
    pub brand: u32,
    pub feature_per_token: u32,
    pub feature_cap: u32,
    pub threshold: u32,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            item_type: DEFAULT_ITEM_TYPE_POINTS,
            color: DEFAULT_COLOR_POINTS,
            brand: DEFAULT_BRAND_POINTS,
            feature_per_token: DEFAULT_FEATURE_POINTS_PER_TOKEN,
            feature_cap: DEFAULT_FEATURE_CAP,
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl MatchWeights {
    /// 全シグナル満点時のスコア（u32::MAX で頭打ち）
    pub fn max_score(&self) -> u32 {
        self.item_type
            .saturating_add(self.color)
            .saturating_add(self.brand)
            .saturating_add(self.feature_cap)
    }
}

/// シグナル別の得点内訳
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub item_type: u32,
    pub color: u32,
    pub brand: u32,
    pub features: u32,
    /// 共通する特徴語（アルファベット順）
    pub shared_features: Vec<String>,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.item_type
            .saturating_add(self.color)
            .saturating_add(self.brand)
            .saturating_add(self.features)
    }
}

/// 照合結果
///
/// 候補は呼び出し側のコレクションを借用する。
#[derive(Debug, Clone)]
pub struct MatchResult<'a, T = ItemRecord> {
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub candidate: &'a T,
}

/// 照合器
///
/// 状態を持たないため、スレッド間で自由に共有できる。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Matcher {
    weights: MatchWeights,
}

impl Matcher {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    /// シグナル別の内訳を算出
    pub fn explain(&self, query: &ItemRecord, candidate: &ItemRecord) -> ScoreBreakdown {
        let w = &self.weights;

        let item_type = if eq_ignore_case(&query.item_type, &candidate.item_type) {
            w.item_type
        } else {
            0
        };

        let color = if contains_either_way(&query.color, &candidate.color) {
            w.color
        } else {
            0
        };

        // センチネル判定は大文字小文字を区別する
        let brand = if query.brand != ItemRecord::UNKNOWN
            && eq_ignore_case(&query.brand, &candidate.brand)
        {
            w.brand
        } else {
            0
        };

        let shared_features = shared_tokens(&query.features, &candidate.features);
        let overlap = u32::try_from(shared_features.len()).unwrap_or(u32::MAX);
        let features = overlap.saturating_mul(w.feature_per_token).min(w.feature_cap);

        ScoreBreakdown {
            item_type,
            color,
            brand,
            features,
            shared_features,
        }
    }

    /// 2件のレコードの適合スコア
    pub fn score(&self, query: &ItemRecord, candidate: &ItemRecord) -> u32 {
        self.explain(query, candidate).total()
    }

    /// 候補をスコア降順に並べ、閾値未満を除外する
    ///
    /// 同点の候補は入力順を保つ（安定ソート）。表示件数の切り詰めは呼び出し側で行う。
    pub fn rank<'a, T>(&self, query: &ItemRecord, candidates: &'a [T]) -> Vec<MatchResult<'a, T>>
    where
        T: AsRef<ItemRecord> + Sync,
    {
        let breakdowns = self.explain_all(query, candidates);

        let mut results: Vec<MatchResult<'a, T>> = candidates
            .iter()
            .zip(breakdowns)
            .map(|(candidate, breakdown)| MatchResult {
                score: breakdown.total(),
                breakdown,
                candidate,
            })
            .filter(|r| r.score >= self.weights.threshold)
            .collect();

        results.sort_by(|a, b| b.score.cmp(&a.score));
        results
    }

    #[cfg(feature = "parallel")]
    fn explain_all<T>(&self, query: &ItemRecord, candidates: &[T]) -> Vec<ScoreBreakdown>
    where
        T: AsRef<ItemRecord> + Sync,
    {
        use rayon::prelude::*;

        candidates
            .par_iter()
            .map(|c| self.explain(query, c.as_ref()))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn explain_all<T>(&self, query: &ItemRecord, candidates: &[T]) -> Vec<ScoreBreakdown>
    where
        T: AsRef<ItemRecord> + Sync,
    {
        candidates
            .iter()
            .map(|c| self.explain(query, c.as_ref()))
            .collect()
    }
}

/// 既定の配点でスコアを算出
pub fn score(query: &ItemRecord, candidate: &ItemRecord) -> u32 {
    Matcher::default().score(query, candidate)
}

/// 既定の配点で内訳を算出
pub fn explain(query: &ItemRecord, candidate: &ItemRecord) -> ScoreBreakdown {
    Matcher::default().explain(query, candidate)
}

/// 既定の配点と閾値で候補を順位付け
pub fn rank<'a, T>(query: &ItemRecord, candidates: &'a [T]) -> Vec<MatchResult<'a, T>>
where
    T: AsRef<ItemRecord> + Sync,
{
    Matcher::default().rank(query, candidates)
}

fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// 空文字は任意の文字列に含まれる
fn contains_either_way(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    b.contains(a.as_str()) || a.contains(b.as_str())
}

fn tokenize(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn shared_tokens(a: &str, b: &str) -> Vec<String> {
    let a = tokenize(a);
    let b = tokenize(b);
    let mut shared: Vec<String> = a.intersection(&b).cloned().collect();
    shared.sort();
    shared
}
