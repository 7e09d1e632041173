use crate::parser::BankEntry;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One row of the final ranking, in the wire shape the presentation layer
/// consumes: `{rank, name, assets, isInserted}`. `isInserted` is omitted
/// from JSON when false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    /// 1-based, contiguous within a result set.
    pub rank: u32,

    pub name: String,

    /// Millions of USD (the shared unit).
    pub assets: u64,

    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_inserted: bool,
}

/// Insert the metric-derived entry into the bank list by value and recompute
/// contiguous 1-based ranks. Stable: ties keep their encounter order.
/// Inputs are not mutated.
pub fn merge(entries: &[BankEntry], inserted_millions: u64, inserted_name: &str) -> Vec<RankedEntry> {
    let mut sorted: Vec<&BankEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.assets_millions.cmp(&a.assets_millions));

    // First entry strictly smaller than the inserted value; end if none
    let insert_at = sorted
        .iter()
        .position(|e| e.assets_millions < inserted_millions)
        .unwrap_or(sorted.len());

    let mut merged: Vec<RankedEntry> = Vec::with_capacity(sorted.len() + 1);
    for entry in &sorted[..insert_at] {
        merged.push(RankedEntry {
            rank: 0,
            name: entry.name.clone(),
            assets: entry.assets_millions,
            is_inserted: false,
        });
    }
    merged.push(RankedEntry {
        rank: 0,
        name: inserted_name.to_string(),
        assets: inserted_millions,
        is_inserted: true,
    });
    for entry in &sorted[insert_at..] {
        merged.push(RankedEntry {
            rank: 0,
            name: entry.name.clone(),
            assets: entry.assets_millions,
            is_inserted: false,
        });
    }

    for (idx, entry) in merged.iter_mut().enumerate() {
        entry.rank = idx as u32 + 1;
    }

    merged
}

/// Slice the merged ranking to `[max(1, r - half_width), r + half_width]`
/// around the inserted entry's rank r. The lower bound clamps to 1 without
/// widening the upper bound.
pub fn window_around_inserted(merged: &[RankedEntry], half_width: u32) -> Vec<RankedEntry> {
    let inserted_rank = merged
        .iter()
        .find(|e| e.is_inserted)
        .map(|e| e.rank)
        .unwrap_or(1);

    let start = inserted_rank.saturating_sub(half_width).max(1);
    let end = inserted_rank + half_width;

    merged
        .iter()
        .filter(|e| e.rank >= start && e.rank <= end)
        .cloned()
        .collect()
}
