use super::{parse_magnitude, BankEntry};
use crate::config::ReportConfig;
use regex::Regex;

/// Strict column heuristic for the report's fixed-width listing.
/// A data row ends in a thousands-separated asset figure and starts with an
/// uppercase name run that stops before the numeric bank identifier.
pub fn try_parse_columns(raw: &str, cfg: &ReportConfig) -> Option<Vec<BankEntry>> {
    let assets_re = Regex::new(r"(\d{1,3}(?:,\d{3})*)\s*$").ok()?;
    let name_re = Regex::new(r"^([A-Z\s/&]+?)\s+\d+\s+").ok()?;

    let mut rows = Vec::new();

    for line in raw.lines() {
        // Skip empty lines and headers
        if line.trim().is_empty() || line.contains("Bank Name") || line.contains("---") {
            continue;
        }

        if line.len() <= cfg.min_line_len {
            continue;
        }

        let Some(assets_caps) = assets_re.captures(line) else {
            continue;
        };
        let Some(name_caps) = name_re.captures(line) else {
            continue;
        };

        let name = name_caps[1].trim();
        let Some(assets) = parse_magnitude(&assets_caps[1]) else {
            continue;
        };

        // Noise and false-positive filters
        if assets <= cfg.min_assets_millions || name.len() <= cfg.min_name_len {
            continue;
        }

        rows.push(BankEntry::new(name, assets));
    }

    if rows.is_empty() {
        None
    } else {
        Some(rows)
    }
}
