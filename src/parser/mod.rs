mod entry;
mod primary;
mod relaxed;

pub use entry::BankEntry;

use crate::config::ReportConfig;

/// Extract ranked bank rows from the report text.
/// Tries the strict column heuristic first, then falls back to a relaxed
/// fixed-width scan. Returns an empty list when neither rule matches;
/// the caller substitutes the curated dataset.
pub fn parse_banks(raw: &str, cfg: &ReportConfig) -> Vec<BankEntry> {
    if let Some(rows) = primary::try_parse_columns(raw, cfg) {
        return rows;
    }

    if let Some(rows) = relaxed::try_parse_fixed_width(raw, cfg) {
        return rows;
    }

    tracing::warn!("Could not extract any bank rows from report text");
    Vec::new()
}

/// Parse a thousands-separated magnitude like "3,643,099" into millions.
pub(crate) fn parse_magnitude(token: &str) -> Option<u64> {
    token.replace(',', "").parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shaped like the Fed large-bank release: name, ID columns, trailing
    // consolidated assets.
    const REPORT: &str = "\
Insured U.S.-Chartered Commercial Banks That Have Consolidated Assets of $300 Million or More

Bank Name / Holding Co Name                Nat'l Rank   Bank ID     Charter    Consl Assets
---------------------------------------------------------------------------------------------
JPMORGAN CHASE BK NA/JPMORGAN CHASE & CO   1    852218   NAT   COLUMBUS, OH         3,643,099
BANK OF AMERICA NA/BANK OF AMERICA CORP    2    480228   NAT   CHARLOTTE, NC        2,540,743
WELLS FARGO BK NA/WELLS FARGO & CO         3    451965   NAT   SIOUX FALLS, SD      1,951,504
";

    #[test]
    fn test_primary_rule_wins() {
        let rows = parse_banks(REPORT, &ReportConfig::default());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].name, "JPMORGAN CHASE BK NA/JPMORGAN CHASE & CO");
        assert_eq!(rows[0].assets_millions, 3_643_099);
        assert_eq!(rows[2].name, "WELLS FARGO BK NA/WELLS FARGO & CO");
    }

    #[test]
    fn test_rows_keep_encounter_order() {
        let rows = parse_banks(REPORT, &ReportConfig::default());
        let assets: Vec<u64> = rows.iter().map(|r| r.assets_millions).collect();
        assert_eq!(assets, vec![3_643_099, 2_540_743, 1_951_504]);
    }

    #[test]
    fn test_unparseable_text_yields_empty_list() {
        let rows = parse_banks("nothing tabular here\njust prose\n", &ReportConfig::default());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_parse_magnitude() {
        assert_eq!(parse_magnitude("3,643,099"), Some(3_643_099));
        assert_eq!(parse_magnitude("68300"), Some(68_300));
        assert_eq!(parse_magnitude("12,34x"), None);
    }
}
