use super::{parse_magnitude, BankEntry};
use crate::config::ReportConfig;
use regex::Regex;

/// Relaxed fallback heuristic, used only when the strict column rule yields
/// nothing. Any sufficiently long line carrying a thousands-separated number
/// is taken as a row: fixed-width prefix as the name, last number token as
/// the magnitude.
pub fn try_parse_fixed_width(raw: &str, cfg: &ReportConfig) -> Option<Vec<BankEntry>> {
    let signal_re = Regex::new(r"\d{2,3},\d{3}").ok()?;
    let number_re = Regex::new(r"\d{1,3}(?:,\d{3})*").ok()?;

    let mut rows = Vec::new();

    for line in raw.lines() {
        if line.len() <= cfg.relaxed_min_line_len || !signal_re.is_match(line) {
            continue;
        }

        let name: String = line.chars().take(cfg.name_prefix_width).collect();
        let name = name.trim();
        if name.is_empty() {
            continue;
        }

        let Some(last_number) = number_re.find_iter(line).last() else {
            continue;
        };
        let Some(assets) = parse_magnitude(last_number.as_str()) else {
            continue;
        };

        if assets <= cfg.min_assets_millions {
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

#[cfg(test)]
mod tests {
    use super::*;

    fn long_row(prefix: &str, assets: &str) -> String {
        // Pad past the 100-char relaxed minimum
        format!("{prefix:<40}{:<65}{assets}", "0123456 NAT SOMEWHERE, ST")
    }

    #[test]
    fn test_parses_long_lines() {
        let raw = format!(
            "{}\n{}\n",
            long_row("PNC Bank NA / PNC Financial Services", "560,000"),
            long_row("Ally Bank / Ally Financial", "190,432"),
        );

        let rows = try_parse_fixed_width(&raw, &ReportConfig::default()).unwrap();
        assert_eq!(rows.len(), 2);
        // Name is the trimmed 40-char prefix, case preserved
        assert_eq!(rows[0].name, "PNC Bank NA / PNC Financial Services");
        assert_eq!(rows[0].assets_millions, 560_000);
        assert_eq!(rows[1].assets_millions, 190_432);
    }

    #[test]
    fn test_takes_last_number_token() {
        let line = long_row("Discover Bank / Discover FC 1999", "130,456");
        let rows = try_parse_fixed_width(&line, &ReportConfig::default()).unwrap();
        assert_eq!(rows[0].assets_millions, 130_456);
    }

    #[test]
    fn test_ignores_short_lines() {
        let raw = "SHORT LINE 120,000";
        assert!(try_parse_fixed_width(raw, &ReportConfig::default()).is_none());
    }

    #[test]
    fn test_requires_separated_number_signal() {
        let raw = format!("{:<120}", "A long line of prose with a plain number 1234567 in it");
        assert!(try_parse_fixed_width(&raw, &ReportConfig::default()).is_none());
    }
}
