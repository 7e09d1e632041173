pub fn default_version() -> u32 {
    1
}

pub fn default_window_half_width() -> u32 {
    5
}

pub fn default_metric_label() -> String {
    "AAVE".to_string()
}

pub fn default_metric_api_url() -> String {
    "https://api.tokenterminal.com/v2/projects/aave/metrics".to_string()
}

pub fn default_metric_api_field() -> String {
    "net_deposits".to_string()
}

pub fn default_metric_page_url() -> String {
    "https://tokenterminal.com/explorer/projects/aave/metrics/net-deposits".to_string()
}

pub fn default_metric_fallback_millions() -> u64 {
    68_300 // $68.3B
}

pub fn default_plausible_min_billions() -> f64 {
    10.0
}

pub fn default_plausible_max_billions() -> f64 {
    500.0
}

pub fn default_report_url() -> String {
    "https://www.federalreserve.gov/releases/lbr/current/".to_string()
}

pub fn default_min_line_len() -> usize {
    50
}

pub fn default_relaxed_min_line_len() -> usize {
    100
}

pub fn default_min_assets_millions() -> u64 {
    10_000
}

pub fn default_min_name_len() -> usize {
    3
}

pub fn default_name_prefix_width() -> usize {
    40
}

pub fn default_timeout_sec() -> u64 {
    20
}

pub fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36".to_string()
}

pub fn default_max_attempts() -> u32 {
    2
}

pub fn default_backoff_base_ms() -> u64 {
    500
}
