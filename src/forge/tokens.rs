//! Default token tables and date/year token construction

use chrono::Datelike;
use std::collections::HashSet;

/// Base words used when the user supplies none
pub const DEFAULT_BASE_WORDS: &[&str] = &[
    "admin", "user", "password", "root", "login", "test", "guest",
];

/// Numeric suffixes
pub const DEFAULT_NUMBERS: &[&str] = &[
    "", "1", "12", "123", "1234", "12345", "123456",
    "2020", "2021", "2022", "2023", "2024",
];

/// Symbols inserted in full mode
pub const DEFAULT_SYMBOLS: &[&str] = &[
    "", "!", "@", "#", "$", "%", "&", "*", "-", "_", ".",
];

/// Separators between word and number. The repeated empty entries weight
/// the unseparated form.
pub const DEFAULT_SEPARATORS: &[&str] = &["", "", "", "", "-", "_"];

/// Year-independent date tokens
const FIXED_DATE_TOKENS: &[&str] = &["0101", "1010"];

/// Legacy year kept in the default token set
const LEGACY_YEAR: &str = "2020";

pub fn to_owned(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

/// Date tokens for every year in `start..=end`.
///
/// Each year contributes `y`, `01y`, `y01`, `0101` and `1010`; repeats are
/// dropped so the fixed tokens appear once, after the first year.
pub fn build_year_tokens(start: i32, end: i32) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut tokens = Vec::new();

    for year in start..=end {
        let candidates = [
            year.to_string(),
            format!("01{}", year),
            format!("{}01", year),
            FIXED_DATE_TOKENS[0].to_string(),
            FIXED_DATE_TOKENS[1].to_string(),
        ];
        for token in candidates {
            if seen.insert(token.clone()) {
                tokens.push(token);
            }
        }
    }

    tokens
}

/// Token set used when no year range is given
pub fn default_year_tokens(current_year: i32) -> Vec<String> {
    vec![
        current_year.to_string(),
        format!("01{}", current_year),
        FIXED_DATE_TOKENS[0].to_string(),
        FIXED_DATE_TOKENS[1].to_string(),
        LEGACY_YEAR.to_string(),
    ]
}

/// Default year tokens anchored on the local calendar year
pub fn current_year_tokens() -> Vec<String> {
    default_year_tokens(chrono::Local::now().year())
}
