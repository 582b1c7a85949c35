//! Ticker symbol handling.

/// Exchange suffixes stripped from user input.
const EXCHANGE_SUFFIXES: &[&str] = &[".NS", ".BO"];

/// Upper-case a ticker and strip a trailing exchange suffix.
pub fn normalize_symbol(symbol: &str) -> String {
    let upper = symbol.trim().to_uppercase();
    let stripped = EXCHANGE_SUFFIXES
        .iter()
        .find_map(|suffix| upper.strip_suffix(suffix))
        .map(str::to_string);
    stripped.unwrap_or(upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_symbol() {
        assert_eq!(normalize_symbol("reliance"), "RELIANCE");
        assert_eq!(normalize_symbol(" TCS.NS "), "TCS");
        assert_eq!(normalize_symbol("infy.bo"), "INFY");
        assert_eq!(normalize_symbol("M&M"), "M&M");
    }
}
