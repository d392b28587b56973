use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;

// `ms` has to come before `m` and `s`, alternation is ordered.
static TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+)\s*(ms|d|h|m|s)").expect("duration token regex")
});

/// Best-effort parse of a compact duration like `"1m 30s"` or `"2h15m"`.
///
/// Tokens are `<integer><unit>` with optional whitespace in between, units
/// `d`/`h`/`m`/`s`/`ms`, in any order. Duplicate units sum. Anything that
/// does not scan as a token contributes nothing; chat input never fails the
/// whole string over one bad piece.
pub fn parse(text: &str) -> Duration {
    let mut total: u64 = 0;

    for caps in TOKEN.captures_iter(text) {
        let Ok(count) = caps[1].parse::<u64>() else {
            continue;
        };
        let factor: u64 = match &caps[2] {
            "ms" => 1,
            "s" => 1_000,
            "m" => 60_000,
            "h" => 3_600_000,
            "d" => 86_400_000,
            _ => continue,
        };
        total = total.saturating_add(count.saturating_mul(factor));
    }

    Duration::from_millis(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sums_tokens_in_any_order() {
        assert_eq!(parse("1m 30s"), Duration::from_millis(90_000));
        assert_eq!(parse("30s 1m"), Duration::from_millis(90_000));
    }

    #[test]
    fn duplicate_units_accumulate() {
        assert_eq!(parse("10s 5s"), Duration::from_secs(15));
    }

    #[test]
    fn all_units_carry_their_factor() {
        assert_eq!(parse("1d"), Duration::from_secs(86_400));
        assert_eq!(parse("2h"), Duration::from_secs(7_200));
        assert_eq!(parse("3m"), Duration::from_secs(180));
        assert_eq!(parse("4s"), Duration::from_secs(4));
        assert_eq!(parse("500ms"), Duration::from_millis(500));
    }

    #[test]
    fn millis_are_not_read_as_minutes() {
        assert_eq!(parse("100ms"), Duration::from_millis(100));
    }

    #[test]
    fn whitespace_between_count_and_unit_is_fine() {
        assert_eq!(parse("1 m"), Duration::from_secs(60));
    }

    #[test]
    fn malformed_tokens_contribute_nothing() {
        assert_eq!(parse("banana"), Duration::ZERO);
        assert_eq!(parse("1x 2s"), Duration::from_secs(2));
        assert_eq!(parse("s5"), Duration::ZERO);
        assert_eq!(parse(""), Duration::ZERO);
    }

    #[test]
    fn huge_counts_saturate_instead_of_wrapping() {
        let parsed = parse("99999999999999999999d");
        assert_eq!(parsed, Duration::ZERO); // does not even parse as u64
        let saturated = parse("18446744073709551615d");
        assert!(saturated >= Duration::from_secs(86_400));
    }
}
