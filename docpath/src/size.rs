//! Byte-size formatting and parsing.
//!
//! Human-readable rendering of byte counts in binary (1024-based) units,
//! and parsing of shorthand size strings like `100k` or `2mb`.

const KB: f64 = 1024.0;
const MB: f64 = KB * 1024.0;
const GB: f64 = MB * 1024.0;
const TB: f64 = GB * 1024.0;
const PB: f64 = TB * 1024.0;

/// Render a byte count as a human-readable size.
///
/// Units are binary and capped at petabytes; values are rounded
/// half-away-from-zero to `precision` decimals, with trailing zeros
/// trimmed.
///
/// # Examples
///
/// ```
/// use docpath::size::human_size;
///
/// assert_eq!(human_size(200.0, 2), "200 bytes");
/// assert_eq!(human_size(1024.0, 2), "1 KB");
/// assert_eq!(human_size(1_000_000.0, 2), "976.56 KB");
/// assert_eq!(human_size(1_000_000.0, 0), "977 KB");
/// ```
#[must_use]
pub fn human_size(size: f64, precision: u32) -> String {
    for (scale, unit) in [(PB, "PB"), (TB, "TB"), (GB, "GB"), (MB, "MB"), (KB, "KB")] {
        if size / scale >= 1.0 {
            return format!("{} {unit}", round_trimmed(size / scale, precision));
        }
    }
    format!("{} bytes", round_trimmed(size, precision))
}

/// Parse a shorthand size string into a byte count.
///
/// Accepts an integer with an optional case-insensitive `k`, `m`, `g`,
/// `kb`, `mb` or `gb` suffix. Anything after the leading digits that is not
/// a recognized suffix is ignored; a string without leading digits parses
/// as zero.
///
/// # Examples
///
/// ```
/// use docpath::size::parse_size;
///
/// assert_eq!(parse_size("100"), 100);
/// assert_eq!(parse_size("100k"), 102_400);
/// assert_eq!(parse_size("100KB"), 102_400);
/// assert_eq!(parse_size("1foo"), 1);
/// assert_eq!(parse_size("foo"), 0);
/// ```
#[must_use]
pub fn parse_size(text: &str) -> u64 {
    let lower = text.trim().to_lowercase();

    let (number, multiplier) = if let Some(rest) = lower.strip_suffix("kb") {
        (rest, 1024)
    } else if let Some(rest) = lower.strip_suffix("mb") {
        (rest, 1024 * 1024)
    } else if let Some(rest) = lower.strip_suffix("gb") {
        (rest, 1024 * 1024 * 1024)
    } else if let Some(rest) = lower.strip_suffix('k') {
        (rest, 1024)
    } else if let Some(rest) = lower.strip_suffix('m') {
        (rest, 1024 * 1024)
    } else if let Some(rest) = lower.strip_suffix('g') {
        (rest, 1024 * 1024 * 1024)
    } else {
        (lower.as_str(), 1)
    };

    leading_number(number).saturating_mul(multiplier)
}

/// Parse the leading decimal digits of a string, defaulting to zero.
fn leading_number(text: &str) -> u64 {
    let digits: String = text.chars().take_while(char::is_ascii_digit).collect();
    digits.parse().unwrap_or(0)
}

/// Round half-away-from-zero to `precision` decimals and render without
/// trailing zeros.
fn round_trimmed(value: f64, precision: u32) -> String {
    let factor = 10f64.powi(precision.try_into().unwrap_or(i32::MAX));
    let rounded = (value * factor).round() / factor;

    let decimals = precision as usize;
    let formatted = format!("{rounded:.decimals$}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_human_size_bytes() {
        assert_eq!(human_size(0.0, 2), "0 bytes");
        assert_eq!(human_size(200.0, 2), "200 bytes");
        assert_eq!(human_size(1023.0, 2), "1023 bytes");
    }

    #[test]
    fn test_human_size_units() {
        assert_eq!(human_size(1024.0, 2), "1 KB");
        assert_eq!(human_size(2_097_152.0, 2), "2 MB");
        assert_eq!(human_size(1024f64.powi(3), 2), "1 GB");
        assert_eq!(human_size(1024f64.powi(4), 2), "1 TB");
        assert_eq!(human_size(1024f64.powi(5), 2), "1 PB");
    }

    #[test]
    fn test_human_size_above_largest_unit() {
        assert_eq!(human_size(1024f64.powi(6), 2), "1024 PB");
    }

    #[test]
    fn test_human_size_precision() {
        assert_eq!(human_size(1_000_000.0, 2), "976.56 KB");
        assert_eq!(human_size(1_000_000.0, 3), "976.563 KB");
        assert_eq!(human_size(1_000_000.0, 0), "977 KB");
    }

    #[test]
    fn test_parse_size_plain() {
        assert_eq!(parse_size("100"), 100);
        assert_eq!(parse_size("0"), 0);
    }

    #[test]
    fn test_parse_size_suffixes() {
        assert_eq!(parse_size("100k"), 102_400);
        assert_eq!(parse_size("100kb"), 102_400);
        assert_eq!(parse_size("100m"), 104_857_600);
        assert_eq!(parse_size("100mb"), 104_857_600);
        assert_eq!(parse_size("100g"), 107_374_182_400);
        assert_eq!(parse_size("100gb"), 107_374_182_400);
        assert_eq!(parse_size("100G"), 107_374_182_400);
    }

    #[test]
    fn test_parse_size_malformed() {
        assert_eq!(parse_size("1foo"), 1);
        assert_eq!(parse_size("foo"), 0);
        assert_eq!(parse_size(""), 0);
    }
}
