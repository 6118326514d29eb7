/// Format a count with thousands separators (e.g., 1,234,567)
pub fn format_with_separator(count: u64) -> String {
    let s = count.to_string();
    let mut result = String::new();

    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

/// Format a count in compact form (e.g., 1.2M, 34.5K, 999)
pub fn format_count_compact(count: u64) -> String {
    fn scaled(count: u64, unit: u64, suffix: &str) -> String {
        let tenths = u128::from(count) * 10 / u128::from(unit);
        if tenths % 10 == 0 || tenths >= 1000 {
            format!("{}{}", tenths / 10, suffix)
        } else {
            format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
        }
    }

    if count >= 1_000_000_000 {
        scaled(count, 1_000_000_000, "B")
    } else if count >= 1_000_000 {
        scaled(count, 1_000_000, "M")
    } else if count >= 10_000 {
        scaled(count, 1_000, "K")
    } else {
        format_with_separator(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator() {
        assert_eq!(format_with_separator(0), "0");
        assert_eq!(format_with_separator(999), "999");
        assert_eq!(format_with_separator(1_000), "1,000");
        assert_eq!(format_with_separator(1_234_567), "1,234,567");
    }

    #[test]
    fn test_compact() {
        assert_eq!(format_count_compact(150), "150");
        assert_eq!(format_count_compact(9_999), "9,999");
        assert_eq!(format_count_compact(34_500), "34.5K");
        assert_eq!(format_count_compact(280_000_000), "280M");
        assert_eq!(format_count_compact(1_250_000), "1.2M");
        assert_eq!(format_count_compact(999_999), "999K");
        assert_eq!(format_count_compact(3_000_000_000), "3B");
    }

    #[test]
    fn test_compact_huge_counts() {
        assert_eq!(format_count_compact(u64::MAX / 5), "3689348814B");
        assert_eq!(format_count_compact(u64::MAX), "18446744073B");
    }
}
