#[cfg(test)]
mod tests {
    use motus::libs::formatter::{format_time, parse_time, ZERO_TIME};

    #[test]
    fn test_format_time_zero() {
        assert_eq!(format_time(0), ZERO_TIME);
    }

    #[test]
    fn test_format_time_components() {
        // 1h 1m 1s 230ms
        assert_eq!(format_time(3_661_230), "01:01:01.23");
    }

    #[test]
    fn test_format_time_truncates_hundredths() {
        assert_eq!(format_time(999), "00:00:00.99");
        assert_eq!(format_time(1_009), "00:00:01.00");
    }

    #[test]
    fn test_format_time_negative_uses_magnitude() {
        assert_eq!(format_time(-5_500), format_time(5_500));
    }

    #[test]
    fn test_parse_time_round_trip() {
        for ms in [0, 10, 990, 59_990, 3_661_230, 86_399_990] {
            let text = format_time(ms);
            assert_eq!(parse_time(&text), Some(ms), "round trip of {}", text);
        }
    }

    #[test]
    fn test_parse_time_rejects_malformed() {
        assert_eq!(parse_time(""), None);
        assert_eq!(parse_time("1:2"), None);
        assert_eq!(parse_time("00:00:00"), None);
        assert_eq!(parse_time("00:00:00.1"), None);
        assert_eq!(parse_time("00:61:00.00"), None);
        assert_eq!(parse_time("00:00:61.00"), None);
        assert_eq!(parse_time("aa:bb:cc.dd"), None);
    }
}
