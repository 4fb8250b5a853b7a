use cyclecal_types::CycleSettings;

pub const INVALID_NUMBERS: &str = "Please enter valid numbers.";

/// Parse the two form inputs. Both must be positive whole numbers.
pub fn parse_settings(cycle_length: &str, period_length: &str) -> Option<CycleSettings> {
    let cycle_length = cycle_length.trim().parse::<u32>().ok()?;
    let period_length = period_length.trim().parse::<u32>().ok()?;
    CycleSettings::from_raw(cycle_length, period_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let settings = parse_settings("28", " 5 ").unwrap();
        assert_eq!(settings.cycle_length.get(), 28);
        assert_eq!(settings.period_length.get(), 5);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse_settings("", "5").is_none());
        assert!(parse_settings("abc", "5").is_none());
        assert!(parse_settings("28", "0").is_none());
        assert!(parse_settings("-3", "5").is_none());
        assert!(parse_settings("28.5", "5").is_none());
        assert!(parse_settings("28", "five").is_none());
    }
}
