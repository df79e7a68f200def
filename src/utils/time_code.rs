//! `HH:MM:SS` time codes

/// Time code helpers
pub struct TimeCode;

impl TimeCode {
    /// Parse `H:MM:SS` into seconds
    ///
    /// Hours may have any number of digits so long recordings work; minutes
    /// and seconds must be exactly two digits below 60.
    pub fn parse(input: &str) -> Result<u64, String> {
        let input = input.trim();
        let mut parts = input.split(':');

        let (Some(h), Some(m), Some(s), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(format!("Invalid time '{}': expected HH:MM:SS", input));
        };

        let hours = Self::parse_component(h, None, input)?;
        let minutes = Self::parse_component(m, Some(2), input)?;
        let seconds = Self::parse_component(s, Some(2), input)?;

        if minutes >= 60 || seconds >= 60 {
            return Err(format!(
                "Invalid time '{}': minutes and seconds must be below 60",
                input
            ));
        }

        hours
            .checked_mul(3600)
            .and_then(|h| h.checked_add(minutes * 60 + seconds))
            .ok_or_else(|| format!("Invalid time '{}': number too large", input))
    }

    /// Format seconds as `HH:MM:SS`
    pub fn format(total_seconds: u64) -> String {
        format!(
            "{:02}:{:02}:{:02}",
            total_seconds / 3600,
            (total_seconds % 3600) / 60,
            total_seconds % 60
        )
    }

    fn parse_component(part: &str, width: Option<usize>, input: &str) -> Result<u64, String> {
        let bad_width = width.is_some_and(|w| part.len() != w);
        if part.is_empty() || bad_width || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("Invalid time '{}': expected HH:MM:SS", input));
        }
        part.parse::<u64>()
            .map_err(|_| format!("Invalid time '{}': number too large", input))
    }
}
