//! Clock-style formatting and duration parsing.

use chrono::Duration;

/// Format whole minutes as `MM:00`.
#[must_use]
pub fn minutes_to_duration(minutes: u32) -> String {
    format_duration_mmss(Duration::minutes(i64::from(minutes)))
}

/// Format seconds as `MM:SS`.
#[must_use]
pub fn seconds_to_duration(seconds: u32) -> String {
    format_duration_mmss(Duration::seconds(i64::from(seconds)))
}

/// Format a duration as MM:SS. Minutes are not wrapped into hours.
#[must_use]
pub fn format_duration_mmss(d: Duration) -> String {
    let total_seconds = d.num_seconds().abs();
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Parse a duration like "25", "25m", "1h" or "1h15m" into whole minutes.
///
/// A bare number is taken as minutes. Zero is rejected in every form. Seconds are not accepted since every
/// interval is configured in whole minutes.
#[must_use]
pub fn parse_minutes(s: &str) -> Option<u32> {
    let s = s.trim().to_lowercase();

    if let Ok(minutes) = s.parse::<u32>() {
        return (minutes > 0).then_some(minutes);
    }

    let mut total: u32 = 0;
    let mut current_num = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            current_num.push(c);
        } else {
            if current_num.is_empty() {
                return None;
            }
            let num: u32 = current_num.parse().ok()?;
            current_num.clear();

            match c {
                'h' => total = total.checked_add(num.checked_mul(60)?)?,
                'm' => total = total.checked_add(num)?,
                _ => return None,
            }
        }
    }

    // Trailing number without unit counts as minutes ("1h30").
    if !current_num.is_empty() {
        let num: u32 = current_num.parse().ok()?;
        total = total.checked_add(num)?;
    }

    (total > 0).then_some(total)
}
