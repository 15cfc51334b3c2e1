//! Day-aligned time ticks and their labels

use chrono::{DateTime, FixedOffset, Offset, Utc};

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

/// Local midnights inside `[min_ms, max_ms]`, thinned to at most `max_ticks`
/// by keeping every n-th tick.
///
/// Midnight is taken in the zone `offset` east of UTC.
pub fn day_ticks(min_ms: i64, max_ms: i64, max_ticks: usize, offset: FixedOffset) -> Vec<i64> {
    if max_ms < min_ms || max_ticks == 0 {
        return Vec::new();
    }

    // Widened so timestamps near the ends of i64 cannot overflow.
    let day = i128::from(DAY_MS);
    let shift = i128::from(offset.local_minus_utc()) * 1000;
    let (min, max) = (i128::from(min_ms), i128::from(max_ms));

    let local_min = min + shift;
    let mut first = local_min.div_euclid(day) * day - shift;
    if local_min.rem_euclid(day) != 0 {
        first += day;
    }
    if first > max {
        return Vec::new();
    }

    let count = (max - first) / day + 1;
    let stride = (count + max_ticks as i128 - 1) / max_ticks as i128;

    (0..max_ticks as i128)
        .map(|i| first + i * stride * day)
        .take_while(|&ts| ts <= max)
        .filter_map(|ts| i64::try_from(ts).ok())
        .collect()
}

fn local(timestamp_ms: i64, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    DateTime::from_timestamp_millis(timestamp_ms).map(|dt| dt.with_timezone(&offset))
}

/// Short axis label, e.g. `Mar 5`.
pub fn tick_label(timestamp_ms: i64, offset: FixedOffset) -> String {
    local(timestamp_ms, offset)
        .map(|dt| dt.format("%b %-d").to_string())
        .unwrap_or_default()
}

/// Tooltip title, e.g. `Mar 05, 2024`.
pub fn tooltip_title(timestamp_ms: i64, offset: FixedOffset) -> String {
    local(timestamp_ms, offset)
        .map(|dt| dt.format("%b %d, %Y").to_string())
        .unwrap_or_default()
}

/// Offset for a browser `Date.getTimezoneOffset()` value (minutes west of UTC).
pub fn offset_from_minutes_west(minutes_west: i32) -> FixedOffset {
    minutes_west
        .checked_mul(-60)
        .and_then(FixedOffset::east_opt)
        .unwrap_or_else(utc)
}

pub fn utc() -> FixedOffset {
    Utc.fix()
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2024-03-05T00:00:00Z
    const MAR_5: i64 = 1_709_596_800_000;
    const HOUR_MS: i64 = 3_600_000;

    #[test]
    fn test_ticks_start_at_next_midnight() {
        let ticks = day_ticks(MAR_5 - HOUR_MS, MAR_5 + 2 * DAY_MS, 6, utc());
        assert_eq!(ticks, vec![MAR_5, MAR_5 + DAY_MS, MAR_5 + 2 * DAY_MS]);
    }

    #[test]
    fn test_ticks_are_thinned_to_limit() {
        let ticks = day_ticks(MAR_5, MAR_5 + 29 * DAY_MS, 6, utc());
        assert!(ticks.len() <= 6);
        assert_eq!(ticks[0], MAR_5);
        assert_eq!(ticks[1] - ticks[0], 5 * DAY_MS);
    }

    #[test]
    fn test_no_ticks_within_a_single_day() {
        assert!(day_ticks(MAR_5 + 1, MAR_5 + HOUR_MS, 6, utc()).is_empty());
        assert!(day_ticks(MAR_5, MAR_5 - 1, 6, utc()).is_empty());
        assert!(day_ticks(MAR_5, MAR_5 + DAY_MS, 0, utc()).is_empty());
    }

    #[test]
    fn test_ticks_follow_local_midnight() {
        // UTC-5: local midnight is 05:00Z.
        let new_york = offset_from_minutes_west(300);
        let ticks = day_ticks(MAR_5, MAR_5 + DAY_MS, 6, new_york);
        assert_eq!(ticks, vec![MAR_5 + 5 * HOUR_MS]);
        assert_eq!(tick_label(ticks[0], new_york), "Mar 5");
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        let ticks = day_ticks(i64::MIN, i64::MAX, 6, utc());
        assert!(!ticks.is_empty());
        assert!(ticks.len() <= 6);
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_labels() {
        assert_eq!(tick_label(MAR_5, utc()), "Mar 5");
        assert_eq!(tooltip_title(MAR_5 + HOUR_MS, utc()), "Mar 05, 2024");
        // Still Mar 4 in UTC-5.
        let new_york = offset_from_minutes_west(300);
        assert_eq!(tooltip_title(MAR_5 + HOUR_MS, new_york), "Mar 04, 2024");
    }

    #[test]
    fn test_out_of_range_browser_offset_falls_back_to_utc() {
        assert_eq!(offset_from_minutes_west(i32::MAX), utc());
        assert_eq!(offset_from_minutes_west(-60).local_minus_utc(), 3600);
    }
}
