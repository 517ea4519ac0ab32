/// "Highlight nearby activity": the earliest entry for the current day whose
/// start time falls within the next hour.
use chrono::{Duration, NaiveTime, Timelike};

use crate::constants::HIGHLIGHT_WINDOW_MINUTES;
use crate::models::ScheduleEntry;

/// The inclusive look-ahead window, at minute precision.
///
/// The comparison is purely on time-of-day: near midnight the end of the
/// window wraps past 00:00 and the range becomes empty, so a 23:40 query
/// finds nothing even if an entry exists at 00:10 the next day. The window
/// never spans two calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightWindow {
    pub from: NaiveTime,
    pub until: NaiveTime,
}

impl HighlightWindow {
    /// Build the window starting at `now`, truncated to the whole minute
    pub fn starting_at(now: NaiveTime) -> Self {
        let from = now
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or(now);
        Self {
            from,
            until: from + Duration::minutes(HIGHLIGHT_WINDOW_MINUTES),
        }
    }

    /// Whether a start time falls inside the window
    pub fn contains(&self, time: NaiveTime) -> bool {
        time >= self.from && time <= self.until
    }
}

/// Pick the earliest entry starting inside the window.
///
/// `entries` is the caller's schedule for the current day, already ordered by
/// start time, so the first match is the earliest.
pub fn pick_nearby<'a>(
    entries: &'a [ScheduleEntry],
    window: &HighlightWindow,
) -> Option<&'a ScheduleEntry> {
    entries.iter().find(|entry| window.contains(entry.start_time))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Day, EntryStatus};
    use chrono::Utc;

    fn time(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn entry_at(start: NaiveTime) -> ScheduleEntry {
        ScheduleEntry {
            id: 1,
            owner_id: 7,
            day: Day::Senin,
            start_time: start,
            end_time: None,
            activity: "Study".to_string(),
            category: "Academic".to_string(),
            evaluation: None,
            status: EntryStatus::NotStarted,
            timer_type: None,
            timer_duration_minutes: None,
            timer_start: None,
            timer_end: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_window_truncates_seconds() {
        let now = NaiveTime::from_hms_opt(10, 30, 45).unwrap();
        let window = HighlightWindow::starting_at(now);
        assert_eq!(window.from, time(10, 30));
        assert_eq!(window.until, time(11, 30));
    }

    #[test]
    fn test_entry_at_current_minute_is_included() {
        // Sub-second clock readings must not push the window start past an
        // entry at the exact current minute
        let now = NaiveTime::from_hms_nano_opt(10, 30, 45, 123_456_789).unwrap();
        let window = HighlightWindow::starting_at(now);

        assert_eq!(window.from, time(10, 30));
        assert!(window.contains(time(10, 30)));

        let entries = vec![entry_at(time(10, 30))];
        assert!(pick_nearby(&entries, &window).is_some());
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let window = HighlightWindow::starting_at(time(10, 30));
        assert!(window.contains(time(10, 30)));
        assert!(window.contains(time(11, 30)));
        assert!(window.contains(time(11, 0)));

        assert!(!window.contains(time(10, 29)));
        assert!(!window.contains(time(11, 31)));
    }

    #[test]
    fn test_picks_earliest_entry_in_window() {
        let entries = vec![
            entry_at(time(9, 0)),
            entry_at(time(11, 0)),
            entry_at(time(11, 15)),
        ];
        let window = HighlightWindow::starting_at(time(10, 30));

        let picked = pick_nearby(&entries, &window).unwrap();
        assert_eq!(picked.start_time, time(11, 0));
    }

    #[test]
    fn test_no_match_returns_none() {
        let entries = vec![entry_at(time(9, 0)), entry_at(time(14, 0))];
        let window = HighlightWindow::starting_at(time(10, 30));
        assert!(pick_nearby(&entries, &window).is_none());
    }

    #[test]
    fn test_window_past_midnight_matches_nothing() {
        // 23:40 + 1h wraps to 00:40, leaving an empty range
        let window = HighlightWindow::starting_at(time(23, 40));
        assert_eq!(window.until, time(0, 40));

        let entries = vec![entry_at(time(0, 10)), entry_at(time(23, 50))];
        assert!(pick_nearby(&entries, &window).is_none());
    }
}
