/// Clock provider fixed to the application timezone
use chrono::{DateTime, Datelike, Utc};
use chrono_tz::Tz;

use crate::models::Day;

/// All "is near now" evaluations and day-of-week lookups use this timezone
pub const APP_TIMEZONE: Tz = chrono_tz::Asia::Jakarta;

/// Current instant in UTC, as stored in timer timestamps
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current instant in the application timezone
pub fn now_local() -> DateTime<Tz> {
    Utc::now().with_timezone(&APP_TIMEZONE)
}

/// Schedule day for a local instant
pub fn current_day(now: &DateTime<Tz>) -> Day {
    Day::from_weekday(now.weekday())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_current_day_follows_local_weekday() {
        // 2025-06-02 was a Monday
        let monday = APP_TIMEZONE.with_ymd_and_hms(2025, 6, 2, 10, 0, 0).unwrap();
        assert_eq!(current_day(&monday), Day::Senin);

        let sunday = APP_TIMEZONE.with_ymd_and_hms(2025, 6, 8, 10, 0, 0).unwrap();
        assert_eq!(current_day(&sunday), Day::Minggu);
    }

    #[test]
    fn test_local_conversion_crosses_date_line() {
        // 20:00 UTC is already 03:00 the next day in Jakarta (UTC+7)
        let utc = Utc.with_ymd_and_hms(2025, 6, 2, 20, 0, 0).unwrap();
        let local = utc.with_timezone(&APP_TIMEZONE);
        assert_eq!(current_day(&local), Day::Selasa);
    }
}
