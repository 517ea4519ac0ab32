use chrono::{DateTime, NaiveTime, Utc, Weekday};
use serde::Serialize;

/// Day of week for a schedule entry.
///
/// Day names are stored in their Indonesian form, matching the data set.
/// Variants are declared Monday-first; the matching Postgres enum is declared
/// in the same order so `ORDER BY day` sorts in calendar week order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, sqlx::Type)]
#[sqlx(type_name = "day_of_week")]
pub enum Day {
    Senin,
    Selasa,
    Rabu,
    Kamis,
    Jumat,
    Sabtu,
    Minggu,
}

impl Day {
    /// All seven day names, Monday first
    pub const NAMES: [&'static str; 7] = [
        "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
    ];

    /// Parse an exact day name, as validated on create/update
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Senin" => Some(Day::Senin),
            "Selasa" => Some(Day::Selasa),
            "Rabu" => Some(Day::Rabu),
            "Kamis" => Some(Day::Kamis),
            "Jumat" => Some(Day::Jumat),
            "Sabtu" => Some(Day::Sabtu),
            "Minggu" => Some(Day::Minggu),
            _ => None,
        }
    }

    /// Map a calendar weekday to its schedule day
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => Day::Senin,
            Weekday::Tue => Day::Selasa,
            Weekday::Wed => Day::Rabu,
            Weekday::Thu => Day::Kamis,
            Weekday::Fri => Day::Jumat,
            Weekday::Sat => Day::Sabtu,
            Weekday::Sun => Day::Minggu,
        }
    }
}

/// Lifecycle status of a schedule entry.
///
/// `Running` is only reachable through the start-timer operation; direct
/// updates may move an entry between `NotStarted` and `Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, sqlx::Type)]
#[sqlx(type_name = "entry_status")]
pub enum EntryStatus {
    NotStarted,
    Running,
    Done,
}

impl EntryStatus {
    /// Parse a status name from a direct update request
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "NotStarted" => Some(EntryStatus::NotStarted),
            "Running" => Some(EntryStatus::Running),
            "Done" => Some(EntryStatus::Done),
            _ => None,
        }
    }
}

/// A single planned activity owned by one user
#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleEntry {
    pub id: i64,
    pub owner_id: i64,
    pub day: Day,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub activity: String,
    pub category: String,
    pub evaluation: Option<String>,
    pub status: EntryStatus,
    pub timer_type: Option<String>,
    pub timer_duration_minutes: Option<i32>,
    pub timer_start: Option<DateTime<Utc>>,
    pub timer_end: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating a schedule entry; the owner id comes from the
/// verified token, never from the request body
#[derive(Debug, Clone)]
pub struct NewEntry {
    pub day: Day,
    pub start_time: NaiveTime,
    pub end_time: Option<NaiveTime>,
    pub activity: String,
    pub category: String,
    pub timer_duration_minutes: Option<i32>,
}
