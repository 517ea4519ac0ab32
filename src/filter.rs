/// Filter engine for the list operation.
///
/// Translates optional query parameters into a conjunctive predicate applied
/// by the store. All parameters are optional and combined with logical AND.
use chrono::NaiveTime;
use serde::Deserialize;

use crate::models::Day;

/// Raw query parameters from the list route
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub day: Option<String>,
    pub category: Option<String>,
    pub time_of_day: Option<String>,
    pub search: Option<String>,
}

/// Time-of-day bucket mapped to fixed clock-time ranges over `start_time`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Parse a bucket name; both the English and the Indonesian names are
    /// accepted, case-insensitively. Unknown values yield `None` and the
    /// caller applies no time filter.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "morning" | "pagi" => Some(TimeOfDay::Morning),
            "afternoon" | "siang" => Some(TimeOfDay::Afternoon),
            "evening" | "sore" => Some(TimeOfDay::Evening),
            "night" | "malam" => Some(TimeOfDay::Night),
            _ => None,
        }
    }

    /// Inclusive start-time ranges for this bucket. Night spans midnight and
    /// is the union of two ranges; every other bucket is a single range.
    pub fn ranges(self) -> ((NaiveTime, NaiveTime), Option<(NaiveTime, NaiveTime)>) {
        match self {
            TimeOfDay::Morning => (range(5, 0, 11, 59), None),
            TimeOfDay::Afternoon => (range(12, 0, 15, 59), None),
            TimeOfDay::Evening => (range(16, 0, 18, 59), None),
            TimeOfDay::Night => (range(19, 0, 23, 59), Some(range(0, 0, 4, 59))),
        }
    }
}

fn range(from_h: u32, from_m: u32, to_h: u32, to_m: u32) -> (NaiveTime, NaiveTime) {
    (
        NaiveTime::from_hms_opt(from_h, from_m, 0).expect("valid bucket bound"),
        NaiveTime::from_hms_opt(to_h, to_m, 59).expect("valid bucket bound"),
    )
}

/// Resolved filter, ready to be turned into a store query
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub day: Option<Day>,
    pub category: Option<String>,
    pub time_of_day: Option<TimeOfDay>,
    pub search: Option<String>,
}

impl EntryFilter {
    /// Resolve raw parameters. Returns `None` when the `day` parameter is
    /// present but is not one of the seven day names: such a filter can
    /// match nothing, so the list operation returns an empty result without
    /// touching the store. An unrecognized `timeOfDay` is silently dropped.
    pub fn resolve(params: ListParams) -> Option<Self> {
        let day = match params.day {
            Some(raw) => Some(Day::parse(&raw)?),
            None => None,
        };

        Some(EntryFilter {
            day,
            category: params.category,
            time_of_day: params.time_of_day.as_deref().and_then(TimeOfDay::parse),
            search: params.search,
        })
    }
}
