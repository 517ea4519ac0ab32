/// Request payload validation for create and partial update.
///
/// Payloads are deserialized loosely (every field optional, enums and times
/// as strings) so that all invalid fields can be collected into one
/// structured field-error list instead of failing on the first.
use chrono::{DateTime, NaiveTime, Utc};
use serde::Deserialize;

use crate::error::FieldError;
use crate::models::{Day, EntryStatus, NewEntry, ScheduleEntry};

/// Body of a create request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayload {
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub activity: Option<String>,
    pub category: Option<String>,
    pub timer_duration_minutes: Option<i32>,
}

/// Body of a partial update request; absent fields are left unchanged
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePayload {
    pub day: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub activity: Option<String>,
    pub category: Option<String>,
    pub evaluation: Option<String>,
    pub status: Option<String>,
    pub timer_duration_minutes: Option<i32>,
    pub timer_start: Option<String>,
}

/// Parse a time-of-day value in HH:MM format
pub fn parse_time(s: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(s, "%H:%M").ok()
}

/// Validate a create payload into a `NewEntry`
pub fn validate_create(payload: CreatePayload) -> Result<NewEntry, Vec<FieldError>> {
    let mut errors = Vec::new();

    let day = match payload.day.as_deref() {
        Some(raw) => {
            let parsed = Day::parse(raw);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    "day",
                    format!("The day field must be one of: {}", Day::NAMES.join(", ")),
                ));
            }
            parsed
        }
        None => {
            errors.push(FieldError::new("day", "The day field is required"));
            None
        }
    };

    let start_time = match payload.start_time.as_deref() {
        Some(raw) => {
            let parsed = parse_time(raw);
            if parsed.is_none() {
                errors.push(FieldError::new(
                    "startTime",
                    "The startTime field must be a time in HH:MM format",
                ));
            }
            parsed
        }
        None => {
            errors.push(FieldError::new("startTime", "The startTime field is required"));
            None
        }
    };

    let end_time = match payload.end_time.as_deref() {
        Some(raw) => match parse_time(raw) {
            Some(parsed) => Some(parsed),
            None => {
                errors.push(FieldError::new(
                    "endTime",
                    "The endTime field must be a time in HH:MM format",
                ));
                None
            }
        },
        None => None,
    };

    if let (Some(start), Some(end)) = (start_time, end_time)
        && end <= start
    {
        errors.push(FieldError::new(
            "endTime",
            "The endTime field must be after startTime",
        ));
    }

    let activity = match payload.activity {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            errors.push(FieldError::new("activity", "The activity field is required"));
            None
        }
    };

    let category = match payload.category {
        Some(text) if !text.trim().is_empty() => Some(text),
        _ => {
            errors.push(FieldError::new("category", "The category field is required"));
            None
        }
    };

    if let Some(minutes) = payload.timer_duration_minutes
        && minutes < 1
    {
        errors.push(FieldError::new(
            "timerDurationMinutes",
            "The timerDurationMinutes field must be at least 1",
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    // All required fields are present once errors is empty
    Ok(NewEntry {
        day: day.expect("validated"),
        start_time: start_time.expect("validated"),
        end_time,
        activity: activity.expect("validated"),
        category: category.expect("validated"),
        timer_duration_minutes: payload.timer_duration_minutes,
    })
}

/// Apply a partial update to a stored entry, returning the new state.
///
/// Each provided field is validated with the create rules; the
/// `endTime > startTime` invariant is checked against the effective pair
/// (incoming value where provided, stored value otherwise). `status` accepts
/// only `Done` and `NotStarted` here: `Running` is reserved for the timer
/// start operation.
pub fn apply_update(
    entry: ScheduleEntry,
    payload: UpdatePayload,
) -> Result<ScheduleEntry, Vec<FieldError>> {
    let mut errors = Vec::new();
    let mut updated = entry;

    if let Some(raw) = payload.day.as_deref() {
        match Day::parse(raw) {
            Some(day) => updated.day = day,
            None => errors.push(FieldError::new(
                "day",
                format!("The day field must be one of: {}", Day::NAMES.join(", ")),
            )),
        }
    }

    let mut start_time = updated.start_time;
    if let Some(raw) = payload.start_time.as_deref() {
        match parse_time(raw) {
            Some(parsed) => start_time = parsed,
            None => errors.push(FieldError::new(
                "startTime",
                "The startTime field must be a time in HH:MM format",
            )),
        }
    }

    let mut end_time = updated.end_time;
    if let Some(raw) = payload.end_time.as_deref() {
        match parse_time(raw) {
            Some(parsed) => end_time = Some(parsed),
            None => errors.push(FieldError::new(
                "endTime",
                "The endTime field must be a time in HH:MM format",
            )),
        }
    }

    if let Some(end) = end_time
        && (payload.start_time.is_some() || payload.end_time.is_some())
        && end <= start_time
    {
        errors.push(FieldError::new(
            "endTime",
            "The endTime field must be after startTime",
        ));
    }

    if let Some(text) = payload.activity {
        if text.trim().is_empty() {
            errors.push(FieldError::new("activity", "The activity field must not be empty"));
        } else {
            updated.activity = text;
        }
    }

    if let Some(text) = payload.category {
        if text.trim().is_empty() {
            errors.push(FieldError::new("category", "The category field must not be empty"));
        } else {
            updated.category = text;
        }
    }

    if let Some(text) = payload.evaluation {
        updated.evaluation = Some(text);
    }

    if let Some(raw) = payload.status.as_deref() {
        match EntryStatus::parse(raw) {
            Some(EntryStatus::Running) | None => errors.push(FieldError::new(
                "status",
                "The status field must be one of: Done, NotStarted",
            )),
            Some(status) => updated.status = status,
        }
    }

    if let Some(minutes) = payload.timer_duration_minutes {
        if minutes < 1 {
            errors.push(FieldError::new(
                "timerDurationMinutes",
                "The timerDurationMinutes field must be at least 1",
            ));
        } else {
            updated.timer_duration_minutes = Some(minutes);
        }
    }

    if let Some(raw) = payload.timer_start.as_deref() {
        match DateTime::parse_from_rfc3339(raw) {
            Ok(parsed) => updated.timer_start = Some(parsed.with_timezone(&Utc)),
            Err(_) => errors.push(FieldError::new(
                "timerStart",
                "The timerStart field must be an RFC 3339 datetime",
            )),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    updated.start_time = start_time;
    updated.end_time = end_time;
    Ok(updated)
}
