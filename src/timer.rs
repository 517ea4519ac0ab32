/// Timer state machine.
///
/// Pure transitions: each command takes the stored entry and the current
/// instant and returns the new state, which the caller persists as a whole.
/// Neither command inspects the prior status. Restarting a running or
/// finished entry resets its timer, and stopping an entry that never ran
/// still marks it done with an end timestamp.
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::constants::{DEFAULT_TIMER_MINUTES, POMODORO_TIMER_TYPE};
use crate::error::FieldError;
use crate::models::{EntryStatus, ScheduleEntry};

/// Optional body of a start-timer request
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartCommand {
    pub timer_type: Option<String>,
    pub timer_duration_minutes: Option<i32>,
}

impl StartCommand {
    /// Reject a non-positive duration; omitted fields fall back to defaults
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        match self.timer_duration_minutes {
            Some(minutes) if minutes < 1 => Err(vec![FieldError::new(
                "timerDurationMinutes",
                "The timerDurationMinutes field must be at least 1",
            )]),
            _ => Ok(()),
        }
    }
}

/// Start (or restart) the entry's timer.
///
/// A pomodoro timer gets a computed end; any other timer type runs open-ended
/// until an explicit stop, so a leftover end timestamp is cleared.
pub fn start(entry: ScheduleEntry, command: StartCommand, now: DateTime<Utc>) -> ScheduleEntry {
    let timer_type = command
        .timer_type
        .unwrap_or_else(|| POMODORO_TIMER_TYPE.to_string());
    let minutes = command
        .timer_duration_minutes
        .unwrap_or(DEFAULT_TIMER_MINUTES);

    let timer_end = if timer_type == POMODORO_TIMER_TYPE {
        Some(now + Duration::minutes(minutes as i64))
    } else {
        None
    };

    ScheduleEntry {
        status: EntryStatus::Running,
        timer_type: Some(timer_type),
        timer_duration_minutes: Some(minutes),
        timer_start: Some(now),
        timer_end,
        ..entry
    }
}

/// Stop the entry's timer and mark the activity done
pub fn stop(entry: ScheduleEntry, now: DateTime<Utc>) -> ScheduleEntry {
    ScheduleEntry {
        status: EntryStatus::Done,
        timer_end: Some(now),
        ..entry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Day;
    use chrono::NaiveTime;

    fn entry() -> ScheduleEntry {
        ScheduleEntry {
            id: 1,
            owner_id: 7,
            day: Day::Senin,
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
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
    fn test_start_defaults_to_pomodoro() {
        let now = Utc::now();
        let started = start(entry(), StartCommand::default(), now);

        assert_eq!(started.status, EntryStatus::Running);
        assert_eq!(started.timer_type.as_deref(), Some("pomodoro"));
        assert_eq!(started.timer_duration_minutes, Some(25));
        assert_eq!(started.timer_start, Some(now));
        assert_eq!(started.timer_end, Some(now + Duration::minutes(25)));
    }

    #[test]
    fn test_start_with_custom_duration() {
        let now = Utc::now();
        let command = StartCommand {
            timer_type: None,
            timer_duration_minutes: Some(50),
        };
        let started = start(entry(), command, now);

        assert_eq!(started.timer_duration_minutes, Some(50));
        assert_eq!(started.timer_end, Some(now + Duration::minutes(50)));
    }

    #[test]
    fn test_start_stopwatch_leaves_end_unset() {
        let now = Utc::now();
        let command = StartCommand {
            timer_type: Some("stopwatch".to_string()),
            timer_duration_minutes: None,
        };
        let started = start(entry(), command, now);

        assert_eq!(started.status, EntryStatus::Running);
        assert_eq!(started.timer_type.as_deref(), Some("stopwatch"));
        assert!(started.timer_end.is_none());
    }

    #[test]
    fn test_restart_resets_stale_end() {
        let now = Utc::now();
        let mut running = start(entry(), StartCommand::default(), now);
        running.status = EntryStatus::Done;

        // Restarting as a stopwatch clears the pomodoro end timestamp
        let command = StartCommand {
            timer_type: Some("stopwatch".to_string()),
            timer_duration_minutes: None,
        };
        let restarted = start(running, command, now + Duration::minutes(30));

        assert_eq!(restarted.status, EntryStatus::Running);
        assert!(restarted.timer_end.is_none());
        assert_eq!(restarted.timer_start, Some(now + Duration::minutes(30)));
    }

    #[test]
    fn test_stop_marks_done_regardless_of_prior_status() {
        let now = Utc::now();

        // Stopping an entry that never started is permitted
        let stopped = stop(entry(), now);
        assert_eq!(stopped.status, EntryStatus::Done);
        assert_eq!(stopped.timer_end, Some(now));

        let later = now + Duration::minutes(10);
        let running = start(entry(), StartCommand::default(), now);
        let stopped = stop(running, later);
        assert_eq!(stopped.status, EntryStatus::Done);
        assert_eq!(stopped.timer_end, Some(later));
        // Start metadata survives the stop
        assert_eq!(stopped.timer_start, Some(now));
        assert_eq!(stopped.timer_type.as_deref(), Some("pomodoro"));
    }

    #[test]
    fn test_start_command_validation() {
        let ok = StartCommand {
            timer_type: None,
            timer_duration_minutes: Some(1),
        };
        assert!(ok.validate().is_ok());
        assert!(StartCommand::default().validate().is_ok());

        let bad = StartCommand {
            timer_type: None,
            timer_duration_minutes: Some(0),
        };
        let errors = bad.validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "timerDurationMinutes");
    }
}
