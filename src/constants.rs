/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "jadwal_api=info";

/// Default bind address when BIND_ADDR is not set
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

/// Timer type that gets a computed end timestamp on start
pub const POMODORO_TIMER_TYPE: &str = "pomodoro";

/// Timer duration (minutes) used when a start request does not provide one
pub const DEFAULT_TIMER_MINUTES: i32 = 25;

/// How far ahead (minutes) the highlight endpoint looks for an upcoming entry
pub const HIGHLIGHT_WINDOW_MINUTES: i64 = 60;
