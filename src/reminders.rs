use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

const DEFAULT_HOUR: u32 = 8;
const DEFAULT_MINUTE: u32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReminderMode {
    /// Once a day at [`ReminderSettings::time`].
    Daily,
    /// Every [`ReminderSettings::interval_hours`] hours.
    Frequency,
}

/// Why the next reminder is being scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleTrigger {
    /// The user edited the reminder settings; a time later today still fires today.
    SettingsChanged,
    /// A reminder was just delivered. A target less than a minute away is
    /// pushed to the next day so the job does not fire twice in a row.
    AfterDelivery,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderSettings {
    pub mode: ReminderMode,
    /// Local time of day as `HH:MM`.
    pub time: String,
    pub interval_hours: u32,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            mode: ReminderMode::Daily,
            time: "08:00".into(),
            interval_hours: 24,
        }
    }
}

impl ReminderSettings {
    pub fn time_of_day(&self) -> NaiveTime {
        parse_time_of_day(&self.time)
    }

    /// Delay from `now` until the next reminder should fire.
    pub fn next_delay(&self, now: NaiveDateTime, trigger: ScheduleTrigger) -> Duration {
        match self.mode {
            ReminderMode::Frequency => Duration::hours(i64::from(self.interval_hours.max(1))),
            ReminderMode::Daily => {
                let mut target = now.date().and_time(self.time_of_day());
                let too_soon = match trigger {
                    ScheduleTrigger::SettingsChanged => target <= now,
                    ScheduleTrigger::AfterDelivery => target < now + Duration::minutes(1),
                };
                if too_soon {
                    target += Duration::days(1);
                }
                target - now
            }
        }
    }
}

/// Parse `HH:MM`. A missing or non-numeric hour defaults to 8 and a missing
/// or non-numeric minute to 0; an out-of-range time falls back to 08:00.
pub fn parse_time_of_day(value: &str) -> NaiveTime {
    let mut parts = value.trim().split(':');
    let hour = parts
        .next()
        .and_then(|part| part.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_HOUR);
    let minute = parts
        .next()
        .and_then(|part| part.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_MINUTE);

    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(time) => time,
        None => {
            tracing::warn!(value, "reminder time out of range; using 08:00");
            NaiveTime::from_hms_opt(DEFAULT_HOUR, DEFAULT_MINUTE, 0).unwrap_or(NaiveTime::MIN)
        }
    }
}
