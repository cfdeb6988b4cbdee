use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use radial_gesture_menu::reminders::{
    parse_time_of_day, ReminderMode, ReminderSettings, ScheduleTrigger,
};

fn at(hour: u32, minute: u32, second: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 10)
        .unwrap()
        .and_hms_opt(hour, minute, second)
        .unwrap()
}

fn daily(time: &str) -> ReminderSettings {
    ReminderSettings {
        mode: ReminderMode::Daily,
        time: time.into(),
        ..ReminderSettings::default()
    }
}

#[test]
fn defaults_to_daily_at_eight() {
    let settings = ReminderSettings::default();
    assert_eq!(settings.mode, ReminderMode::Daily);
    assert_eq!(settings.time_of_day(), NaiveTime::from_hms_opt(8, 0, 0).unwrap());
    assert_eq!(settings.interval_hours, 24);
}

#[test]
fn daily_later_today_fires_today() {
    let delay = daily("09:30").next_delay(at(7, 0, 0), ScheduleTrigger::SettingsChanged);
    assert_eq!(delay, Duration::minutes(150));
}

#[test]
fn daily_earlier_today_moves_to_tomorrow() {
    let delay = daily("06:00").next_delay(at(7, 0, 0), ScheduleTrigger::SettingsChanged);
    assert_eq!(delay, Duration::hours(23));
}

#[test]
fn settings_changed_at_exact_time_moves_to_tomorrow() {
    let delay = daily("07:00").next_delay(at(7, 0, 0), ScheduleTrigger::SettingsChanged);
    assert_eq!(delay, Duration::days(1));
}

#[test]
fn after_delivery_skips_targets_within_a_minute() {
    let settings = daily("08:00");
    let delay = settings.next_delay(at(7, 59, 30), ScheduleTrigger::AfterDelivery);
    assert_eq!(delay, Duration::days(1) + Duration::seconds(30));

    let delay = settings.next_delay(at(7, 59, 30), ScheduleTrigger::SettingsChanged);
    assert_eq!(delay, Duration::seconds(30));

    let delay = settings.next_delay(at(7, 59, 0), ScheduleTrigger::AfterDelivery);
    assert_eq!(delay, Duration::minutes(1));
}

#[test]
fn frequency_mode_uses_interval() {
    let settings = ReminderSettings {
        mode: ReminderMode::Frequency,
        interval_hours: 6,
        ..ReminderSettings::default()
    };
    assert_eq!(
        settings.next_delay(at(23, 10, 0), ScheduleTrigger::AfterDelivery),
        Duration::hours(6)
    );

    let zero = ReminderSettings {
        interval_hours: 0,
        ..settings
    };
    assert_eq!(
        zero.next_delay(at(1, 0, 0), ScheduleTrigger::SettingsChanged),
        Duration::hours(1)
    );
}

#[test]
fn parse_time_of_day_handles_partial_and_invalid_input() {
    let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    assert_eq!(parse_time_of_day("21:45"), NaiveTime::from_hms_opt(21, 45, 0).unwrap());
    assert_eq!(parse_time_of_day(" 7:05 "), NaiveTime::from_hms_opt(7, 5, 0).unwrap());
    assert_eq!(parse_time_of_day("18"), NaiveTime::from_hms_opt(18, 0, 0).unwrap());
    assert_eq!(parse_time_of_day("ab:30"), NaiveTime::from_hms_opt(8, 30, 0).unwrap());
    assert_eq!(parse_time_of_day(""), eight);
    assert_eq!(parse_time_of_day("25:00"), eight);
    assert_eq!(parse_time_of_day("10:75"), eight);
}

#[test]
fn reminder_settings_deserialize_with_defaults() {
    let settings: ReminderSettings = serde_json::from_str(r#"{"mode":"frequency"}"#).unwrap();
    assert_eq!(settings.mode, ReminderMode::Frequency);
    assert_eq!(settings.interval_hours, 24);
    assert_eq!(settings.time, "08:00");
}
