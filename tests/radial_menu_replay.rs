use radial_gesture_menu::radial_menu::replay::{load_trace, replay_trace, Trace};
use radial_gesture_menu::radial_menu::{
    GestureOutcome, PointerChange, PointerFrame, RadialAction, RadialMenuConfig, ScreenSize,
};
use tempfile::tempdir;

const TRACE: &str = r#"{
  "screen": { "width": 1080.0, "height": 2400.0 },
  "frames": [
    { "changes": [ { "id": 1, "position": { "x": 300.0, "y": 300.0 }, "pressed": true, "uptime_ms": 1000 } ] },
    { "changes": [ { "id": 1, "position": { "x": 300.0, "y": 300.0 }, "pressed": false, "uptime_ms": 1050 } ] },
    { "changes": [ { "id": 2, "position": { "x": 540.0, "y": 1200.0 }, "pressed": true, "uptime_ms": 2000 } ] },
    { "changes": [ { "id": 2, "position": { "x": 540.0, "y": 1200.0 }, "pressed": true, "uptime_ms": 2450 } ] },
    { "changes": [ { "id": 2, "position": { "x": 540.0, "y": 1120.0 }, "pressed": true, "uptime_ms": 2460 } ] },
    { "changes": [ { "id": 2, "position": { "x": 540.0, "y": 1120.0 }, "pressed": false, "uptime_ms": 2470 } ] }
  ]
}"#;

fn frame(id: u64, pos: (f32, f32), pressed: bool, t: u64) -> PointerFrame {
    PointerFrame::single(PointerChange::new(id, pos, pressed, t))
}

#[test]
fn load_trace_reads_json_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("trace.json");
    std::fs::write(&path, TRACE).unwrap();

    let trace = load_trace(&path).unwrap();
    assert_eq!(trace.screen, Some(ScreenSize::new(1080.0, 2400.0)));
    assert_eq!(trace.origin, None);
    assert_eq!(trace.frames.len(), 6);
    assert_eq!(trace.frames[2].uptime_ms(), 2000);
}

#[test]
fn load_trace_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_trace(dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("failed to read trace"), "{err}");
}

#[test]
fn replay_resolves_tap_then_share() {
    let trace: Trace = serde_json::from_str(TRACE).unwrap();
    let outcomes = replay_trace(
        &trace,
        &RadialMenuConfig::default(),
        ScreenSize::new(1.0, 1.0),
    );
    assert_eq!(
        outcomes,
        vec![GestureOutcome::Tap, GestureOutcome::Action(RadialAction::Share)]
    );
}

#[test]
fn replay_uses_config_timeouts() {
    let trace = Trace {
        screen: None,
        origin: None,
        frames: vec![
            frame(1, (540.0, 1200.0), true, 0),
            frame(1, (540.0, 1200.0), true, 450),
            frame(1, (540.0, 1200.0), false, 460),
        ],
    };

    let default_outcomes =
        replay_trace(&trace, &RadialMenuConfig::default(), ScreenSize::new(1080.0, 2400.0));
    assert_eq!(default_outcomes, vec![GestureOutcome::Dismissed]);

    let slow = RadialMenuConfig {
        long_press_timeout_ms: 1000,
        ..RadialMenuConfig::default()
    };
    let slow_outcomes = replay_trace(&trace, &slow, ScreenSize::new(1080.0, 2400.0));
    assert_eq!(slow_outcomes, vec![GestureOutcome::Tap]);
}

#[test]
fn empty_trace_has_no_outcomes() {
    let outcomes = replay_trace(
        &Trace::default(),
        &RadialMenuConfig::default(),
        ScreenSize::new(1080.0, 2400.0),
    );
    assert!(outcomes.is_empty());
}
