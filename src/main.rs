use radial_gesture_menu::logging;
use radial_gesture_menu::radial_menu::replay::{load_trace, replay_trace};
use radial_gesture_menu::radial_menu::ScreenSize;
use radial_gesture_menu::reminders::ScheduleTrigger;
use radial_gesture_menu::settings::Settings;

const USAGE: &str = "usage:\n  radial-menu replay <trace.json> [settings.json]\n  radial-menu next-reminder [settings.json]";

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let command = args.first().map(String::as_str);

    match command {
        Some("replay") => {
            let trace_path = args
                .get(1)
                .ok_or_else(|| anyhow::anyhow!("missing trace path\n{USAGE}"))?;
            let settings = load_settings(args.get(2))?;
            let trace = load_trace(trace_path)?;
            let (width, height) = settings.screen_size;
            let outcomes = replay_trace(
                &trace,
                &settings.radial_menu,
                ScreenSize::new(width, height),
            );
            for outcome in outcomes {
                println!("{outcome:?}");
            }
        }
        Some("next-reminder") => {
            let settings = load_settings(args.get(1))?;
            let now = chrono::Local::now().naive_local();
            let delay = settings
                .reminders
                .next_delay(now, ScheduleTrigger::SettingsChanged);
            tracing::debug!(mode = ?settings.reminders.mode, "computed reminder delay");
            println!(
                "next reminder in {}h {:02}m",
                delay.num_hours(),
                delay.num_minutes() % 60
            );
        }
        _ => {
            eprintln!("{USAGE}");
            std::process::exit(2);
        }
    }
    Ok(())
}

fn load_settings(path: Option<&String>) -> anyhow::Result<Settings> {
    let settings = Settings::load(path.map(String::as_str).unwrap_or("settings.json"))?;
    logging::init(settings.debug_logging, settings.log_file.clone());
    Ok(settings)
}
