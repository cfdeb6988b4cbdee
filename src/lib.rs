pub mod logging;
pub mod radial_menu;
pub mod reminders;
pub mod settings;
