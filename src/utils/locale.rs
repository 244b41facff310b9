use std::collections::HashMap;
use lazy_static::lazy_static;

lazy_static! {
    static ref MESSAGES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("time_settings", "Time settings");
        m.insert("set_active_hours", "Set active hours for dark mode");
        m.insert("latitude", "Latitude");
        m.insert("longitude", "Longitude");
        m.insert("set_location", "Activate dark mode between sunset and sunrise at this location");
        m.insert("more_settings", "More settings");
        m.insert("automation_off", "Automation off");
        m.insert("active_from", "Active from");
        m.insert("active_to", "to");
        m.insert("active_sunset_at", "Active from sunset to sunrise at");
        m.insert("unset", "unset");
        m
    };
}

/// Looks up user-visible text. Unknown keys fall back to the key itself so a
/// missing entry shows up in the UI instead of an empty label.
pub fn get_local_message(key: &str) -> String {
    MESSAGES.get(key).map(|s| s.to_string()).unwrap_or_else(|| key.to_string())
}
