use crate::models::{format_coordinate, LocationSettings};
use crate::utils::get_local_message;

/// "lat, lon" with unset axes spelled out in the current locale.
pub fn format_location_summary(location: &LocationSettings) -> String {
    let axis_text = |value: Option<f64>| {
        if value.is_some() {
            format_coordinate(value)
        } else {
            get_local_message("unset")
        }
    };
    format!("{}, {}", axis_text(location.latitude), axis_text(location.longitude))
}
