//! Canned advice responders
//!
//! Fixed replies selected by keyword, answered without touching the
//! completion endpoint. Both responders lower-case their input, so the
//! keyword rules are case-insensitive even though the classifier that
//! routed here is not. Pure functions, no failure modes.

pub const CORN_DRY_ADVICE: &str =
    "For corn in dry conditions, we recommend using soil moisture sensors to monitor irrigation needs.";

pub const TOMATO_ADVICE: &str =
    "Tomatoes require careful monitoring of both soil moisture and temperature. We recommend using both soil moisture and temperature sensors.";

pub const GENERIC_ADVICE: &str =
    "I recommend using a soil moisture sensor to monitor irrigation. Let me know if you need more specific recommendations.";

pub const WIFI_FIX: &str =
    "Ensure your ESP32 device is within range of your router, or try resetting the device and checking the credentials.";

pub const SENSOR_FIX: &str =
    "If your sensor isn't giving the correct readings, check its wiring and recalibrate it if necessary.";

pub const MORE_DETAILS: &str = "Could you provide more details about the issue you're facing?";

/// Personalized recommendation based on the crops mentioned in the message.
pub fn recommendation(user_input: &str) -> &'static str {
    let user_input = user_input.to_lowercase();
    if user_input.contains("corn") && user_input.contains("dry") {
        CORN_DRY_ADVICE
    } else if user_input.contains("tomatoes") {
        TOMATO_ADVICE
    } else {
        GENERIC_ADVICE
    }
}

/// Troubleshooting for common IoT device issues.
pub fn troubleshooting(issue: &str) -> &'static str {
    let issue = issue.to_lowercase();
    if issue.contains("wifi") {
        WIFI_FIX
    } else if issue.contains("sensor") {
        SENSOR_FIX
    } else {
        MORE_DETAILS
    }
}
