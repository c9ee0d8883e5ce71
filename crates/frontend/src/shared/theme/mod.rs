//! Dark mode.
//!
//! The preference lives in dashboard state and is not persisted; this module
//! only mirrors it onto `<body>`.

use web_sys::window;

/// Class toggled on `<body>` while dark mode is on
pub const DARK_MODE_CLASS: &str = "dark-mode";

/// Add or remove the dark-mode class on `<body>`.
pub fn apply_dark_mode(enabled: bool) {
    let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        log::warn!("No document body; dark mode not applied");
        return;
    };

    let result = if enabled {
        body.class_list().add_1(DARK_MODE_CLASS)
    } else {
        body.class_list().remove_1(DARK_MODE_CLASS)
    };
    if let Err(err) = result {
        log::warn!("Failed to toggle {}: {:?}", DARK_MODE_CLASS, err);
    }
}
