//! User Notices and Console Logging
//!
//! Blocking notices use the browser's `alert`; everything else goes to the
//! console with a bracketed component tag.

use crate::actions::ActionError;

/// Blocking notice
pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            let _ = window.alert_with_message(message);
        }
        None => log_error("NOTICE", message),
    }
}

pub fn log(tag: &str, message: &str) {
    web_sys::console::log_1(&format!("[{}] {}", tag, message).into());
}

pub fn log_error(tag: &str, message: &str) {
    web_sys::console::error_1(&format!("[{}] {}", tag, message).into());
}

/// Log the cause of a failed action, then show its notice
pub fn report(tag: &str, err: &ActionError) {
    if let Some(cause) = err.api_error() {
        log_error(tag, &cause.to_string());
    }
    alert(&err.to_string());
}
