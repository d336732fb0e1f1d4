use std::fmt::Display;

/// Logs the failure and shows it in a blocking browser alert.
pub fn report<E: Display>(err: &E) {
    let message = err.to_string();
    log::error!("{}", message);

    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(e) = window.alert_with_message(&message) {
        log::debug!("alert failed: {:?}", e);
    }
}

pub fn report_all<E: Display>(errors: &[E]) {
    for err in errors {
        report(err);
    }
}
