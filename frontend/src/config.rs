use log::Level;

#[cfg(debug_assertions)]
pub fn get_log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_log_level() -> Level {
    Level::Info  // Production
}
