pub mod log_entry;
pub mod log_row;
pub mod recent_log;
pub mod severity;
