pub mod entry;
pub mod location;
pub mod log_row;
pub mod session;
