pub mod length;
pub mod mping_handler;
pub mod ping_handler;
