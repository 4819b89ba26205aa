pub mod monitor;
pub mod status;
pub mod store;
pub mod webhook;
