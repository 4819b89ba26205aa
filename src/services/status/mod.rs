pub mod types;
pub mod client;

pub use types::*;
pub use client::*;
