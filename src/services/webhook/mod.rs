pub mod types;
pub mod delivery;

pub use types::*;
pub use delivery::*;
