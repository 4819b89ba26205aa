pub mod engine;
pub mod interface;
pub mod strategy;

pub use engine::{MonitorEngine, TickOutcome, Transition};
pub use interface::{Notifier, StateStore, StatusSource};
pub use strategy::{PollingStrategy, UnknownPolicy};
