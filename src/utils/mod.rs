//! Utility modules

mod logger;
mod timer;

pub use logger::init;
pub use timer::Timer;
