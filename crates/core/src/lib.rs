#![forbid(unsafe_code)]

pub mod countdown;
pub mod model;
pub mod time;

pub use countdown::{Countdown, Tick};
pub use time::Clock;
