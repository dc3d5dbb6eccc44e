#![forbid(unsafe_code)]

pub mod model;
pub mod recommendations;
pub mod time;

pub use time::Clock;
