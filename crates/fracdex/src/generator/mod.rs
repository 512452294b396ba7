mod config;
mod jitter;

pub use config::*;
pub use jitter::*;
