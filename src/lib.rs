#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod outline;
pub mod scaffold;
pub mod templates;
