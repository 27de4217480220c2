pub mod config;
pub mod logging;

pub mod command;
pub mod fetch;
pub mod retry;
