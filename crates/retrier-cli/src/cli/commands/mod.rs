//! CLI command handlers, one per file.

mod exec;
mod fetch;
mod matching;
mod policies;

pub use exec::run_exec;
pub use fetch::run_fetch;
pub use matching::run_match;
pub use policies::run_policies;
