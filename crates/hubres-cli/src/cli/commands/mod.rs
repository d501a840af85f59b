//! CLI command handlers. Each command is in its own file.

mod info;
mod pattern;
mod resolve;
mod validate;

pub use info::run_info;
pub use pattern::run_pattern;
pub use resolve::run_resolve;
pub use validate::run_validate;
