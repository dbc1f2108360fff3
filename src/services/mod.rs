//! Service implementations
//!
//! Real implementations of the launch and process-table ports. These are
//! the production implementations that touch the OS.

pub mod launcher;
pub mod process_table;

#[cfg(test)]
mod tests;

pub use launcher::{AppiumLauncher, AppiumServerHandle};
pub use process_table::SystemProcessTable;
