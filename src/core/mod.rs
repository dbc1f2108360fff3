//! Core lifecycle components

pub mod reaper;
pub mod supervisor;

pub use reaper::ZombieReaper;
pub use supervisor::ProcessSupervisor;
