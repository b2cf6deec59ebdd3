//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of their owner.
//!
//! # Tasks
//! - Cache reaping: removes stale cache entries once per expiry window

mod reaper;

pub use reaper::spawn_reap_task;
