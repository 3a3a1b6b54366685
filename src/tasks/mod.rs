//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the REPL.
//!
//! # Tasks
//! - Cache Sweep: Removes expired cache entries once per TTL

mod sweep;

pub use sweep::spawn_sweep_task;
