//! Background Tasks Module
//!
//! Contains background tasks that run periodically for the life of a cache.
//!
//! # Tasks
//! - Reaper: Sweeps expired cache entries once per cache interval

mod reaper;

pub use reaper::{spawn_reap_task, MIN_SWEEP_PERIOD};
