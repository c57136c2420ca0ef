//! Host-side pieces for `sector-core`: an in-memory scene container and a
//! per-tick driver that turns scene changes into layout passes.

mod frame;
mod scene;

pub use frame::*;
pub use scene::*;
pub use sector_core;
