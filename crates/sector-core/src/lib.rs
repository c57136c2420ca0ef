pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod orientation;
pub mod sampler;
pub mod spherical;
pub mod state;
pub mod transition;

pub use config::*;
pub use constants::*;
pub use engine::*;
pub use error::*;
pub use orientation::*;
pub use sampler::*;
pub use spherical::*;
pub use state::*;
pub use transition::*;
